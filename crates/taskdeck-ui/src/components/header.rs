use futures::future::join_all;
use taskdeck_shared::{
  TodoDto,
  UiError,
  collection
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

use crate::api;
use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub config:           AppConfig,
  pub todos:            Vec<TodoDto>,
  pub all_completed:    bool,
  pub pending_deletes:  usize,
  pub on_created:       Callback<TodoDto>,
  pub on_temp_change:
    Callback<Option<TodoDto>>,
  pub on_error:         Callback<UiError>,
  pub on_all_completed: Callback<bool>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let title = use_state(String::new);
  let busy = use_state(|| false);
  let input_ref = use_node_ref();

  // Focus lands back on the composer
  // whenever the collection or the
  // pending-delete set changes.
  {
    let input_ref = input_ref.clone();
    use_effect_with(
      (
        props.todos.len(),
        props.pending_deletes
      ),
      move |_| {
        if let Some(input) = input_ref
          .cast::<HtmlInputElement>()
        {
          let _ = input.focus();
        }
        || ()
      }
    );
  }

  let oninput = {
    let title = title.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        title.set(input.value());
      }
    )
  };

  let onsubmit = {
    let title = title.clone();
    let busy = busy.clone();
    let input_ref = input_ref.clone();
    let config = props.config.clone();
    let on_created =
      props.on_created.clone();
    let on_temp_change =
      props.on_temp_change.clone();
    let on_error =
      props.on_error.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        if *busy {
          return;
        }

        let trimmed =
          title.trim().to_string();
        if trimmed.is_empty() {
          tracing::warn!(
            "rejected empty todo title"
          );
          on_error
            .emit(UiError::EmptyTitle);
          return;
        }

        busy.set(true);
        on_temp_change.emit(Some(
          TodoDto::placeholder(
            config.user_id,
            &trimmed
          )
        ));

        let title = title.clone();
        let busy = busy.clone();
        let input_ref =
          input_ref.clone();
        let config = config.clone();
        let on_created =
          on_created.clone();
        let on_temp_change =
          on_temp_change.clone();
        let on_error =
          on_error.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::create_todo(
              &config,
              &trimmed,
              false
            )
            .await
            {
              | Ok(todo) => {
                tracing::info!(
                  id = todo.id,
                  "todo created"
                );
                on_created.emit(todo);
                title
                  .set(String::new());
              }
              | Err(err) => {
                tracing::error!(error = %err, "todo create failed");
                on_error
                  .emit(UiError::Add);
              }
            }

            on_temp_change.emit(None);
            busy.set(false);
            if let Some(input) =
              input_ref
                .cast::<HtmlInputElement>()
            {
              let _ = input.focus();
            }
          }
        );
      }
    )
  };

  let on_toggle_all = {
    let todos = props.todos.clone();
    let all_completed =
      props.all_completed;
    let config = props.config.clone();
    let on_all_completed =
      props.on_all_completed.clone();
    Callback::from(
      move |_: MouseEvent| {
        let target = !all_completed;
        let ids: Vec<u64> = if target {
          collection::active_ids(
            &todos
          )
        } else {
          todos
            .iter()
            .map(|todo| todo.id)
            .collect()
        };

        tracing::info!(
          target,
          count = ids.len(),
          "toggling every todo"
        );

        let config = config.clone();
        let on_all_completed =
          on_all_completed.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let updates = ids
              .into_iter()
              .map(|id| {
                let config =
                  config.clone();
                async move {
                  api::set_completed(
                    &config, id,
                    target
                  )
                  .await
                }
              });

            // Settlement, not
            // success, gates the
            // blanket overwrite.
            let results =
              join_all(updates).await;
            let failed = results
              .iter()
              .filter(|result| {
                result.is_err()
              })
              .count();
            if failed > 0 {
              tracing::warn!(
                failed,
                "toggle-all finished \
                 with failures"
              );
            }

            on_all_completed
              .emit(target);
          }
        );
      }
    )
  };

  html! {
      <header class="todoapp__header">
          {
              if props.todos.is_empty() {
                  html! {}
              } else {
                  html! {
                      <button
                          type="button"
                          class={classes!(
                              "todoapp__toggle-all",
                              props.all_completed.then_some("active")
                          )}
                          onclick={on_toggle_all}
                      />
                  }
              }
          }

          <form onsubmit={onsubmit}>
              <input
                  ref={input_ref}
                  type="text"
                  class="todoapp__new-todo"
                  placeholder="What needs to be done?"
                  value={(*title).clone()}
                  disabled={*busy}
                  oninput={oninput}
              />
          </form>
      </header>
  }
}
