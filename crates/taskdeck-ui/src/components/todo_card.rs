use taskdeck_shared::{
  TodoDto,
  UiError
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
pub struct TodoCardProps {
  pub config:       AppConfig,
  pub todo:         TodoDto,
  pub is_temp:      bool,
  pub is_deleting:  bool,
  pub on_delete:    Callback<u64>,
  pub on_completed:
    Callback<(u64, bool)>,
  pub on_title:
    Callback<(u64, String)>,
  pub on_error:     Callback<UiError>
}

#[function_component(TodoCard)]
pub fn todo_card(
  props: &TodoCardProps
) -> Html {
  let editing = use_state(|| false);
  let draft = use_state(String::new);
  let updating = use_state(|| false);
  let edit_ref = use_node_ref();

  {
    let edit_ref = edit_ref.clone();
    use_effect_with(
      *editing,
      move |is_editing| {
        if *is_editing
          && let Some(input) = edit_ref
            .cast::<HtmlInputElement>()
        {
          let _ = input.focus();
        }
        || ()
      }
    );
  }

  let on_toggle = {
    let updating = updating.clone();
    let config = props.config.clone();
    let todo = props.todo.clone();
    let on_completed =
      props.on_completed.clone();
    let on_error =
      props.on_error.clone();
    Callback::from(
      move |_: web_sys::Event| {
        let id = todo.id;
        let target = !todo.completed;

        updating.set(true);
        let updating =
          updating.clone();
        let config = config.clone();
        let on_completed =
          on_completed.clone();
        let on_error =
          on_error.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::set_completed(
              &config, id, target
            )
            .await
            {
              | Ok(_) => {
                on_completed
                  .emit((id, target));
              }
              | Err(err) => {
                tracing::error!(error = %err, id, "todo toggle failed");
                on_error.emit(
                  UiError::Update
                );
              }
            }
            updating.set(false);
          }
        );
      }
    )
  };

  let start_editing = {
    let editing = editing.clone();
    let draft = draft.clone();
    let committed =
      props.todo.title.clone();
    Callback::from(
      move |_: MouseEvent| {
        draft.set(committed.clone());
        editing.set(true);
      }
    )
  };

  let save_edit = {
    let editing = editing.clone();
    let draft = draft.clone();
    let updating = updating.clone();
    let config = props.config.clone();
    let todo = props.todo.clone();
    let on_delete =
      props.on_delete.clone();
    let on_title =
      props.on_title.clone();
    let on_error =
      props.on_error.clone();
    Callback::from(move |_: ()| {
      if !*editing {
        return;
      }

      let trimmed =
        draft.trim().to_string();

      // An emptied title is a delete
      // request; editing always exits
      // on this branch.
      if trimmed.is_empty() {
        editing.set(false);
        on_delete.emit(todo.id);
        return;
      }

      if trimmed == todo.title {
        editing.set(false);
        return;
      }

      updating.set(true);
      let id = todo.id;
      let editing = editing.clone();
      let updating = updating.clone();
      let config = config.clone();
      let on_title = on_title.clone();
      let on_error = on_error.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::set_title(
            &config, id, &trimmed
          )
          .await
          {
            | Ok(_) => {
              on_title
                .emit((id, trimmed));
            }
            | Err(err) => {
              // The edit is lost on
              // failure; only the
              // banner reports it.
              tracing::error!(error = %err, id, "todo title update failed");
              on_error.emit(
                UiError::Update
              );
            }
          }
          editing.set(false);
          updating.set(false);
        }
      );
    })
  };

  let cancel_editing = {
    let editing = editing.clone();
    let draft = draft.clone();
    Callback::from(move |_: ()| {
      draft.set(String::new());
      editing.set(false);
    })
  };

  let on_edit_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let onblur = {
    let save_edit = save_edit.clone();
    Callback::from(
      move |_: web_sys::FocusEvent| {
        save_edit.emit(());
      }
    )
  };

  let onkeydown = {
    let save_edit = save_edit.clone();
    let cancel_editing =
      cancel_editing.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        match e.key().as_str() {
          | "Enter" => {
            e.prevent_default();
            save_edit.emit(());
          }
          | "Escape" => {
            cancel_editing.emit(());
          }
          | _ => {}
        }
      }
    )
  };

  let on_remove = {
    let on_delete =
      props.on_delete.clone();
    let id = props.todo.id;
    Callback::from(
      move |_: MouseEvent| {
        on_delete.emit(id);
      }
    )
  };

  let busy = props.is_temp
    || props.is_deleting
    || *updating;

  html! {
      <div class={classes!("todo", props.todo.completed.then_some("completed"))}>
          <label class="todo__status-label">
              <input
                  type="checkbox"
                  class="todo__status"
                  checked={props.todo.completed}
                  onchange={on_toggle}
              />
          </label>

          {
              if *editing {
                  html! {
                      <form>
                          <input
                              ref={edit_ref}
                              type="text"
                              class="todo__title-field"
                              placeholder="Empty todo will be deleted"
                              value={(*draft).clone()}
                              oninput={on_edit_input}
                              onblur={onblur}
                              onkeydown={onkeydown}
                          />
                      </form>
                  }
              } else {
                  html! {
                      <>
                          <span class="todo__title" ondblclick={start_editing}>
                              { &props.todo.title }
                          </span>
                          <button
                              type="button"
                              class="todo__remove"
                              onclick={on_remove}
                          >
                              { "×" }
                          </button>
                      </>
                  }
              }
          }

          <div class={classes!("modal", "overlay", busy.then_some("is-active"))}>
              <div class="modal-background has-background-white-ter"></div>
              <div class="loader"></div>
          </div>
      </div>
  }
}
