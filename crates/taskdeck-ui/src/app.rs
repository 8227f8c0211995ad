use futures::future::join_all;
use taskdeck_shared::{
  FilterKind,
  TodoDto,
  UiError,
  collection,
  visible_todos
};
use yew::{
  Callback,
  Html,
  UseReducerHandle,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::api;
use crate::components::{
  ConfigWarning,
  ErrorNotification,
  Footer,
  Header,
  TodoList
};
use crate::config::{
  AppConfig,
  load_app_config
};
use crate::state::{
  TodoAction,
  TodoStore
};

// One delete flow serves the card
// button, the emptied-title edit save
// and the clear-completed fan-out. The
// busy marker always clears on
// settlement, success or not.
async fn run_delete_flow(
  config: AppConfig,
  store: UseReducerHandle<TodoStore>,
  error: UseStateHandle<
    Option<UiError>
  >,
  id: u64
) {
  match api::delete_todo(&config, id)
    .await
  {
    | Ok(()) => {
      tracing::info!(
        id,
        "todo deleted"
      );
      store.dispatch(
        TodoAction::Removed(id)
      );
    }
    | Err(err) => {
      tracing::error!(
        error = %err,
        id,
        "todo delete failed"
      );
      error
        .set(Some(UiError::Delete));
    }
  }

  store.dispatch(
    TodoAction::DeleteSettled(id)
  );
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_app_config);
  let store =
    use_reducer(TodoStore::default);
  let temp_todo =
    use_state(|| None::<TodoDto>);
  let error =
    use_state(|| None::<UiError>);
  let filter =
    use_state(FilterKind::default);

  {
    let config = (*config).clone();
    let store = store.clone();
    let error = error.clone();
    use_effect_with((), move |_| {
      if let Some(config) = config {
        wasm_bindgen_futures::spawn_local(
          async move {
            tracing::info!(
              user_id = config.user_id,
              "loading todos"
            );
            match api::list_todos(
              &config
            )
            .await
            {
              | Ok(list) => {
                tracing::debug!(
                  total = list.len(),
                  "loaded todo list"
                );
                store.dispatch(
                  TodoAction::Loaded(
                    list
                  )
                );
              }
              | Err(err) => {
                tracing::error!(error = %err, "todo list load failed");
                error.set(
                  Some(UiError::Load)
                );
              }
            }
          }
        );
      }
      || ()
    });
  }

  let Some(app_config) =
    (*config).clone()
  else {
    return html! { <ConfigWarning /> };
  };

  let todos = store.todos.clone();
  let deleting =
    store.deleting.clone();
  let visible =
    visible_todos(&todos, *filter);
  let items_left =
    collection::items_left(&todos);
  let all_done =
    collection::all_completed(&todos);
  let clear_disabled =
    collection::completed_ids(&visible)
      .is_empty();

  let on_delete = {
    let config = app_config.clone();
    let store = store.clone();
    let error = error.clone();
    Callback::from(move |id: u64| {
      store.dispatch(
        TodoAction::DeleteStarted(id)
      );
      wasm_bindgen_futures::spawn_local(
        run_delete_flow(
          config.clone(),
          store.clone(),
          error.clone(),
          id
        )
      );
    })
  };

  let on_clear_completed = {
    let config = app_config.clone();
    let store = store.clone();
    let error = error.clone();
    let filter = filter.clone();
    Callback::from(move |_: ()| {
      let snapshot = visible_todos(
        &store.todos,
        *filter
      );
      let doomed =
        collection::completed_ids(
          &snapshot
        );
      if doomed.is_empty() {
        return;
      }

      tracing::info!(
        count = doomed.len(),
        "clearing completed todos"
      );
      for id in &doomed {
        store.dispatch(
          TodoAction::DeleteStarted(
            *id
          )
        );
      }

      let config = config.clone();
      let store = store.clone();
      let error = error.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let flows = doomed
            .into_iter()
            .map(|id| {
              run_delete_flow(
                config.clone(),
                store.clone(),
                error.clone(),
                id
              )
            });

          join_all(flows).await;
          store.dispatch(
            TodoAction::DeletesCleared
          );
        }
      );
    })
  };

  let on_created = {
    let store = store.clone();
    let error = error.clone();
    Callback::from(
      move |todo: TodoDto| {
        store.dispatch(
          TodoAction::Appended(todo)
        );
        error.set(None);
      }
    )
  };

  let on_temp_change = {
    let temp_todo = temp_todo.clone();
    Callback::from(
      move |todo: Option<TodoDto>| {
        temp_todo.set(todo);
      }
    )
  };

  let on_surface_error = {
    let error = error.clone();
    Callback::from(
      move |err: UiError| {
        error.set(Some(err));
      }
    )
  };

  let on_all_completed = {
    let store = store.clone();
    Callback::from(
      move |completed: bool| {
        store.dispatch(
          TodoAction::AllCompletedSet(
            completed
          )
        );
      }
    )
  };

  let on_completed_committed = {
    let store = store.clone();
    let error = error.clone();
    Callback::from(
      move |(id, completed): (
        u64,
        bool
      )| {
        store.dispatch(
          TodoAction::CompletedCommitted {
            id,
            completed
          }
        );
        error.set(None);
      }
    )
  };

  let on_title_committed = {
    let store = store.clone();
    let error = error.clone();
    Callback::from(
      move |(id, title): (
        u64,
        String
      )| {
        store.dispatch(
          TodoAction::TitleCommitted {
            id,
            title
          }
        );
        error.set(None);
      }
    )
  };

  let on_filter_change = {
    let filter = filter.clone();
    Callback::from(
      move |kind: FilterKind| {
        filter.set(kind);
      }
    )
  };

  let on_dismiss_error = {
    let error = error.clone();
    Callback::from(move |_: ()| {
      error.set(None);
    })
  };

  html! {
      <div class="todoapp">
          <h1 class="todoapp__title">{ "todos" }</h1>

          <div class="todoapp__content">
              <Header
                  config={app_config.clone()}
                  todos={todos.clone()}
                  all_completed={all_done}
                  pending_deletes={deleting.len()}
                  on_created={on_created}
                  on_temp_change={on_temp_change}
                  on_error={on_surface_error.clone()}
                  on_all_completed={on_all_completed}
              />

              <TodoList
                  config={app_config}
                  todos={visible}
                  temp_todo={(*temp_todo).clone()}
                  deleting={deleting}
                  on_delete={on_delete}
                  on_completed={on_completed_committed}
                  on_title={on_title_committed}
                  on_error={on_surface_error}
              />

              {
                  if todos.is_empty() {
                      html! {}
                  } else {
                      html! {
                          <Footer
                              filter={*filter}
                              items_left={items_left}
                              clear_disabled={clear_disabled}
                              on_filter={on_filter_change}
                              on_clear_completed={on_clear_completed}
                          />
                      }
                  }
              }
          </div>

          <ErrorNotification error={*error} on_dismiss={on_dismiss_error} />
      </div>
  }
}
