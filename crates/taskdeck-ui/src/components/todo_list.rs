use std::collections::BTreeSet;

use taskdeck_shared::{
  TodoDto,
  UiError
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TodoCard;
use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub config:       AppConfig,
  pub todos:        Vec<TodoDto>,
  pub temp_todo:    Option<TodoDto>,
  pub deleting:     BTreeSet<u64>,
  pub on_delete:    Callback<u64>,
  pub on_completed:
    Callback<(u64, bool)>,
  pub on_title:
    Callback<(u64, String)>,
  pub on_error:     Callback<UiError>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  html! {
      <section class="todoapp__main">
          {
              for props.todos.iter().cloned().map(|todo| {
                  let is_deleting = props.deleting.contains(&todo.id);
                  html! {
                      <TodoCard
                          config={props.config.clone()}
                          todo={todo}
                          is_temp={false}
                          is_deleting={is_deleting}
                          on_delete={props.on_delete.clone()}
                          on_completed={props.on_completed.clone()}
                          on_title={props.on_title.clone()}
                          on_error={props.on_error.clone()}
                      />
                  }
              })
          }
          {
              // The placeholder rides along at
              // the end of the list until its
              // create call settles.
              if let Some(temp) = props.temp_todo.clone() {
                  html! {
                      <TodoCard
                          config={props.config.clone()}
                          todo={temp}
                          is_temp={true}
                          is_deleting={false}
                          on_delete={props.on_delete.clone()}
                          on_completed={props.on_completed.clone()}
                          on_title={props.on_title.clone()}
                          on_error={props.on_error.clone()}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </section>
  }
}
