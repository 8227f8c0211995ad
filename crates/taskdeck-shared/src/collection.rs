use tracing::warn;

use crate::todo::{
  PLACEHOLDER_ID,
  TodoDto
};

// Every mutation below is driven by a
// confirmed server response; callers
// never apply one speculatively.

pub fn append_confirmed(
  todos: &mut Vec<TodoDto>,
  todo: TodoDto
) {
  if todo.id == PLACEHOLDER_ID {
    warn!(
      title = %todo.title,
      "refusing to append an \
       unconfirmed placeholder"
    );
    return;
  }
  todos.push(todo);
}

pub fn remove(
  todos: &mut Vec<TodoDto>,
  id: u64
) {
  todos.retain(|todo| todo.id != id);
}

pub fn commit_title(
  todos: &mut Vec<TodoDto>,
  id: u64,
  title: &str
) {
  for todo in todos.iter_mut() {
    if todo.id == id {
      todo.title = title.to_string();
    }
  }
}

pub fn commit_completed(
  todos: &mut Vec<TodoDto>,
  id: u64,
  completed: bool
) {
  for todo in todos.iter_mut() {
    if todo.id == id {
      todo.completed = completed;
    }
  }
}

pub fn set_all_completed(
  todos: &mut Vec<TodoDto>,
  completed: bool
) {
  for todo in todos.iter_mut() {
    todo.completed = completed;
  }
}

pub fn items_left(
  todos: &[TodoDto]
) -> usize {
  todos
    .iter()
    .filter(|todo| !todo.completed)
    .count()
}

pub fn all_completed(
  todos: &[TodoDto]
) -> bool {
  items_left(todos) == 0
}

pub fn completed_ids(
  todos: &[TodoDto]
) -> Vec<u64> {
  todos
    .iter()
    .filter(|todo| todo.completed)
    .map(|todo| todo.id)
    .collect()
}

pub fn active_ids(
  todos: &[TodoDto]
) -> Vec<u64> {
  todos
    .iter()
    .filter(|todo| !todo.completed)
    .map(|todo| todo.id)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn todo(
    id: u64,
    title: &str,
    completed: bool
  ) -> TodoDto {
    TodoDto {
      id,
      user_id: 1252,
      title: title.to_string(),
      completed
    }
  }

  #[test]
  fn append_keeps_insertion_order() {
    let mut todos = vec![
      todo(1, "A", false),
    ];
    append_confirmed(
      &mut todos,
      todo(2, "B", true)
    );

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[1].id, 2);
  }

  #[test]
  fn append_rejects_placeholder_ids() {
    let mut todos = vec![
      todo(1, "A", false),
    ];
    append_confirmed(
      &mut todos,
      TodoDto::placeholder(
        1252, "Draft"
      )
    );

    assert_eq!(todos.len(), 1);
    assert!(todos.iter().all(|todo| {
      todo.id != PLACEHOLDER_ID
    }));
  }

  #[test]
  fn remove_is_idempotent_for_missing_ids()
  {
    let mut todos = vec![
      todo(1, "A", false),
      todo(2, "B", true),
    ];

    remove(&mut todos, 99);
    assert_eq!(todos.len(), 2);

    remove(&mut todos, 2);
    remove(&mut todos, 2);
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 1);
  }

  #[test]
  fn commits_touch_only_the_target() {
    let mut todos = vec![
      todo(1, "A", false),
      todo(2, "B", false),
    ];

    commit_title(
      &mut todos,
      2,
      "B renamed"
    );
    commit_completed(
      &mut todos, 2, true
    );

    assert_eq!(todos[0].title, "A");
    assert!(!todos[0].completed);
    assert_eq!(
      todos[1].title,
      "B renamed"
    );
    assert!(todos[1].completed);
  }

  #[test]
  fn blanket_overwrite_covers_every_item()
  {
    let mut todos = vec![
      todo(1, "A", false),
      todo(2, "B", true),
      todo(3, "C", false),
    ];

    set_all_completed(&mut todos, true);
    assert!(
      todos
        .iter()
        .all(|todo| todo.completed)
    );

    set_all_completed(
      &mut todos, false
    );
    assert_eq!(items_left(&todos), 3);
  }

  #[test]
  fn derived_counts_match_partition() {
    let todos = vec![
      todo(1, "A", false),
      todo(2, "B", true),
    ];

    assert_eq!(items_left(&todos), 1);
    assert!(!all_completed(&todos));
    assert_eq!(
      completed_ids(&todos),
      vec![2]
    );
    assert_eq!(
      active_ids(&todos),
      vec![1]
    );
  }

  #[test]
  fn empty_collection_reads_all_completed()
  {
    assert!(all_completed(&[]));
    assert_eq!(items_left(&[]), 0);
  }
}
