use std::collections::BTreeSet;
use std::rc::Rc;

use taskdeck_shared::{
  TodoDto,
  collection
};
use yew::Reducible;

// The authoritative collection plus
// the busy markers for in-flight
// deletes. Mutations go through the
// reducer so concurrent settlements
// always apply to the latest state.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TodoStore {
  pub todos:    Vec<TodoDto>,
  pub deleting: BTreeSet<u64>
}

pub enum TodoAction {
  Loaded(Vec<TodoDto>),
  Appended(TodoDto),
  Removed(u64),
  TitleCommitted {
    id:    u64,
    title: String
  },
  CompletedCommitted {
    id:        u64,
    completed: bool
  },
  AllCompletedSet(bool),
  DeleteStarted(u64),
  DeleteSettled(u64),
  DeletesCleared
}

impl Reducible for TodoStore {
  type Action = TodoAction;

  fn reduce(
    self: Rc<Self>,
    action: TodoAction
  ) -> Rc<Self> {
    let mut next = (*self).clone();

    match action {
      | TodoAction::Loaded(todos) => {
        next.todos = todos;
      }
      | TodoAction::Appended(todo) => {
        collection::append_confirmed(
          &mut next.todos,
          todo
        );
      }
      | TodoAction::Removed(id) => {
        collection::remove(
          &mut next.todos,
          id
        );
      }
      | TodoAction::TitleCommitted {
        id,
        title
      } => {
        collection::commit_title(
          &mut next.todos,
          id,
          &title
        );
      }
      | TodoAction::CompletedCommitted {
        id,
        completed
      } => {
        collection::commit_completed(
          &mut next.todos,
          id,
          completed
        );
      }
      | TodoAction::AllCompletedSet(
        completed
      ) => {
        collection::set_all_completed(
          &mut next.todos,
          completed
        );
      }
      | TodoAction::DeleteStarted(
        id
      ) => {
        next.deleting.insert(id);
      }
      | TodoAction::DeleteSettled(
        id
      ) => {
        next.deleting.remove(&id);
      }
      | TodoAction::DeletesCleared => {
        next.deleting.clear();
      }
    }

    next.into()
  }
}
