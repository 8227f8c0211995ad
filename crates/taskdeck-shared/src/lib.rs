pub mod collection;
pub mod error;
pub mod filter;
pub mod todo;

pub use error::UiError;
pub use filter::{
  FilterKind,
  visible_todos
};
pub use todo::{
  CompletedPatch,
  PLACEHOLDER_ID,
  TitlePatch,
  TodoCreate,
  TodoDto
};
