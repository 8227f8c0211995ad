use thiserror::Error;

// The banner shows exactly these
// strings; tests pin them.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Error,
)]
pub enum UiError {
  #[error("Unable to load todos")]
  Load,
  #[error("Title should not be empty")]
  EmptyTitle,
  #[error("Unable to add a todo")]
  Add,
  #[error("Unable to delete a todo")]
  Delete,
  #[error("Unable to update a todo")]
  Update
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn banner_strings_are_fixed() {
    assert_eq!(
      UiError::Load.to_string(),
      "Unable to load todos"
    );
    assert_eq!(
      UiError::EmptyTitle.to_string(),
      "Title should not be empty"
    );
    assert_eq!(
      UiError::Add.to_string(),
      "Unable to add a todo"
    );
    assert_eq!(
      UiError::Delete.to_string(),
      "Unable to delete a todo"
    );
    assert_eq!(
      UiError::Update.to_string(),
      "Unable to update a todo"
    );
  }
}
