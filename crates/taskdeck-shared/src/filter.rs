use crate::todo::TodoDto;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum FilterKind {
  #[default]
  All,
  Active,
  Completed
}

impl FilterKind {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::Active,
      Self::Completed
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "all" => Some(Self::All),
      | "active" => Some(Self::Active),
      | "completed" => {
        Some(Self::Completed)
      }
      | _ => None
    }
  }

  pub fn matches(
    self,
    todo: &TodoDto
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !todo.completed,
      | Self::Completed => {
        todo.completed
      }
    }
  }
}

pub fn visible_todos(
  todos: &[TodoDto],
  filter: FilterKind
) -> Vec<TodoDto> {
  todos
    .iter()
    .filter(|todo| filter.matches(todo))
    .cloned()
    .collect()
}
