use serde::{
  Deserialize,
  Serialize
};

// Reserved for the transient creation
// placeholder; the server never hands
// out id zero.
pub const PLACEHOLDER_ID: u64 = 0;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
  pub id:        u64,
  pub user_id:   u64,
  pub title:     String,
  pub completed: bool
}

impl TodoDto {
  pub fn placeholder(
    user_id: u64,
    title: &str
  ) -> Self {
    Self {
      id:        PLACEHOLDER_ID,
      user_id,
      title:     title.to_string(),
      completed: false
    }
  }

  pub fn is_placeholder(&self) -> bool {
    self.id == PLACEHOLDER_ID
  }
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct TodoCreate {
  pub user_id:   u64,
  pub title:     String,
  pub completed: bool
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct CompletedPatch {
  pub completed: bool
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TitlePatch {
  pub title: String
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn todo_round_trips_camel_case() {
    let wire = json!({
      "id": 7,
      "userId": 1252,
      "title": "Water the plants",
      "completed": false
    });

    let todo: TodoDto =
      serde_json::from_value(
        wire.clone()
      )
      .expect("decode todo");
    assert_eq!(todo.id, 7);
    assert_eq!(todo.user_id, 1252);
    assert!(!todo.completed);

    let encoded =
      serde_json::to_value(&todo)
        .expect("encode todo");
    assert_eq!(encoded, wire);
  }

  #[test]
  fn create_body_uses_camel_case_owner()
  {
    let body = TodoCreate {
      user_id:   1252,
      title:     "Read".to_string(),
      completed: false
    };

    let encoded =
      serde_json::to_value(&body)
        .expect("encode create body");
    assert_eq!(
      encoded,
      json!({
        "userId": 1252,
        "title": "Read",
        "completed": false
      })
    );
  }

  #[test]
  fn patch_bodies_carry_a_single_field()
  {
    let completed =
      serde_json::to_value(
        CompletedPatch {
          completed: true
        }
      )
      .expect("encode completed patch");
    assert_eq!(
      completed,
      json!({ "completed": true })
    );

    let title = serde_json::to_value(
      TitlePatch {
        title: "Renamed".to_string()
      }
    )
    .expect("encode title patch");
    assert_eq!(
      title,
      json!({ "title": "Renamed" })
    );
  }

  #[test]
  fn placeholder_is_never_completed() {
    let temp = TodoDto::placeholder(
      1252, "Draft"
    );
    assert!(temp.is_placeholder());
    assert_eq!(temp.id, PLACEHOLDER_ID);
    assert!(!temp.completed);
  }
}
