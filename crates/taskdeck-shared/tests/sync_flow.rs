use std::collections::BTreeSet;

use taskdeck_shared::{
  FilterKind,
  TodoDto,
  collection,
  visible_todos
};

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
fn clear_completed_scenario() {
  // Collection from the reference
  // scenario: one active, one done.
  let mut todos = vec![
    todo(1, "A", false),
    todo(2, "B", true),
  ];

  assert_eq!(
    collection::items_left(&todos),
    1
  );

  let visible = visible_todos(
    &todos,
    FilterKind::All
  );
  let doomed =
    collection::completed_ids(&visible);
  let clear_disabled =
    doomed.is_empty();
  assert!(!clear_disabled);
  assert_eq!(doomed, vec![2]);

  // Each id runs the single-item
  // delete flow; the pending set is
  // cleared unconditionally once all
  // requests have settled.
  let mut pending =
    BTreeSet::<u64>::new();
  for id in &doomed {
    pending.insert(*id);
  }

  for id in doomed {
    collection::remove(&mut todos, id);
    pending.remove(&id);
  }
  pending.clear();

  assert_eq!(todos.len(), 1);
  assert_eq!(todos[0].id, 1);
  assert!(pending.is_empty());
}

#[test]
fn toggle_all_targets_then_overwrites()
{
  let mut todos = vec![
    todo(1, "A", false),
    todo(2, "B", true),
    todo(3, "C", false),
  ];

  // Not everything is done, so the
  // target flips to true and only the
  // active items get a request.
  let target =
    !collection::all_completed(&todos);
  assert!(target);
  assert_eq!(
    collection::active_ids(&todos),
    vec![1, 3]
  );

  // After settlement the overwrite is
  // blanket, independent of per-item
  // outcomes.
  collection::set_all_completed(
    &mut todos, target
  );
  assert!(
    todos
      .iter()
      .all(|todo| todo.completed)
  );

  // Turning everything back off sends
  // a request for every item.
  let target =
    !collection::all_completed(&todos);
  assert!(!target);
  let all_ids: Vec<u64> = todos
    .iter()
    .map(|todo| todo.id)
    .collect();
  assert_eq!(all_ids, vec![1, 2, 3]);

  collection::set_all_completed(
    &mut todos, target
  );
  assert_eq!(
    collection::items_left(&todos),
    3
  );
}

#[test]
fn delete_flow_settles_missing_ids() {
  let mut todos = vec![
    todo(1, "A", false),
  ];
  let mut pending =
    BTreeSet::<u64>::new();

  // The remote delete is still issued
  // for an id the collection no longer
  // holds; locally it is a no-op and
  // the pending marker still clears.
  pending.insert(42);
  collection::remove(&mut todos, 42);
  pending.remove(&42);

  assert_eq!(todos.len(), 1);
  assert!(pending.is_empty());
}

#[test]
fn create_flow_appends_exactly_one() {
  let mut todos = vec![
    todo(1, "A", false),
  ];

  let temp = TodoDto::placeholder(
    1252,
    "Buy milk"
  );
  // The placeholder lives in its own
  // slot and never joins the
  // collection.
  assert!(temp.is_placeholder());

  let confirmed =
    todo(9, "Buy milk", false);
  collection::append_confirmed(
    &mut todos, confirmed
  );

  assert_eq!(todos.len(), 2);
  assert_eq!(todos[1].id, 9);
  assert!(todos.iter().all(|todo| {
    !todo.is_placeholder()
  }));
}
