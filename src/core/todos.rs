//! Todo list state and its transitions.
//!
//! Every transition takes `&self` and returns a new `TodosState`, following
//! the same immutable style as `ActionHistory::record`. Lookups that miss are
//! no-ops, never errors.

use super::env::Environment;
use super::todo::{Todo, TodoId};
use serde::{Deserialize, Serialize};

/// The task list plus the single most recently removed task.
///
/// `items` is ordered newest first. `last_removed` holds at most one todo
/// and is cleared by `undo_last_removal` or `clear`.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{SequentialEnv, TodosState};
///
/// let env = SequentialEnv::new();
/// let todos = TodosState::new()
///     .add("Buy milk", &env)
///     .add("Walk dog", &env);
///
/// let titles: Vec<&str> = todos.items().iter().map(|t| t.title.as_str()).collect();
/// assert_eq!(titles, ["Walk dog", "Buy milk"]);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodosState {
    items: Vec<Todo>,
    last_removed: Option<Todo>,
}

impl TodosState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a todo from `title` and put it at the front.
    ///
    /// The title is trimmed. A title that is empty after trimming leaves the
    /// state unchanged and consumes no id.
    pub fn add<E: Environment>(&self, title: &str, env: &E) -> Self {
        let title = title.trim();
        if title.is_empty() {
            return self.clone();
        }
        let todo = Todo::new(env.next_id(), title, env.now());
        self.push_front(todo)
    }

    /// Flip `done` on the todo with `id`.
    pub fn toggle(&self, id: &TodoId) -> Self {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut items = self.items.clone();
        items[index] = items[index].toggled();
        Self {
            items,
            last_removed: self.last_removed.clone(),
        }
    }

    /// Remove the todo with `id`, keeping it as the undo candidate.
    ///
    /// A miss leaves both `items` and `last_removed` untouched.
    pub fn remove(&self, id: &TodoId) -> Self {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut items = self.items.clone();
        let removed = items.remove(index);
        Self {
            items,
            last_removed: Some(removed),
        }
    }

    /// Put the last removed todo back at the front.
    pub fn undo_last_removal(&self) -> Self {
        match &self.last_removed {
            Some(todo) => Self {
                items: std::iter::once(todo.clone())
                    .chain(self.items.iter().cloned())
                    .collect(),
                last_removed: None,
            },
            None => self.clone(),
        }
    }

    /// Drop every todo and the undo candidate.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// All todos, newest first.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn last_removed(&self) -> Option<&Todo> {
        self.last_removed.as_ref()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Todos not yet done, in list order. Computed on every call.
    pub fn pending(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.items.iter().filter(|todo| !todo.done)
    }

    /// Todos marked done, in list order. Computed on every call.
    pub fn completed(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.items.iter().filter(|todo| todo.done)
    }

    fn push_front(&self, todo: Todo) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(todo);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            last_removed: self.last_removed.clone(),
        }
    }

    fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|todo| &todo.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::SequentialEnv;

    fn titles(state: &TodosState) -> Vec<&str> {
        state.items().iter().map(|t| t.title.as_str()).collect()
    }

    fn three_todos(env: &SequentialEnv) -> TodosState {
        TodosState::new()
            .add("first", env)
            .add("second", env)
            .add("third", env)
    }

    #[test]
    fn add_inserts_at_front() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);

        assert_eq!(titles(&state), ["third", "second", "first"]);
        assert!(state.items().iter().all(|t| !t.done));
    }

    #[test]
    fn add_is_pure() {
        let env = SequentialEnv::new();
        let before = TodosState::new();
        let after = before.add("Buy milk", &env);

        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn add_trims_title() {
        let env = SequentialEnv::new();
        let state = TodosState::new().add("  Buy milk \n", &env);

        assert_eq!(titles(&state), ["Buy milk"]);
    }

    #[test]
    fn add_blank_title_is_noop() {
        let env = SequentialEnv::new();
        let state = TodosState::new().add("   ", &env).add("", &env);

        assert!(state.is_empty());
        assert_eq!(env.issued(), 0);
    }

    #[test]
    fn toggle_flips_done_in_place() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[1].id.clone();

        let toggled = state.toggle(&id);

        assert!(toggled.get(&id).unwrap().done);
        assert_eq!(titles(&toggled), titles(&state));
        assert_eq!(toggled.toggle(&id), state);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);

        assert_eq!(state.toggle(&TodoId::from("missing")), state);
    }

    #[test]
    fn remove_keeps_order_and_stores_undo_candidate() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[1].id.clone();

        let removed = state.remove(&id);

        assert_eq!(titles(&removed), ["third", "first"]);
        assert_eq!(removed.last_removed().unwrap().title, "second");
    }

    #[test]
    fn remove_unknown_id_keeps_last_removed() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[0].id.clone();
        let removed = state.remove(&id);

        let again = removed.remove(&TodoId::from("missing"));

        assert_eq!(again, removed);
        assert_eq!(again.last_removed().unwrap().title, "third");
    }

    #[test]
    fn second_remove_replaces_undo_candidate() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let first = state.items()[0].id.clone();
        let second = state.items()[1].id.clone();

        let state = state.remove(&first).remove(&second);

        assert_eq!(state.last_removed().unwrap().id, second);
        assert_eq!(titles(&state), ["first"]);
    }

    #[test]
    fn undo_restores_at_front_and_clears_candidate() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[0].id.clone();

        let restored = state.remove(&id).undo_last_removal();

        assert_eq!(restored, state);
        assert!(restored.last_removed().is_none());
    }

    #[test]
    fn undo_moves_restored_todo_to_front() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[2].id.clone();

        let restored = state.remove(&id).undo_last_removal();

        assert_eq!(titles(&restored), ["first", "third", "second"]);
    }

    #[test]
    fn undo_twice_does_not_duplicate() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[0].id.clone();

        let once = state.remove(&id).undo_last_removal();
        let twice = once.undo_last_removal();

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 3);
    }

    #[test]
    fn clear_empties_everything() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[0].id.clone();

        let cleared = state.remove(&id).clear();

        assert!(cleared.is_empty());
        assert!(cleared.last_removed().is_none());
        assert!(cleared.clear().is_empty());
    }

    #[test]
    fn partitions_follow_done_flag() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[1].id.clone();
        let state = state.toggle(&id);

        let pending: Vec<&str> = state.pending().map(|t| t.title.as_str()).collect();
        let completed: Vec<&str> = state.completed().map(|t| t.title.as_str()).collect();

        assert_eq!(pending, ["third", "first"]);
        assert_eq!(completed, ["second"]);
    }

    #[test]
    fn todos_state_serializes_with_camel_case_fields() {
        let env = SequentialEnv::new();
        let state = three_todos(&env);
        let id = state.items()[0].id.clone();
        let state = state.remove(&id);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["lastRemoved"]["title"], "third");

        let back: TodosState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
