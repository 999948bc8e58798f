//! Todo records and their identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a todo.
///
/// Identifiers are unique within a store for the lifetime of the process.
/// They are plain strings on the wire so a view layer can hand them back
/// unchanged in `toggle`/`remove` actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generate a fresh random identifier (UUID v4).
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task record.
///
/// `id` and `created_at` are fixed at creation. The only field a transition
/// ever changes is `done`.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{Todo, TodoId};
/// use chrono::Utc;
///
/// let todo = Todo::new(TodoId::from("t-1"), "Buy milk", Utc::now());
/// assert_eq!(todo.title, "Buy milk");
/// assert!(!todo.done);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a pending todo.
    pub fn new(id: TodoId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            created_at,
        }
    }

    /// Same todo with `done` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_pending() {
        let todo = Todo::new(TodoId::from("a"), "Write report", Utc::now());
        assert!(!todo.done);
        assert_eq!(todo.title, "Write report");
        assert_eq!(todo.id.as_str(), "a");
    }

    #[test]
    fn toggled_only_changes_done() {
        let todo = Todo::new(TodoId::from("a"), "Write report", Utc::now());
        let toggled = todo.toggled();

        assert!(toggled.done);
        assert_eq!(toggled.id, todo.id);
        assert_eq!(toggled.title, todo.title);
        assert_eq!(toggled.created_at, todo.created_at);
        assert_eq!(toggled.toggled(), todo);
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(TodoId::random(), TodoId::random());
    }

    #[test]
    fn todo_serializes_with_camel_case_fields() {
        let todo = Todo::new(TodoId::from("a"), "Write report", Utc::now());
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["id"], "a");
        assert_eq!(json["done"], false);
        assert!(json.get("createdAt").is_some());

        let back: Todo = serde_json::from_value(json).unwrap();
        assert_eq!(back, todo);
    }
}
