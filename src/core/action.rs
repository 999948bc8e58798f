//! The closed set of actions a view layer can dispatch.

use super::todo::TodoId;
use serde::{Deserialize, Serialize};

/// One variant per transition.
///
/// Actions are plain data. On the wire they are internally tagged JSON
/// objects, e.g. `{"type":"toggle","id":"todo-1"}`.
///
/// # Example
///
/// ```rust
/// use todo_state::core::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type":"add","title":"Buy milk"}"#).unwrap();
/// assert_eq!(action, Action::add("Buy milk"));
/// assert_eq!(action.name(), "Add");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Add { title: String },
    Toggle { id: TodoId },
    Remove { id: TodoId },
    UndoLastRemoval,
    Clear,
    ToggleDarkMode,
    ShowBanner { message: String },
    DismissBanner,
}

impl Action {
    pub fn add(title: impl Into<String>) -> Self {
        Self::Add {
            title: title.into(),
        }
    }

    pub fn toggle(id: impl Into<TodoId>) -> Self {
        Self::Toggle { id: id.into() }
    }

    pub fn remove(id: impl Into<TodoId>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn show_banner(message: impl Into<String>) -> Self {
        Self::ShowBanner {
            message: message.into(),
        }
    }

    /// Stable name for logging and history.
    pub fn name(&self) -> &str {
        match self {
            Self::Add { .. } => "Add",
            Self::Toggle { .. } => "Toggle",
            Self::Remove { .. } => "Remove",
            Self::UndoLastRemoval => "UndoLastRemoval",
            Self::Clear => "Clear",
            Self::ToggleDarkMode => "ToggleDarkMode",
            Self::ShowBanner { .. } => "ShowBanner",
            Self::DismissBanner => "DismissBanner",
        }
    }
}
