//! Whole-store state and the single transition function.

use super::action::Action;
use super::env::{Environment, SystemEnv};
use super::todos::TodosState;
use super::ui::UiState;
use serde::{Deserialize, Serialize};

/// Everything the store owns.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{apply_with, Action, AppState, SequentialEnv};
///
/// let env = SequentialEnv::new();
/// let state = AppState::new();
/// let state = apply_with(&state, &Action::add("Buy milk"), &env);
/// let state = apply_with(&state, &Action::toggle("todo-1"), &env);
///
/// assert_eq!(state.todos.completed().count(), 1);
/// assert_eq!(state.todos.pending().count(), 0);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub ui: UiState,
    pub todos: TodosState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialized snapshot for a view layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Apply `action` using UUID ids and the system clock.
pub fn apply(state: &AppState, action: &Action) -> AppState {
    apply_with(state, action, &SystemEnv)
}

/// Apply `action`, drawing ids and timestamps for new todos from `env`.
///
/// Total for every input: unknown ids and blank titles leave the state
/// unchanged. The input state is never modified.
pub fn apply_with<E: Environment>(state: &AppState, action: &Action, env: &E) -> AppState {
    match action {
        Action::Add { title } => AppState {
            ui: state.ui.clone(),
            todos: state.todos.add(title, env),
        },
        Action::Toggle { id } => AppState {
            ui: state.ui.clone(),
            todos: state.todos.toggle(id),
        },
        Action::Remove { id } => AppState {
            ui: state.ui.clone(),
            todos: state.todos.remove(id),
        },
        Action::UndoLastRemoval => AppState {
            ui: state.ui.clone(),
            todos: state.todos.undo_last_removal(),
        },
        Action::Clear => AppState {
            ui: state.ui.clone(),
            todos: state.todos.clear(),
        },
        Action::ToggleDarkMode => AppState {
            ui: state.ui.toggle_dark_mode(),
            todos: state.todos.clone(),
        },
        Action::ShowBanner { message } => AppState {
            ui: state.ui.show_banner(message.as_str()),
            todos: state.todos.clone(),
        },
        Action::DismissBanner => AppState {
            ui: state.ui.dismiss_banner(),
            todos: state.todos.clone(),
        },
    }
}
