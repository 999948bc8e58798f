//! Core state types and transitions.
//!
//! This module contains the pure functional core of the store:
//! - Data model: `Todo`, `TodosState`, `UiState`, `AppState`
//! - The closed `Action` type and the `apply` transition function
//! - Immutable action history
//!
//! All logic in this module is pure. The only inputs from outside the state
//! are ids and timestamps for new todos, supplied by an `Environment`.

mod action;
mod env;
mod history;
mod state;
mod todo;
mod todos;
mod ui;

pub use action::Action;
pub use env::{Environment, SequentialEnv, SystemEnv};
pub use history::{ActionHistory, ActionRecord, DEFAULT_HISTORY_LIMIT};
pub use state::{apply, apply_with, AppState};
pub use todo::{Todo, TodoId};
pub use todos::TodosState;
pub use ui::{Banner, UiState};
