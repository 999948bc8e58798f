//! todo-state: a pure functional state container for todo-list applications
//!
//! The store follows a "pure core, imperative shell" layout. The core is a
//! set of pure transitions over plain data; the store around it owns the
//! single copy of that data, applies actions in order and tells observers
//! about every new state.
//!
//! # Core Concepts
//!
//! - **State**: `AppState` holds `TodosState` (task list and the last
//!   removed task) and `UiState` (theme flag and banner)
//! - **Actions**: a closed `Action` enum, one variant per transition
//! - **Transitions**: `apply` maps a state and an action to a new state
//! - **Store**: owns the state, validates titles, notifies subscribers
//!
//! # Example
//!
//! ```rust
//! use todo_state::{Action, Store};
//!
//! let mut store = Store::new();
//!
//! let id = store.add("Buy milk").unwrap();
//! store.dispatch(Action::Toggle { id: id.clone() }).unwrap();
//! store.remove(&id);
//! assert!(store.state().todos.is_empty());
//!
//! store.undo_last_removal();
//! let todo = &store.state().todos.items()[0];
//! assert_eq!(todo.title, "Buy milk");
//! assert!(todo.done);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use config::{ConfigError, StoreConfig};
pub use crate::core::{apply, apply_with, Action, AppState, Todo, TodoId, TodosState, UiState};
pub use store::{Store, StoreError, SubscriptionId};
