//! The state store: single owner and single writer of `AppState`.
//!
//! The store is an ordinary value owned by the application root and lent to
//! views by reference. Every mutation goes through `dispatch`, which takes
//! `&mut self`: a transition always runs to completion, and subscribers are
//! notified before the next action can be accepted. Subscribers only ever
//! see `&AppState`, so they cannot dispatch from inside a notification.
//!
//! # Example
//!
//! ```rust
//! use todo_state::store::Store;
//!
//! let mut store = Store::new();
//! let id = store.add("Buy milk").unwrap();
//! store.toggle(&id);
//!
//! assert_eq!(store.state().todos.completed().count(), 1);
//! assert_eq!(store.version(), 2);
//! ```

pub mod error;
mod subscription;

pub use error::StoreError;
pub use subscription::SubscriptionId;

use crate::config::StoreConfig;
use crate::core::{
    apply_with, Action, ActionHistory, ActionRecord, AppState, Environment, SystemEnv, TodoId,
    UiState,
};
use crate::validation::{TitleRules, TitleViolation};
use subscription::Subscribers;
use tracing::{debug, trace, warn};

pub struct Store<E: Environment = SystemEnv> {
    state: AppState,
    env: E,
    rules: TitleRules,
    history: ActionHistory,
    version: u64,
    subscribers: Subscribers,
}

impl Store<SystemEnv> {
    /// Store with the default configuration, UUID ids and the system clock.
    pub fn new() -> Self {
        let config = StoreConfig::default();
        Self::from_parts(&config, TitleRules::from(&config), SystemEnv)
    }
}

impl Default for Store<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> Store<E> {
    /// Assemble a store from an already validated configuration.
    pub(crate) fn from_parts(config: &StoreConfig, rules: TitleRules, env: E) -> Self {
        Self {
            state: AppState {
                ui: UiState::with_dark_mode(config.dark_mode),
                ..AppState::default()
            },
            env,
            rules,
            history: ActionHistory::with_limit(config.history_limit),
            version: 0,
            subscribers: Subscribers::default(),
        }
    }

    /// Apply `action` and notify subscribers.
    ///
    /// Only `Add` can fail: a title that breaks the title rules is refused
    /// with every violation listed, and nothing changes. Every other action
    /// is applied, including ones that turn out to be no-ops.
    pub fn dispatch(&mut self, action: Action) -> Result<&AppState, StoreError> {
        if let Action::Add { title } = &action {
            if let Err(violations) = self.rules.check(title) {
                warn!(
                    action = action.name(),
                    violations = violations.len(),
                    "rejected action"
                );
                return Err(StoreError::InvalidTitle { violations });
            }
        }
        self.commit(&action);
        Ok(&self.state)
    }

    /// Decode a JSON action (e.g. `{"type":"clear"}`) and dispatch it.
    pub fn dispatch_json(&mut self, payload: &str) -> Result<&AppState, StoreError> {
        let action: Action = serde_json::from_str(payload)?;
        self.dispatch(action)
    }

    /// Add a todo and return its id.
    pub fn add(&mut self, title: &str) -> Result<TodoId, StoreError> {
        let state = self.dispatch(Action::add(title))?;
        state
            .todos
            .items()
            .first()
            .map(|todo| todo.id.clone())
            .ok_or_else(|| StoreError::InvalidTitle {
                violations: vec![TitleViolation::Blank],
            })
    }

    pub fn toggle(&mut self, id: &TodoId) {
        self.commit(&Action::Toggle { id: id.clone() });
    }

    pub fn remove(&mut self, id: &TodoId) {
        self.commit(&Action::Remove { id: id.clone() });
    }

    pub fn undo_last_removal(&mut self) {
        self.commit(&Action::UndoLastRemoval);
    }

    pub fn clear(&mut self) {
        self.commit(&Action::Clear);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.commit(&Action::ToggleDarkMode);
    }

    pub fn show_banner(&mut self, message: &str) {
        self.commit(&Action::show_banner(message));
    }

    pub fn dismiss_banner(&mut self) {
        self.commit(&Action::DismissBanner);
    }

    /// Register `callback` to be called with the new state after every
    /// applied transition.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + 'static,
    {
        let id = self.subscribers.add(Box::new(callback));
        debug!(subscription = %id, "subscribed");
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.remove(id);
        debug!(subscription = %id, removed, "unsubscribed");
        removed
    }

    /// Latest state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of transitions applied so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn title_rules(&self) -> &TitleRules {
        &self.rules
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Latest state serialized as JSON.
    pub fn snapshot_json(&self) -> Result<String, StoreError> {
        Ok(self.state.to_json()?)
    }

    fn commit(&mut self, action: &Action) {
        let next = apply_with(&self.state, action, &self.env);
        let changed = next != self.state;

        self.version += 1;
        self.history = self.history.record(ActionRecord {
            sequence: self.version,
            action: action.name().to_string(),
            timestamp: self.env.now(),
            changed,
        });
        self.state = next;

        debug!(
            action = action.name(),
            sequence = self.version,
            changed,
            items = self.state.todos.len(),
            "applied action"
        );

        trace!(subscribers = self.subscribers.len(), "notifying subscribers");
        self.subscribers.notify(&self.state);
    }
}
