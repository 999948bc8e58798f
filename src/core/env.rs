//! Sources of identity and time for new todos.
//!
//! Creating a todo is the one transition that needs something from outside
//! the state: a fresh id and the current time. Both come from an
//! `Environment` so the transition function itself stays deterministic
//! under test.

use super::todo::TodoId;
use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Supplies ids and timestamps to the transition engine.
pub trait Environment {
    /// A fresh id, never returned before by this environment.
    fn next_id(&self) -> TodoId;

    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production environment: UUID v4 ids and the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn next_id(&self) -> TodoId {
        TodoId::random()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic environment: ids `todo-1`, `todo-2`, ... and a fixed clock.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{Environment, SequentialEnv};
///
/// let env = SequentialEnv::new();
/// assert_eq!(env.next_id().as_str(), "todo-1");
/// assert_eq!(env.next_id().as_str(), "todo-2");
/// ```
#[derive(Debug)]
pub struct SequentialEnv {
    counter: Cell<u64>,
    clock: DateTime<Utc>,
}

impl SequentialEnv {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Environment whose clock is frozen at `clock`.
    pub fn at(clock: DateTime<Utc>) -> Self {
        Self {
            counter: Cell::new(0),
            clock,
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.get()
    }
}

impl Default for SequentialEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SequentialEnv {
    fn next_id(&self) -> TodoId {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        TodoId::from(format!("todo-{next}"))
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock
    }
}
