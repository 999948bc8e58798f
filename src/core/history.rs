//! Bounded record of applied actions.
//!
//! This is a diagnostic trail for logging and tests, not an undo stack:
//! nothing here can be replayed back into the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of records kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Record of one applied action.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in dispatch order, starting at 1
    pub sequence: u64,
    /// `Action::name` of the applied action
    pub action: String,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
    /// Whether the action changed the state
    pub changed: bool,
}

/// Most recent applied actions, oldest first.
///
/// History is immutable - `record` returns a new history with the record
/// appended, dropping the oldest entry once `limit` is reached.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{ActionHistory, ActionRecord};
/// use chrono::Utc;
///
/// let history = ActionHistory::with_limit(2);
/// let history = ["Add", "Toggle", "Remove"]
///     .iter()
///     .enumerate()
///     .fold(history, |h, (i, name)| {
///         h.record(ActionRecord {
///             sequence: i as u64 + 1,
///             action: name.to_string(),
///             timestamp: Utc::now(),
///             changed: true,
///         })
///     });
///
/// assert_eq!(history.actions(), ["Toggle", "Remove"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionHistory {
    records: VecDeque<ActionRecord>,
    limit: usize,
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl ActionHistory {
    /// History keeping at most `limit` records. A limit of zero keeps one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            records: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Append a record, returning a new history.
    pub fn record(&self, record: ActionRecord) -> Self {
        let mut records = self.records.clone();
        if records.len() == self.limit {
            records.pop_front();
        }
        records.push_back(record);
        Self {
            records,
            limit: self.limit,
        }
    }

    /// Action names in the order they were applied.
    pub fn actions(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.action.as_str()).collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
