//! Store error types.

use crate::validation::TitleViolation;
use thiserror::Error;

/// Errors returned by `Store::dispatch` and friends
#[derive(Debug, Error)]
pub enum StoreError {
    /// An `Add` was refused by the title rules; state is unchanged
    #[error("Invalid todo title: {}", describe(.violations))]
    InvalidTitle { violations: Vec<TitleViolation> },

    /// An action or snapshot could not be converted to or from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Title violations carried by this error, empty for other variants.
    pub fn violations(&self) -> &[TitleViolation] {
        match self {
            Self::InvalidTitle { violations } => violations,
            Self::Json(_) => &[],
        }
    }
}

fn describe(violations: &[TitleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
