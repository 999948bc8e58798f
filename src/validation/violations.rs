//! Title violations.

use thiserror::Error;

/// Reasons a todo title is rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleViolation {
    #[error("Title is blank")]
    Blank,

    #[error("Title is too long ({len} characters, max {max})")]
    TooLong { max: usize, len: usize },

    #[error("Title contains control character {ch:?}")]
    ControlCharacter { ch: char },

    #[error("Custom check failed: {message}")]
    Custom { message: String },
}
