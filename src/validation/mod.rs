//! Validation of todo titles in front of the transition engine.
//!
//! The transition engine accepts any title and treats a blank one as a
//! no-op. The store runs these rules first so a caller learns *why* an
//! `Add` was refused. Rules use Stillwater's `Validation` type, so every
//! violation is reported at once instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use todo_state::validation::{TitleRulesBuilder, TitleViolation};
//!
//! let rules = TitleRulesBuilder::new()
//!     .max_len(20)
//!     .reject_control_chars(true)
//!     .build();
//!
//! assert!(rules.check("Buy milk").is_ok());
//! assert_eq!(rules.check("   "), Err(vec![TitleViolation::Blank]));
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::TitleRulesBuilder;
pub use rules::{TitleCheck, TitleRules};
pub use violations::TitleViolation;
