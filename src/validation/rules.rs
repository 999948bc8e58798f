//! Title rules checked using Validation.

use crate::validation::violations::TitleViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for title check functions
pub type TitleCheck =
    Box<dyn Fn(&str) -> Validation<(), NonEmptyVec<TitleViolation>> + Send + Sync>;

/// Rules a title must satisfy before the store accepts an `Add`.
/// Uses Validation to accumulate ALL violations.
///
/// Titles are checked after trimming, the same way the transition engine
/// stores them.
pub struct TitleRules {
    pub(crate) max_len: Option<usize>,
    pub(crate) reject_control_chars: bool,
    pub(crate) required_checks: Vec<TitleCheck>,
}

impl TitleRules {
    /// Rules that only reject blank titles.
    pub fn permissive() -> Self {
        Self {
            max_len: None,
            reject_control_chars: false,
            required_checks: Vec::new(),
        }
    }

    /// Check every rule, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, title: &str) -> Validation<(), NonEmptyVec<TitleViolation>> {
        let title = title.trim();
        let mut checks: Vec<Validation<(), NonEmptyVec<TitleViolation>>> = Vec::new();

        checks.push(if title.is_empty() {
            Validation::fail(TitleViolation::Blank)
        } else {
            Validation::success(())
        });

        if let Some(max) = self.max_len {
            let len = title.chars().count();
            checks.push(if len > max {
                Validation::fail(TitleViolation::TooLong { max, len })
            } else {
                Validation::success(())
            });
        }

        if self.reject_control_chars {
            checks.push(match title.chars().find(|c| c.is_control()) {
                Some(ch) => Validation::fail(TitleViolation::ControlCharacter { ch }),
                None => Validation::success(()),
            });
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(title));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// `enforce` flattened into a `Result` with the violations in check order.
    pub fn check(&self, title: &str) -> Result<(), Vec<TitleViolation>> {
        match self.enforce(title) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

impl Default for TitleRules {
    fn default() -> Self {
        Self::permissive()
    }
}
