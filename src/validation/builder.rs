//! Builder API for creating title rules.

use crate::validation::rules::{TitleCheck, TitleRules};
use crate::validation::violations::TitleViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating title rules
pub struct TitleRulesBuilder {
    max_len: Option<usize>,
    reject_control_chars: bool,
    required_checks: Vec<TitleCheck>,
}

impl TitleRulesBuilder {
    pub fn new() -> Self {
        Self {
            max_len: None,
            reject_control_chars: false,
            required_checks: Vec::new(),
        }
    }

    /// Set maximum title length in characters
    pub fn max_len(mut self, n: usize) -> Self {
        self.max_len = Some(n);
        self
    }

    /// Set or clear the maximum title length
    pub fn max_len_opt(mut self, n: Option<usize>) -> Self {
        self.max_len = n;
        self
    }

    /// Reject titles containing control characters
    pub fn reject_control_chars(mut self, reject: bool) -> Self {
        self.reject_control_chars = reject;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Validation<(), NonEmptyVec<TitleViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let check = move |title: &str| {
            if predicate(title) {
                Validation::success(())
            } else {
                Validation::fail(TitleViolation::Custom {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the title rules
    pub fn build(self) -> TitleRules {
        TitleRules {
            max_len: self.max_len,
            reject_control_chars: self.reject_control_chars,
            required_checks: self.required_checks,
        }
    }
}

impl Default for TitleRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
