//! Builder API for ergonomic store construction.
//!
//! `Store::new()` covers the common case. The builder is for applications
//! that load a `StoreConfig`, add their own title rules, or inject a
//! deterministic `Environment` for tests.

pub mod error;

pub use error::BuildError;

use crate::config::StoreConfig;
use crate::core::{Environment, SystemEnv};
use crate::store::Store;
use crate::validation::{TitleCheck, TitleViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```
/// use todo_state::builder::StoreBuilder;
/// use todo_state::core::SequentialEnv;
///
/// let mut store = StoreBuilder::new()
///     .dark_mode(true)
///     .max_title_len(Some(40))
///     .environment(SequentialEnv::new())
///     .build()
///     .unwrap();
///
/// let id = store.add("Buy milk").unwrap();
/// assert_eq!(id.as_str(), "todo-1");
/// assert!(store.state().ui.dark_mode());
/// ```
pub struct StoreBuilder<E: Environment = SystemEnv> {
    config: StoreConfig,
    extra_checks: Vec<TitleCheck>,
    env: E,
}

impl StoreBuilder<SystemEnv> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            extra_checks: Vec::new(),
            env: SystemEnv,
        }
    }
}

impl Default for StoreBuilder<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> StoreBuilder<E> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial theme.
    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.config.dark_mode = dark_mode;
        self
    }

    /// Set or disable the maximum title length.
    pub fn max_title_len(mut self, max: Option<usize>) -> Self {
        self.config.max_title_len = max;
        self
    }

    pub fn reject_control_chars(mut self, reject: bool) -> Self {
        self.config.reject_control_chars = reject;
        self
    }

    /// Set how many applied actions the history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Add a title rule on top of the configured ones.
    pub fn require_title<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Validation<(), NonEmptyVec<TitleViolation>> + Send + Sync + 'static,
    {
        self.extra_checks.push(Box::new(check));
        self
    }

    /// Swap the id/clock source.
    pub fn environment<E2: Environment>(self, env: E2) -> StoreBuilder<E2> {
        StoreBuilder {
            config: self.config,
            extra_checks: self.extra_checks,
            env,
        }
    }

    /// Build the store.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Store<E>, BuildError> {
        self.config.validate()?;

        let rules = self
            .extra_checks
            .into_iter()
            .fold(self.config.title_rules(), |builder, check| {
                builder.require(check)
            })
            .build();

        Ok(Store::from_parts(&self.config, rules, self.env))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::SequentialEnv;

    #[test]
    fn builder_applies_config() {
        let store = StoreBuilder::new()
            .config(StoreConfig {
                dark_mode: true,
                history_limit: 3,
                ..StoreConfig::default()
            })
            .build()
            .unwrap();

        assert!(store.state().ui.dark_mode());
        assert_eq!(store.history().limit(), 3);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let result = StoreBuilder::new().history_limit(0).build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidConfig(ConfigError::ZeroHistoryLimit))
        ));
    }

    #[test]
    fn builder_combines_config_and_custom_rules() {
        let mut store = StoreBuilder::new()
            .max_title_len(Some(10))
            .require_title(|title: &str| {
                if title.chars().next().is_some_and(char::is_uppercase) {
                    Validation::success(())
                } else {
                    Validation::fail(TitleViolation::Custom {
                        message: "must start with a capital".to_string(),
                    })
                }
            })
            .environment(SequentialEnv::new())
            .build()
            .unwrap();

        let err = store.add("buy oat milk today").unwrap_err();
        assert_eq!(err.violations().len(), 2);

        assert!(store.add("Buy milk").is_ok());
    }

    #[test]
    fn disabled_length_limit_accepts_long_titles() {
        let mut store = StoreBuilder::new()
            .max_title_len(None)
            .environment(SequentialEnv::new())
            .build()
            .unwrap();

        assert!(store.add(&"x".repeat(1_000)).is_ok());
    }

    #[test]
    fn control_characters_can_be_allowed() {
        let mut store = StoreBuilder::new()
            .reject_control_chars(false)
            .build()
            .unwrap();

        assert!(store.add("two\nlines").is_ok());
    }
}
