//! Store configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration. The defaults refuse only blank titles; length and
//! control-character checks are opt-in.
//!
//! ```toml
//! dark_mode = true
//! max_title_len = 120
//! reject_control_chars = true
//! history_limit = 50
//! ```

use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::validation::{TitleRules, TitleRulesBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or checking a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("history_limit must be greater than zero")]
    ZeroHistoryLimit,

    #[error("max_title_len must be greater than zero")]
    ZeroMaxTitleLen,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Theme the store starts in
    pub dark_mode: bool,

    /// Longest accepted title in characters; omit the key for no limit
    pub max_title_len: Option<usize>,

    /// Refuse titles containing control characters
    pub reject_control_chars: bool,

    /// Number of applied actions kept in the history
    pub history_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            max_title_len: None,
            reject_control_chars: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        if self.max_title_len == Some(0) {
            return Err(ConfigError::ZeroMaxTitleLen);
        }
        Ok(())
    }

    /// Title rules described by this configuration.
    pub fn title_rules(&self) -> TitleRulesBuilder {
        TitleRulesBuilder::new()
            .max_len_opt(self.max_title_len)
            .reject_control_chars(self.reject_control_chars)
    }
}

impl From<&StoreConfig> for TitleRules {
    fn from(config: &StoreConfig) -> Self {
        config.title_rules().build()
    }
}
