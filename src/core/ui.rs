//! Theme flag and transient banner.

use serde::{Deserialize, Serialize};

/// A single-slot notification shown until dismissed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
}

/// UI flags owned by the store.
///
/// The two fields are independent; every transition is total.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    dark_mode: bool,
    banner: Option<Banner>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start state with the given theme.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            banner: None,
        }
    }

    pub fn toggle_dark_mode(&self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            banner: self.banner.clone(),
        }
    }

    /// Show `message`, replacing any banner already shown.
    pub fn show_banner(&self, message: impl Into<String>) -> Self {
        Self {
            dark_mode: self.dark_mode,
            banner: Some(Banner {
                message: message.into(),
            }),
        }
    }

    pub fn dismiss_banner(&self) -> Self {
        Self {
            dark_mode: self.dark_mode,
            banner: None,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }
}
