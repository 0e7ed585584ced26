use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Suffix appended to every rendered amount, e.g. `400 €`.
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Disables colours and box-drawing characters in terminal output.
    #[serde(default)]
    pub plain_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            plain_mode: false,
            store_path: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "€".into()
    }
}
