use thiserror::Error;

use billed_config::ConfigError;

use crate::store::NetworkError;

/// Error type that captures the failures surfaced by the bills front end.
#[derive(Debug, Error)]
pub enum BillsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed bill at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
