//! Error types for skiphire

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A filter range was constructed with min > max. Never silently swapped.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A band value outside the enumerated set was supplied.
    #[error("Unknown band value: {0}")]
    UnknownBand(String),

    /// A wizard step name outside the enumerated set was supplied.
    #[error("Unknown step value: {0}")]
    UnknownStep(String),

    /// The remote skip source failed. Recoverable: callers keep the last
    /// good skip list (empty on first load).
    #[error("Skip source fetch failed: {0}")]
    SourceFetch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
