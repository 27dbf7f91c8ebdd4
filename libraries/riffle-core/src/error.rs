/// Core error types for Riffle
use thiserror::Error;

/// Result type alias using `RiffleError`
pub type Result<T> = std::result::Result<T, RiffleError>;

/// Core error type for Riffle
#[derive(Error, Debug)]
pub enum RiffleError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Event rejected at the publish boundary
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl RiffleError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid event error
    pub fn invalid_event(msg: impl Into<String>) -> Self {
        Self::InvalidEvent(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<::config::ConfigError> for RiffleError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
