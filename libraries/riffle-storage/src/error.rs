/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Embedded database error
    #[error(transparent)]
    Database(#[from] redb::Error),

    /// Backend reported a failure (quota exceeded, security error, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Backend is not reachable in this environment
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Wrap any embedded database error
    pub fn database(err: impl Into<redb::Error>) -> Self {
        Self::Database(err.into())
    }
}

impl From<StorageError> for riffle_core::RiffleError {
    fn from(err: StorageError) -> Self {
        riffle_core::RiffleError::storage(err.to_string())
    }
}
