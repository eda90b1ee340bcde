//! Cache store error types.

use thiserror::Error;

/// Cache store operation errors.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
