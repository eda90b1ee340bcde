//! Scrape pipeline error types.

use thiserror::Error;

/// Scrape pipeline errors.
///
/// Extraction misses are not errors: pattern lookups degrade to empty or
/// zero values locally. Only the conditions a caller must react to
/// propagate here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The anti-bot interstitial persisted after the single retry.
    #[error("verification page detected, please try again later")]
    VerificationBlocked,

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("cache error: {0}")]
    Cache(#[from] tokstats_cache::CacheError),

    #[error("core error: {0}")]
    Core(#[from] tokstats_core::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for scrape operations.
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;
