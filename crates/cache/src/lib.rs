//! Cache store abstraction and backends for the TikTok metrics service.
//!
//! This crate persists the scrape pipeline's working set:
//! - Raw profile and video page bodies, keyed by URL
//! - Page-load timestamp side keys
//! - Extracted per-video stats as JSON
//!
//! Backends: file-backed SQLite and in-memory.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{CacheError, CacheResult};
pub use memory::MemoryStore;
pub use store::{CacheStore, SqliteStore};

use std::sync::Arc;
use tokstats_core::config::CacheConfig;

/// Create a cache store from configuration.
pub async fn from_config(config: &CacheConfig) -> CacheResult<Arc<dyn CacheStore>> {
    match config {
        CacheConfig::Sqlite { path } => {
            let store = SqliteStore::new(path).await?;
            Ok(Arc::new(store) as Arc<dyn CacheStore>)
        }
        CacheConfig::Memory => {
            tracing::warn!("using in-memory cache store, entries will not survive a restart");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn CacheStore>)
        }
    }
}
