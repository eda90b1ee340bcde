//! Configuration types shared across crates.

use crate::{DEFAULT_VIDEO_COUNT, TIKTOK_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Cache store backend configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CacheConfig {
    /// File-backed SQLite key/value database (the production default).
    Sqlite {
        /// Database file path.
        path: PathBuf,
    },
    /// In-memory store. State is lost on restart; intended for tests.
    Memory,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: PathBuf::from("./data/cache.db"),
        }
    }
}

/// Scraping pipeline configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Base URL of the upstream site.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Browser-like user agent sent with every fetch.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Number of recent videos considered per profile.
    #[serde(default = "default_video_count")]
    pub video_count: usize,
    /// Delay before the single retry after a verification page, in ms.
    #[serde(default = "default_verify_retry_delay_ms")]
    pub verify_retry_delay_ms: u64,
    /// Lower bound of the jittered delay between uncached video fetches, in ms.
    #[serde(default = "default_fetch_delay_min_ms")]
    pub fetch_delay_min_ms: u64,
    /// Upper bound of the jittered delay between uncached video fetches, in ms.
    #[serde(default = "default_fetch_delay_max_ms")]
    pub fetch_delay_max_ms: u64,
}

fn default_base_url() -> String {
    TIKTOK_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    // A plain library user agent gets served the verification interstitial
    // far more often, hence the browser string.
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/100.0.4896.127 Safari/537.36"
        .to_string()
}

fn default_video_count() -> usize {
    DEFAULT_VIDEO_COUNT
}

fn default_verify_retry_delay_ms() -> u64 {
    1000
}

fn default_fetch_delay_min_ms() -> u64 {
    1000
}

fn default_fetch_delay_max_ms() -> u64 {
    2000
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            video_count: default_video_count(),
            verify_retry_delay_ms: default_verify_retry_delay_ms(),
            fetch_delay_min_ms: default_fetch_delay_min_ms(),
            fetch_delay_max_ms: default_fetch_delay_max_ms(),
        }
    }
}

impl ScrapeConfig {
    /// Validate scrape configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.video_count == 0 {
            return Err("scrape.video_count must be at least 1".to_string());
        }
        if self.fetch_delay_min_ms > self.fetch_delay_max_ms {
            return Err(format!(
                "scrape.fetch_delay_min_ms {} exceeds fetch_delay_max_ms {}",
                self.fetch_delay_min_ms, self.fetch_delay_max_ms
            ));
        }
        Ok(())
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Cache store configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Scraping pipeline configuration.
    #[serde(default)]
    pub scrape: ScrapeConfig,
}

impl AppConfig {
    /// Create a test configuration with sensible defaults.
    ///
    /// **For testing only.** Uses the in-memory cache and zero delays so
    /// the retry and rate-limit paths run deterministically fast.
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            cache: CacheConfig::Memory,
            scrape: ScrapeConfig {
                verify_retry_delay_ms: 0,
                fetch_delay_min_ms: 0,
                fetch_delay_max_ms: 0,
                ..Default::default()
            },
        }
    }
}
