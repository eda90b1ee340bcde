//! Application state shared across handlers.

use std::sync::Arc;
use tokstats_cache::CacheStore;
use tokstats_core::config::AppConfig;
use tokstats_scraper::ScrapeClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache store, also reachable through the scraper; held directly for
    /// the cache administration endpoint.
    pub cache: Arc<dyn CacheStore>,
    /// Scrape pipeline client.
    pub scraper: Arc<ScrapeClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Panics
    ///
    /// Panics if scrape configuration validation fails; construction
    /// happens once at startup and misconfiguration should be fatal.
    pub fn new(config: AppConfig, cache: Arc<dyn CacheStore>, scraper: ScrapeClient) -> Self {
        if let Err(error) = config.scrape.validate() {
            panic!("Invalid scrape configuration: {error}");
        }

        Self {
            config: Arc::new(config),
            cache,
            scraper: Arc::new(scraper),
        }
    }
}
