//! Server test utilities.

use crate::common::fetcher::MockFetcher;
use std::sync::Arc;
use tokstats_cache::{CacheStore, MemoryStore};
use tokstats_core::config::AppConfig;
use tokstats_scraper::ScrapeClient;
use tokstats_server::{AppState, create_router};

/// A test server wrapper with all dependencies.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    pub cache: Arc<dyn CacheStore>,
    pub fetcher: Arc<MockFetcher>,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a new test server over an in-memory cache and scripted fetcher.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test server with custom config modifications.
    pub async fn with_config<F>(modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = AppConfig::for_testing();
        modifier(&mut config);

        let cache: Arc<dyn CacheStore> = Arc::new(MemoryStore::new());
        let fetcher = Arc::new(MockFetcher::new());
        let scraper = ScrapeClient::new(cache.clone(), fetcher.clone(), config.scrape.clone());

        let state = AppState::new(config, cache.clone(), scraper);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            cache,
            fetcher,
        }
    }

    /// Profile URL matching what the pipeline will request.
    pub fn profile_url(&self, username: &str) -> String {
        self.state.scraper.profile_url(username)
    }

    /// Video URL matching what the pipeline will request.
    pub fn video_url(&self, username: &str, video_id: &str) -> String {
        self.state.scraper.video_url(username, video_id)
    }
}
