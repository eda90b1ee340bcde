//! Page fetcher trait and the reqwest implementation.

use crate::error::{ScrapeError, ScrapeResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use tokstats_core::TIKTOK_BASE_URL;

/// Raw page retrieval. The pipeline only ever needs the body text of a
/// URL; everything about how the request is made (cookies, headers,
/// transport) stays behind this trait so tests can script responses.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> ScrapeResult<String>;
}

/// Browser-impersonating fetcher.
///
/// Keeps one long-lived client so the cookie jar and connection pool are
/// reused across requests; cookies handed out by the upstream site reduce
/// how often the verification interstitial is served.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> ScrapeResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(TIKTOK_BASE_URL));

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(|e| ScrapeError::Fetch(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> ScrapeResult<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::Fetch(e.to_string()))?;
        // Interstitials and soft errors still carry a useful body, so the
        // status code is not checked here; extraction decides what it got.
        response
            .text()
            .await
            .map_err(|e| ScrapeError::Fetch(e.to_string()))
    }
}
