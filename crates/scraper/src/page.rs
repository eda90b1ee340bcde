//! Scrape orchestrator: cached-or-fresh page bodies with verification
//! retry.

use crate::error::{ScrapeError, ScrapeResult};
use crate::extract;
use crate::fetch::PageFetcher;
use crate::keys;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokstats_cache::CacheStore;
use tokstats_core::config::ScrapeConfig;

/// Result of a page scrape.
///
/// `cached` tells callers they may skip politeness delays; `body` is
/// `None` when the page was unreachable (fetch failures are absorbed
/// here and mapped to not-found by the assembler).
#[derive(Clone, Debug)]
pub struct ScrapedPage {
    pub body: Option<String>,
    pub cached: bool,
}

/// Single entry point for every upstream page access.
///
/// Holds the cache store and fetcher as injected dependencies; one
/// instance lives for the whole process so cookie and cache state is
/// shared across requests.
pub struct ScrapeClient {
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn PageFetcher>,
    config: ScrapeConfig,
}

impl ScrapeClient {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        fetcher: Arc<dyn PageFetcher>,
        config: ScrapeConfig,
    ) -> Self {
        Self {
            cache,
            fetcher,
            config,
        }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    /// Produce a page body for `url`, cached or fresh.
    ///
    /// Cache hit returns immediately. On a miss the page is fetched; a
    /// verification interstitial is retried exactly once after a fixed
    /// delay, and if it persists the cache entries for this URL are
    /// purged and `VerificationBlocked` is raised so the next request
    /// starts clean. Unreachable pages yield `body: None` rather than an
    /// error.
    pub async fn scrape_page(&self, url: &str) -> ScrapeResult<ScrapedPage> {
        let page_key = keys::page_key(url);
        let loaded_key = keys::page_loaded_key(url);

        if let Some(body) = self.cache.get(&page_key).await? {
            return Ok(ScrapedPage {
                body: Some(body),
                cached: true,
            });
        }

        let mut body = match self.fetcher.fetch_page(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url, error = %e, "page fetch failed");
                return Ok(ScrapedPage {
                    body: None,
                    cached: false,
                });
            }
        };

        if extract::is_verification_page(&body) {
            tracing::warn!(url, "verification page detected, retrying once");
            tokio::time::sleep(Duration::from_millis(self.config.verify_retry_delay_ms)).await;

            body = match self.fetcher.fetch_page(url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(url, error = %e, "retry fetch failed");
                    return Ok(ScrapedPage {
                        body: None,
                        cached: false,
                    });
                }
            };

            if extract::is_verification_page(&body) {
                // Purge anything written for this URL so the next request
                // retries from a clean slate.
                self.cache.delete(&page_key).await?;
                self.cache.delete(&loaded_key).await?;
                return Err(ScrapeError::VerificationBlocked);
            }
        }

        self.cache.set(&page_key, &body).await?;
        self.cache.set(&loaded_key, &now_millis().to_string()).await?;

        Ok(ScrapedPage {
            body: Some(body),
            cached: false,
        })
    }

    /// Jittered politeness pause between uncached fetches.
    pub(crate) async fn fetch_delay(&self) {
        let (min, max) = (self.config.fetch_delay_min_ms, self.config.fetch_delay_max_ms);
        let millis = if max > min {
            fastrand::u64(min..=max)
        } else {
            min
        };
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

fn now_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}
