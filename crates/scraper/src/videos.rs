//! Per-video stats aggregation.
//!
//! Two operating modes over the same discovered video ids:
//! - complete: live sequential fetch of every video page, rate-limited,
//!   fail-closed when discovery comes up short
//! - cached-only: reads exclusively from the cache, skipping misses, so
//!   the primary metrics request never blocks on the network

use crate::error::ScrapeResult;
use crate::extract::{self, patterns};
use crate::keys;
use crate::page::ScrapeClient;
use std::collections::HashSet;
use tokstats_core::VideoMetrics;

impl ScrapeClient {
    /// Profile URL for a canonical `@username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/{}?lang=en", self.config().base_url, username)
    }

    /// Video URL for a canonical `@username` and video id.
    pub fn video_url(&self, username: &str, video_id: &str) -> String {
        format!("{}/{}/video/{}", self.config().base_url, username, video_id)
    }

    /// Newest video ids from the profile page's embedded post list.
    ///
    /// At most `video_count` ids, deduplicated preserving first
    /// occurrence (the source fragment sometimes repeats ids). Pass the
    /// profile body if already fetched to avoid a duplicate scrape.
    pub async fn newest_video_ids(
        &self,
        username: &str,
        profile_html: Option<&str>,
    ) -> ScrapeResult<Vec<String>> {
        let fetched;
        let body = match profile_html {
            Some(body) => body,
            None => {
                fetched = self.scrape_page(&self.profile_url(username)).await?;
                match fetched.body.as_deref() {
                    Some(body) => body,
                    None => return Ok(Vec::new()),
                }
            }
        };

        let fragment = extract::first_match(body, &patterns::POST_LIST);
        if fragment.is_empty() {
            tracing::debug!(username, "no post list found on profile page");
            return Ok(Vec::new());
        }

        let ids = extract::all_matches(
            fragment,
            &patterns::VIDEO_ID,
            0,
            Some(self.config().video_count),
        );

        let mut seen = HashSet::new();
        Ok(ids.into_iter().filter(|id| seen.insert(id.clone())).collect())
    }

    /// Scrape a single video page and cache its extracted stats.
    ///
    /// Returns `None` when the page was unreachable; `cached` mirrors the
    /// underlying page scrape.
    pub async fn video_stats(&self, url: &str) -> ScrapeResult<(Option<VideoMetrics>, bool)> {
        let page = self.scrape_page(url).await?;
        let Some(body) = page.body else {
            return Ok((None, page.cached));
        };

        let stats = extract::video_stats_from_page(&body);
        self.cache()
            .set(&keys::video_stats_key(url), &serde_json::to_string(&stats)?)
            .await?;

        Ok((Some(stats), page.cached))
    }

    /// Complete mode: live stats for every one of the newest videos.
    ///
    /// Fail-closed: when fewer than `video_count` ids were discovered the
    /// result is all zeros, not a partial average. Fetches run strictly in
    /// sequence with a jittered pause after each uncached one; parallel
    /// fetches are much more likely to trip the anti-bot defenses.
    ///
    /// Returns `None` when the profile page itself was unreachable.
    pub async fn complete_video_metrics(
        &self,
        username: &str,
    ) -> ScrapeResult<Option<VideoMetrics>> {
        let page = self.scrape_page(&self.profile_url(username)).await?;
        let Some(body) = page.body else {
            return Ok(None);
        };

        let count = self.config().video_count;
        let ids = self.newest_video_ids(username, Some(&body)).await?;
        if ids.len() != count {
            tracing::debug!(
                username,
                discovered = ids.len(),
                wanted = count,
                "short video id discovery, returning empty stats"
            );
            return Ok(Some(VideoMetrics::default()));
        }

        let mut sum = VideoMetrics::default();
        for video_id in &ids {
            let url = self.video_url(username, video_id);
            let (stats, cached) = self.video_stats(&url).await?;
            if let Some(stats) = stats {
                sum.add(&stats);
            }
            if !cached {
                self.fetch_delay().await;
            }
        }

        Ok(Some(sum.averaged_over(count as u64)))
    }

    /// Cached-only mode: average whatever per-video stats are already in
    /// the cache, issuing no network fetches.
    ///
    /// Misses are skipped so they do not drag the average down. Returns
    /// the averaged stats plus how many videos contributed; zero found
    /// means the caller should flag the result as partial.
    pub async fn cached_video_metrics(
        &self,
        username: &str,
        profile_html: Option<&str>,
    ) -> ScrapeResult<(VideoMetrics, usize)> {
        let ids = self.newest_video_ids(username, profile_html).await?;

        let mut sum = VideoMetrics::default();
        let mut found = 0u64;
        for video_id in &ids {
            let url = self.video_url(username, video_id);
            let Some(raw) = self.cache().get(&keys::video_stats_key(&url)).await? else {
                continue;
            };
            match serde_json::from_str::<VideoMetrics>(&raw) {
                Ok(stats) => {
                    sum.add(&stats);
                    found += 1;
                }
                Err(e) => {
                    tracing::debug!(url, error = %e, "discarding unparsable cached video stats");
                }
            }
        }

        Ok((sum.averaged_over(found), found as usize))
    }
}
