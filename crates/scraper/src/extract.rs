//! Best-effort pattern extraction from scraped page bodies.
//!
//! The upstream pages are semi-structured HTML with JSON embedded in
//! script tags, and the format changes without notice. Every pattern
//! lives in the table below so a page-format change touches only this
//! module; lookups that find nothing return empty values instead of
//! erroring, which is a deliberate robustness-over-correctness tradeoff.

use once_cell::sync::Lazy;
use regex::Regex;
use tokstats_core::VideoMetrics;
use tokstats_core::numfmt::parse_magnitude;

/// Named extraction patterns, one per scraped field.
pub mod patterns {
    use super::*;

    /// Anti-bot interstitial marker.
    pub static VERIFY_PAGE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"const option = \{"title":"tiktok-verify-page""#).unwrap());

    /// Profile JSON-LD id/name pair. Group 1 is the handle, group 2 the
    /// display name.
    pub static DISPLAY_NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r#""@id":"https://www\.tiktok\.com/@([a-zA-Z][a-zA-Z0-9_.-]{1,24})","name":"(.{1,30}) \("#,
        )
        .unwrap()
    });

    /// Profile avatar URL inside the embedded state JSON.
    pub static AVATAR_URL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#""avatarLarger":"([^"]+)""#).unwrap());

    /// Follower counter on the profile page.
    pub static FOLLOWERS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"followers-count">([0-9.\w]+)<"#).unwrap());

    /// Per-video view counters embedded in the profile page grid.
    pub static VIDEO_VIEWS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"<strong data-e2e="video-views" class="video-count[\w\d\s-]*">(.{1,15})</strong>"#)
            .unwrap()
    });

    /// Post-list JSON fragment holding the newest video ids.
    pub static POST_LIST: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"\{"user-post":\{"list":\[(.*?)\]"#).unwrap());

    /// Video identifiers are 19-digit numbers.
    pub static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{19}").unwrap());

    /// Video page engagement counters.
    pub static COMMENT_COUNT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"data-e2e="comment-count" class="tiktok[\w\d\s-]+">([0-9.\w]+)</"#).unwrap()
    });
    pub static LIKE_COUNT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"data-e2e="like-count" class="tiktok[\w\d\s-]+">([0-9.\w]+)</"#).unwrap()
    });
    pub static SHARE_COUNT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"data-e2e="share-count" class="tiktok[\w\d\s-]+">([0-9.\w]+)</"#).unwrap()
    });
}

/// First capture group of the first match, or `""`.
pub fn first_match<'a>(body: &'a str, pattern: &Regex) -> &'a str {
    nth_match(body, pattern, 1)
}

/// Nth capture group of the first match, or `""`.
pub fn nth_match<'a>(body: &'a str, pattern: &Regex, n: usize) -> &'a str {
    pattern
        .captures(body)
        .and_then(|caps| caps.get(n))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// The given capture group of every match, optionally truncated.
/// Zero matches yield an empty vec.
pub fn all_matches(
    body: &str,
    pattern: &Regex,
    group: usize,
    limit: Option<usize>,
) -> Vec<String> {
    let matches = pattern
        .captures_iter(body)
        .filter_map(|caps| caps.get(group).map(|m| m.as_str().to_string()));
    match limit {
        Some(limit) => matches.take(limit).collect(),
        None => matches.collect(),
    }
}

/// Whether the body is the anti-bot interstitial instead of real content.
pub fn is_verification_page(body: &str) -> bool {
    patterns::VERIFY_PAGE.is_match(body)
}

/// Extract the three engagement counters from a video page.
/// Missing counters come back as zero.
pub fn video_stats_from_page(body: &str) -> VideoMetrics {
    let stats = VideoMetrics {
        comments: count_from(body, &patterns::COMMENT_COUNT),
        likes: count_from(body, &patterns::LIKE_COUNT),
        shares: count_from(body, &patterns::SHARE_COUNT),
    };
    if stats == VideoMetrics::default() {
        tracing::debug!("no engagement counters matched on video page");
    }
    stats
}

fn count_from(body: &str, pattern: &Regex) -> u64 {
    parse_magnitude(first_match(body, pattern)).round() as u64
}
