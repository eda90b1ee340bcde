//! Cache key namespacing.
//!
//! Keys are `<namespace>-<url>`. The `-loaded` side keys hold the unix
//! millisecond timestamp of the page fetch; correctness never depends on
//! them, they only let operators judge staleness.

/// Raw page bodies.
pub const PAGE_PREFIX: &str = "tiktok-page";
/// Timestamp side key for page bodies.
pub const PAGE_LOADED_PREFIX: &str = "tiktok-page-loaded";
/// Extracted per-video stats, serialized as JSON.
pub const VIDEO_STATS_PREFIX: &str = "tiktok-video-stats";

pub fn page_key(url: &str) -> String {
    format!("{PAGE_PREFIX}-{url}")
}

pub fn page_loaded_key(url: &str) -> String {
    format!("{PAGE_LOADED_PREFIX}-{url}")
}

pub fn video_stats_key(url: &str) -> String {
    format!("{VIDEO_STATS_PREFIX}-{url}")
}
