//! Scripted page fetcher and HTML fixtures.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokstats_scraper::{PageFetcher, ScrapeError, ScrapeResult};

/// Fetcher that replays scripted bodies per URL, in order.
/// Running out of scripted responses simulates an unreachable page.
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, VecDeque<String>>>,
}

#[allow(dead_code)]
impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body for a URL.
    pub fn push_response(&self, url: &str, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(body.into());
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_page(&self, url: &str) -> ScrapeResult<String> {
        self.responses
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| ScrapeError::Fetch(format!("no scripted response for {url}")))
    }
}

/// The anti-bot interstitial body.
#[allow(dead_code)]
pub fn verify_page() -> String {
    r#"<script>const option = {"title":"tiktok-verify-page","region":"va"};</script>"#.to_string()
}

/// A profile page carrying the fields the pipeline extracts.
#[allow(dead_code)]
pub fn profile_page(
    handle: &str,
    display_name: &str,
    followers: &str,
    views: &[&str],
    video_ids: &[&str],
) -> String {
    let views_html: String = views
        .iter()
        .map(|v| {
            format!(r#"<strong data-e2e="video-views" class="video-count e1a2b3c">{v}</strong>"#)
        })
        .collect();

    let id_list: String = video_ids
        .iter()
        .map(|id| format!(r#""{id}""#))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        concat!(
            r#"<html><head><script type="application/ld+json">"#,
            r#"{{"@id":"https://www.tiktok.com/@{handle}","name":"{display_name} (@{handle}) | TikTok"}}"#,
            r#"</script></head><body>"#,
            r#"<script>{{"avatarLarger":"https://cdn.example/{handle}.jpeg"}}</script>"#,
            r#"<strong title="Followers" data-e2e="followers-count">{followers}</strong>"#,
            "{views_html}",
            r#"<script>{{"ItemList":{{"user-post":{{"list":[{id_list}]}}}}}}</script>"#,
            r#"</body></html>"#,
        ),
        handle = handle,
        display_name = display_name,
        followers = followers,
        views_html = views_html,
        id_list = id_list,
    )
}

/// A video page with the three engagement counters.
#[allow(dead_code)]
pub fn video_page(comments: &str, likes: &str, shares: &str) -> String {
    format!(
        concat!(
            r#"<html><body>"#,
            r#"<strong data-e2e="like-count" class="tiktok-x1y2z3 e1">{likes}</strong>"#,
            r#"<strong data-e2e="comment-count" class="tiktok-x1y2z3 e2">{comments}</strong>"#,
            r#"<strong data-e2e="share-count" class="tiktok-x1y2z3 e3">{shares}</strong>"#,
            r#"</body></html>"#,
        ),
        likes = likes,
        comments = comments,
        shares = shares,
    )
}

/// A plausible 19-digit video id with a distinguishing suffix.
#[allow(dead_code)]
pub fn video_id(n: u64) -> String {
    format!("{:019}", 7_100_000_000_000_000_000u64 + n)
}
