//! Top-level user metrics assembly.

use crate::error::ScrapeResult;
use crate::extract::{self, patterns};
use crate::page::ScrapeClient;
use tokstats_core::numfmt;
use tokstats_core::{Error, MetricsMeta, UserInfo, UserMetricValues, UserMetrics, VideoMetrics};

/// Normalize an identifier to the canonical `@username` form.
pub fn canonical_username(identifier: &str) -> Result<String, Error> {
    let identifier = identifier.trim();
    if identifier.is_empty() || identifier == "@" {
        return Err(Error::InvalidIdentifier(
            "identifier must not be empty".to_string(),
        ));
    }
    if identifier.starts_with('@') {
        Ok(identifier.to_string())
    } else {
        Ok(format!("@{identifier}"))
    }
}

impl ScrapeClient {
    /// Assemble the full metrics record for a creator.
    ///
    /// `None` means not-found: the profile page was unreachable, or the
    /// display name could not be extracted. A changed page format and a
    /// truly missing account are indistinguishable here and deliberately
    /// map to the same outcome.
    ///
    /// Per-video engagement comes exclusively from cache on this path;
    /// `meta.video_stats_loading` signals the caller to trigger the
    /// complete (network-bound) endpoint when nothing was cached yet.
    pub async fn user_metrics(&self, identifier: &str) -> ScrapeResult<Option<UserMetrics>> {
        let username = canonical_username(identifier)?;
        let page = self.scrape_page(&self.profile_url(&username)).await?;
        let Some(body) = page.body else {
            return Ok(None);
        };

        let display_name = extract::nth_match(&body, &patterns::DISPLAY_NAME, 2);
        if display_name.is_empty() {
            tracing::debug!(username, "display name not found, treating as missing account");
            return Ok(None);
        }
        let display_name = display_name.to_string();

        let avatar_url = match extract::first_match(&body, &patterns::AVATAR_URL) {
            "" => None,
            // The embedded state JSON escapes slashes.
            url => Some(url.replace("\\u002F", "/")),
        };

        let total_followers =
            numfmt::parse_magnitude(extract::first_match(&body, &patterns::FOLLOWERS));

        let views: Vec<f64> = extract::all_matches(
            &body,
            &patterns::VIDEO_VIEWS,
            1,
            Some(self.config().video_count),
        )
        .iter()
        .map(|count| numfmt::parse_magnitude(count))
        .collect();
        let average_video_views = numfmt::average(&views);

        let (video_stats, found) = self.cached_video_metrics(&username, Some(&body)).await?;
        let VideoMetrics {
            comments,
            likes,
            shares,
        } = video_stats;

        let average_comments = comments as f64;
        let average_likes = likes as f64;
        let average_shares = shares as f64;

        let interaction_rate = numfmt::interaction_rate(
            average_comments,
            average_likes,
            average_shares,
            average_video_views,
        );

        Ok(Some(UserMetrics {
            user: UserInfo {
                display_name,
                avatar_url,
            },
            metrics: UserMetricValues {
                total_followers,
                average_video_views,
                interaction_rate,
                average_comments,
                average_likes,
                average_shares,
            },
            meta: MetricsMeta {
                video_stats_loading: found == 0,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_username_appends_at() {
        assert_eq!(canonical_username("creator").unwrap(), "@creator");
        assert_eq!(canonical_username("@creator").unwrap(), "@creator");
    }

    #[test]
    fn canonical_username_rejects_empty() {
        assert!(canonical_username("").is_err());
        assert!(canonical_username("   ").is_err());
        assert!(canonical_username("@").is_err());
    }
}
