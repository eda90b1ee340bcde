//! Metric records assembled by the scraping pipeline.

use serde::{Deserialize, Serialize};

/// Engagement counters for a single video, or a sum/average over several.
///
/// All fields are non-negative by construction. When the value represents
/// an average over `count` videos, each field is floored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetrics {
    pub comments: u64,
    pub likes: u64,
    pub shares: u64,
}

impl VideoMetrics {
    /// Accumulate another set of counters into this one.
    pub fn add(&mut self, other: &VideoMetrics) {
        self.comments += other.comments;
        self.likes += other.likes;
        self.shares += other.shares;
    }

    /// Floored per-video average of an accumulated sum.
    pub fn averaged_over(&self, count: u64) -> VideoMetrics {
        if count == 0 {
            return VideoMetrics::default();
        }
        VideoMetrics {
            comments: self.comments / count,
            likes: self.likes / count,
            shares: self.shares / count,
        }
    }
}

/// Public identity of the scraped creator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name as shown on the profile page.
    pub display_name: String,
    /// Profile avatar URL, when the page exposed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Derived metric values for a creator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetricValues {
    pub total_followers: f64,
    pub average_video_views: f64,
    /// `(comments + likes + shares) / views`, rounded to 2 decimals.
    pub interaction_rate: f64,
    pub average_comments: f64,
    pub average_likes: f64,
    pub average_shares: f64,
}

/// Response metadata flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsMeta {
    /// True when per-video engagement came up empty from cache and the
    /// caller should trigger the complete (network-bound) path.
    pub video_stats_loading: bool,
}

/// Top-level metrics record for a creator. Constructed fresh per request,
/// never persisted; only the page and per-video caches behind it are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub user: UserInfo,
    pub metrics: UserMetricValues,
    pub meta: MetricsMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averaged_over_floors_each_field() {
        let sum = VideoMetrics {
            comments: 10,
            likes: 11,
            shares: 29,
        };
        let avg = sum.averaged_over(3);
        assert_eq!(
            avg,
            VideoMetrics {
                comments: 3,
                likes: 3,
                shares: 9,
            }
        );
    }

    #[test]
    fn averaged_over_zero_count_is_empty() {
        let sum = VideoMetrics {
            comments: 5,
            likes: 5,
            shares: 5,
        };
        assert_eq!(sum.averaged_over(0), VideoMetrics::default());
    }

    #[test]
    fn avatar_url_omitted_when_absent() {
        let user = UserInfo {
            display_name: "Test".to_string(),
            avatar_url: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar_url"));
    }
}
