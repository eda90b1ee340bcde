//! Core domain types and shared logic for the TikTok metrics service.
//!
//! This crate defines the canonical data model used across all other crates:
//! - User and video metric records returned by the API
//! - Magnitude-string parsing and averaging helpers
//! - Application configuration
//! - Core error type

pub mod config;
pub mod error;
pub mod metrics;
pub mod numfmt;

pub use error::{Error, Result};
pub use metrics::{MetricsMeta, UserInfo, UserMetricValues, UserMetrics, VideoMetrics};

/// Base URL of the upstream site.
pub const TIKTOK_BASE_URL: &str = "https://www.tiktok.com";

/// Number of recent videos considered per profile.
pub const DEFAULT_VIDEO_COUNT: usize = 10;
