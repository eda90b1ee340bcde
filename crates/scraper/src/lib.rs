//! Fetch-and-extract pipeline for public creator metrics.
//!
//! This crate owns the hard part of the service:
//! - Cache-guarded page scraping with verification-page retry
//! - Pattern extraction from unstable HTML/JSON-in-HTML payloads
//! - Per-video stats aggregation (complete and cached-only modes)
//! - Assembly of the final user metrics record

pub mod error;
pub mod extract;
pub mod fetch;
pub mod keys;
pub mod page;
pub mod user;
pub mod videos;

pub use error::{ScrapeError, ScrapeResult};
pub use fetch::{HttpFetcher, PageFetcher};
pub use page::{ScrapeClient, ScrapedPage};
pub use user::canonical_username;
