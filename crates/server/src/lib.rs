//! HTTP API for the TikTok creator metrics service.
//!
//! This crate provides the web surface over the scrape pipeline:
//! - User metrics retrieval (cache-backed, non-blocking)
//! - Complete per-video stats retrieval (network-bound)
//! - Cache administration

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
