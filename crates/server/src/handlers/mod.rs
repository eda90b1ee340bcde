//! HTTP request handlers.

pub mod cache;
pub mod common;
pub mod metrics;

pub use cache::*;
pub use common::*;
pub use metrics::*;
