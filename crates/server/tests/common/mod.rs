//! Common test utilities and fixtures.

pub mod fetcher;
pub mod server;

#[allow(unused_imports)]
pub use fetcher::*;
#[allow(unused_imports)]
pub use server::*;
