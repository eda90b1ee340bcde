//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (intentionally unauthenticated for load balancers)
        .route("/api/health", get(handlers::health_check))
        // Metrics endpoints
        .route(
            "/api/metrics/tiktok/users/{identifier}",
            get(handlers::get_user_metrics),
        )
        .route(
            "/api/metrics/tiktok/users-video-data/{identifier}",
            get(handlers::get_user_video_data),
        )
        // Cache administration
        .route(
            "/api/metrics/tiktok/clear-cache",
            post(handlers::clear_cache),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
