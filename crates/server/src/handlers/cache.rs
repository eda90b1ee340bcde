//! Cache administration handlers.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

#[derive(Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
}

/// POST /api/metrics/tiktok/clear-cache
pub async fn clear_cache(State(state): State<AppState>) -> ApiResult<Json<ClearCacheResponse>> {
    state.cache.clear().await.map_err(|e| {
        tracing::error!(error = %e, "failed to clear cache");
        ApiError::Internal
    })?;
    tracing::info!("cache cleared");

    Ok(Json(ClearCacheResponse {
        message: "Cache cleared".to_string(),
    }))
}
