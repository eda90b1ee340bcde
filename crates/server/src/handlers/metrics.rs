//! Creator metrics handlers.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, HeaderValue};
use axum::response::{IntoResponse, Response};
use tokstats_core::{UserMetrics, VideoMetrics};

/// How long edge caches may reuse a metrics response.
const METRICS_CACHE_CONTROL: &str = "s-maxage=30";

/// GET /api/metrics/tiktok/users/{id}
///
/// The cache-backed path: per-video engagement comes exclusively from
/// cached stats, so this never blocks on video page fetches. The response
/// is edge-cacheable briefly to absorb bursts against one creator.
pub async fn get_user_metrics(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Response> {
    let metrics: UserMetrics = state
        .scraper
        .user_metrics(&identifier)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut response = Json(metrics).into_response();
    response.headers_mut().insert(
        CACHE_CONTROL,
        HeaderValue::from_static(METRICS_CACHE_CONTROL),
    );
    Ok(response)
}

/// GET /api/metrics/tiktok/users-video-data/{id}
///
/// The complete path: fetches every one of the creator's newest video
/// pages live, so the follow-up cache-backed request has warm per-video
/// stats. Slow by design.
pub async fn get_user_video_data(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Json<VideoMetrics>> {
    let username = tokstats_scraper::canonical_username(&identifier)
        .map_err(|_| ApiError::NotFound)?;

    let stats = state
        .scraper
        .complete_video_metrics(&username)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stats))
}
