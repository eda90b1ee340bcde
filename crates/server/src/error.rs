//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tokstats_scraper::ScrapeError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error kind for programmatic handling.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code, mirrored into the body.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// API error type.
///
/// Messages are deliberately generic: callers get the shared error shape
/// and nothing about scrape internals leaks out.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Account does not exist")]
    NotFound,

    #[error("Verification page detected. Please try again later.")]
    Verification,

    #[error("An internal error occurred")]
    Internal,
}

impl ApiError {
    /// Get the error kind for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::Verification => "Verification Error",
            Self::Internal => "Internal Error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Verification => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(e: ScrapeError) -> Self {
        match e {
            ScrapeError::VerificationBlocked => Self::Verification,
            ScrapeError::Core(_) => Self::NotFound,
            other => {
                tracing::error!(error = %other, "scrape pipeline failure");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
