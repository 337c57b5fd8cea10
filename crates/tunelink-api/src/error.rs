//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use tunelink_models::ResolveError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Used when both tiers failed without any tool diagnostics.
const BOTH_METHODS_FAILED: &str = "Both methods failed";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid YouTube video ID")]
    InvalidVideoId,

    #[error("Failed to fetch related songs")]
    RelatedFailed { details: String },

    #[error("Failed to fetch audio URL")]
    AudioFailed,
}

impl ApiError {
    /// Map a terminal related-songs failure.
    pub fn related(err: &ResolveError) -> Self {
        match err {
            ResolveError::InvalidInput(_) => ApiError::InvalidVideoId,
            other => ApiError::RelatedFailed {
                details: other.details().unwrap_or(BOTH_METHODS_FAILED).to_string(),
            },
        }
    }

    /// Map an audio lookup failure.
    pub fn audio(err: &ResolveError) -> Self {
        match err {
            ResolveError::InvalidInput(_) => ApiError::InvalidVideoId,
            _ => ApiError::AudioFailed,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidVideoId => StatusCode::BAD_REQUEST,
            ApiError::RelatedFailed { .. } | ApiError::AudioFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::RelatedFailed { details } => ErrorResponse {
                error: "Failed to fetch related songs".to_string(),
                details: Some(details),
            },
            other => ErrorResponse {
                error: other.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
