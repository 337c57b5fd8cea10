//! Health check handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Banner served at the root path.
pub const BANNER: &str = "🎵 YouTube Audio Stream & Download API";

/// Root liveness banner.
pub async fn root() -> &'static str {
    BANNER
}

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub extractor: CheckStatus,
    pub catalog: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckStatus {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: Some(msg.into()),
        }
    }
}

/// Readiness check endpoint (readiness probe).
///
/// The extractor backs both the fallback tier and audio lookup, so the
/// service is not ready without it. A missing catalog key only degrades
/// related-song lookups to the fallback tier.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let extractor_check = if state.extractor.is_available() {
        CheckStatus::ok()
    } else {
        CheckStatus::error(format!("{} not found", state.config.extractor.program))
    };

    let catalog_check = if state.catalog_configured {
        CheckStatus::ok()
    } else {
        CheckStatus::error("YOUTUBE_API_KEY not configured")
    };

    let extractor_ok = extractor_check.status == "ok";
    let status = match (extractor_ok, catalog_check.status == "ok") {
        (true, true) => "ready",
        (true, false) => "degraded",
        (false, _) => "unavailable",
    };

    let response = ReadinessResponse {
        status: status.to_string(),
        checks: ReadinessChecks {
            extractor: extractor_check,
            catalog: catalog_check,
        },
    };

    if extractor_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
