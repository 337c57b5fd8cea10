//! Audio stream handler.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    /// Direct URL of the best audio-only stream
    pub audio_format_high: String,
}

/// `GET /song/:video_id`
pub async fn get_song(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> ApiResult<Json<SongResponse>> {
    match state.audio.resolve(&video_id).await {
        Ok(url) => Ok(Json(SongResponse {
            audio_format_high: url,
        })),
        Err(e) => {
            error!(
                video_id = %video_id,
                error = %e,
                details = e.details().unwrap_or_default(),
                "Audio URL lookup failed"
            );
            Err(ApiError::audio(&e))
        }
    }
}
