//! Related songs handler.

use axum::extract::{Path, State};
use axum::Json;

use tunelink_models::RelatedResult;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `GET /related/:video_id`
pub async fn get_related(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> ApiResult<Json<RelatedResult>> {
    state
        .related
        .resolve(&video_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::related(&e))
}
