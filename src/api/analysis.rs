//! Video analysis listing endpoint.

use crate::core::analysis::sample_video_analyses;
use crate::models::VideoAnalysis;
use axum::Json;

/// `GET /api/analysis` - the current (mocked) analysis rows.
pub async fn list_video_analyses() -> Json<Vec<VideoAnalysis>> {
    Json(sample_video_analyses())
}
