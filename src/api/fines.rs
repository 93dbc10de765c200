//! Fine endpoints - list, issue/cancel, partial update, delete.
//!
//! Each mutation route takes the two path identifiers, dispatches to the
//! ledger, and maps an absent record to 404 with the dashboard's message.

use super::{ApiError, AppState, json_error};
use crate::models::{FineRecord, FineUpdate, IssuanceStatus};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Shown whenever no fine matches the requested identifier pair.
const FINE_NOT_FOUND: &str = "해당하는 벌금을 찾을 수 없습니다.";
/// Shown when an issue/cancel request carries an unusable body.
const ISSUE_FAILED: &str = "벌금 상태 변경 중 오류가 발생했습니다.";
/// Shown when an update request carries an unusable body.
const UPDATE_FAILED: &str = "벌금 정보 수정 중 오류가 발생했습니다.";

/// Body of an issue/cancel request.
#[derive(Debug, Deserialize)]
pub struct IssueRequest {
    /// Target lifecycle state
    pub status: IssuanceStatus,
}

/// Success envelope for an issue/cancel request.
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "updatedFine")]
    pub updated_fine: FineRecord,
}

/// Success envelope for a partial update.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(rename = "updatedFine")]
    pub updated_fine: FineRecord,
}

/// Success envelope for a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// `GET /api/fines` - the full ledger contents, insertion order.
pub async fn list_fines(State(state): State<AppState>) -> Json<Vec<FineRecord>> {
    Json(state.ledger.list().await)
}

/// `POST /api/fines/{video_id}/{vehicle_id}/issue` - issue or cancel a fine.
///
/// The body carries the target status; values outside the two-valued enum
/// are rejected before the ledger is touched.
pub async fn issue_fine(
    State(state): State<AppState>,
    Path((video_id, vehicle_id)): Path<(String, String)>,
    request: Result<Json<IssueRequest>, JsonRejection>,
) -> Result<Json<IssueResponse>, ApiError> {
    let Json(request) = request.map_err(|_| json_error(StatusCode::BAD_REQUEST, ISSUE_FAILED))?;

    let Some(updated_fine) = state
        .ledger
        .set_status(&video_id, &vehicle_id, request.status)
        .await
    else {
        return Err(json_error(StatusCode::NOT_FOUND, FINE_NOT_FOUND));
    };

    info!(
        "Fine for ({video_id}, {vehicle_id}) set to {:?}",
        request.status
    );
    let message = match request.status {
        IssuanceStatus::Issued => "벌금이 성공적으로 발급되었습니다.",
        IssuanceStatus::Pending => "벌금이 발급 대기 상태로 변경되었습니다.",
    };

    Ok(Json(IssueResponse {
        success: true,
        message: message.to_string(),
        updated_fine,
    }))
}

/// `PUT /api/fines/{video_id}/{vehicle_id}` - merge a partial update.
///
/// Payloads naming the key fields (or any unknown field) are rejected with
/// 400; a record's identity cannot change through this route.
pub async fn update_fine(
    State(state): State<AppState>,
    Path((video_id, vehicle_id)): Path<(String, String)>,
    request: Result<Json<FineUpdate>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(updates) = request.map_err(|_| json_error(StatusCode::BAD_REQUEST, UPDATE_FAILED))?;

    match state
        .ledger
        .update_fields(&video_id, &vehicle_id, &updates)
        .await
    {
        Some(updated_fine) => Ok(Json(UpdateResponse {
            success: true,
            updated_fine,
        })),
        None => Err(json_error(StatusCode::NOT_FOUND, FINE_NOT_FOUND)),
    }
}

/// `DELETE /api/fines/{video_id}/{vehicle_id}` - remove a fine.
pub async fn delete_fine(
    State(state): State<AppState>,
    Path((video_id, vehicle_id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.ledger.remove(&video_id, &vehicle_id).await {
        info!("Fine for ({video_id}, {vehicle_id}) deleted");
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(json_error(StatusCode::NOT_FOUND, FINE_NOT_FOUND))
    }
}
