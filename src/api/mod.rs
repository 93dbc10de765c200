//! HTTP layer - routes, shared state, and response envelopes
//!
//! Adapts transport-level requests to ledger calls. Handlers translate the
//! ledger's not-found signals into 404 envelopes; boundary validation
//! failures (malformed JSON, invalid status values, unknown update fields)
//! surface as 400 before the ledger is touched.

/// Video analysis listing endpoint
pub mod analysis;
/// Fine endpoints - list, issue/cancel, partial update, delete
pub mod fines;
/// Video upload acknowledgement endpoint
pub mod upload;

use crate::core::ledger::FineLedger;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state available to all request handlers.
///
/// The ledger is constructed and seeded in `main` (or by a test) and
/// injected here; handlers never reach for a global.
#[derive(Clone)]
pub struct AppState {
    /// The fine ledger every fine route reads and mutates
    pub ledger: FineLedger,
}

impl AppState {
    /// Creates the shared handler state over the given ledger.
    #[must_use]
    pub const fn new(ledger: FineLedger) -> Self {
        Self { ledger }
    }
}

/// JSON body of every error response: `{"error": "…"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Operation-specific message, surfaced directly in the dashboard
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// Builds the `(status, {"error": …})` pair handlers return on failure.
pub(crate) fn json_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Assembles the application router over the given ledger.
///
/// CORS is permissive: the API is consumed by the browser dashboard and
/// binds to loopback by default.
pub fn router(ledger: FineLedger) -> Router {
    Router::new()
        .route("/api/fines", get(fines::list_fines))
        .route(
            "/api/fines/{video_id}/{vehicle_id}/issue",
            post(fines::issue_fine),
        )
        .route(
            "/api/fines/{video_id}/{vehicle_id}",
            put(fines::update_fine).delete(fines::delete_fine),
        )
        .route("/api/analysis", get(analysis::list_video_analyses))
        .route("/api/upload", post(upload::upload_video))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(ledger))
}
