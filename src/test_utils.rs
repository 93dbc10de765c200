//! Shared test utilities for `ZoneFine`.
//!
//! This module provides common helper functions for setting up seeded
//! ledgers, building the application router, and exercising it with
//! in-process requests.

use crate::api;
use crate::config::FineConfig;
use crate::core::ledger::FineLedger;
use crate::models::IssuanceStatus;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;

/// The seed configuration every test starts from: the two sample violations
/// the shipped config.toml carries.
#[must_use]
pub fn sample_fine_configs() -> Vec<FineConfig> {
    vec![
        FineConfig {
            video_id: "1".to_string(),
            vehicle_id: "veh1".to_string(),
            fine_amount: 50000,
            reason: "불법 주차".to_string(),
            issuance_status: IssuanceStatus::Pending,
        },
        FineConfig {
            video_id: "2".to_string(),
            vehicle_id: "veh2".to_string(),
            fine_amount: 100_000,
            reason: "과속".to_string(),
            issuance_status: IssuanceStatus::Pending,
        },
    ]
}

/// Creates a ledger seeded with the sample fines.
pub async fn seeded_ledger() -> FineLedger {
    let ledger = FineLedger::new();
    ledger.seed(&sample_fine_configs()).await;
    ledger
}

/// Builds the full application router over a freshly seeded ledger.
pub async fn test_app() -> Router {
    api::router(seeded_ledger().await)
}

/// Builds a JSON request for the given method and URI.
///
/// # Panics
/// Panics if the request cannot be built (malformed URI in the test).
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collects a response body and parses it as JSON.
///
/// # Panics
/// Panics if the body cannot be collected or is not valid JSON.
#[allow(clippy::unwrap_used)]
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
