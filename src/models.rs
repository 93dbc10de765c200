//! Plain serde domain types shared across layers.
//!
//! Wire names are fixed by the dashboard contract: `issuanceStatus` is
//! camelCase, everything else snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Two-valued state tracking whether a fine has been formally issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuanceStatus {
    /// Awaiting formal issuance
    #[default]
    Pending,
    /// Formally issued
    Issued,
}

/// A single violation's monetary penalty and its issuance lifecycle state.
///
/// Identity is the (`video_id`, `vehicle_id`) pair; lookup, update, and
/// delete all key off exact equality of both fields. The model assumes at
/// most one active fine per pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineRecord {
    /// Identifier of the source video (opaque)
    pub video_id: String,
    /// Identifier of the detected vehicle (opaque)
    pub vehicle_id: String,
    /// Fine amount in whole currency units
    pub fine_amount: u64,
    /// Free-text justification for the fine
    pub reason: String,
    /// Current lifecycle state
    #[serde(rename = "issuanceStatus")]
    pub issuance_status: IssuanceStatus,
}

/// Partial update payload for a fine.
///
/// The key fields are deliberately absent from the accepted set: merging a
/// new `video_id`/`vehicle_id` would silently change a record's identity,
/// so payloads naming them (or any unknown field) are rejected at the
/// boundary.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FineUpdate {
    /// New fine amount, if changing
    pub fine_amount: Option<u64>,
    /// New justification, if changing
    pub reason: Option<String>,
    /// New lifecycle state, if changing
    #[serde(rename = "issuanceStatus")]
    pub issuance_status: Option<IssuanceStatus>,
}

/// One detection row from the video analysis pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub detection_id: String,
    pub video_id: String,
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub is_electric_only: bool,
    pub timestamp: DateTime<Utc>,
    pub uploaded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_status: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_issuance_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&IssuanceStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&IssuanceStatus::Issued).unwrap(),
            "\"ISSUED\""
        );
    }

    #[test]
    fn test_issuance_status_rejects_unknown_values() {
        let result: Result<IssuanceStatus, _> = serde_json::from_str("\"REVOKED\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_fine_record_wire_format() {
        let fine = FineRecord {
            video_id: "1".to_string(),
            vehicle_id: "veh1".to_string(),
            fine_amount: 50000,
            reason: "불법 주차".to_string(),
            issuance_status: IssuanceStatus::Pending,
        };

        let json = serde_json::to_value(&fine).unwrap();
        assert_eq!(json["video_id"], "1");
        assert_eq!(json["fine_amount"], 50000);
        // camelCase per the dashboard contract, unlike the other fields
        assert_eq!(json["issuanceStatus"], "PENDING");
        assert!(json.get("issuance_status").is_none());
    }

    #[test]
    fn test_fine_update_rejects_key_fields() {
        let result: Result<FineUpdate, _> =
            serde_json::from_str(r#"{"video_id": "3", "fine_amount": 1000}"#);
        assert!(result.is_err());

        let result: Result<FineUpdate, _> = serde_json::from_str(r#"{"vehicle_id": "veh9"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fine_update_accepts_partial_payloads() {
        let update: FineUpdate = serde_json::from_str(r#"{"fine_amount": 75000}"#).unwrap();
        assert_eq!(update.fine_amount, Some(75000));
        assert!(update.reason.is_none());
        assert!(update.issuance_status.is_none());

        let update: FineUpdate = serde_json::from_str(r#"{"issuanceStatus": "ISSUED"}"#).unwrap();
        assert_eq!(update.issuance_status, Some(IssuanceStatus::Issued));
    }
}
