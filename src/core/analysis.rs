//! Video analysis listing.
//!
//! The analysis pipeline is mocked: the dashboard only needs the row shape,
//! so this returns fixed sample detections timestamped at call time. A real
//! deployment would query the pipeline's tables instead.

use crate::models::VideoAnalysis;
use chrono::Utc;

/// Returns the current (mocked) analysis rows.
#[must_use]
pub fn sample_video_analyses() -> Vec<VideoAnalysis> {
    let now = Utc::now();
    vec![
        VideoAnalysis {
            detection_id: "det1".to_string(),
            video_id: "1".to_string(),
            vehicle_id: "veh1".to_string(),
            vehicle_type: "승용차".to_string(),
            is_electric_only: false,
            timestamp: now,
            uploaded_at: now,
            created_at: now,
            status: "COMPLETED".to_string(),
            lot_id: Some("lot1".to_string()),
            plate_number: Some("12가3456".to_string()),
            parking_status: Some("PARKED".to_string()),
        },
        VideoAnalysis {
            detection_id: "det2".to_string(),
            video_id: "2".to_string(),
            vehicle_id: "veh2".to_string(),
            vehicle_type: "화물차".to_string(),
            is_electric_only: true,
            timestamp: now,
            uploaded_at: now,
            created_at: now,
            status: "PENDING".to_string(),
            lot_id: Some("lot2".to_string()),
            plate_number: Some("34나5678".to_string()),
            parking_status: Some("MOVING".to_string()),
        },
    ]
}
