//! Fine ledger - the in-memory collection of fine records and its mutation
//! operations.
//!
//! The ledger holds fines in insertion order and keys every mutation off
//! exact equality of the (`video_id`, `vehicle_id`) pair. "Not found" is an
//! `Option`/`bool` signal rather than an error; callers decide whether
//! absence is worth a 404. Records live only for the lifetime of the
//! process.

use crate::config::FineConfig;
use crate::models::{FineRecord, FineUpdate, IssuanceStatus};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Shared handle to the in-memory fine ledger.
///
/// Cloning is cheap and every clone operates on the same collection. The
/// ledger is constructed explicitly and injected into request handlers,
/// never held as a module-level global. Each operation acquires the lock
/// once for its whole scan-then-mutate sequence, so operations are atomic
/// with respect to each other.
#[derive(Clone, Debug, Default)]
pub struct FineLedger {
    fines: Arc<RwLock<Vec<FineRecord>>>,
}

impl FineLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the configured seed records.
    ///
    /// An entry whose (`video_id`, `vehicle_id`) pair is already present is
    /// skipped with a warning, upholding the at-most-one-fine-per-pair
    /// assumption the rest of the ledger relies on.
    pub async fn seed(&self, seeds: &[FineConfig]) {
        let mut fines = self.fines.write().await;
        for seed in seeds {
            if position(&fines, &seed.video_id, &seed.vehicle_id).is_some() {
                warn!(
                    "Fine for ({}, {}) already present. Skipping seed entry.",
                    seed.video_id, seed.vehicle_id
                );
                continue;
            }
            debug!(
                "Seeding fine for ({}, {}): {} ({})",
                seed.video_id, seed.vehicle_id, seed.fine_amount, seed.reason
            );
            fines.push(FineRecord::from(seed.clone()));
        }
        info!("Fine ledger seeded with {} records.", fines.len());
    }

    /// Returns the full collection in insertion order.
    ///
    /// No pagination, filtering, or sorting; the dashboard does those
    /// client-side.
    pub async fn list(&self) -> Vec<FineRecord> {
        self.fines.read().await.clone()
    }

    /// Replaces the issuance status of the matching record.
    ///
    /// Returns the updated record, or `None` when no record matches.
    /// Idempotent: setting an already-held status is a no-op that still
    /// returns the record.
    pub async fn set_status(
        &self,
        video_id: &str,
        vehicle_id: &str,
        status: IssuanceStatus,
    ) -> Option<FineRecord> {
        let mut fines = self.fines.write().await;
        let index = position(&fines, video_id, vehicle_id)?;
        fines[index].issuance_status = status;
        Some(fines[index].clone())
    }

    /// Merges the present fields of `updates` into the matching record.
    ///
    /// Returns the updated record, or `None` when no record matches. The
    /// key fields are not part of [`FineUpdate`], so a record's identity
    /// never changes through this path.
    pub async fn update_fields(
        &self,
        video_id: &str,
        vehicle_id: &str,
        updates: &FineUpdate,
    ) -> Option<FineRecord> {
        let mut fines = self.fines.write().await;
        let index = position(&fines, video_id, vehicle_id)?;
        let fine = &mut fines[index];
        if let Some(fine_amount) = updates.fine_amount {
            fine.fine_amount = fine_amount;
        }
        if let Some(reason) = &updates.reason {
            fine.reason = reason.clone();
        }
        if let Some(issuance_status) = updates.issuance_status {
            fine.issuance_status = issuance_status;
        }
        Some(fine.clone())
    }

    /// Removes the first matching record.
    ///
    /// Returns whether anything was removed.
    pub async fn remove(&self, video_id: &str, vehicle_id: &str) -> bool {
        let mut fines = self.fines.write().await;
        let Some(index) = position(&fines, video_id, vehicle_id) else {
            return false;
        };
        fines.remove(index);
        true
    }
}

/// Linear scan for the unique record matching both identifier fields.
fn position(fines: &[FineRecord], video_id: &str, vehicle_id: &str) -> Option<usize> {
    fines
        .iter()
        .position(|fine| fine.video_id == video_id && fine.vehicle_id == vehicle_id)
}
