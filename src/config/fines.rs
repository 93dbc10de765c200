//! Seed fine configuration loading from config.toml
//!
//! The records defined in config.toml seed the in-memory fine ledger at
//! startup, standing in for the assessments a real deployment would receive
//! from the violation pipeline.

use crate::errors::{Error, Result};
use crate::models::{FineRecord, IssuanceStatus};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of fine records to seed
    pub fines: Vec<FineConfig>,
}

/// Configuration for a single seed fine
#[derive(Debug, Deserialize, Clone)]
pub struct FineConfig {
    /// Identifier of the source video
    pub video_id: String,
    /// Identifier of the detected vehicle
    pub vehicle_id: String,
    /// Fine amount in whole currency units
    pub fine_amount: u64,
    /// Free-text justification for the fine
    pub reason: String,
    /// Initial lifecycle state, `PENDING` unless configured otherwise
    #[serde(default)]
    pub issuance_status: IssuanceStatus,
}

impl From<FineConfig> for FineRecord {
    fn from(config: FineConfig) -> Self {
        Self {
            video_id: config.video_id,
            vehicle_id: config.vehicle_id,
            fine_amount: config.fine_amount,
            reason: config.reason,
            issuance_status: config.issuance_status,
        }
    }
}

/// Loads fine configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads fine configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
