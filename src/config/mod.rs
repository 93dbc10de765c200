/// Seed fine configuration loading from config.toml
pub mod fines;

pub use fines::{Config, FineConfig, load_config, load_default_config};

use crate::errors::Result;

/// Fully resolved application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: String,
    /// Seed fines for the ledger
    pub fines: Vec<FineConfig>,
}

/// Returns the bind address from `BIND_ADDR` or the default loopback port.
///
/// The dashboard dev server proxies to this address.
#[must_use]
pub fn get_bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

/// Loads the main application configuration.
///
/// Seed fines come from the TOML file named by `FINES_CONFIG` (default
/// `./config.toml`); the bind address from `BIND_ADDR`.
///
/// # Errors
/// Returns an error if the seed file cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config_path =
        std::env::var("FINES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = fines::load_config(&config_path)?;

    Ok(AppConfig {
        bind_addr: get_bind_addr(),
        fines: config.fines,
    })
}
