use thiserror::Error;

/// Unified error type for startup and configuration failures.
///
/// Request-level conditions never reach this enum: the ledger signals
/// "not found" through `Option`/`bool` returns, and the HTTP layer maps
/// boundary rejections to 400 envelopes directly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
