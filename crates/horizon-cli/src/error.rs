//! CLI error types

use horizon_core::HorizonError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or merging configuration sources failed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Rejected by the projection model
    #[error("Model error: {0}")]
    Model(#[from] HorizonError),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
