//! CLI error types

use gauss_core::types::GaussError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `gauss` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Kernel error: {0}")]
    Gauss(#[from] GaussError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Conformance check failed with {0} mismatch(es)")]
    CheckFailed(usize),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
