//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Summary log path must not be empty")]
    InvalidSummaryPath,

    #[error("Digest turn count must be between {min} and {max}, got {value}")]
    InvalidDigestTurns { value: usize, min: usize, max: usize },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
