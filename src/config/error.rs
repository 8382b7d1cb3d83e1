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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Poll interval must be between 1 and 3600 seconds")]
    InvalidPollInterval,

    #[error("max_options must be at least {min}, got {actual}")]
    MaxOptionsTooSmall { min: usize, actual: usize },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
