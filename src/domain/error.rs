//! Domain error types

use thiserror::Error;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Config file not found at: {0}")]
    NotFound(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
