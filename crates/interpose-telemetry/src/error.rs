//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A level, directive or format could not be understood.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A global subscriber could not be installed, usually because one
    /// already is.
    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
