//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}
