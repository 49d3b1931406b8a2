//! # App Error Types
//!
//! Everything that can go wrong between the command line and the domain.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       App Error Sources                                 │
//! │                                                                         │
//! │  Command line   ──► InvalidArgument                                    │
//! │  bistro.toml    ──► ConfigNotFound, ConfigRead, ConfigParse            │
//! │  Validation     ──► Validation (from bistro-core)                      │
//! │  JSON output    ──► Json                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use bistro_core::ValidationError;
use thiserror::Error;

/// Result type alias for app operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A config path was given explicitly but does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::ConfigNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "Config file not found: /tmp/missing.toml");

        let err: AppError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid configuration: name is required");
    }
}
