//! Error types for Waymark operations.
//!
//! This module defines [`WaymarkError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Classification and label sanitizing never fail; they have no error path
//! - Use `WaymarkError` for config and I/O problems that need distinct handling
//! - Use `anyhow::Error` (via `WaymarkError::Other`) for unexpected errors
//! - Messages never echo label markup that the sanitizer would strip

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Waymark operations.
#[derive(Debug, Error)]
pub enum WaymarkError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Requested workflow is not defined.
    #[error("Unknown workflow: {name}")]
    UnknownWorkflow { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Waymark operations.
pub type Result<T> = std::result::Result<T, WaymarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = WaymarkError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = WaymarkError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = WaymarkError::ConfigValidationError {
            message: "workflow name is empty".into(),
        };
        assert!(err.to_string().contains("workflow name is empty"));
    }

    #[test]
    fn unknown_workflow_displays_name() {
        let err = WaymarkError::UnknownWorkflow {
            name: "release".into(),
        };
        assert_eq!(err.to_string(), "Unknown workflow: release");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WaymarkError = io_err.into();
        assert!(matches!(err, WaymarkError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: WaymarkError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
