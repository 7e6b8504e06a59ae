//! Error handling module
//!
//! This module defines the error types and result type aliases used in the application.

use std::io;
use thiserror::Error;

/// Keypool Admin error type
#[derive(Error, Debug)]
pub enum AdminError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The service answered with a non-200 status; carries status and raw body
    #[error("HTTP error {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Transport-level failure (timeout, connection error)
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body was not a valid envelope
    #[error("Response decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operator input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `AdminError`.
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        // Test IO error conversion
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let admin_err: AdminError = io_err.into();

        match admin_err {
            AdminError::Io(_) => {}
            _ => panic!("Should convert to IO error"),
        }
    }

    #[test]
    fn test_error_display() {
        // Test error display
        let err = AdminError::Config("Invalid configuration".to_string());
        let err_str = format!("{}", err);
        assert!(err_str.contains("Invalid configuration"));

        let err = AdminError::Http {
            status: 403,
            body: "forbidden".to_string(),
        };
        let err_str = format!("{}", err);
        assert!(err_str.contains("403"));
        assert!(err_str.contains("forbidden"));
    }
}
