//! Client error types.

use herald_core::{AuthError, CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Network failure reported by a [`Transport`](crate::client::Transport)
    /// that is not backed by reqwest, such as `RecordingTransport`.
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Failed to resolve content {value:?}: {reason}")]
    ContentResolution { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output query failed: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for ClientError {
    fn from(e: ValidationError) -> Self {
        ClientError::Core(CoreError::Validation(e))
    }
}

impl ClientError {
    /// Whether the error is a rejected parameter combination.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Core(CoreError::Validation(_)))
    }

    /// Whether the error comes from the network rather than the caller.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: ClientError = ValidationError::OrderByRequiresSingleEvents.into();
        assert!(err.is_validation());
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "if orderBy=startTime singleEvents must be true"
        );
    }

    #[test]
    fn test_auth_error_display() {
        let err: ClientError = AuthError::Rejected("invalid_grant".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Authentication failed: token refresh rejected: invalid_grant"
        );
    }

    #[test]
    fn test_connection_error_is_transport() {
        let err = ClientError::Connection("connection reset".to_string());
        assert!(err.is_transport());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Connection error: connection reset");
    }

    #[test]
    fn test_content_resolution_display() {
        let err = ClientError::ContentResolution {
            value: "/missing".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to resolve content \"/missing\": not found"
        );
    }
}
