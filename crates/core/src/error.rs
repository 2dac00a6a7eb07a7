use thiserror::Error;

/// A caller-supplied combination of parameters that breaks a vendor rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("slack message is empty")]
    EmptyMessage,
    #[error("if orderBy=startTime singleEvents must be true")]
    OrderByRequiresSingleEvents,
}

/// Failures of the OAuth refresh-token exchange.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(String),
    #[error("malformed token response: {0}")]
    Malformed(String),
    #[error("token refresh rejected: {0}")]
    Rejected(String),
}

/// Errors raised while building a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::InvalidUrl(e.to_string())
    }
}

/// Result type for request building.
pub type Result<T> = std::result::Result<T, CoreError>;
