//! Error handling for mutuals-web
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the mutuals-web application
#[derive(Error, Debug)]
pub enum MutualsError {
    #[error("Backend API error: {0}")]
    Backend(#[from] BackendError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Mutuals backend API specific errors
///
/// Not-found is a separate variant from the transport failures so the
/// dashboard can render "user not found" and "backend unavailable" as
/// different views.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("Backend service unavailable")]
    ServiceUnavailable,

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl BackendError {
    /// Whether this error means the requested resource does not exist,
    /// as opposed to the backend being unreachable or misbehaving.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound(_))
    }
}

/// Result type alias for mutuals-web operations
pub type Result<T> = std::result::Result<T, MutualsError>;

/// Result type alias for backend API operations
pub type BackendResult<T> = std::result::Result<T, BackendError>;

impl MutualsError {
    /// Check if the error is recoverable by retrying the request
    pub fn is_recoverable(&self) -> bool {
        match self {
            MutualsError::Backend(e) => !e.is_not_found(),
            MutualsError::Config(_) => false,
            MutualsError::Http(_) => true,
            MutualsError::Serialization(_) => false,
            MutualsError::Io(_) => true,
            MutualsError::UrlParse(_) => false,
            MutualsError::InvalidInput(_) => false,
        }
    }
}
