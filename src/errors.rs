// ABOUTME: Unified error handling for the FoodLens client
// ABOUTME: Maps validation, transport, HTTP status, and storage failures to one taxonomy

//! # Client Error Types
//!
//! Every fallible client operation returns [`ClientResult`]. The variants
//! follow the failure classes a caller has to present differently:
//! local validation (no network call was made), transport failures,
//! non-success HTTP statuses, the forced-logout `401` signal, and local
//! storage failures. None of these are fatal; callers surface them and
//! leave the user where they are, except [`ClientError::Unauthorized`]
//! which requires navigating back to the unauthenticated entry point.

use thiserror::Error;

/// Unified error type for all client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before any network call was made
    #[error("validation failed: {0}")]
    Validation(String),

    /// Transport-level failure (connect, timeout, broken body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote returned a non-success status other than 401
    #[error("server returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message derived from the response body, or the status text
        message: String,
    },

    /// Remote returned 401; session state has been cleared and the caller
    /// must navigate to the unauthenticated entry point
    #[error("session rejected by server, login required")]
    Unauthorized,

    /// Local persistence (preferences file or sqlite store) failed
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// Configuration could not be loaded or validated
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Validation failure with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Non-success HTTP status with a body-derived message
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Storage failure with the given message
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// True when this error means the session was force-cleared
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(error: std::io::Error) -> Self {
        Self::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Storage(error.to_string())
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(error: anyhow::Error) -> Self {
        Self::Storage(error.to_string())
    }
}

/// Result type alias for convenience
pub type ClientResult<T> = Result<T, ClientError>;
