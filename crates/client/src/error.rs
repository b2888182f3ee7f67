//! Error types for the Timeplus client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Timeplus client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client was built without usable credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Network-level failure (DNS, connect, TLS, reset).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the response body verbatim.
    #[error("{method} {url} failed: statusCode={status} body='{message}'")]
    ApiError {
        status: u16,
        method: String,
        url: String,
        message: String,
    },

    /// Response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request body could not be encoded.
    #[error("Unable to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server reported the resource as gone.
    ///
    /// On read this means the resource was removed outside the provider.
    pub fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404 | 410))
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || matches!(self.status(), Some(401 | 403))
    }

    /// Check if this error is a transport failure that never reached the server.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_request(),
            Self::Timeout(_) => true,
            _ => false,
        }
    }
}
