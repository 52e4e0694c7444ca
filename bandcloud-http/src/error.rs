//! Pipeline error types.

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// Main Band Error
// ============================================================================

/// Error type for every step of a request: build, send, and decode.
#[derive(Debug, Error)]
pub enum BandError {
    /// The resource path is not a well-formed URI component.
    #[error("Invalid resource path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Network-level failure while sending or reading the response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered outside the 2xx range.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status.
        status: StatusCode,
        /// Best-effort snippet of the response body.
        body: String,
    },

    /// The response body is not the expected JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// No valid credential could be obtained.
    #[error("Authorization error: {0}")]
    Auth(#[from] AuthError),

    /// The client configuration cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BandError {
    /// Returns the HTTP status if this is a status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true if the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl From<reqwest::Error> for BandError {
    fn from(err: reqwest::Error) -> Self {
        BandError::Transport(err.to_string())
    }
}

// ============================================================================
// Auth Error
// ============================================================================

/// Error type for credential acquisition and refresh.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credential expired and nothing can refresh it.
    #[error("Access token expired and no refresh token is available")]
    Expired,

    /// The token endpoint rejected the refresh.
    #[error("Token refresh rejected with HTTP {status}: {body}")]
    RefreshRejected {
        /// Response status.
        status: StatusCode,
        /// Token endpoint response body.
        body: String,
    },

    /// The token endpoint replied with something other than a token.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    /// The token cannot be carried in an HTTP header.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Network failure while talking to the token endpoint.
    #[error("Token request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http(err.to_string())
    }
}

/// Truncates a diagnostic body on a char boundary.
pub(crate) fn truncate(text: &mut String, max: usize) {
    if text.len() > max {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
}

// ============================================================================
// Tests
// ============================================================================
