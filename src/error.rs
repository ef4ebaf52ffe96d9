// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types shared by every store.

use reqwest::StatusCode;

/// Error returned by any call against the training backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered 401. The session has already been torn down
    /// by the time the caller sees this.
    #[error("Authentication required")]
    Unauthorized,

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Too many redirects while navigating to {0}")]
    RedirectLoop(String),
}

impl ClientError {
    /// True for the 401 outcome that forces a logout.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// HTTP status carried by the error, if the backend produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<crate::token_cache::CacheError> for ClientError {
    fn from(err: crate::token_cache::CacheError) -> Self {
        ClientError::Storage(err.to_string())
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, ClientError>;
