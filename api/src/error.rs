//! Error types for API operations.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No API key configured.
    #[error("api key not configured")]
    MissingApiKey,

    /// The API returned a non-success status with a structured error body.
    #[error("api error ({status}) {kind}: {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
        param: Option<String>,
        code: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status code for API-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable error kind for API-level failures.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ApiError::Api { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Error envelope returned by the API on non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
