//! Error types for the fetch client

use thiserror::Error;

/// Errors that can occur while talking to the DIP API
#[derive(Error, Debug)]
pub enum FetchError {
    /// API key environment variable not set
    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),

    /// Network or transport error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Non-retryable HTTP status
    #[error("Unexpected status {status} for {endpoint}")]
    UnexpectedStatus {
        /// Endpoint name
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// Rate limit or server errors persisted past the retry budget
    #[error("Giving up after {attempts} attempts (last status {status})")]
    RetriesExhausted {
        /// Attempts made
        attempts: u32,
        /// Last HTTP status code
        status: u16,
    },

    /// Body was not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Writing a page failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::InvalidResponse(e.to_string())
        } else {
            FetchError::Communication(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::InvalidResponse(format!("JSON error: {}", e))
    }
}
