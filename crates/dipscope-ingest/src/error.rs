//! Error types for ingestion

use thiserror::Error;

/// Errors that can occur while reading or writing pipeline files
#[derive(Error, Debug)]
pub enum IngestError {
    /// File system error
    #[error("I/O error on {path}: {message}")]
    Io {
        /// Path involved
        path: String,
        /// Underlying error
        message: String,
    },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A page file without a `documents` array
    #[error("Malformed page: {0}")]
    MalformedPage(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IngestError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        IngestError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            IngestError::JsonParse(e.to_string())
        } else {
            IngestError::Serialization(e.to_string())
        }
    }
}
