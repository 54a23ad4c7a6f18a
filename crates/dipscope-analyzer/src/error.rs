//! Error types for analysis

use thiserror::Error;

/// Errors that can occur while preparing or running an analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Term file could not be read
    #[error("Cannot read term file {path}: {message}")]
    TermFile {
        /// File path
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// Term file is not valid JSON
    #[error("Term file is not valid JSON: {0}")]
    TermParse(String),

    /// Expected cluster keys are absent
    #[error("Missing term clusters {missing:?} (present: {present:?})")]
    MissingClusters {
        /// Keys that were looked for and not found
        missing: Vec<String>,
        /// Keys that the document does contain
        present: Vec<String>,
    },

    /// A term pattern could not be compiled
    #[error("Invalid term pattern: {0}")]
    Pattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::TermParse(e.to_string())
    }
}

impl From<regex::Error> for AnalyzerError {
    fn from(e: regex::Error) -> Self {
        AnalyzerError::Pattern(e.to_string())
    }
}
