//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::document::RawDocument;

/// Decides whether a cluster's terms occur in a text
///
/// Implemented here for substring search and by `dipscope-analyzer`
/// for word-boundary search.
pub trait TermMatcher {
    /// `lowercase_text` is already lowercased by the caller
    fn matches(&self, lowercase_text: &str) -> bool;
}

/// The raw documents of one pipeline run, split by stream
#[derive(Debug, Clone, Default)]
pub struct DocumentBatch {
    /// Drucksachen
    pub primary: Vec<RawDocument>,

    /// Vorgänge
    pub related: Vec<RawDocument>,
}

impl DocumentBatch {
    /// Total number of raw documents
    pub fn len(&self) -> usize {
        self.primary.len() + self.related.len()
    }

    /// Whether the batch holds no documents at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for loading raw documents
///
/// Implemented by the infrastructure layer (dipscope-ingest)
pub trait DocumentSource {
    /// Error type for load operations
    type Error;

    /// Load every available raw document
    fn load(&self) -> Result<DocumentBatch, Self::Error>;
}
