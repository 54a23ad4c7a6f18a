//! dipscope Domain Layer
//!
//! This crate contains the core logic and domain model for dipscope.
//! It has no external dependencies and defines the value types, the
//! merge/classify/aggregate rules, and the trait interfaces that the
//! infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **RawDocument**: an API document as a map of [`FieldValue`]s
//! - **Document**: one stream's processed form (primary = Drucksache, related = Vorgang)
//! - **CombinedRecord**: a primary document merged with its related process, or an orphan
//! - **TermSet**: the ecology and security keyword clusters
//! - **YearTable**: per-year category counts and the security/ecology ratio
//!
//! ## Pipeline
//!
//! ```text
//! RawDocument → Document → merge_records → CombinedRecord → Classifier → YearTable
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod classify;
pub mod document;
pub mod field;
pub mod merge;
pub mod terms;
pub mod traits;
pub mod year;

// Re-exports for convenience
pub use aggregate::{RatioRow, YearAggregate, YearTable};
pub use classify::{Category, Classifier};
pub use document::{Document, RawDocument, Source};
pub use field::FieldValue;
pub use merge::{merge_records, CombinedRecord, MergeStats};
pub use terms::{SubstringMatcher, TermCluster, TermSet};
pub use traits::{DocumentBatch, DocumentSource, TermMatcher};
pub use year::{Year, UNKNOWN_YEAR_LABEL};
