//! dipscope Ingest
//!
//! Reads the raw API pages deposited by the fetch stage and turns them into
//! combined records.
//!
//! # Architecture
//!
//! ```text
//! data/raw/**/*.json → RawStore → DocumentBatch → combine_batch → CombinedRecord
//!                                                                    ↓
//!                                              data/processed/combined_texts.json
//! ```
//!
//! Malformed page files are skipped with a warning, dates that cannot be
//! parsed resolve to the `unknown` year, and a missing raw directory is an
//! empty batch rather than an error.
//!
//! # Example Usage
//!
//! ```no_run
//! use dipscope_ingest::{combine_batch, RawStore};
//!
//! let report = RawStore::new("data/raw").load_report();
//! let (records, stats) = combine_batch(&report.batch);
//! println!("{} records, {} merged", records.len(), stats.merged);
//! ```

#![warn(missing_docs)]

mod combined;
mod convert;
mod date;
mod error;
mod process;
mod raw;

pub use combined::{read_combined, write_combined, CombinedEntry, COMBINED_FILE_NAME};
pub use convert::{page_documents, parse_page, to_field_value, to_raw_document};
pub use date::resolve_year;
pub use error::IngestError;
pub use process::{combine_batch, primary_document, related_document};
pub use raw::{stream_of, LoadReport, RawStore};
