//! dipscope Analyzer
//!
//! Classifies combined records against the ecology and security term
//! clusters and aggregates the results per year.
//!
//! # Overview
//!
//! - **Term loading**: keywords and aliases from a JSON term file, with a
//!   built-in fallback when the file is missing or incomplete
//! - **Matching**: substring (default) or whole-word search
//! - **Aggregation**: one bucket per year, `unknown` last, plus the
//!   security/ecology ratio
//!
//! | Ecology hit | Security hit | Category |
//! |-------------|--------------|----------|
//! | yes | yes | `mixed` |
//! | yes | no | `eco_only` |
//! | no | yes | `sec_only` |
//! | no | no | `none` |
//!
//! # Usage
//!
//! ```no_run
//! use dipscope_analyzer::{load_terms, Analyzer, AnalyzerConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AnalyzerConfig::default();
//! let loaded = load_terms(Path::new("config/term_list.json"), &config);
//! let analyzer = Analyzer::new(&loaded.terms, config)?;
//!
//! let report = analyzer.analyze(&[]);
//! for row in &report.ratios {
//!     println!("{}: {:?}", row.year, row.ratio);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [analysis]
//! match_mode = "substring"   # or "word"
//! scope = "combined"         # or "title"
//! eco_cluster_key = "oekologie_nachhaltigkeit"
//! sec_cluster_key = "sicherheit_resilienz"
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod matcher;
mod terms;

pub use analyzer::{AnalysisReport, Analyzer};
pub use config::{AnalyzerConfig, MatchMode, TextScope};
pub use error::AnalyzerError;
pub use matcher::{ClusterMatcher, WordBoundaryMatcher};
pub use terms::{load_terms, parse_terms, read_terms, LoadedTerms, TermOrigin};
