//! dipscope Fetch
//!
//! Paginated client for the Bundestag DIP API. Each configured endpoint is
//! walked with cursor pagination and every page is written verbatim to the
//! raw data directory, where the ingest stage picks it up.
//!
//! # Features
//!
//! - Cursor pagination (`cursor=*` first, then the response's `cursor`)
//! - Date window filters (`f.datum.*` for Drucksachen, `f.aktualisiert.*` otherwise)
//! - Fixed pause between pages
//! - Sleep-and-retry on HTTP 429, backoff on HTTP 5xx
//!
//! # Examples
//!
//! ```no_run
//! use dipscope_fetch::{DipClient, FetchConfig, RawPageWriter};
//!
//! # async fn example() -> Result<(), dipscope_fetch::FetchError> {
//! let client = DipClient::from_env(FetchConfig::default())?;
//! let mut writer = RawPageWriter::new("data/raw");
//! let report = client.fetch_all(&mut writer).await;
//! println!("{} pages saved", report.total_pages());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
mod error;
pub mod store;

pub use client::{DipClient, EndpointReport, FetchReport};
pub use config::{DateRange, FetchConfig};
pub use error::FetchError;
pub use store::{PageSink, RawPageWriter};
