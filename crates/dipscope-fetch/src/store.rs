//! Persisting fetched pages

use crate::error::FetchError;
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives each fetched page
pub trait PageSink {
    /// Store page number `page` (1-based) of `endpoint`
    fn save_page(&mut self, endpoint: &str, page: usize, body: &Value) -> Result<(), FetchError>;
}

/// Writes pages to `<root>/<endpoint>/<endpoint>_<UTC stamp>_<page:04>.json`
#[derive(Debug, Clone)]
pub struct RawPageWriter {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl RawPageWriter {
    /// Writer rooted at the raw data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Target path for a page
    pub fn page_path(&self, endpoint: &str, page: usize, stamp: &str) -> PathBuf {
        self.root
            .join(endpoint)
            .join(format!("{}_{}_{:04}.json", endpoint, stamp, page))
    }

    fn write(path: &Path, body: &Value) -> Result<(), FetchError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FetchError::Storage(format!("{}: {}", parent.display(), e)))?;
        }
        let contents = serde_json::to_string_pretty(body)?;
        fs::write(path, contents)
            .map_err(|e| FetchError::Storage(format!("{}: {}", path.display(), e)))
    }
}

impl PageSink for RawPageWriter {
    fn save_page(&mut self, endpoint: &str, page: usize, body: &Value) -> Result<(), FetchError> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let path = self.page_path(endpoint, page, &stamp);
        Self::write(&path, body)?;
        self.written.push(path);
        Ok(())
    }
}
