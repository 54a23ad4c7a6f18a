//! Raw page files on disk
//!
//! The fetch stage deposits one JSON file per API page under the raw
//! directory. This module finds them, assigns each to its stream, and
//! parses them, skipping anything unreadable.

use crate::convert::parse_page;
use crate::error::IngestError;
use dipscope_domain::{DocumentBatch, DocumentSource, Source};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Stream a page file belongs to, from its file name or parent directory
pub fn stream_of(path: &Path) -> Option<Source> {
    let lower = |p: Option<&std::ffi::OsStr>| {
        p.map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    };
    let file = lower(path.file_name());
    let parent = lower(path.parent().and_then(Path::file_name));

    for name in [file, parent] {
        if name.contains("drucksache") {
            return Some(Source::Primary);
        }
        if name.contains("vorgang") {
            return Some(Source::Secondary);
        }
    }
    None
}

/// Outcome of a load, with the files that had to be skipped
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Documents by stream
    pub batch: DocumentBatch,

    /// Page files parsed successfully
    pub files_read: usize,

    /// Page files skipped, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Directory of raw page files
#[derive(Debug, Clone)]
pub struct RawStore {
    root: PathBuf,
}

impl RawStore {
    /// Store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All `.json` files below the root, in sorted path order
    ///
    /// A missing root yields no files.
    pub fn page_files(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            warn!("Raw data directory {} not found, no documents to load", self.root.display());
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        files.sort();
        files
    }

    /// Load every page, skipping malformed files
    pub fn load_report(&self) -> LoadReport {
        let mut report = LoadReport::default();

        for path in self.page_files() {
            let Some(stream) = stream_of(&path) else {
                debug!("Ignoring {}: neither drucksache nor vorgang", path.display());
                continue;
            };

            let docs = fs::read_to_string(&path)
                .map_err(|e| IngestError::io(&path, e))
                .and_then(|contents| parse_page(&contents));

            match docs {
                Ok(docs) => {
                    debug!("{}: {} documents", path.display(), docs.len());
                    report.files_read += 1;
                    match stream {
                        Source::Primary => report.batch.primary.extend(docs),
                        Source::Secondary => report.batch.related.extend(docs),
                    }
                }
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    report.skipped.push((path, e.to_string()));
                }
            }
        }

        info!(
            "Loaded {} primary and {} related documents from {} files ({} skipped)",
            report.batch.primary.len(),
            report.batch.related.len(),
            report.files_read,
            report.skipped.len()
        );

        report
    }
}

impl DocumentSource for RawStore {
    type Error = IngestError;

    fn load(&self) -> Result<DocumentBatch, Self::Error> {
        Ok(self.load_report().batch)
    }
}
