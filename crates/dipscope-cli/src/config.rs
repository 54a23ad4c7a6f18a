//! Settings file handling for the CLI.
//!
//! The settings file is TOML; every field has a default, so a partial file
//! (or none at all) works:
//!
//! ```toml
//! [storage]
//! raw_dir = "data/raw"
//! processed_dir = "data/processed"
//! results_dir = "data/results"
//! terms_file = "config/term_list.json"
//!
//! [api]
//! page_delay_ms = 1000
//!
//! [api.date_range]
//! from = "2021-01-01"
//!
//! [analysis]
//! match_mode = "word"
//!
//! [output]
//! format = "table"
//! color = true
//!
//! [logging]
//! file = "logs/dipscope.log"
//! ```

use crate::cli::PathArgs;
use crate::error::{CliError, Result};
use dipscope_analyzer::AnalyzerConfig;
use dipscope_fetch::FetchConfig;
use dipscope_ingest::COMBINED_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default settings file name.
pub const DEFAULT_CONFIG_FILE: &str = "dipscope.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data locations
    pub storage: StorageConfig,

    /// DIP API client
    pub api: FetchConfig,

    /// Classification
    pub analysis: AnalyzerConfig,

    /// Console output
    pub output: Settings,

    /// Log output
    pub logging: LoggingConfig,
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file written alongside stderr
    pub file: Option<PathBuf>,
}

/// Data locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Fetched API pages
    pub raw_dir: PathBuf,

    /// `combined_texts.json`
    pub processed_dir: PathBuf,

    /// CSV results
    pub results_dir: PathBuf,

    /// Term list
    pub terms_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("data/raw"),
            processed_dir: PathBuf::from("data/processed"),
            results_dir: PathBuf::from("data/results"),
            terms_file: PathBuf::from("config/term_list.json"),
        }
    }
}

impl StorageConfig {
    /// Path of the combined records file.
    pub fn combined_path(&self) -> PathBuf {
        self.processed_dir.join(COMBINED_FILE_NAME)
    }
}

/// Console output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (CSV-like lines)
    Quiet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read settings without logging; `None` when the file does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents).map(Some)
    }

    /// Settings from a [`Config::read`] result, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is logged
    /// as a warning. Neither stops the program.
    pub fn resolve(path: &Path, read: Result<Option<Self>>) -> Self {
        match read {
            Ok(Some(config)) => {
                debug!("Loaded settings from {}", path.display());
                config
            }
            Ok(None) => {
                debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        Self::resolve(path, Self::read(path))
    }

    /// Apply command-line path overrides.
    pub fn apply_paths(&mut self, paths: &PathArgs) {
        if let Some(dir) = &paths.raw_dir {
            self.storage.raw_dir = dir.clone();
        }
        if let Some(dir) = &paths.processed_dir {
            self.storage.processed_dir = dir.clone();
        }
        if let Some(dir) = &paths.results_dir {
            self.storage.results_dir = dir.clone();
        }
        if let Some(file) = &paths.terms {
            self.storage.terms_file = file.clone();
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.api
            .validate()
            .map_err(|e| CliError::Config(format!("[api] {}", e)))?;
        self.analysis
            .validate()
            .map_err(|e| CliError::Config(format!("[analysis] {}", e)))?;
        Ok(())
    }
}
