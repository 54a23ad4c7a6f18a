//! Term Loader
//!
//! Reads the two keyword clusters from a JSON term file:
//!
//! ```json
//! { "categories": {
//!     "oekologie_nachhaltigkeit": { "keywords": ["klimaschutz"], "aliases": ["klimapolitik"] },
//!     "sicherheit_resilienz":     { "keywords": ["sicherheit"] } } }
//! ```
//!
//! Loading never fails: any problem with the file is logged and the
//! built-in fallback terms are used instead.

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use dipscope_domain::{TermCluster, TermSet};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Where the loaded terms came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOrigin {
    /// The term file
    File,

    /// Built-in terms, with the reason the file was not used
    Fallback(String),
}

impl TermOrigin {
    /// Whether the built-in terms are in use
    pub fn is_fallback(&self) -> bool {
        matches!(self, TermOrigin::Fallback(_))
    }
}

/// Result of [`load_terms`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTerms {
    /// Both clusters
    pub terms: TermSet,

    /// Where they came from
    pub origin: TermOrigin,
}

/// Load the term clusters, falling back to the built-in set on any problem
pub fn load_terms(path: &Path, config: &AnalyzerConfig) -> LoadedTerms {
    let loaded = match read_terms(path, config) {
        Ok(terms) => LoadedTerms {
            terms,
            origin: TermOrigin::File,
        },
        Err(e) => {
            warn!("Using fallback terms, {} not usable: {}", path.display(), e);
            LoadedTerms {
                terms: TermSet::fallback(),
                origin: TermOrigin::Fallback(e.to_string()),
            }
        }
    };

    info!(
        "{} ecology/sustainability terms loaded",
        loaded.terms.ecology.len()
    );
    info!(
        "{} security/resilience terms loaded",
        loaded.terms.security.len()
    );
    loaded
}

/// Read and parse the term file strictly
pub fn read_terms(path: &Path, config: &AnalyzerConfig) -> Result<TermSet, AnalyzerError> {
    let contents = fs::read_to_string(path).map_err(|e| AnalyzerError::TermFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_terms(&contents, config)
}

/// Parse a term document
///
/// Looks for the cluster keys under `categories`, or at the top level when
/// there is no `categories` object. Each cluster contributes its
/// `keywords` followed by its `aliases`.
pub fn parse_terms(contents: &str, config: &AnalyzerConfig) -> Result<TermSet, AnalyzerError> {
    let document: Value = serde_json::from_str(contents)?;
    let Some(root) = document.as_object() else {
        return Err(AnalyzerError::TermParse(
            "term file must contain a JSON object".to_string(),
        ));
    };
    let clusters = root
        .get("categories")
        .and_then(Value::as_object)
        .unwrap_or(root);

    // A null or scalar cluster counts as missing
    let cluster = |key: &str| {
        clusters
            .get(key)
            .filter(|v| v.is_object() || v.is_array())
    };
    let eco = cluster(&config.eco_cluster_key);
    let sec = cluster(&config.sec_cluster_key);
    let (Some(eco), Some(sec)) = (eco, sec) else {
        let missing = [&config.eco_cluster_key, &config.sec_cluster_key]
            .into_iter()
            .filter(|k| cluster(k.as_str()).is_none())
            .cloned()
            .collect();
        return Err(AnalyzerError::MissingClusters {
            missing,
            present: clusters.keys().cloned().collect(),
        });
    };

    Ok(TermSet {
        ecology: TermCluster::new(TermSet::ECOLOGY, cluster_terms(eco)),
        security: TermCluster::new(TermSet::SECURITY, cluster_terms(sec)),
    })
}

/// `keywords` then `aliases`; a bare array is taken as the keyword list
fn cluster_terms(block: &Value) -> Vec<String> {
    match block {
        Value::Array(items) => strings(items),
        Value::Object(fields) => ["keywords", "aliases"]
            .iter()
            .flat_map(|key| list_field(fields, key))
            .collect(),
        _ => Vec::new(),
    }
}

fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| strings(items))
        .unwrap_or_default()
}

fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
