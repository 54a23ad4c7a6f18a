//! Configuration for analysis
//!
//! Mirrors the `[analysis]` section of the settings file.

use dipscope_domain::TermSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How cluster terms are searched for in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Term occurs anywhere, also inside longer words
    #[default]
    Substring,

    /// Term occurs as a whole word
    Word,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => f.write_str("substring"),
            MatchMode::Word => f.write_str("word"),
        }
    }
}

/// Which part of a record is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScope {
    /// The full combined text
    #[default]
    Combined,

    /// The title only
    Title,
}

impl fmt::Display for TextScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextScope::Combined => f.write_str("combined"),
            TextScope::Title => f.write_str("title"),
        }
    }
}

/// Configuration for the analyzer
///
/// # Examples
///
/// ```
/// use dipscope_analyzer::{AnalyzerConfig, MatchMode};
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.match_mode, MatchMode::Substring);
/// assert_eq!(config.eco_cluster_key, "oekologie_nachhaltigkeit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Term search mode
    /// Default: substring
    pub match_mode: MatchMode,

    /// Searched text
    /// Default: combined
    pub scope: TextScope,

    /// Key of the ecology cluster in the term file
    pub eco_cluster_key: String,

    /// Key of the security cluster in the term file
    pub sec_cluster_key: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            scope: TextScope::default(),
            eco_cluster_key: TermSet::ECOLOGY.to_string(),
            sec_cluster_key: TermSet::SECURITY.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.eco_cluster_key.trim().is_empty() || self.sec_cluster_key.trim().is_empty() {
            return Err("cluster keys must not be empty".to_string());
        }
        if self.eco_cluster_key == self.sec_cluster_key {
            return Err(format!(
                "eco_cluster_key and sec_cluster_key must differ (both are '{}')",
                self.eco_cluster_key
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scope, TextScope::Combined);
        assert_eq!(config.sec_cluster_key, "sicherheit_resilienz");
    }

    #[test]
    fn test_from_toml() {
        let config: AnalyzerConfig = toml::from_str(
            r#"
            match_mode = "word"
            scope = "title"
            "#,
        )
        .unwrap();
        assert_eq!(config.match_mode, MatchMode::Word);
        assert_eq!(config.scope, TextScope::Title);
        assert_eq!(config.eco_cluster_key, TermSet::ECOLOGY);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result: Result<AnalyzerConfig, _> = toml::from_str(r#"match_mode = "fuzzy""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_identical_keys_invalid() {
        let config = AnalyzerConfig {
            sec_cluster_key: TermSet::ECOLOGY.to_string(),
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MatchMode::Word.to_string(), "word");
        assert_eq!(TextScope::Title.to_string(), "title");
    }
}
