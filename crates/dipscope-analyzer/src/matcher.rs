//! Term matchers
//!
//! [`SubstringMatcher`] lives in the domain crate; this module adds the
//! regex-backed word matcher and [`ClusterMatcher`], which picks between
//! the two according to [`MatchMode`].

use crate::config::MatchMode;
use crate::error::AnalyzerError;
use dipscope_domain::{SubstringMatcher, TermCluster, TermMatcher};
use regex::Regex;

/// Matches cluster terms as whole words
///
/// Uses one alternation with every term escaped. A term edge gets `\b` only
/// when the character on that edge is a word character, so terms such as
/// `co2 (bepreisung)` or `klima-` still match. `\b` is Unicode-aware, so
/// umlauts and ß count as word characters.
#[derive(Debug, Clone)]
pub struct WordBoundaryMatcher {
    pattern: Option<Regex>,
}

impl WordBoundaryMatcher {
    /// Compile the pattern for a cluster
    pub fn new(cluster: &TermCluster) -> Result<Self, AnalyzerError> {
        if cluster.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternation = cluster
            .terms()
            .iter()
            .map(|t| bounded(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?:{})", alternation))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn bounded(term: &str) -> String {
    let lead = if term.chars().next().is_some_and(is_word_char) { r"\b" } else { "" };
    let trail = if term.chars().last().is_some_and(is_word_char) { r"\b" } else { "" };
    format!("{}{}{}", lead, regex::escape(term), trail)
}

impl TermMatcher for WordBoundaryMatcher {
    fn matches(&self, lowercase_text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|p| p.is_match(lowercase_text))
    }
}

/// The matcher selected for a cluster
#[derive(Debug, Clone)]
pub enum ClusterMatcher {
    /// Substring search
    Substring(SubstringMatcher),

    /// Whole-word search
    Word(WordBoundaryMatcher),
}

impl ClusterMatcher {
    /// Build the matcher `mode` asks for
    pub fn for_mode(mode: MatchMode, cluster: &TermCluster) -> Result<Self, AnalyzerError> {
        Ok(match mode {
            MatchMode::Substring => ClusterMatcher::Substring(SubstringMatcher::new(cluster)),
            MatchMode::Word => ClusterMatcher::Word(WordBoundaryMatcher::new(cluster)?),
        })
    }
}

impl TermMatcher for ClusterMatcher {
    fn matches(&self, lowercase_text: &str) -> bool {
        match self {
            ClusterMatcher::Substring(m) => m.matches(lowercase_text),
            ClusterMatcher::Word(m) => m.matches(lowercase_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(terms: &[&str]) -> TermCluster {
        TermCluster::new("test", terms)
    }

    #[test]
    fn test_word_matcher_requires_boundaries() {
        let m = WordBoundaryMatcher::new(&cluster(&["sicherheit"])).unwrap();
        assert!(m.matches("fragen der sicherheit."));
        assert!(!m.matches("versorgungssicherheit"));
    }

    #[test]
    fn test_word_matcher_escapes_terms() {
        let m = WordBoundaryMatcher::new(&cluster(&["co2 (bepreisung)"])).unwrap();
        assert!(m.matches("die co2 (bepreisung) steigt"));
        assert!(!m.matches("co2 bepreisung"));
    }

    #[test]
    fn test_word_matcher_punctuation_edges() {
        let m = WordBoundaryMatcher::new(&cluster(&["klima-", "z.b."])).unwrap();
        assert!(m.matches("klima- und umweltschutz"));
        assert!(m.matches("maßnahmen, z.b. hochwasserschutz"));
        assert!(!m.matches("weltklima- und"));
    }

    #[test]
    fn test_word_matcher_handles_umlauts() {
        let m = WordBoundaryMatcher::new(&cluster(&["ökologie"])).unwrap();
        assert!(m.matches("zur ökologie der meere"));
        assert!(!m.matches("agrarökologie"));
    }

    #[test]
    fn test_empty_cluster_never_matches() {
        let m = WordBoundaryMatcher::new(&cluster(&[])).unwrap();
        assert!(!m.matches("sicherheit"));
    }

    #[test]
    fn test_mode_selection() {
        let c = cluster(&["schutz"]);
        let substring = ClusterMatcher::for_mode(MatchMode::Substring, &c).unwrap();
        let word = ClusterMatcher::for_mode(MatchMode::Word, &c).unwrap();
        assert!(substring.matches("klimaschutz"));
        assert!(!word.matches("klimaschutz"));
    }
}
