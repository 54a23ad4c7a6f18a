//! Term clusters - the two keyword groups documents are classified against

use crate::traits::TermMatcher;

/// Fallback ecology/sustainability terms
pub const FALLBACK_ECO_TERMS: &[&str] = &["klimaschutz", "nachhaltigkeit", "umweltschutz"];

/// Fallback security/resilience terms
pub const FALLBACK_SEC_TERMS: &[&str] = &["sicherheit", "resilienz"];

/// A named group of lowercase keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCluster {
    name: String,
    terms: Vec<String>,
}

impl TermCluster {
    /// Create a cluster; terms are trimmed, lowercased and deduplicated
    /// (first occurrence wins), blank terms are dropped
    pub fn new<I, S>(name: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }
        Self {
            name: name.into(),
            terms: out,
        }
    }

    /// Cluster name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase terms in load order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the cluster has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The ecology and security clusters together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSet {
    /// Ecology/sustainability cluster
    pub ecology: TermCluster,

    /// Security/resilience cluster
    pub security: TermCluster,
}

impl TermSet {
    /// Name of the ecology cluster
    pub const ECOLOGY: &'static str = "oekologie_nachhaltigkeit";

    /// Name of the security cluster
    pub const SECURITY: &'static str = "sicherheit_resilienz";

    /// Build from two term lists
    pub fn new<I, J, S, T>(ecology: I, security: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            ecology: TermCluster::new(Self::ECOLOGY, ecology),
            security: TermCluster::new(Self::SECURITY, security),
        }
    }

    /// The small built-in term set used when no term file is usable
    pub fn fallback() -> Self {
        Self::new(FALLBACK_ECO_TERMS, FALLBACK_SEC_TERMS)
    }
}

/// Plain substring matching over lowercased text
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    terms: Vec<String>,
}

impl SubstringMatcher {
    /// Matcher for the terms of one cluster
    pub fn new(cluster: &TermCluster) -> Self {
        Self {
            terms: cluster.terms().to_vec(),
        }
    }
}

impl TermMatcher for SubstringMatcher {
    fn matches(&self, lowercase_text: &str) -> bool {
        self.terms.iter().any(|t| lowercase_text.contains(t.as_str()))
    }
}
