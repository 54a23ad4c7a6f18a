//! Classification of a record against the two term clusters

use crate::traits::TermMatcher;
use std::fmt;

/// Outcome of classifying one record; exactly one applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ecology terms only
    EcoOnly,

    /// Security terms only
    SecOnly,

    /// Terms from both clusters
    Mixed,

    /// No terms from either cluster
    None,
}

impl Category {
    /// Apply the classification rule; mixed takes precedence
    pub fn from_hits(eco_hit: bool, sec_hit: bool) -> Self {
        match (eco_hit, sec_hit) {
            (true, true) => Category::Mixed,
            (true, false) => Category::EcoOnly,
            (false, true) => Category::SecOnly,
            (false, false) => Category::None,
        }
    }

    /// Column name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EcoOnly => "eco_only",
            Category::SecOnly => "sec_only",
            Category::Mixed => "mixed",
            Category::None => "none",
        }
    }

    /// Whether the ecology cluster was hit
    pub fn hits_ecology(&self) -> bool {
        matches!(self, Category::EcoOnly | Category::Mixed)
    }

    /// Whether the security cluster was hit
    pub fn hits_security(&self) -> bool {
        matches!(self, Category::SecOnly | Category::Mixed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies texts with one matcher per cluster
pub struct Classifier<E, S> {
    ecology: E,
    security: S,
}

impl<E: TermMatcher, S: TermMatcher> Classifier<E, S> {
    /// Create a classifier from the ecology and security matchers
    pub fn new(ecology: E, security: S) -> Self {
        Self { ecology, security }
    }

    /// Classify a text; case is ignored
    pub fn classify(&self, text: &str) -> Category {
        let lowered = text.to_lowercase();
        Category::from_hits(self.ecology.matches(&lowered), self.security.matches(&lowered))
    }
}
