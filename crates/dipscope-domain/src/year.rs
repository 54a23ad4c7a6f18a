//! Year module - the aggregation bucket key

use std::fmt;

/// Label used for records without a usable date
pub const UNKNOWN_YEAR_LABEL: &str = "unknown";

/// Resolved year of a record
///
/// Every record carries a year; a record whose date cannot be parsed lands
/// in the `Unknown` bucket instead of being dropped. Orders ascending by
/// number with `Unknown` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Year {
    /// A calendar year
    Known(i32),

    /// No parseable date
    #[default]
    Unknown,
}

impl Year {
    /// Whether this is the `Unknown` sentinel
    pub fn is_unknown(&self) -> bool {
        matches!(self, Year::Unknown)
    }

    /// The calendar year, if known
    pub fn value(&self) -> Option<i32> {
        match self {
            Year::Known(y) => Some(*y),
            Year::Unknown => None,
        }
    }

    /// Build from an optional calendar year
    pub fn from_option(year: Option<i32>) -> Self {
        year.map(Year::Known).unwrap_or(Year::Unknown)
    }

    /// This year, or `fallback` when this one is unknown
    pub fn or(self, fallback: Year) -> Year {
        match self {
            Year::Unknown => fallback,
            known => known,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(y) => write!(f, "{}", y),
            Year::Unknown => f.write_str(UNKNOWN_YEAR_LABEL),
        }
    }
}

impl std::str::FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(UNKNOWN_YEAR_LABEL) {
            return Ok(Year::Unknown);
        }
        trimmed
            .parse::<i32>()
            .map(Year::Known)
            .map_err(|_| format!("Invalid year: {}", s))
    }
}
