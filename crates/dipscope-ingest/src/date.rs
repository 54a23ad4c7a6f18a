//! Year resolution from the API's date strings

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use dipscope_domain::Year;

/// Timestamp formats tried after RFC 3339, in order
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Date-only format
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve the year of a date string
///
/// Tries RFC 3339, the known timestamp formats and a plain date, then falls
/// back to the leading four characters if they are all digits. Anything
/// else is [`Year::Unknown`].
pub fn resolve_year(date: Option<&str>) -> Year {
    let Some(date) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return Year::Unknown;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Year::Known(dt.year());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, fmt) {
            return Year::Known(dt.year());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, DATE_FORMAT) {
        return Year::Known(d.year());
    }

    leading_year(date)
}

fn leading_year(date: &str) -> Year {
    let prefix: String = date.chars().take(4).collect();
    if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().map(Year::Known).unwrap_or(Year::Unknown)
    } else {
        Year::Unknown
    }
}
