//! Field module - heterogeneous document fields as a tagged union
//!
//! Raw API documents carry free-text fields in several shapes: a plain
//! string, an object with a label, or a list mixing both. Ingestion maps
//! every value onto [`FieldValue`] once; everything downstream works on the
//! flat string lists produced by [`FieldValue::display_strings`].

use std::collections::BTreeMap;

/// Keys checked, in order, when an object stands in for a display string
pub const LABEL_KEYS: &[&str] = &["name", "text", "label", "titel", "title"];

/// Keys checked, in order, when an object stands in for a process reference
pub const LINK_ID_KEYS: &[&str] = &["id", "vorgangId", "vorgangsId"];

/// A single document field value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Explicit null or a value of no interest
    #[default]
    Null,

    /// String, number or boolean, carried as its string form
    Scalar(String),

    /// Nested object
    Object(BTreeMap<String, FieldValue>),

    /// List of values of any shape
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Convenience constructor for scalar values
    pub fn scalar(value: impl Into<String>) -> Self {
        FieldValue::Scalar(value.into())
    }

    /// Build an object from key/value pairs
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        FieldValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// The scalar content, if this is a non-blank scalar
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Look up a key if this is an object
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// First non-blank scalar among `keys` if this is an object
    pub fn first_text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key).and_then(FieldValue::as_text))
    }

    /// Flatten this value into display strings (not yet lowercased)
    ///
    /// - scalar: itself
    /// - object: the first label-like field
    /// - list: each element by the same rules
    ///
    /// Blank strings and anything unrecognised are dropped. Never fails.
    pub fn display_strings(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_display(&mut out);
        out
    }

    fn collect_display(&self, out: &mut Vec<String>) {
        match self {
            FieldValue::Null => {}
            FieldValue::Scalar(_) => {
                if let Some(text) = self.as_text() {
                    out.push(text.trim().to_string());
                }
            }
            FieldValue::Object(_) => {
                if let Some(label) = self.first_text(LABEL_KEYS) {
                    out.push(label.trim().to_string());
                }
            }
            FieldValue::List(items) => {
                for item in items {
                    item.collect_display(out);
                }
            }
        }
    }

    /// Extract a process identifier from a reference-shaped value
    ///
    /// Objects yield their first id-like field, lists the first element
    /// that yields one, scalars themselves.
    pub fn link_id(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Scalar(_) => self.as_text().map(|s| s.trim().to_string()),
            FieldValue::Object(_) => self.first_text(LINK_ID_KEYS).map(|s| s.trim().to_string()),
            FieldValue::List(items) => items.iter().find_map(FieldValue::link_id),
        }
    }
}

/// Normalize the fields named by `keys` into one flat lowercase list
///
/// Keys are visited in priority order; absent keys contribute nothing.
pub fn normalize_keywords(fields: &BTreeMap<String, FieldValue>, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .flat_map(FieldValue::display_strings)
        .map(|s| s.to_lowercase())
        .collect()
}
