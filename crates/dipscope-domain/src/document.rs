//! Document module - raw API documents and their per-stream processed form

use crate::field::{normalize_keywords, FieldValue};
use crate::year::Year;
use std::collections::BTreeMap;
use std::fmt;

/// Candidate keys for each logical field, in priority order
pub mod keys {
    /// Document identifier
    pub const ID: &[&str] = &["id"];
    /// Title
    pub const TITLE: &[&str] = &["titel", "title"];
    /// Abstract (primary documents only)
    pub const ABSTRACT: &[&str] = &["abstract"];
    /// Publication date
    pub const DATE: &[&str] = &["datum", "date"];
    /// Last-updated timestamp
    pub const UPDATED: &[&str] = &["aktualisiert", "updated"];
    /// Free-text tags
    pub const TAGS: &[&str] = &["schlagworte", "tags"];
    /// Subject areas
    pub const CATEGORIES: &[&str] = &["sachgebiete", "categories"];
    /// Reference to the related process
    pub const LINK: &[&str] = &["vorgangsbezug", "link"];
    /// Document type
    pub const TYPE: &[&str] = &["typ", "vorgangstyp", "type"];
    /// Authors / originators
    pub const AUTHORS: &[&str] = &["urheber", "initiative", "autoren_anzeige", "authors"];
}

/// Which record stream a document or combined record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    /// Drucksache: printed parliamentary document
    Primary,

    /// Vorgang: legislative process
    Secondary,
}

impl Source {
    /// Get the source tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Primary => "primary",
            Source::Secondary => "secondary",
        }
    }

    /// Parse a source tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" | "drucksache" => Some(Source::Primary),
            "secondary" | "vorgang" => Some(Source::Secondary),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document as delivered by the API, immutable once fetched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDocument {
    fields: BTreeMap<String, FieldValue>,
}

impl RawDocument {
    /// Wrap a map of top-level fields
    pub fn new(fields: BTreeMap<String, FieldValue>) -> Self {
        Self { fields }
    }

    /// Build from key/value pairs
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        Self::new(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// All fields
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// First non-blank scalar among `keys`
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.fields.get(*key).and_then(FieldValue::as_text))
            .map(|s| s.trim().to_string())
    }

    /// Document identifier
    pub fn id(&self) -> Option<String> {
        self.text(keys::ID)
    }

    /// Title
    pub fn title(&self) -> Option<String> {
        self.text(keys::TITLE)
    }

    /// Identifier of the related process, from whatever shape the reference has
    pub fn link_id(&self) -> Option<String> {
        keys::LINK
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(FieldValue::link_id)
    }

    /// Normalized lowercase tags
    pub fn tags(&self) -> Vec<String> {
        normalize_keywords(&self.fields, keys::TAGS)
    }

    /// Normalized lowercase subject areas
    pub fn categories(&self) -> Vec<String> {
        normalize_keywords(&self.fields, keys::CATEGORIES)
    }

    /// Document type
    pub fn doc_type(&self) -> Option<String> {
        self.text(keys::TYPE)
    }

    /// Authors, normalized like tags
    pub fn authors(&self) -> Vec<String> {
        normalize_keywords(&self.fields, keys::AUTHORS)
    }
}

/// Join text parts with single spaces, skipping blank parts
pub fn join_text<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A document of one stream, reduced to what merging and classification need
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Own identifier
    pub id: Option<String>,

    /// Identifier of the related process (primary documents only)
    pub link_id: Option<String>,

    /// Title
    pub title: Option<String>,

    /// Concatenated searchable text
    pub text: String,

    /// The date the year was resolved from, verbatim
    pub date: Option<String>,

    /// Resolved year
    pub year: Year,

    /// Document or process type, e.g. `Gesetzentwurf`
    pub doc_type: Option<String>,

    /// Normalized authors
    pub authors: Vec<String>,

    /// Stream of origin
    pub source: Source,
}

impl Document {
    /// Build a primary document: text is title, abstract, tags, categories
    pub fn primary(raw: &RawDocument, year: Year) -> Self {
        let title = raw.title();
        let text = join_text(
            [title.clone(), raw.text(keys::ABSTRACT)]
                .into_iter()
                .flatten()
                .chain(raw.tags())
                .chain(raw.categories()),
        );

        Self {
            id: raw.id(),
            link_id: raw.link_id(),
            title,
            text,
            date: raw.text(keys::DATE),
            year,
            doc_type: raw.doc_type(),
            authors: raw.authors(),
            source: Source::Primary,
        }
    }

    /// Build a related document: text is title, tags, categories
    pub fn related(raw: &RawDocument, year: Year) -> Self {
        let title = raw.title();
        let text = join_text(
            title
                .clone()
                .into_iter()
                .chain(raw.tags())
                .chain(raw.categories()),
        );

        Self {
            id: raw.id(),
            link_id: None,
            title,
            text,
            date: raw.text(keys::UPDATED),
            year,
            doc_type: raw.doc_type(),
            authors: raw.authors(),
            source: Source::Secondary,
        }
    }
}
