//! Record merging - joins primary documents with their related process

use crate::document::{join_text, Document, Source};
use crate::year::Year;
use std::collections::HashMap;

/// A unified text record, ready for classification
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRecord {
    /// Identifier of the primary document (absent for orphans)
    pub primary_id: Option<String>,

    /// Identifier of the related process, if any
    pub related_id: Option<String>,

    /// Title (primary title, else related title)
    pub title: Option<String>,

    /// Concatenated text of both documents
    pub text: String,

    /// Date of the primary document
    pub date: Option<String>,

    /// Updated timestamp of the related process
    pub updated: Option<String>,

    /// Resolved year
    pub year: Year,

    /// Document type (primary's, else the related process's)
    pub doc_type: Option<String>,

    /// Authors (primary's, else the related process's)
    pub authors: Vec<String>,

    /// `Primary` for primary documents (merged or not), `Secondary` for orphans
    pub source: Source,
}

impl CombinedRecord {
    /// Record for a related document that no primary document claimed
    pub fn orphan(related: Document) -> Self {
        Self {
            primary_id: None,
            related_id: related.id,
            title: related.title,
            text: related.text,
            date: None,
            updated: related.date,
            year: related.year,
            doc_type: related.doc_type,
            authors: related.authors,
            source: Source::Secondary,
        }
    }

    fn from_primary(primary: Document, related: Option<Document>) -> Self {
        let Some(related) = related else {
            return Self {
                primary_id: primary.id,
                related_id: primary.link_id,
                title: primary.title,
                text: primary.text,
                date: primary.date,
                updated: None,
                year: primary.year,
                doc_type: primary.doc_type,
                authors: primary.authors,
                source: Source::Primary,
            };
        };

        let authors = if primary.authors.is_empty() {
            related.authors
        } else {
            primary.authors
        };

        Self {
            primary_id: primary.id,
            related_id: primary.link_id,
            title: primary.title.or(related.title),
            text: join_text([primary.text, related.text]),
            date: primary.date,
            updated: related.date,
            year: primary.year.or(related.year),
            doc_type: primary.doc_type.or(related.doc_type),
            authors,
            source: Source::Primary,
        }
    }
}

/// Counts reported by [`merge_records`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Primary documents processed
    pub primary: usize,

    /// Primary documents that found their related process
    pub merged: usize,

    /// Related documents emitted on their own
    pub orphans: usize,
}

/// Merge primary documents with related ones by link id
///
/// Each related document merges at most once. Related documents that no
/// primary document claims, including those without an id or repeating an
/// id already seen, are appended as orphans in their input order.
pub fn merge_records(
    primary: Vec<Document>,
    related: Vec<Document>,
) -> (Vec<CombinedRecord>, MergeStats) {
    let mut stats = MergeStats {
        primary: primary.len(),
        ..MergeStats::default()
    };

    let mut slots: Vec<Option<Document>> = related.into_iter().map(Some).collect();
    let mut lookup: HashMap<String, usize> = HashMap::new();
    for (idx, slot) in slots.iter().enumerate() {
        if let Some(id) = slot.as_ref().and_then(|d| d.id.clone()) {
            lookup.entry(id).or_insert(idx);
        }
    }

    let mut records = Vec::with_capacity(primary.len() + slots.len());
    for doc in primary {
        let matched = doc
            .link_id
            .as_ref()
            .and_then(|link| lookup.remove(link))
            .and_then(|idx| slots[idx].take());
        if matched.is_some() {
            stats.merged += 1;
        }
        records.push(CombinedRecord::from_primary(doc, matched));
    }

    for orphan in slots.into_iter().flatten() {
        stats.orphans += 1;
        records.push(CombinedRecord::orphan(orphan));
    }

    (records, stats)
}
