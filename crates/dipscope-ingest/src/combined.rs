//! The `combined_texts.json` intermediate file

use crate::error::IngestError;
use dipscope_domain::{CombinedRecord, Source, Year};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the combined records inside the processed directory
pub const COMBINED_FILE_NAME: &str = "combined_texts.json";

/// Serialized form of a [`CombinedRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedEntry {
    /// Primary document id
    pub primary_id: Option<String>,

    /// Related process id
    pub related_id: Option<String>,

    /// Title
    pub title: Option<String>,

    /// Concatenated text
    pub text: String,

    /// Primary document date
    pub date: Option<String>,

    /// Related process update timestamp
    pub updated: Option<String>,

    /// Year, `null` when unknown
    pub year: Option<i32>,

    /// Document type
    #[serde(rename = "typ", default)]
    pub doc_type: Option<String>,

    /// Authors
    #[serde(rename = "urheber", default)]
    pub authors: Vec<String>,

    /// `primary` or `secondary`
    pub source: String,
}

impl From<&CombinedRecord> for CombinedEntry {
    fn from(record: &CombinedRecord) -> Self {
        Self {
            primary_id: record.primary_id.clone(),
            related_id: record.related_id.clone(),
            title: record.title.clone(),
            text: record.text.clone(),
            date: record.date.clone(),
            updated: record.updated.clone(),
            year: record.year.value(),
            doc_type: record.doc_type.clone(),
            authors: record.authors.clone(),
            source: record.source.as_str().to_string(),
        }
    }
}

impl From<CombinedEntry> for CombinedRecord {
    fn from(entry: CombinedEntry) -> Self {
        let source = Source::parse(&entry.source).unwrap_or(if entry.primary_id.is_some() {
            Source::Primary
        } else {
            Source::Secondary
        });
        Self {
            primary_id: entry.primary_id,
            related_id: entry.related_id,
            title: entry.title,
            text: entry.text,
            date: entry.date,
            updated: entry.updated,
            year: Year::from_option(entry.year),
            doc_type: entry.doc_type,
            authors: entry.authors,
            source,
        }
    }
}

/// Write records as a pretty JSON array, creating parent directories
pub fn write_combined(path: &Path, records: &[CombinedRecord]) -> Result<(), IngestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IngestError::io(parent, e))?;
    }
    let entries: Vec<CombinedEntry> = records.iter().map(CombinedEntry::from).collect();
    let contents = serde_json::to_string_pretty(&entries)?;
    fs::write(path, contents).map_err(|e| IngestError::io(path, e))
}

/// Read records written by [`write_combined`]
pub fn read_combined(path: &Path) -> Result<Vec<CombinedRecord>, IngestError> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let entries: Vec<CombinedEntry> = serde_json::from_str(&contents)?;
    Ok(entries.into_iter().map(CombinedRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CombinedRecord {
        CombinedRecord {
            primary_id: None,
            related_id: Some("v9".to_string()),
            title: Some("Vorgang".to_string()),
            text: "vorgang resilienz".to_string(),
            date: None,
            updated: Some("2021-03-04".to_string()),
            year: Year::Unknown,
            doc_type: Some("Gesetzgebung".to_string()),
            authors: vec!["bundesrat".to_string()],
            source: Source::Secondary,
        }
    }

    #[test]
    fn test_entry_field_names() {
        let json = serde_json::to_value(CombinedEntry::from(&record())).unwrap();
        assert_eq!(json["relatedId"], "v9");
        assert_eq!(json["source"], "secondary");
        assert!(json["year"].is_null());
        assert_eq!(json["typ"], "Gesetzgebung");
        assert_eq!(json["urheber"][0], "bundesrat");
    }

    #[test]
    fn test_entry_without_type_or_authors() {
        let entry: CombinedEntry = serde_json::from_str(
            r#"{"primaryId": "1", "relatedId": null, "title": null, "text": "t",
                "date": null, "updated": null, "year": 2020, "source": "primary"}"#,
        )
        .unwrap();
        let record = CombinedRecord::from(entry);
        assert_eq!(record.doc_type, None);
        assert!(record.authors.is_empty());
        assert_eq!(record.year, Year::Known(2020));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(COMBINED_FILE_NAME);

        write_combined(&path, &[record()]).unwrap();
        let back = read_combined(&path).unwrap();
        assert_eq!(back, vec![record()]);
    }
}
