//! Integration tests for dipscope-ingest
//!
//! These tests lay out a raw directory the way the fetch stage does and
//! run it through loading and merging.

use dipscope_domain::traits::DocumentSource;
use dipscope_domain::{Source, Year};
use dipscope_ingest::{combine_batch, RawStore};
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed(root: &Path) {
    write(
        root,
        "drucksache/drucksache_20240101T000000Z_0001.json",
        r#"{
            "numFound": 2,
            "cursor": "AoE",
            "documents": [
                {
                    "id": "264011",
                    "titel": "Entwurf eines Gesetzes zum Klimaschutz",
                    "datum": "2022-05-01",
                    "schlagworte": [{"name": "Energiewende"}],
                    "vorgangsbezug": [{"id": "290001", "titel": "Klimaschutzgesetz"}]
                },
                {
                    "id": "264012",
                    "titel": "Antrag",
                    "datum": "nicht bekannt"
                }
            ]
        }"#,
    );
    write(
        root,
        "vorgang/vorgang_20240101T000000Z_0001.json",
        r#"{
            "documents": [
                {"id": "290001", "titel": "Klimaschutzgesetz", "aktualisiert": "2023-02-01T10:00:00+01:00"},
                {"id": "290002", "titel": "Zivilschutz und Resilienz", "aktualisiert": "2021-06-30T12:00:00+02:00"}
            ]
        }"#,
    );
    write(root, "vorgang/vorgang_20240101T000000Z_0002.json", "{ truncated");
    write(root, "drucksache/notes.txt", "not a page");
}

#[test]
fn test_load_skips_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    let report = RawStore::new(dir.path()).load_report();
    assert_eq!(report.files_read, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.batch.primary.len(), 2);
    assert_eq!(report.batch.related.len(), 2);
}

#[test]
fn test_merge_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    let batch = RawStore::new(dir.path()).load().unwrap();
    let (records, stats) = combine_batch(&batch);

    assert_eq!(records.len(), 3);
    assert_eq!(stats.merged, 1);
    assert_eq!(stats.orphans, 1);

    let merged = &records[0];
    assert_eq!(merged.primary_id.as_deref(), Some("264011"));
    assert_eq!(merged.related_id.as_deref(), Some("290001"));
    assert_eq!(
        merged.text,
        "Entwurf eines Gesetzes zum Klimaschutz energiewende Klimaschutzgesetz"
    );
    assert_eq!(merged.year, Year::Known(2022));

    // "nicht bekannt" has no leading digits
    assert_eq!(records[1].year, Year::Unknown);

    let orphan = &records[2];
    assert_eq!(orphan.source, Source::Secondary);
    assert_eq!(orphan.related_id.as_deref(), Some("290002"));
    assert_eq!(orphan.year, Year::Known(2021));
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let batch = RawStore::new(dir.path()).load().unwrap();
    assert!(batch.is_empty());

    let (records, stats) = combine_batch(&batch);
    assert!(records.is_empty());
    assert_eq!(stats.primary, 0);
}
