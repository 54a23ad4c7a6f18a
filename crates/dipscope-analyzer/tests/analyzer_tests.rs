//! Integration tests: term file → analyzer → year table

use dipscope_analyzer::{load_terms, Analyzer, AnalyzerConfig, TermOrigin};
use dipscope_domain::{merge_records, CombinedRecord, Document, Source, Year};
use std::fs;

fn primary(id: &str, link: Option<&str>, text: &str, year: Year) -> Document {
    Document {
        id: Some(id.to_string()),
        link_id: link.map(str::to_string),
        title: Some(text.to_string()),
        text: text.to_string(),
        date: None,
        year,
        doc_type: None,
        authors: Vec::new(),
        source: Source::Primary,
    }
}

fn related(id: &str, text: &str, year: Year) -> Document {
    Document {
        id: Some(id.to_string()),
        link_id: None,
        title: Some(text.to_string()),
        text: text.to_string(),
        date: None,
        year,
        doc_type: None,
        authors: Vec::new(),
        source: Source::Secondary,
    }
}

fn write_terms(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("term_list.json");
    fs::write(
        &path,
        r#"{
            "categories": {
                "oekologie_nachhaltigkeit": {
                    "keywords": ["Klimaschutz", "Biodiversität"],
                    "aliases": ["Artenschutz"]
                },
                "sicherheit_resilienz": {
                    "keywords": ["Bundeswehr", "Resilienz"],
                    "aliases": []
                }
            }
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn test_merged_pair_counts_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::default();
    let loaded = load_terms(&write_terms(dir.path()), &config);
    assert_eq!(loaded.origin, TermOrigin::File);

    let (records, stats) = merge_records(
        vec![
            primary("1", Some("v1"), "Gesetz zum Artenschutz", Year::Known(2022)),
            primary("2", None, "Haushalt", Year::Unknown),
        ],
        vec![
            related("v1", "Beschaffung Bundeswehr", Year::Known(2021)),
            related("v2", "Resilienz kritischer Infrastruktur", Year::Known(2023)),
        ],
    );
    assert_eq!(stats.merged, 1);
    assert_eq!(stats.orphans, 1);

    let report = Analyzer::new(&loaded.terms, config).unwrap().analyze(&records);

    assert_eq!(report.records, 3);
    assert_eq!(report.totals.total(), 3);
    assert_eq!(report.table.get(Year::Known(2022)).unwrap().mixed(), 1);
    assert_eq!(report.table.get(Year::Known(2023)).unwrap().sec_only(), 1);
    assert_eq!(report.table.get(Year::Unknown).unwrap().none(), 1);
    assert!(report.table.get(Year::Known(2021)).is_none());
}

#[test]
fn test_zero_ecology_gives_missing_ratio() {
    let loaded = load_terms(
        std::path::Path::new("/nonexistent/terms.json"),
        &AnalyzerConfig::default(),
    );
    let analyzer = Analyzer::new(&loaded.terms, AnalyzerConfig::default()).unwrap();

    let records: Vec<CombinedRecord> = (0..10)
        .map(|i| CombinedRecord::orphan(related(&i.to_string(), "Resilienz", Year::Known(2024))))
        .collect();
    let report = analyzer.analyze(&records);

    let row = &report.ratios[0];
    assert_eq!(row.sec_total, 10);
    assert_eq!(row.eco_total, 0);
    assert_eq!(row.ratio, None);
}

#[test]
fn test_years_sorted_unknown_last() {
    let loaded = load_terms(
        std::path::Path::new("/nonexistent/terms.json"),
        &AnalyzerConfig::default(),
    );
    let analyzer = Analyzer::new(&loaded.terms, AnalyzerConfig::default()).unwrap();
    let records: Vec<CombinedRecord> = [Year::Unknown, Year::Known(2024), Year::Known(2019)]
        .into_iter()
        .map(|y| CombinedRecord::orphan(related("x", "text", y)))
        .collect();

    let years: Vec<Year> = analyzer.analyze(&records).table.rows().map(|r| r.year()).collect();
    assert_eq!(years, vec![Year::Known(2019), Year::Known(2024), Year::Unknown]);
}
