//! Core Analyzer implementation

use crate::config::{AnalyzerConfig, TextScope};
use crate::error::AnalyzerError;
use crate::matcher::ClusterMatcher;
use dipscope_domain::{Category, Classifier, CombinedRecord, RatioRow, TermSet, YearAggregate, YearTable};
use tracing::{debug, info};

/// Result of classifying and aggregating a set of records
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Per-year counts
    pub table: YearTable,

    /// Per-year ratio rows, same order as `table`
    pub ratios: Vec<RatioRow>,

    /// Counts over all years
    pub totals: YearAggregate,

    /// Records analyzed
    pub records: usize,
}

impl AnalysisReport {
    /// Whether no record was analyzed
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

/// Classifies combined records and aggregates them per year
pub struct Analyzer {
    classifier: Classifier<ClusterMatcher, ClusterMatcher>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer for a term set
    pub fn new(terms: &TermSet, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        let classifier = Classifier::new(
            ClusterMatcher::for_mode(config.match_mode, &terms.ecology)?,
            ClusterMatcher::for_mode(config.match_mode, &terms.security)?,
        );
        debug!(
            "Analyzer ready (mode: {}, scope: {})",
            config.match_mode, config.scope
        );

        Ok(Self { classifier, config })
    }

    /// Analyzer configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify one record
    ///
    /// With title scope a record without title classifies as `none`.
    pub fn classify(&self, record: &CombinedRecord) -> Category {
        let text = match self.config.scope {
            TextScope::Combined => record.text.as_str(),
            TextScope::Title => record.title.as_deref().unwrap_or_default(),
        };
        self.classifier.classify(text)
    }

    /// Classify every record into its year bucket
    pub fn analyze(&self, records: &[CombinedRecord]) -> AnalysisReport {
        info!("Analyzing {} records", records.len());

        let mut table = YearTable::new();
        for record in records {
            table.record(record.year, self.classify(record));
        }

        let totals = table.totals();
        info!(
            "Analysis complete: {} years, eco_only={}, sec_only={}, mixed={}, none={}",
            table.len(),
            totals.eco_only(),
            totals.sec_only(),
            totals.mixed(),
            totals.none()
        );

        AnalysisReport {
            ratios: table.ratios(),
            table,
            totals,
            records: records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use dipscope_domain::{Source, Year};

    fn record(title: &str, text: &str, year: Year) -> CombinedRecord {
        CombinedRecord {
            primary_id: Some("1".to_string()),
            related_id: None,
            title: Some(title.to_string()),
            text: text.to_string(),
            date: None,
            updated: None,
            year,
            doc_type: None,
            authors: Vec::new(),
            source: Source::Primary,
        }
    }

    fn analyzer(config: AnalyzerConfig) -> Analyzer {
        Analyzer::new(&TermSet::fallback(), config).unwrap()
    }

    #[test]
    fn test_counts_per_year() {
        let records = vec![
            record("a", "Klimaschutz im Verkehr", Year::Known(2021)),
            record("b", "Resilienz der Netze", Year::Known(2021)),
            record("c", "Nachhaltigkeit und Sicherheit", Year::Known(2022)),
            record("d", "Haushalt", Year::Unknown),
        ];
        let report = analyzer(AnalyzerConfig::default()).analyze(&records);

        let y2021 = report.table.get(Year::Known(2021)).unwrap();
        assert_eq!(y2021.total(), 2);
        assert_eq!(y2021.eco_only(), 1);
        assert_eq!(y2021.sec_only(), 1);
        assert_eq!(report.table.get(Year::Known(2022)).unwrap().mixed(), 1);
        assert_eq!(report.table.get(Year::Unknown).unwrap().none(), 1);
        assert_eq!(report.totals.total(), 4);
        assert_eq!(report.records, 4);
        assert_eq!(report.ratios.len(), 3);
        assert_eq!(report.ratios[0].ratio, Some(1.0));
    }

    #[test]
    fn test_title_scope() {
        let config = AnalyzerConfig {
            scope: TextScope::Title,
            ..AnalyzerConfig::default()
        };
        let a = analyzer(config);
        let r = record("Haushaltsgesetz", "haushaltsgesetz klimaschutz", Year::Known(2023));
        assert_eq!(a.classify(&r), Category::None);

        let mut untitled = r.clone();
        untitled.title = None;
        assert_eq!(a.classify(&untitled), Category::None);
    }

    #[test]
    fn test_word_mode() {
        let config = AnalyzerConfig {
            match_mode: MatchMode::Word,
            ..AnalyzerConfig::default()
        };
        let a = analyzer(config);
        let r = record("t", "versorgungssicherheit", Year::Known(2023));
        assert_eq!(a.classify(&r), Category::None);
        assert_eq!(
            analyzer(AnalyzerConfig::default()).classify(&r),
            Category::SecOnly
        );
    }

    #[test]
    fn test_empty_input() {
        let report = analyzer(AnalyzerConfig::default()).analyze(&[]);
        assert!(report.is_empty());
        assert!(report.table.is_empty());
        assert!(report.ratios.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig {
            eco_cluster_key: String::new(),
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            Analyzer::new(&TermSet::fallback(), config),
            Err(AnalyzerError::Config(_))
        ));
    }
}
