//! Analyze command implementation.

use crate::cli::{AnalysisArgs, AnalyzeArgs};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{write_reports, ReportOutcome};
use dipscope_analyzer::{load_terms, AnalysisReport, Analyzer, TermOrigin};
use dipscope_domain::CombinedRecord;
use dipscope_ingest::read_combined;
use tracing::{info, warn};

use super::process::build_records;

/// Execute the analyze command.
///
/// Reads `combined_texts.json`; when it is missing or unreadable the
/// records are rebuilt from the raw pages instead.
pub fn execute_analyze(args: AnalyzeArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    config.apply_paths(&args.paths);
    apply_analysis(config, &args.analysis);

    let path = config.storage.combined_path();
    let records = match read_combined(&path) {
        Ok(records) => {
            info!("Read {} records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            warn!("{} not usable ({}), processing raw pages instead", path.display(), e);
            build_records(config).0
        }
    };

    report_records(&records, config, formatter)
}

/// Apply classification overrides to the `[analysis]` settings.
pub(crate) fn apply_analysis(config: &mut Config, args: &AnalysisArgs) {
    if let Some(mode) = args.match_mode {
        config.analysis.match_mode = mode.into();
    }
    if let Some(scope) = args.scope {
        config.analysis.scope = scope.into();
    }
}

/// Result of [`analyze_records`].
#[derive(Debug)]
pub struct AnalysisRun {
    /// Per-year counts and ratios
    pub report: AnalysisReport,

    /// CSV files written or failed
    pub outcome: ReportOutcome,

    /// Where the term clusters came from
    pub terms: TermOrigin,
}

/// Load terms, classify, aggregate and write the CSV files.
pub fn analyze_records(records: &[CombinedRecord], config: &Config) -> Result<AnalysisRun> {
    let loaded = load_terms(&config.storage.terms_file, &config.analysis);
    let analyzer = Analyzer::new(&loaded.terms, config.analysis.clone())?;

    let report = analyzer.analyze(records);
    let outcome = write_reports(&config.storage.results_dir, &report);
    Ok(AnalysisRun {
        report,
        outcome,
        terms: loaded.origin,
    })
}

/// [`analyze_records`] followed by the console summary.
pub(crate) fn report_records(records: &[CombinedRecord], config: &Config, formatter: &Formatter) -> Result<()> {
    let AnalysisRun {
        report,
        outcome,
        terms,
    } = analyze_records(records, config)?;

    // stderr keeps quiet output machine-readable
    if let Some(notice) = formatter.term_notice(&terms, &config.storage.terms_file) {
        eprintln!("{}", notice);
    }
    println!("{}", formatter.format_report(&report)?);
    for (path, reason) in &outcome.failed {
        println!(
            "{}",
            formatter.error(&format!("Could not write {}: {}", path.display(), reason))
        );
    }
    if outcome.is_complete() && formatter.format() != OutputFormat::Quiet {
        println!(
            "{}",
            formatter.info(&format!(
                "Results written to {}",
                config.storage.results_dir.display()
            ))
        );
    }
    Ok(())
}
