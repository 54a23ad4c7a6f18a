//! CSV result files.
//!
//! Two files are written to the results directory:
//!
//! - `year_aggregates.csv`: `year,total,eco_only,sec_only,mixed,none`
//! - `ratio_by_year.csv`: `year,ratio,sec_total,eco_total`
//!
//! Rows are in ascending year order with `unknown` last. The header is
//! always written, so an empty analysis still produces valid files.

use crate::error::{CliError, Result};
use dipscope_analyzer::AnalysisReport;
use dipscope_domain::{RatioRow, YearTable};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Per-year counts file name.
pub const YEAR_AGGREGATES_FILE: &str = "year_aggregates.csv";

/// Ratio file name.
pub const RATIO_FILE: &str = "ratio_by_year.csv";

/// Header of the per-year counts file.
pub const YEAR_AGGREGATES_HEADER: [&str; 6] = ["year", "total", "eco_only", "sec_only", "mixed", "none"];

/// Header of the ratio file.
pub const RATIO_HEADER: [&str; 4] = ["year", "ratio", "sec_total", "eco_total"];

/// Ratio cell: 4 decimals, empty when missing.
pub fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map(|r| format!("{:.4}", r)).unwrap_or_default()
}

/// Write the per-year counts as CSV.
pub fn write_year_aggregates<W: Write>(writer: W, table: &YearTable) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(YEAR_AGGREGATES_HEADER)?;
    for row in table.rows() {
        csv_writer.write_record([
            row.year().to_string(),
            row.total().to_string(),
            row.eco_only().to_string(),
            row.sec_only().to_string(),
            row.mixed().to_string(),
            row.none().to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the ratio rows as CSV.
pub fn write_ratios<W: Write>(writer: W, rows: &[RatioRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(RATIO_HEADER)?;
    for row in rows {
        csv_writer.write_record([
            row.year.to_string(),
            format_ratio(row.ratio),
            row.sec_total.to_string(),
            row.eco_total.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Files written and failures met by [`write_reports`].
#[derive(Debug, Default)]
pub struct ReportOutcome {
    /// Files written
    pub written: Vec<PathBuf>,

    /// Files that could not be written, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl ReportOutcome {
    /// Whether every file was written
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write both CSV files to `results_dir`
///
/// Failures are logged and collected, never returned.
pub fn write_reports(results_dir: &Path, report: &AnalysisReport) -> ReportOutcome {
    let mut outcome = ReportOutcome::default();

    if let Err(e) = fs::create_dir_all(results_dir) {
        error!("Cannot create {}: {}", results_dir.display(), e);
    }

    let aggregates = results_dir.join(YEAR_AGGREGATES_FILE);
    record(
        &mut outcome,
        aggregates.clone(),
        File::create(&aggregates)
            .map_err(CliError::from)
            .and_then(|file| write_year_aggregates(file, &report.table)),
    );

    let ratios = results_dir.join(RATIO_FILE);
    record(
        &mut outcome,
        ratios.clone(),
        File::create(&ratios)
            .map_err(CliError::from)
            .and_then(|file| write_ratios(file, &report.ratios)),
    );

    outcome
}

fn record(outcome: &mut ReportOutcome, path: PathBuf, result: Result<()>) {
    match result {
        Ok(()) => {
            info!("Wrote {}", path.display());
            outcome.written.push(path);
        }
        Err(e) => {
            error!("Failed to write {}: {}", path.display(), e);
            outcome.failed.push((path, e.to_string()));
        }
    }
}
