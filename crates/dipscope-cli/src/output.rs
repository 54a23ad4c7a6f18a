//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::format_ratio;
use colored::*;
use dipscope_analyzer::{AnalysisReport, TermOrigin};
use dipscope_domain::{Year, YearAggregate, UNKNOWN_YEAR_LABEL};
use dipscope_fetch::FetchReport;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the per-year analysis summary.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    fn format_report_json(&self, report: &AnalysisReport) -> Result<String> {
        let years: Vec<serde_json::Value> = report.table.rows().map(row_json).collect();
        let summary = serde_json::json!({
            "records": report.records,
            "years": years,
            "totals": row_json(&report.totals),
        });
        Ok(serde_json::to_string_pretty(&summary)?)
    }

    fn format_report_table(&self, report: &AnalysisReport) -> String {
        if report.is_empty() {
            return self.colorize("No documents to analyze.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Year", "Total", "Eco only", "Sec only", "Mixed", "None", "Ratio"]);
        for row in report.table.rows() {
            builder.push_record(row_cells(row));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let totals = &report.totals;
        let summary = format!(
            "Total documents: {} (eco_only={}, sec_only={}, mixed={}, none={}, ratio={})",
            totals.total(),
            totals.eco_only(),
            totals.sec_only(),
            totals.mixed(),
            totals.none(),
            display_ratio(totals.ratio())
        );

        format!("{}\n{}", table, self.colorize(&summary, "cyan"))
    }

    fn format_report_quiet(&self, report: &AnalysisReport) -> String {
        report
            .table
            .rows()
            .map(|row| row_cells(row).join(","))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the outcome of a fetch run.
    pub fn format_fetch_report(&self, report: &FetchReport) -> String {
        let mut lines = Vec::with_capacity(report.endpoints.len() + 1);
        for endpoint in &report.endpoints {
            let line = format!(
                "{}: {} page(s), {} document(s)",
                endpoint.endpoint, endpoint.pages, endpoint.documents
            );
            match &endpoint.error {
                Some(e) => lines.push(self.error(&format!("{} - stopped: {}", line, e))),
                None => lines.push(self.success(&line)),
            }
        }
        lines.push(self.info(&format!(
            "{} page(s) with {} document(s) saved",
            report.total_pages(),
            report.total_documents()
        )));
        lines.join("\n")
    }

    /// Warning shown when the built-in terms replaced the term file.
    pub fn term_notice(&self, origin: &TermOrigin, terms_file: &Path) -> Option<String> {
        match origin {
            TermOrigin::File => None,
            TermOrigin::Fallback(reason) => Some(self.warning(&format!(
                "Using built-in fallback terms, {} not usable: {}",
                terms_file.display(),
                reason
            ))),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn row_cells(row: &YearAggregate) -> [String; 7] {
    [
        row.year().to_string(),
        row.total().to_string(),
        row.eco_only().to_string(),
        row.sec_only().to_string(),
        row.mixed().to_string(),
        row.none().to_string(),
        format_ratio(row.ratio()),
    ]
}

fn row_json(row: &YearAggregate) -> serde_json::Value {
    let year = match row.year() {
        Year::Known(y) => serde_json::json!(y),
        Year::Unknown => serde_json::json!(UNKNOWN_YEAR_LABEL),
    };
    serde_json::json!({
        "year": year,
        "total": row.total(),
        "eco_only": row.eco_only(),
        "sec_only": row.sec_only(),
        "mixed": row.mixed(),
        "none": row.none(),
        "eco_total": row.eco_total(),
        "sec_total": row.sec_total(),
        "ratio": row.ratio(),
    })
}

fn display_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(_) => format_ratio(ratio),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dipscope_domain::{Category, YearTable};
    use dipscope_fetch::EndpointReport;

    fn report() -> AnalysisReport {
        let mut table = YearTable::new();
        table.record(Year::Known(2021), Category::EcoOnly);
        table.record(Year::Known(2021), Category::Mixed);
        table.record(Year::Unknown, Category::SecOnly);
        AnalysisReport {
            ratios: table.ratios(),
            totals: table.totals(),
            table,
            records: 3,
        }
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("Eco only"));
        assert!(output.contains("unknown"));
        assert!(output.contains("Total documents: 3"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&report()).unwrap();
        assert_eq!(output, "2021,2,1,0,1,0,0.5000\nunknown,1,0,1,0,0,");
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["records"], 3);
        assert_eq!(value["years"][0]["year"], 2021);
        assert_eq!(value["years"][1]["year"], "unknown");
        assert!(value["years"][1]["ratio"].is_null());
    }

    #[test]
    fn test_empty_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let empty = AnalysisReport {
            table: YearTable::new(),
            ratios: Vec::new(),
            totals: YearAggregate::zeroed(Year::Unknown),
            records: 0,
        };
        let output = formatter.format_report(&empty).unwrap();
        assert!(output.contains("No documents"));
    }

    #[test]
    fn test_fetch_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_fetch_report(&FetchReport {
            endpoints: vec![EndpointReport {
                endpoint: "vorgang".into(),
                pages: 2,
                documents: 150,
                error: Some("Unexpected status 401 for vorgang".into()),
            }],
        });
        assert!(output.contains("✗ vorgang: 2 page(s), 150 document(s) - stopped"));
        assert!(output.contains("2 page(s) with 150 document(s) saved"));
    }

    #[test]
    fn test_term_notice_only_for_fallback() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let path = Path::new("data/term_list.json");
        assert_eq!(formatter.term_notice(&TermOrigin::File, path), None);

        let notice = formatter
            .term_notice(&TermOrigin::Fallback("file not found".into()), path)
            .unwrap();
        assert_eq!(
            notice,
            "⚠ Using built-in fallback terms, data/term_list.json not usable: file not found"
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
