//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

use super::analyze::{apply_analysis, report_records};
use super::fetch::fetch_pages;
use super::process::process_and_save;

/// Execute the full pipeline: (fetch) → process → analyze.
pub async fn execute_run(args: RunArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    config.apply_paths(&args.paths);
    apply_analysis(config, &args.analysis);

    if args.fetch {
        fetch_pages(&args.filter, config, formatter).await?;
    }

    let records = process_and_save(config, formatter);
    report_records(&records, config, formatter)
}
