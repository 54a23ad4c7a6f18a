//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use dipscope_domain::{CombinedRecord, MergeStats};
use dipscope_ingest::{combine_batch, write_combined, RawStore};
use tracing::error;

/// Execute the process command.
pub fn execute_process(args: ProcessArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    config.apply_paths(&args.paths);
    process_and_save(config, formatter);
    Ok(())
}

/// Load raw pages and merge them into combined records.
pub fn build_records(config: &Config) -> (Vec<CombinedRecord>, MergeStats) {
    let loaded = RawStore::new(&config.storage.raw_dir).load_report();
    combine_batch(&loaded.batch)
}

/// Build the combined records and write `combined_texts.json`.
///
/// A write failure is logged; the records are returned either way.
pub(crate) fn process_and_save(config: &Config, formatter: &Formatter) -> Vec<CombinedRecord> {
    let (records, stats) = build_records(config);

    let path = config.storage.combined_path();
    match write_combined(&path, &records) {
        Ok(()) => println!(
            "{}",
            formatter.success(&format!(
                "{} records ({} merged, {} orphaned) written to {}",
                records.len(),
                stats.merged,
                stats.orphans,
                path.display()
            ))
        ),
        Err(e) => {
            error!("Failed to write {}: {}", path.display(), e);
            println!("{}", formatter.error(&format!("Could not write {}", path.display())));
        }
    }

    records
}
