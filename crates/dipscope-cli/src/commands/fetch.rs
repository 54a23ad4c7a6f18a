//! Fetch command implementation.

use crate::cli::{FetchArgs, FetchFilterArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use dipscope_fetch::{DipClient, FetchConfig, FetchReport, RawPageWriter};
use tracing::info;

/// Execute the fetch command.
pub async fn execute_fetch(args: FetchArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    config.apply_paths(&args.paths);
    fetch_pages(&args.filter, config, formatter).await?;
    Ok(())
}

/// Download every selected endpoint into the raw directory.
pub(crate) async fn fetch_pages(
    filter: &FetchFilterArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<FetchReport> {
    let api = filtered_api_config(&config.api, filter)?;
    let client = DipClient::from_env(api)?;
    let mut writer = RawPageWriter::new(&config.storage.raw_dir);

    info!(
        "Fetching {} endpoint(s) into {}",
        client.config().endpoints.len(),
        config.storage.raw_dir.display()
    );
    let report = client.fetch_all(&mut writer).await;

    println!("{}", formatter.format_fetch_report(&report));
    if report.has_errors() {
        println!(
            "{}",
            formatter.warning("Some endpoints stopped early; their saved pages are kept")
        );
    }
    Ok(report)
}

/// Apply date and endpoint selection to the `[api]` settings.
pub(crate) fn filtered_api_config(api: &FetchConfig, filter: &FetchFilterArgs) -> Result<FetchConfig> {
    let mut api = api.clone();

    if let Some(from) = &filter.from {
        api.date_range.from = Some(from.clone());
    }
    if let Some(to) = &filter.to {
        api.date_range.to = Some(to.clone());
    }

    if !filter.endpoints.is_empty() {
        if let Some(unknown) = filter
            .endpoints
            .iter()
            .find(|name| !api.endpoints.contains_key(name.as_str()))
        {
            return Err(CliError::InvalidInput(format!(
                "Unknown endpoint '{}' (configured: {})",
                unknown,
                api.endpoints.keys().cloned().collect::<Vec<_>>().join(", ")
            )));
        }
        api.endpoints
            .retain(|name, _| filter.endpoints.iter().any(|selected| selected == name));
    }

    Ok(api)
}
