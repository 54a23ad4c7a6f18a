//! dipscope CLI - Bundestag DIP documents by ecology and security keywords.

use anyhow::Context;
use clap::Parser;
use dipscope_cli::commands;
use dipscope_cli::logging;
use dipscope_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Settings are read before logging starts so `[logging] file` applies
    let settings = Config::read(&cli.config);
    let log_file = cli.log_file.clone().or_else(|| {
        settings
            .as_ref()
            .ok()
            .and_then(Option::as_ref)
            .and_then(|config| config.logging.file.clone())
    });
    let _log_guard = init_tracing(cli.verbose, log_file.as_deref());

    let config = Config::resolve(&cli.config, settings);
    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, and to `log_file` without colors when given.
///
/// `RUST_LOG` applies unless `-v` asks for debug.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let file = log_file.and_then(|path| match logging::file_writer(path) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!("Warning: not logging to file: {}", e);
            None
        }
    });
    let (file_layer, guard) = match file {
        Some((writer, guard)) => (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

async fn run(cli: Cli, mut config: Config) -> anyhow::Result<()> {
    config
        .validate()
        .with_context(|| format!("Invalid settings in {}", cli.config.display()))?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.output.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Fetch(args) => {
            commands::execute_fetch(args, &mut config, &formatter)
                .await
                .context("Fetch failed")?;
        }
        Command::Process(args) => {
            commands::execute_process(args, &mut config, &formatter)?;
        }
        Command::Analyze(args) => {
            commands::execute_analyze(args, &mut config, &formatter).context("Analysis failed")?;
        }
        Command::Run(args) => {
            commands::execute_run(args, &mut config, &formatter)
                .await
                .context("Pipeline failed")?;
        }
    }

    Ok(())
}
