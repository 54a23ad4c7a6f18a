//! CLI command definitions and argument parsing.

use crate::config::{OutputFormat, DEFAULT_CONFIG_FILE};
use clap::{Args, Parser, Subcommand};
use dipscope_analyzer::{MatchMode, TextScope};
use std::path::PathBuf;

/// dipscope - Bundestag DIP documents by ecology and security keywords.
#[derive(Debug, Parser)]
#[command(name = "dipscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file path
    #[arg(short, long, global = true, env = "DIPSCOPE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, env = "DIPSCOPE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (CSV-like lines)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download Drucksachen and Vorgänge from the DIP API
    Fetch(FetchArgs),

    /// Merge raw pages into combined_texts.json
    Process(ProcessArgs),

    /// Classify combined records and write the year tables
    Analyze(AnalyzeArgs),

    /// Process and analyze in one pass (optionally fetching first)
    Run(RunArgs),
}

/// Data location overrides shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    /// Directory of fetched API pages
    #[arg(long)]
    pub raw_dir: Option<PathBuf>,

    /// Directory of combined_texts.json
    #[arg(long)]
    pub processed_dir: Option<PathBuf>,

    /// Directory of the CSV results
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Term list JSON file
    #[arg(long)]
    pub terms: Option<PathBuf>,
}

/// Date window and endpoint selection for fetching.
#[derive(Debug, Clone, Default, Args)]
pub struct FetchFilterArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Fetch only these endpoints (repeatable)
    #[arg(short, long = "endpoint")]
    pub endpoints: Vec<String>,
}

/// Classification overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct AnalysisArgs {
    /// Term search mode
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// Searched part of each record
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,
}

/// Arguments for the fetch command.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    #[command(flatten)]
    pub filter: FetchFilterArgs,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Fetch from the API before processing
    #[arg(long)]
    pub fetch: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    #[command(flatten)]
    pub filter: FetchFilterArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Match mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MatchModeArg {
    /// Term anywhere in the text
    Substring,
    /// Term as a whole word
    Word,
}

/// Scope argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ScopeArg {
    /// Combined text of both documents
    Combined,
    /// Title only
    Title,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl From<MatchModeArg> for MatchMode {
    fn from(mode: MatchModeArg) -> Self {
        match mode {
            MatchModeArg::Substring => MatchMode::Substring,
            MatchModeArg::Word => MatchMode::Word,
        }
    }
}

impl From<ScopeArg> for TextScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Combined => TextScope::Combined,
            ScopeArg::Title => TextScope::Title,
        }
    }
}
