//! dipscope CLI library.
//!
//! This library provides the core functionality for the dipscope command-line interface,
//! including settings management, command execution, CSV results and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
