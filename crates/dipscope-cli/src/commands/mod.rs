//! Command implementations.

pub mod analyze;
pub mod fetch;
pub mod process;
pub mod run;

pub use self::analyze::{analyze_records, execute_analyze, AnalysisRun};
pub use self::fetch::execute_fetch;
pub use self::process::{build_records, execute_process};
pub use self::run::execute_run;
