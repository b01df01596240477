//! CLI command implementations for covermap.
//!
//! Available commands:
//! - **scaffold**: Generate a test skeleton for one component
//! - **analyze**: Rank a project's untested and under-tested files
//! - **init**: Write a default configuration file
//!
//! Each command exposes a library function returning a value and a thin
//! `handle_*` wrapper that prints.

pub mod analyze;
pub mod init;
pub mod scaffold;

pub use analyze::{analyze_coverage, handle_analyze, AnalyzeConfig, AnalyzeOptions};
pub use init::init_config;
pub use scaffold::{
    generate_scaffold, handle_scaffold, ScaffoldCommandConfig, ScaffoldOutcome, ScaffoldRequest,
};
