//! CLI module
//!
//! Command-line interface for checking resource configurations offline.
//!
//! # Commands
//!
//! - `check` - Run rule presets and version compatibility on a resource-check file
//! - `translate` - Look up a value in a translation table
//! - `error-code` - Generate an error code and show its standard message
//! - `versions` - List recognized platform versions

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{
    check_report, error_code_report, translate_report, versions_report, Report, Runner,
    EXIT_FAILED, EXIT_OK,
};
