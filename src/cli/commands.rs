//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Offline checks and lookups for Saviynt provider configurations
#[derive(Parser, Debug)]
#[command(name = "saviynt-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level for stderr logging
    #[arg(long, global = true, env = "SAVIYNT_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level: explicit level, else debug when verbose, else info
    pub fn log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::default(),
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a resource-check document (rules + version compatibility)
    Check {
        /// Resource-check file (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Saviynt platform version, overrides the document's value
        #[arg(long, env = "SAVIYNT_PLATFORM_VERSION")]
        platform_version: Option<String>,
    },

    /// Translate a value through one of the static tables
    Translate {
        /// Table name, e.g. role_type or risk_level
        table: String,

        /// Value to translate
        value: String,

        /// Map an API value back to its key
        #[arg(short, long)]
        reverse: bool,
    },

    /// Generate an error code and show its standard message
    ErrorCode {
        /// Connector type, e.g. AD or REST (ignored with --security-system)
        #[arg(long, required_unless_present = "security_system")]
        connector: Option<String>,

        /// Generate a security system code instead
        #[arg(long)]
        security_system: bool,

        /// Category: config, business, api, state or internal
        #[arg(long)]
        category: String,

        /// Sequence number within the category
        #[arg(long)]
        sequence: u32,
    },

    /// List recognized platform versions
    Versions,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
