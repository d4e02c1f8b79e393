// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! Saviynt provider check CLI
//!
//! Offline validation of resource configurations

use clap::Parser;
use saviynt_provider_core::cli::{Cli, Runner};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let level: tracing::Level = cli.log_level().into();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);
    let code = runner.run()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
