//! # rulekeeper: Editorial Checks for Blog Posts
//!
//! This is the main entry point for the `rulekeeper` command-line interface.
//! The binary is a thin entrypoint; all logic is delegated to the
//! `rulekeeper-cli` library crate.

use anyhow::Result;
use clap::Parser;
use rulekeeper_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

// --- Main Application Entry ---

fn main() -> Result<()> {
    // 1. Setup logging
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rulekeeper=info".parse()?))
        .with_ansi(false) // Make logs clean for file output or CI
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Call the library's run function and map the outcome to the exit code
    match run(cli) {
        Ok(false) => Ok(()),
        Ok(true) => {
            // At least one post violated an error-category rule.
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("[rulekeeper error] Failed to execute command: {e:?}");
            std::process::exit(1);
        }
    }
}
