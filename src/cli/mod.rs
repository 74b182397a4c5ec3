//! cli
//!
//! Command-line interface for Rollbook.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags with the user configuration
//! - Install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Every invocation builds fresh in-memory stores
//! from a fixture file, runs one query against them through the
//! [`crate::store`] traits, and prints the result. Nothing is written back.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Settings shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Fixture to load, from `--data` or the config file
    pub data: Option<PathBuf>,
    /// Print results as JSON
    pub json: bool,
    pub verbosity: Verbosity,
}

impl Context {
    /// Merge CLI flags over the loaded configuration.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            data: cli
                .data
                .clone()
                .or_else(|| config.data_file().map(PathBuf::from)),
            json: cli.json || config.json_output(),
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let config = Config::load().context("Failed to load configuration")?;
    let ctx = Context::new(&cli, &config);
    if let Some(path) = config.path() {
        output::debug(format!("config: {}", path.display()), ctx.verbosity);
    }

    commands::dispatch(cli.command, &ctx)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// events from this crate under `--debug`.
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,rollbook=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A subscriber may already be set when running inside a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
