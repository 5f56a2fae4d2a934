//! cli
//!
//! Command-line interface layer for pushmeta.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and apply flag overrides
//! - Read input files and delegate to [`crate::core::metadata`]
//!
//! # Architecture
//!
//! The CLI layer is thin. Merge semantics live entirely in `core`; this
//! layer only does file I/O and presentation.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};

/// Global settings derived from CLI flags and configuration.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// JSON output, from `--json` or the config file.
    pub json: bool,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    // CLI flag takes precedence; config can only turn JSON on.
    let ctx = Context {
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json || config.json_output(),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}
