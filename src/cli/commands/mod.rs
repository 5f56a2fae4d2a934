//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Reads its input files
//! 2. Calls into `core` to parse and merge
//! 3. Formats and displays output
//!
//! Human-readable results go through [`crate::ui::output::print`], so
//! `--quiet` silences them in every command. JSON results are always
//! written to stdout.
//!
//! Handlers never write to the objects they read.

mod completion;
mod config_cmd;
mod merge;
mod validate;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::show as config_show;
pub use merge::merge;
pub use validate::validate;

use super::args::Command;
use super::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Validate { descriptor } => validate(ctx, &descriptor),
        Command::Merge {
            source,
            target,
            metadata,
            show_stages,
        } => merge(ctx, &source, &target, metadata.as_deref(), show_stages),
        Command::Config => config_show(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
