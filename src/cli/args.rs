//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Load configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Suppress human-readable output and warnings
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pushmeta - Resolve the labels and annotations a pushed secret should carry
#[derive(Parser, Debug)]
#[command(name = "pushmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress human-readable output and warnings (JSON is still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a PushSecretMetadata descriptor and show its normalized form
    #[command(
        name = "validate",
        long_about = "Check a PushSecretMetadata descriptor and show its normalized form.\n\n\
            The descriptor must declare apiVersion \
            kubernetes.external-secrets.io/v1alpha1 and kind PushSecretMetadata, may \
            only contain known fields, and may only use recognized merge policies. \
            Unset policies are shown as Merge.",
        after_help = "\
EXAMPLES:
    # Validate a descriptor file
    pushmeta validate metadata.yaml

    # Print the normalized descriptor as JSON
    pushmeta validate metadata.json --json"
    )]
    Validate {
        /// Path to the descriptor (YAML or JSON)
        descriptor: PathBuf,
    },

    /// Compute the labels and annotations to write to the target object
    #[command(
        name = "merge",
        long_about = "Compute the labels and annotations to write to the target object.\n\n\
            The descriptor's literals are first merged into the source object's \
            metadata using sourceMergePolicy, and the result is then merged into the \
            target object's current metadata using targetMergePolicy. Without a \
            descriptor, the source metadata is merged into the target as is.",
        after_help = "\
EXAMPLES:
    # Merge with a descriptor
    pushmeta merge --source local.json --target remote.json --metadata metadata.json

    # Default policies, showing the intermediate source stage
    pushmeta merge --source local.json --target remote.json --show-stages"
    )]
    Merge {
        /// Source object (JSON with a metadata block)
        #[arg(long, value_name = "PATH")]
        source: PathBuf,

        /// Target object (JSON with a metadata block)
        #[arg(long, value_name = "PATH")]
        target: PathBuf,

        /// PushSecretMetadata descriptor (YAML or JSON)
        #[arg(long, value_name = "PATH")]
        metadata: Option<PathBuf>,

        /// Also print the source-merge stage result
        #[arg(long)]
        show_stages: bool,
    },

    /// Show the effective configuration
    #[command(name = "config")]
    Config,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
