//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output from the CLI goes through this module so that
//! quiet, debug, and JSON modes are handled in one place. The `core`
//! modules never print.

pub mod output;
