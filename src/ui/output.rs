//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Diagnostics go to stderr; results go to stdout. When JSON output is
//! selected, stdout carries only machine-readable JSON.

use std::fmt::Display;

use crate::core::types::MetadataMap;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a labels or annotations map under a heading.
///
/// An absent map and an empty map render differently, because a
/// `Replace` policy can produce either.
///
/// ```
/// use pushmeta::core::types::MetadataMap;
/// use pushmeta::ui::output::format_map;
///
/// let mut labels = MetadataMap::new();
/// labels.insert("app".into(), "web".into());
///
/// assert_eq!(format_map("labels", Some(&labels)), "labels:\n  app=web");
/// assert_eq!(format_map("labels", Some(&MetadataMap::new())), "labels: (empty)");
/// assert_eq!(format_map("labels", None), "labels: (none)");
/// ```
pub fn format_map(title: &str, map: Option<&MetadataMap>) -> String {
    match map {
        None => format!("{}: (none)", title),
        Some(map) if map.is_empty() => format!("{}: (empty)", title),
        Some(map) => {
            let entries: Vec<String> = map.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}:\n{}", title, format_list(&entries, "  "))
        }
    }
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
