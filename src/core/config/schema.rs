//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$PUSHMETA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/pushmeta/config.toml`
//! 3. `~/.pushmeta/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing. Unknown keys are rejected by the
//! parser itself.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration for the `pushmeta` CLI.
///
/// Nothing here can change how metadata is merged; only how results
/// are presented.
///
/// # Example
///
/// ```toml
/// output = "json"
///
/// [merge]
/// show_stages = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Result format ("pretty" or "json")
    pub output: Option<String>,

    /// `merge` command defaults
    pub merge: Option<MergeDefaults>,
}

impl UserConfig {
    /// Valid output formats.
    pub const VALID_OUTPUTS: &'static [&'static str] = &["pretty", "json"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            if !Self::VALID_OUTPUTS.contains(&output.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid output '{}', must be one of: {}",
                    output,
                    Self::VALID_OUTPUTS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// `merge` command defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MergeDefaults {
    /// Also print the source-merge stage result
    pub show_stages: Option<bool>,
}
