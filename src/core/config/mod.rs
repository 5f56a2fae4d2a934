//! core::config
//!
//! Configuration schema and loading for the `pushmeta` CLI.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$PUSHMETA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/pushmeta/config.toml`
//! 3. `~/.pushmeta/config.toml`
//!
//! A missing file is not an error. A file that exists but fails to parse
//! or validate is.
//!
//! # Example
//!
//! ```no_run
//! use pushmeta::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Output: {}", config.output());
//! println!("Show stages: {}", config.show_stages());
//! ```

pub mod schema;

pub use schema::{MergeDefaults, UserConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PUSHMETA_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (defaults if no file was found)
    pub user: UserConfig,
    /// Path to the file the config was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let user: UserConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        user.validate()?;

        Ok(Config {
            user,
            path: Some(path.to_path_buf()),
        })
    }

    /// Locate the first existing config file.
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check $PUSHMETA_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/pushmeta/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("pushmeta/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.pushmeta/config.toml
        dirs::home_dir()
            .map(|home| home.join(".pushmeta/config.toml"))
            .filter(|path| path.exists())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the result format.
    ///
    /// Defaults to "pretty" if not configured.
    pub fn output(&self) -> &str {
        self.user.output.as_deref().unwrap_or("pretty")
    }

    /// Check if JSON output is configured.
    pub fn json_output(&self) -> bool {
        self.output() == "json"
    }

    /// Check if `merge` should print the source stage too.
    ///
    /// Defaults to `false` if not configured.
    pub fn show_stages(&self) -> bool {
        self.user
            .merge
            .as_ref()
            .and_then(|m| m.show_stages)
            .unwrap_or(false)
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
