// src/config/file.rs
// File-based configuration from <config dir>/notekeeper/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::{NotesError, Result};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// `[database]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite file; relative paths resolve against the working directory
    pub path: Option<PathBuf>,
}

/// `[log]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// error | warn | info | debug | trace
    pub level: Option<String>,
}

impl NotesConfig {
    /// Parse config from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| NotesError::Config(e.to_string()))
    }

    /// Load an explicitly requested config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            NotesError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&contents)
            .map_err(|e| NotesError::Config(format!("{}: {e}", path.display())))
    }

    /// Load the config file from its default location.
    ///
    /// `Ok(None)` when there is no config directory or no file in it.
    pub fn load_default() -> Result<Option<Self>> {
        let Some(path) = Self::default_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notekeeper").join("config.toml"))
    }

    /// Configured log level, if any
    pub fn log_level(&self) -> Result<Option<Level>> {
        self.log.level.as_deref().map(parse_level).transpose()
    }
}

/// Parse a log level name (case-insensitive)
pub fn parse_level(value: &str) -> Result<Level> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| NotesError::Config(format!("unknown log level '{value}'")))
}
