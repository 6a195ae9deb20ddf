// src/config/mod.rs
// Configuration: config file, command-line overrides and built-in defaults

pub mod file;

pub use file::{NotesConfig, parse_level};

use std::path::PathBuf;
use tracing::Level;

use crate::error::Result;

/// Database file used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "notes.db";

/// Quiet by default so log lines don't interleave with the prompt
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Effective settings after applying precedence: flag > config file > default
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Settings {
    /// Merge the config file with command-line overrides.
    ///
    /// `verbosity` counts `-v` flags: 1 = info, 2 = debug, 3+ = trace.
    /// Zero leaves the configured level in place.
    pub fn resolve(config: &NotesConfig, db_override: Option<PathBuf>, verbosity: u8) -> Result<Self> {
        let db_path = db_override
            .or_else(|| config.database.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let log_level = match verbosity {
            0 => config.log_level()?.unwrap_or(DEFAULT_LOG_LEVEL),
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Ok(Self { db_path, log_level })
    }
}
