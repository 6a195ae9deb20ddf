// src/error.rs
// Error types for notekeeper

use thiserror::Error;

/// Main error type for the notekeeper library
///
/// "Not found" is never an error here: lookups return `Option` and
/// mutations return `bool`. Everything below is either a storage failure
/// or a configuration problem.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("note store is closed")]
    StoreClosed,

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using NotesError
pub type Result<T> = std::result::Result<T, NotesError>;

impl NotesError {
    /// Whether the engine (or the closed handle) failed the request
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StoreClosed | Self::Db(_) | Self::Io(_))
    }
}
