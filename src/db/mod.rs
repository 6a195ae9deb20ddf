// db/mod.rs
// Note storage on a single rusqlite connection

mod notes;
mod schema;
mod types;

#[cfg(test)]
mod notes_tests;

pub use notes::{create_note, delete_note, get_note, list_notes, parse_note_row, update_note};
pub use schema::{init_schema, notes_table_exists};
pub use types::*;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{NotesError, Result};

/// Owned handle to the notes database.
///
/// Open until [`NoteStore::close`] is called; every operation after that
/// fails with [`NotesError::StoreClosed`].
#[derive(Debug)]
pub struct NoteStore {
    conn: Option<Connection>,
    path: Option<PathBuf>,
}

impl NoteStore {
    /// Open the database at path, creating the file and schema if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        info!(path = %path.display(), "Opened note store");

        Ok(Self {
            conn: Some(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Some(conn),
            path: None,
        })
    }

    /// Backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// How long a statement waits on another connection's lock before
    /// failing with "database is locked"
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.conn()?.busy_timeout(timeout)?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(NotesError::StoreClosed)
    }

    /// Create a note and return its new id
    pub fn create(&self, title: &str, content: &str) -> Result<i64> {
        let id = create_note(self.conn()?, title, content)?;
        debug!(id, "Created note");
        Ok(id)
    }

    /// Every note, most recently updated first
    pub fn list_all(&self) -> Result<Vec<Note>> {
        let notes = list_notes(self.conn()?)?;
        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    pub fn get(&self, id: i64) -> Result<Option<Note>> {
        get_note(self.conn()?, id)
    }

    /// Overwrite both title and content. Returns false if no such note.
    pub fn update(&self, id: i64, title: &str, content: &str) -> Result<bool> {
        let updated = update_note(self.conn()?, id, title, content)?;
        debug!(id, updated, "Update note");
        Ok(updated)
    }

    /// Returns false if no such note
    pub fn delete(&self, id: i64) -> Result<bool> {
        let deleted = delete_note(self.conn()?, id)?;
        debug!(id, deleted, "Delete note");
        Ok(deleted)
    }

    /// Release the connection. Closing an already closed store is a no-op.
    pub fn close(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            debug!("Note store already closed");
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!("Closed note store");
                Ok(())
            }
            Err((conn, e)) => {
                // Still open, put it back
                warn!(error = %e, "Failed to close note store");
                self.conn = Some(conn);
                Err(e.into())
            }
        }
    }
}
