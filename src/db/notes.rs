// db/notes.rs
// Note CRUD operations

use rusqlite::{Connection, OptionalExtension, params};

use super::types::Note;
use crate::error::Result;

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Parse a Note from a rusqlite Row selected with `NOTE_COLUMNS`
pub fn parse_note_row(row: &rusqlite::Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a note; both timestamps come from the column defaults
pub fn create_note(conn: &Connection, title: &str, content: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO notes (title, content) VALUES (?1, ?2)",
        params![title, content],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All notes, most recently updated first
pub fn list_notes(conn: &Connection) -> Result<Vec<Note>> {
    let sql = format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY updated_at DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], parse_note_row)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

/// Get a note by ID
pub fn get_note(conn: &Connection, id: i64) -> Result<Option<Note>> {
    let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1");
    conn.query_row(&sql, [id], parse_note_row)
        .optional()
        .map_err(Into::into)
}

/// Replace title and content, refreshing `updated_at`.
///
/// The new `updated_at` never moves backwards, even if the wall clock does,
/// which also keeps it at or after `created_at`.
pub fn update_note(conn: &Connection, id: i64, title: &str, content: &str) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE notes
         SET title = ?1,
             content = ?2,
             updated_at = MAX(updated_at, strftime('%Y-%m-%d %H:%M:%f', 'now'))
         WHERE id = ?3",
        params![title, content, id],
    )?;
    Ok(changed > 0)
}

/// Hard-delete a note
pub fn delete_note(conn: &Connection, id: i64) -> Result<bool> {
    let changed = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
    Ok(changed > 0)
}
