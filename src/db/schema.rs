// db/schema.rs
// Database schema

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

/// Single-table schema. `AUTOINCREMENT` keeps ids of deleted notes from being reissued.
///
/// Timestamps are fixed-width UTC text with millisecond precision, so comparing
/// two stored values compares the instants.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);
"#;

/// Create the notes table if it does not exist yet.
///
/// Idempotent: running it against an initialized database changes nothing.
pub fn init_schema(conn: &Connection) -> Result<()> {
    if notes_table_exists(conn)? {
        debug!("Notes table already present");
        return Ok(());
    }
    conn.execute_batch(SCHEMA)?;
    info!("Created notes table");
    Ok(())
}

/// Whether the notes table is present
pub fn notes_table_exists(conn: &Connection) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'notes')",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}
