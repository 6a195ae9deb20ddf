// db/types.rs
// Data structures returned by database operations

use chrono::NaiveDateTime;

/// A stored note
///
/// Timestamps are UTC as written by SQLite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
