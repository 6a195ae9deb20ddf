// src/lib.rs
// notekeeper - single-user notes in a local SQLite file

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod db;
pub mod error;

pub use db::{Note, NoteStore};
pub use error::{NotesError, Result};
