// src/cli/menu.rs
// Interactive note menu

use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::Write;
use tracing::{debug, warn};

use super::prompt::{Choice, Prompter};
use crate::db::{Note, NoteStore};
use crate::error::NotesError;

const MENU_TITLE: &str = "=== Note Management System ===";

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    List,
    View,
    Update,
    Delete,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Create,
        MenuAction::List,
        MenuAction::View,
        MenuAction::Update,
        MenuAction::Delete,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Create => "Create new note",
            MenuAction::List => "List all notes",
            MenuAction::View => "View note",
            MenuAction::Update => "Update note",
            MenuAction::Delete => "Delete note",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Whether the loop keeps going after an action
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user exits or input ends.
///
/// Storage errors from individual actions are reported and the loop goes on;
/// anything else (broken terminal, unwritable output) ends the session.
/// On exit the store is closed.
pub fn run_menu<P: Prompter, W: Write>(
    store: &mut NoteStore,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        writeln!(out, "\n{MENU_TITLE}")?;
        out.flush()?;

        let action = match prompter.select("Enter your choice", &labels)? {
            Choice::Picked(index) => MenuAction::ALL[index],
            Choice::Invalid => {
                writeln!(out, "Invalid choice. Please try again.")?;
                continue;
            }
            Choice::Ended => MenuAction::Exit,
        };
        debug!(?action, "Menu action");

        match run_action(action, store, prompter, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => match e.downcast_ref::<NotesError>() {
                Some(err) if err.is_storage() => {
                    warn!(?action, error = %err, "Note operation failed");
                    writeln!(out, "Error: {err}")?;
                }
                _ => return Err(e),
            },
        }
    }

    store.close()?;
    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn run_action<P: Prompter, W: Write>(
    action: MenuAction,
    store: &NoteStore,
    prompter: &mut P,
    out: &mut W,
) -> Result<Flow> {
    match action {
        MenuAction::Create => create(store, prompter, out),
        MenuAction::List => list(store, out),
        MenuAction::View => view(store, prompter, out),
        MenuAction::Update => update(store, prompter, out),
        MenuAction::Delete => delete(store, prompter, out),
        MenuAction::Exit => Ok(Flow::Exit),
    }
}

fn create<P: Prompter, W: Write>(store: &NoteStore, prompter: &mut P, out: &mut W) -> Result<Flow> {
    let Some(title) = prompter.input("Enter note title")? else {
        return Ok(Flow::Exit);
    };
    let Some(content) = prompter.input("Enter note content")? else {
        return Ok(Flow::Exit);
    };

    let id = store.create(&title, &content)?;
    writeln!(out, "Note created successfully with ID: {id}")?;
    Ok(Flow::Continue)
}

fn list<W: Write>(store: &NoteStore, out: &mut W) -> Result<Flow> {
    let notes = store.list_all()?;
    if notes.is_empty() {
        writeln!(out, "No notes found.")?;
        return Ok(Flow::Continue);
    }

    writeln!(out, "\nAll Notes:")?;
    for note in &notes {
        writeln!(out, "{}", format_note_summary(note))?;
    }
    Ok(Flow::Continue)
}

fn view<P: Prompter, W: Write>(store: &NoteStore, prompter: &mut P, out: &mut W) -> Result<Flow> {
    let id = match read_note_id(prompter, out)? {
        IdInput::Id(id) => id,
        IdInput::Invalid => return Ok(Flow::Continue),
        IdInput::Eof => return Ok(Flow::Exit),
    };

    match store.get(id)? {
        Some(note) => writeln!(out, "\n{}", format_note_detail(&note))?,
        None => writeln!(out, "Note not found.")?,
    }
    Ok(Flow::Continue)
}

fn update<P: Prompter, W: Write>(store: &NoteStore, prompter: &mut P, out: &mut W) -> Result<Flow> {
    let id = match read_note_id(prompter, out)? {
        IdInput::Id(id) => id,
        IdInput::Invalid => return Ok(Flow::Continue),
        IdInput::Eof => return Ok(Flow::Exit),
    };

    let Some(current) = store.get(id)? else {
        writeln!(out, "Note not found.")?;
        return Ok(Flow::Continue);
    };

    let Some(title) = prompter.input("Enter new title (press Enter to keep current)")? else {
        return Ok(Flow::Exit);
    };
    let Some(content) = prompter.input("Enter new content (press Enter to keep current)")? else {
        return Ok(Flow::Exit);
    };

    // The store always replaces both fields
    let title = keep_if_empty(title, current.title);
    let content = keep_if_empty(content, current.content);

    if store.update(id, &title, &content)? {
        writeln!(out, "Note updated successfully.")?;
    } else {
        writeln!(out, "Failed to update note.")?;
    }
    Ok(Flow::Continue)
}

fn delete<P: Prompter, W: Write>(store: &NoteStore, prompter: &mut P, out: &mut W) -> Result<Flow> {
    let id = match read_note_id(prompter, out)? {
        IdInput::Id(id) => id,
        IdInput::Invalid => return Ok(Flow::Continue),
        IdInput::Eof => return Ok(Flow::Exit),
    };

    if store.delete(id)? {
        writeln!(out, "Note deleted successfully.")?;
    } else {
        writeln!(out, "Note not found.")?;
    }
    Ok(Flow::Continue)
}

enum IdInput {
    Id(i64),
    Invalid,
    Eof,
}

fn read_note_id<P: Prompter, W: Write>(prompter: &mut P, out: &mut W) -> Result<IdInput> {
    let Some(raw) = prompter.input("Enter note ID")? else {
        return Ok(IdInput::Eof);
    };
    match parse_note_id(&raw) {
        Some(id) => Ok(IdInput::Id(id)),
        None => {
            writeln!(out, "Invalid note ID: '{raw}'")?;
            Ok(IdInput::Invalid)
        }
    }
}

/// Parse a user-typed note id, ignoring surrounding whitespace
pub fn parse_note_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn keep_if_empty(new: String, current: String) -> String {
    if new.is_empty() { current } else { new }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One-line listing entry
pub fn format_note_summary(note: &Note) -> String {
    format!(
        "ID: {}, Title: {}, Created: {}",
        note.id,
        note.title,
        format_timestamp(&note.created_at)
    )
}

/// Full view of a single note
pub fn format_note_detail(note: &Note) -> String {
    format!(
        "Title: {}\nContent: {}\nCreated: {}\nUpdated: {}",
        note.title,
        note.content,
        format_timestamp(&note.created_at),
        format_timestamp(&note.updated_at)
    )
}
