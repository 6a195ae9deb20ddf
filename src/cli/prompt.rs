// src/cli/prompt.rs
// Input sources for the interactive menu

use anyhow::Result;
use dialoguer::{Input, Select};
use std::io::{BufRead, Write};

/// Outcome of a menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the offered items
    Picked(usize),
    /// The answer matched no item
    Invalid,
    /// Input ended or the user backed out
    Ended,
}

/// Where the menu reads its answers from.
///
/// Ended input (`Choice::Ended`, or `None` from `input`) is treated like
/// choosing Exit.
pub trait Prompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Choice>;

    /// Read one line of free text; empty answers are allowed
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Arrow-key menus and line editing on a real terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Choice> {
        let choice = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice.map_or(Choice::Ended, Choice::Picked))
    }

    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }
}

/// Numbered menus over plain lines, for piped stdin
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Choice> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, item)?;
        }
        write!(self.writer, "\n{} (1-{}): ", prompt, items.len())?;
        self.writer.flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(Choice::Ended);
        };
        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Ok(Choice::Picked(n - 1)),
            _ => Ok(Choice::Invalid),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }
}
