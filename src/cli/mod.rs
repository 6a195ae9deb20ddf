// src/cli/mod.rs
// Command-line entry: flags plus the interactive menu

use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub mod menu;
pub mod prompt;

pub use menu::{MenuAction, run_menu};
pub use prompt::{Choice, LinePrompter, Prompter, TerminalPrompter};

#[derive(Parser, Debug)]
#[command(name = "notekeeper")]
#[command(about = "Keep short notes in a local SQLite file")]
#[command(version)]
pub struct Cli {
    /// Database file (default: notes.db in the current directory)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file (default: <config dir>/notekeeper/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
