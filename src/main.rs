// src/main.rs
// notekeeper - interactive note keeping

use anyhow::{Context, Result};
use clap::Parser;
use notekeeper::cli::{Cli, LinePrompter, TerminalPrompter, run_menu};
use notekeeper::config::{NotesConfig, Settings};
use notekeeper::db::NoteStore;
use std::io::IsTerminal;
use tracing::warn;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --config must be valid; the default location is best-effort
    let (config, config_warning) = match &cli.config {
        Some(path) => (NotesConfig::load_from(path)?, None),
        None => match NotesConfig::load_default() {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(e) => (NotesConfig::default(), Some(e)),
        },
    };

    let settings = Settings::resolve(&config, cli.db, cli.verbose)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(e) = config_warning {
        warn!(error = %e, "Ignoring config file, using defaults");
    }

    let mut store = NoteStore::open(&settings.db_path).with_context(|| {
        format!("Failed to open note store at {}", settings.db_path.display())
    })?;

    let mut out = std::io::stdout();
    if std::io::stdin().is_terminal() {
        run_menu(&mut store, &mut TerminalPrompter::new(), &mut out)?;
    } else {
        let mut prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stdout());
        run_menu(&mut store, &mut prompter, &mut out)?;
    }

    Ok(())
}
