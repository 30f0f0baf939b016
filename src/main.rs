//! cardex - Lays out and previews work-item export cards.
//!
//! This is the main binary that launches the TUI preview. An optional first
//! argument names the card configuration file; without it the default
//! locations are searched and the built-in sample card is the fallback.
//!
//! Logging is off unless `CARDEX_LOG` is set, in which case it is used as the
//! filter (e.g. `CARDEX_LOG=cardex_layout=debug`) and events are written to
//! `cardex.log` in the current directory, away from the terminal UI.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use cardex_config::Config;
use cardex_protocol::dummy::sample_work_items;
use cardex_tui::{App, terminal};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CARDEX_LOG";
const LOG_FILE: &str = "cardex.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match &config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load card configuration {}", path.display()))?,
        None => Config::load().context("failed to load card configuration")?,
    };
    tracing::info!(name = config.display_name(), "starting cardex preview");

    let mut app = App::new(config, sample_work_items());
    if let Some(path) = config_path {
        app = app.with_config_path(path);
    }

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

fn init_logging() -> anyhow::Result<()> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(());
    };

    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
