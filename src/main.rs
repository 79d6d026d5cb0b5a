// Termfolio - developer portfolio in the terminal
//
// A single scrolling page (about, tech stack, projects, contact) with a
// persisted light/dark theme, in-page section navigation, a compact-layout
// menu and a contact form delivered through an HTTP mail relay.
//
// Architecture:
// - Content: static portfolio data
// - Preferences: theme preference persisted to a small TOML file
// - Navigation/menu: section anchors, smooth scroll, menu-close-then-scroll
// - Contact: form status machine and the relay client (reqwest)
// - TUI (ratatui): page composer, event loop, overlays

mod cli;
mod config;
mod contact;
mod content;
mod logging;
mod menu;
mod navigation;
mod preferences;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use contact::{EmailJsRelay, MailRelay};
use logging::{LogBuffer, LogLevel, Output};
use navigation::Section;
use preferences::{FileStore, KeyValueStore, MemoryStore, PreferenceStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands first (config, theme). If handled, exit early
    if cli::handle_cli(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // In UI mode logs are captured to the buffer and file only; printing
    // would garble the screen
    let log_buffer = LogBuffer::new();
    let output = match cli.command {
        Some(Commands::Send(_)) => Output::Stderr,
        _ => Output::Tui,
    };
    let guard = logging::init(&config.logging, log_buffer.clone(), output);

    tracing::debug!("termfolio {} starting", config::VERSION);

    let relay: Arc<dyn MailRelay> = Arc::new(EmailJsRelay::new(config.relay.clone())?);

    if let Some(Commands::Send(args)) = cli.command {
        if let Err(e) = cli::run_send(args, relay.as_ref()).await {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let storage: Box<dyn KeyValueStore> = match config.preferences_file() {
        Some(path) => {
            let store = FileStore::new(path);
            tracing::debug!("Theme preference file: {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("No preferences location; theme will not persist");
            Box::new(MemoryStore::new())
        }
    };
    let prefs = PreferenceStore::open(storage);

    let start = match cli.section.as_deref() {
        Some(id) => match Section::from_id(id) {
            Some(section) => Some(section),
            None => {
                eprintln!("Error: unknown section {:?} (about, skills, projects, contact)", id);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let result = tui::run_tui(config, prefs, relay, start).await;

    print_error_summary(&log_buffer, guard.file_dir.as_deref());
    result
}

/// After the screen is restored, point the operator at anything that went wrong
fn print_error_summary(buffer: &LogBuffer, file_dir: Option<&std::path::Path>) {
    let count = buffer.error_count();
    if count == 0 {
        return;
    }

    eprintln!("termfolio: {} error(s) during this session:", count);
    for entry in buffer.at_level(LogLevel::Error).iter().take(5) {
        eprintln!(
            "  {} {} [{}] {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.target,
            entry.message
        );
    }
    if let Some(dir) = file_dir {
        eprintln!("Full log: {}", dir.display());
    }
}
