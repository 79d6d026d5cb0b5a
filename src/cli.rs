// CLI module - command-line argument parsing and handlers
//
// Provides subcommands besides the default full-screen page:
// - config --show|--path|--reset|--edit|--update: configuration management
// - theme [dark|light]: read or set the persisted theme preference
// - send --name --email --message: deliver a contact message without the UI

use crate::config::{Config, VERSION};
use crate::contact::{ContactForm, Field, MailRelay, SubmissionStatus};
use crate::preferences::{FileStore, PreferenceStore, StoreError};
use crate::theme::ThemePreference;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Termfolio - Vansh Batham's portfolio in the terminal
#[derive(Parser)]
#[command(name = "termfolio")]
#[command(version = VERSION)]
#[command(about = "Vansh Batham's developer portfolio, in your terminal", long_about = None)]
pub struct Cli {
    /// Open the page scrolled to a section (about, skills, projects, contact)
    #[arg(long, value_name = "SECTION")]
    pub section: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Show or set the theme preference
    Theme {
        /// "dark" or "light"; omit to print the current preference
        value: Option<String>,
    },

    /// Send a contact message without opening the page
    Send(SendArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Reply-to address
    #[arg(long)]
    pub email: String,

    /// Message body
    #[arg(long)]
    pub message: String,
}

/// Handle synchronous commands. Returns true if a command was handled (exit after).
///
/// `send` needs logging and the relay, so it is left to the caller.
pub fn handle_cli(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else if *edit {
                handle_config_edit();
            } else if *update {
                handle_config_update();
            } else {
                // No flag provided, show help
                println!("Usage: termfolio config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Theme { value }) => {
            handle_theme(value.as_deref());
            true
        }
        Some(Commands::Send(_)) | None => false,
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    let relay = &config.relay;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    match config.preferences_file() {
        Some(path) => println!("preferences_path = {:?}", path.display().to_string()),
        None => println!("preferences_path = (unavailable, theme kept in memory)"),
    }
    println!();
    println!("[relay]");
    println!("endpoint = {:?}", relay.endpoint);
    println!("service_id = {:?}", relay.service_id);
    println!("template_id = {:?}", relay.template_id);
    println!("public_key = {:?}", relay.public_key);
    println!(
        "access_token = {}",
        if relay.access_token.is_some() {
            "(set)"
        } else {
            "(unset)"
        }
    );
    println!();
    println!("[ui]");
    println!("animations = {}", config.ui.animations);
    println!(
        "menu_transition_frames = {}",
        config.ui.menu_transition_frames
    );
    println!("tick_ms = {}", config.ui.tick_ms);
    println!();
    println!("[assets]");
    match &config.assets.resume {
        Some(path) => println!("resume = {:?}", path.display().to_string()),
        None => println!("# resume = (none)"),
    }
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    // Config::default() is the single source of truth for the template
    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Ensure config exists
    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        // No existing config, just create default
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Backup existing
    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    // Rewrite the template around the file's own values; env overrides are
    // per-process and must not leak into the file
    if let Err(e) = Config::from_file().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

fn handle_theme(value: Option<&str>) {
    let config = Config::from_env();
    let Some(path) = config.preferences_file() else {
        eprintln!("Error: Could not determine preferences path");
        std::process::exit(1);
    };
    let mut store = PreferenceStore::open(Box::new(FileStore::new(path)));

    let Some(value) = value else {
        println!("{}", store.context().preference());
        return;
    };

    let Some(preference) = ThemePreference::parse(value) else {
        eprintln!("Error: unknown theme {:?} (expected \"dark\" or \"light\")", value);
        std::process::exit(1);
    };

    if let Err(e) = set_theme(&mut store, preference) {
        eprintln!("Error: could not save the theme preference: {}", e);
        std::process::exit(1);
    }
    println!("Theme set to {}", preference);
}

/// Apply and persist, surfacing storage failures the UI path only logs
fn set_theme(store: &mut PreferenceStore, preference: ThemePreference) -> Result<(), StoreError> {
    store.apply(preference);
    store.try_save(preference)
}

/// Deliver one message through the relay. Validation failures never reach it.
pub async fn run_send(args: SendArgs, relay: &dyn MailRelay) -> anyhow::Result<()> {
    let mut form = ContactForm::new();
    form.set_value(Field::Name, args.name);
    form.set_value(Field::Email, args.email);
    form.set_value(Field::Message, args.message);

    form.validate()?;

    match form.submit_with(relay).await {
        SubmissionStatus::Success => {
            println!("{}", SubmissionStatus::Success.button_label());
            Ok(())
        }
        status => anyhow::bail!("{}", status.button_label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::RelayFuture;
    use crate::contact::{ContactSubmission, RelayError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRelay {
        calls: AtomicUsize,
        accept: bool,
    }

    impl MailRelay for CountingRelay {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> RelayFuture<'a> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let accept = self.accept;
            Box::pin(async move {
                if accept {
                    Ok(())
                } else {
                    Err(RelayError::Network("connection refused".to_string()))
                }
            })
        }
    }

    fn args(email: &str) -> SendArgs {
        SendArgs {
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn parses_send_subcommand() {
        let cli = Cli::try_parse_from([
            "termfolio",
            "send",
            "--name",
            "Jane",
            "--email",
            "jane@example.com",
            "--message",
            "Hi",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Send(ref a)) if a.name == "Jane"));
        assert!(!handle_cli(&cli));
    }

    #[test]
    fn parses_start_section() {
        let cli = Cli::try_parse_from(["termfolio", "--section", "projects"]).unwrap();
        assert_eq!(cli.section.as_deref(), Some("projects"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_theme_value() {
        let cli = Cli::try_parse_from(["termfolio", "theme", "light"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Theme { value: Some(ref v) }) if v == "light"));
    }

    #[test]
    fn set_theme_reports_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("preferences.toml");

        let mut store = PreferenceStore::new(Box::new(FileStore::new(&path)));
        // Dark is also the load fallback, so only the write result can tell
        assert!(set_theme(&mut store, ThemePreference::Dark).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn set_theme_writes_preference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut store = PreferenceStore::new(Box::new(FileStore::new(&path)));
        set_theme(&mut store, ThemePreference::Light).unwrap();
        assert_eq!(store.context().preference(), ThemePreference::Light);
        assert!(std::fs::read_to_string(&path).unwrap().contains("theme = \"light\""));
    }

    #[tokio::test]
    async fn send_rejects_invalid_email_before_relay() {
        let relay = CountingRelay {
            calls: AtomicUsize::new(0),
            accept: true,
        };
        let err = run_send(args("nope"), &relay).await.unwrap_err();
        assert!(err.to_string().contains("valid email"));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn send_reports_relay_failure() {
        let relay = CountingRelay {
            calls: AtomicUsize::new(0),
            accept: false,
        };
        let err = run_send(args("jane@example.com"), &relay).await.unwrap_err();
        assert_eq!(err.to_string(), "Error. Try again.");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn send_succeeds() {
        let relay = CountingRelay {
            calls: AtomicUsize::new(0),
            accept: true,
        };
        assert!(run_send(args("jane@example.com"), &relay).await.is_ok());
    }
}
