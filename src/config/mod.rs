//! Configuration for the portfolio app
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/termfolio/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod relay;
mod serialization;
mod ui;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use relay::{FileRelay, RelayConfig};
pub use ui::{AssetsConfig, FileAssets, FileUi, UiConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Preference file override; None uses ~/.config/termfolio/preferences.toml
    pub preferences_path: Option<PathBuf>,

    /// Mail relay used by the contact form
    pub relay: RelayConfig,

    /// Animation and tick settings
    pub ui: UiConfig,

    /// Resume and other downloadable files
    pub assets: AssetsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub preferences_path: Option<String>,

    /// Optional [relay] section
    pub relay: Option<FileRelay>,

    /// Optional [ui] section
    pub ui: Option<FileUi>,

    /// Optional [assets] section
    pub assets: Option<FileAssets>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Values taken from TERMFOLIO_* environment variables
#[derive(Debug, Default)]
pub(crate) struct EnvOverrides {
    pub relay: FileRelay,
    pub preferences_path: Option<String>,
    pub no_animation: bool,
    pub log_dir: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            relay: FileRelay::from_env(),
            preferences_path: std::env::var("TERMFOLIO_PREFERENCES").ok(),
            no_animation: std::env::var("TERMFOLIO_NO_ANIMATION")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false),
            log_dir: std::env::var("TERMFOLIO_LOG_DIR").ok(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/termfolio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("termfolio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be parsed: a broken
    /// config should fail fast, not silently fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `termfolio config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), EnvOverrides::from_env())
    }

    /// Values from the config file and defaults only, for rewriting the file.
    /// Environment overrides (relay token included) stay out of it.
    pub fn from_file() -> Self {
        Self::file_only(Self::load_file_config())
    }

    pub(crate) fn file_only(file: FileConfig) -> Self {
        Self::resolve(file, EnvOverrides::default())
    }

    /// Merge already-loaded sources
    pub(crate) fn resolve(file: FileConfig, env: EnvOverrides) -> Self {
        // Preferences: env > file > default location
        let preferences_path = env
            .preferences_path
            .or(file.preferences_path)
            .filter(|p| !p.is_empty())
            .map(ui::expand_home);

        Self {
            preferences_path,
            relay: RelayConfig::from_file(file.relay, env.relay),
            ui: UiConfig::from_file(file.ui, env.no_animation),
            assets: AssetsConfig::from_file(file.assets),
            logging: LoggingConfig::from_file(file.logging, env.log_dir),
        }
    }

    /// Preference file in effect
    pub fn preferences_file(&self) -> Option<PathBuf> {
        self.preferences_path
            .clone()
            .or_else(crate::preferences::FileStore::default_path)
    }
}
