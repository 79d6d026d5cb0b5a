//! Presentation configuration: animation, tick rate, static assets

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// UI
// ─────────────────────────────────────────────────────────────────────────────

/// UI behavior settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Smooth scrolling and menu transitions
    pub animations: bool,
    /// Ticks a menu open/close transition lasts
    pub menu_transition_frames: u16,
    /// Tick interval driving animations and toast expiry
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animations: true,
            menu_transition_frames: 4,
            tick_ms: 50,
        }
    }
}

/// UI settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub animations: Option<bool>,
    pub menu_transition_frames: Option<u16>,
    pub tick_ms: Option<u64>,
}

impl UiConfig {
    /// Create from file config with defaults.
    /// `no_animation` comes from TERMFOLIO_NO_ANIMATION and wins over the file.
    pub fn from_file(file: Option<FileUi>, no_animation: bool) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            animations: !no_animation && file.animations.unwrap_or(defaults.animations),
            menu_transition_frames: file
                .menu_transition_frames
                .unwrap_or(defaults.menu_transition_frames),
            // A zero interval would make tokio::time::interval panic
            tick_ms: file.tick_ms.unwrap_or(defaults.tick_ms).max(10),
        }
    }

    /// Transition length actually used by the menu controller
    pub fn effective_menu_frames(&self) -> u16 {
        if self.animations {
            self.menu_transition_frames
        } else {
            0
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Assets
// ─────────────────────────────────────────────────────────────────────────────

/// Downloadable files linked from the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Resume opened by the "Resume" action
    pub resume: Option<PathBuf>,
}

/// Asset settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAssets {
    pub resume: Option<String>,
}

impl AssetsConfig {
    pub fn from_file(file: Option<FileAssets>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            resume: file.resume.filter(|s| !s.is_empty()).map(expand_home),
        }
    }
}

/// Expand a leading `~/` to the home directory
pub(crate) fn expand_home(path: String) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
