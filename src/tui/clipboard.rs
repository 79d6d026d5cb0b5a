//! System clipboard and platform opener helpers
//!
//! Clipboard access uses `arboard`; links and the resume go through the
//! platform's default handler via `open`. Both are created per call so
//! no handle outlives the action.

use anyhow::{Context, Result};
use arboard::Clipboard;
use std::path::Path;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Open a URL in the default browser
pub fn open_url(url: &str) -> Result<()> {
    open::that_detached(url).with_context(|| format!("Failed to open {}", url))
}

/// Open a local file with its default application
pub fn open_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("{} does not exist", path.display());
    }
    open::that_detached(path).with_context(|| format!("Failed to open {}", path.display()))
}
