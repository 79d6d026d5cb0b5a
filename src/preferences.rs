//! Preference store - persists the light/dark choice across runs
//!
//! One key (`theme`) in a small per-user key-value file. Reads fall back to
//! dark on any problem; writes are best-effort and never reach the user.
//! The store owns the [`ThemeContext`] and is the only code that mutates it.

use crate::theme::{ThemeContext, ThemePreference};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fixed key the preference lives under
pub const THEME_KEY: &str = "theme";

/// Errors from the backing key-value storage
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem error reading or writing the store
    Io { path: PathBuf, source: std::io::Error },
    /// Store file exists but is not a valid TOML table
    Corrupt { path: PathBuf, message: String },
    /// Storage is blocked or not available in this environment
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Corrupt { path, message } => {
                write!(f, "{} is not a valid preference file: {}", path.display(), message)
            }
            Self::Unavailable => write!(f, "Preference storage unavailable"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Durable string key-value storage
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// TOML file of string values, e.g. `theme = "dark"`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: ~/.config/termfolio/preferences.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("termfolio").join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                toml::from_str::<toml::Table>(&contents).map_err(|e| StoreError::Corrupt {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let table = self.read_table()?;
        Ok(table
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future write
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(StoreError::Corrupt { .. }) => toml::Table::new(),
            Err(e) => return Err(e),
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        // Write-then-rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, table.to_string()).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

/// In-memory storage, used when no home directory exists and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    blocked: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every read and write
    #[cfg(test)]
    pub fn blocked() -> Self {
        Self {
            values: HashMap::new(),
            blocked: true,
        }
    }

    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.blocked {
            return Err(StoreError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.blocked {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme preference persistence plus the live [`ThemeContext`]
pub struct PreferenceStore {
    storage: Box<dyn KeyValueStore>,
    context: ThemeContext,
}

impl PreferenceStore {
    /// Wrap a storage backend. The context starts at the default (dark)
    /// until [`PreferenceStore::open`] or [`PreferenceStore::apply`] runs.
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            context: ThemeContext::default(),
        }
    }

    /// Startup path: read the stored preference once and apply it
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);
        let preference = store.load();
        store.apply(preference);
        tracing::debug!("Theme preference loaded: {}", preference);
        store
    }

    /// Read the persisted preference; dark when missing, invalid or unreadable
    pub fn load(&self) -> ThemePreference {
        match self.storage.get(THEME_KEY) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                tracing::debug!("Ignoring unknown theme value {:?}", value);
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!("Could not read theme preference: {}", e);
                ThemePreference::default()
            }
        }
    }

    /// Persist the preference. Failures are logged and otherwise ignored:
    /// the theme keeps working in memory for this session.
    pub fn save(&mut self, preference: ThemePreference) {
        if let Err(e) = self.try_save(preference) {
            tracing::warn!("Could not save theme preference: {}", e);
        }
    }

    /// Persist the preference and report the storage result
    pub fn try_save(&mut self, preference: ThemePreference) -> Result<(), StoreError> {
        self.storage.set(THEME_KEY, preference.as_str())
    }

    /// Set the document-wide presentation mode (idempotent)
    pub fn apply(&mut self, preference: ThemePreference) {
        if self.context.set(preference) {
            tracing::debug!("Theme applied: {}", preference);
        }
    }

    /// User toggle: flip, apply, persist. Returns the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.context.preference().toggled();
        self.apply(next);
        self.save(next);
        next
    }

    pub fn context(&self) -> &ThemeContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn load_defaults_to_dark_when_absent() {
        let store = PreferenceStore::new(Box::new(MemoryStore::new()));
        assert_eq!(store.load(), ThemePreference::Dark);
    }

    #[test]
    fn load_defaults_to_dark_on_invalid_value() {
        let store = PreferenceStore::new(Box::new(MemoryStore::with_value(THEME_KEY, "solarized")));
        assert_eq!(store.load(), ThemePreference::Dark);
    }

    #[test]
    fn save_then_load_round_trips() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            let mut store = PreferenceStore::new(Box::new(MemoryStore::new()));
            store.save(pref);
            assert_eq!(store.load(), pref);
        }
    }

    #[test]
    fn apply_twice_matches_apply_once() {
        let mut once = PreferenceStore::new(Box::new(MemoryStore::new()));
        once.apply(ThemePreference::Light);

        let mut twice = PreferenceStore::new(Box::new(MemoryStore::new()));
        twice.apply(ThemePreference::Light);
        twice.apply(ThemePreference::Light);

        assert_eq!(once.context(), twice.context());
        assert_eq!(twice.context().theme(), &Theme::light());
    }

    #[test]
    fn blocked_storage_falls_back_to_memory() {
        let mut store = PreferenceStore::open(Box::new(MemoryStore::blocked()));
        assert_eq!(store.context().preference(), ThemePreference::Dark);

        // Toggle still changes the live theme even though the write fails
        assert_eq!(store.toggle(), ThemePreference::Light);
        assert_eq!(store.context().preference(), ThemePreference::Light);
        assert_eq!(store.load(), ThemePreference::Dark);
    }

    #[test]
    fn open_applies_stored_value() {
        let store = PreferenceStore::open(Box::new(MemoryStore::with_value(THEME_KEY, "light")));
        assert_eq!(store.context().preference(), ThemePreference::Light);
    }

    #[test]
    fn file_store_round_trips_and_writes_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = PreferenceStore::new(Box::new(FileStore::new(&path)));
        assert_eq!(store.load(), ThemePreference::Dark);

        store.save(ThemePreference::Light);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("theme = \"light\""), "got: {}", contents);

        // A fresh store over the same file sees the saved value
        let reopened = PreferenceStore::open(Box::new(FileStore::new(&path)));
        assert_eq!(reopened.context().preference(), ThemePreference::Light);
    }

    #[test]
    fn file_store_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let mut store = PreferenceStore::new(Box::new(FileStore::new(&path)));
        assert_eq!(store.load(), ThemePreference::Dark);

        store.save(ThemePreference::Light);
        assert_eq!(store.load(), ThemePreference::Light);
    }

    #[test]
    fn file_store_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "other = \"kept\"\n").unwrap();

        let mut fs = FileStore::new(&path);
        fs.set(THEME_KEY, "dark").unwrap();
        assert_eq!(fs.get("other").unwrap().as_deref(), Some("kept"));
        assert_eq!(fs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
