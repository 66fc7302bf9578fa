//! Persistent key/value preferences (`<config dir>/preferences.toml`).
//!
//! The file is a flat TOML table. Keys this crate does not know about are kept
//! when a value is rewritten.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

/// Key holding the light/dark theme choice.
pub const THEME_KEY: &str = "albumsAppTheme";

pub const PREFERENCES_FILE: &str = "preferences.toml";

const APP_DIR_NAME: &str = "albumterm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    Io(String),
    Encode(String),
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "preference file IO error: {msg}"),
            Self::Encode(msg) => write!(f, "preference encode error: {msg}"),
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Get/set-by-key string store.
pub trait PreferenceStore {
    /// `None` when the key is absent or the backing store cannot be read.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Resolve the config directory: explicit override first, then the platform default.
#[must_use]
pub fn resolve_config_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        if !dir.as_os_str().is_empty() {
            return Some(dir.to_path_buf());
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Table {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Table::new(),
        };
        match contents.parse::<Table>() {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring unparsable preference file"
                );
                Table::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut table = self.read_table();
        table.insert(key.to_string(), Value::String(value.to_string()));
        let body =
            toml::to_string(&table).map_err(|err| PreferenceError::Encode(err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                PreferenceError::Io(format!("create {}: {err}", parent.display()))
            })?;
        }
        fs::write(&self.path, body)
            .map_err(|err| PreferenceError::Io(format!("write {}: {err}", self.path.display())))
    }
}

/// In-memory store that also remembers every write, in order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
