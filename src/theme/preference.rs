//! Theme preference and where it is stored.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{classify_io_error, ShellResult, SystemError};

/// Directory under the user config dir holding shell settings.
pub const CONFIG_DIR: &str = "hrbuddie";

/// Preference file name.
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the terminal
    #[default]
    System,
}

impl ThemePreference {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value store for the raw theme string.
pub trait PreferenceStore {
    fn get_preference(&self) -> Option<String>;

    fn set_preference(&mut self, value: &str) -> ShellResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Preference kept as JSON on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/hrbuddie/preferences.json`.
    pub fn in_config_dir() -> ShellResult<Self> {
        let dir = dirs::config_dir().ok_or(SystemError::NoConfigDirectory)?;
        Ok(Self::new(dir.join(CONFIG_DIR).join(PREFERENCES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<PreferenceFile> {
        let file = File::open(&self.path).ok()?;
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                tracing::warn!("Ignoring unreadable preference file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_preference(&self) -> Option<String> {
        self.load().and_then(|prefs| prefs.theme)
    }

    fn set_preference(&mut self, value: &str) -> ShellResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }

        let io_err = |e: std::io::Error| classify_io_error(&e, "write preferences", Some(self.path.clone()));
        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        let prefs = PreferenceFile {
            theme: Some(value.to_string()),
        };
        serde_json::to_writer_pretty(&mut writer, &prefs)
            .map_err(|e| io_err(std::io::Error::other(e)))?;
        writer.flush().map_err(io_err)?;

        tracing::debug!("Saved theme '{}' to {}", value, self.path.display());
        Ok(())
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            writes: 0,
        }
    }

    /// Number of `set_preference` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_preference(&self) -> Option<String> {
        self.value.clone()
    }

    fn set_preference(&mut self, value: &str) -> ShellResult<()> {
        self.value = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }
}
