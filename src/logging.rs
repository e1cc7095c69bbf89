//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file under the user
//! data dir. `HRBUDDIE_LOG` takes an `EnvFilter` directive.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{classify_io_error, ShellResult, SystemError};

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "HRBUDDIE_LOG";

pub const DEFAULT_FILTER: &str = "info";

pub const LOG_FILE: &str = "hrbuddie.log";

/// `<data dir>/hrbuddie/hrbuddie.log`
pub fn default_log_path() -> ShellResult<PathBuf> {
    let dir = dirs::data_local_dir().ok_or(SystemError::NoDataDirectory)?;
    Ok(dir.join("hrbuddie").join(LOG_FILE))
}

/// Filter from `HRBUDDIE_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`.
///
/// A second call leaves the first subscriber in place.
pub fn init_file_logging(path: &Path) -> ShellResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(&e, "open log file", Some(path.to_path_buf())))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "HrBuddie tracing initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("hrbuddie/hrbuddie.log"));
        }
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join(LOG_FILE);
        init_file_logging(&path).unwrap();
        assert!(path.exists());
        // Already installed; still fine.
        init_file_logging(&path).unwrap();
    }
}
