//! System-related error types.
//!
//! Filesystem and environment failures hit while loading or saving the theme
//! preference, reading a navigation file, or opening the log file.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    /// Could not determine configuration directory.
    NoConfigDirectory,

    /// Could not determine the local data directory (used for logs).
    NoDataDirectory,

    /// Failed to create directory.
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoConfigDirectory => {
                "Could not determine the configuration directory.".to_string()
            }
            SystemError::NoDataDirectory => {
                "Could not determine the data directory for log files.".to_string()
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory '{}'.", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'.", operation, p.display()),
                None => format!("Failed to {}.", operation),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoConfigDirectory => "E_SYS_NO_CONFIG",
            SystemError::NoDataDirectory => "E_SYS_NO_DATA",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_MKDIR",
            SystemError::IoError { .. } => "E_SYS_IO",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::NoConfigDirectory => write!(f, "No configuration directory"),
            SystemError::NoDataDirectory => write!(f, "No data directory"),
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(f, "Failed to create '{}': {}", path.display(), message)
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "I/O error during {} on '{}': {}", operation, p.display(), message),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error for a given operation and path.
pub fn classify_io_error(err: &std::io::Error, operation: &str, path: Option<PathBuf>) -> SystemError {
    SystemError::IoError {
        operation: operation.to_string(),
        path,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = classify_io_error(&io, "write preferences", Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(err.error_code(), "E_SYS_IO");
        assert!(err.user_message().contains("/tmp/p.json"));
        assert!(err.to_string().contains("denied"));
    }
}
