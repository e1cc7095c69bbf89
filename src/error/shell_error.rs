//! Unified error type for the shell.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::system::SystemError;
use super::ui::UiError;

/// Unified error type for the HrBuddie shell.
///
/// `ShellError` consolidates the domain error enums so callers get one
/// categorization, one error code and one user message regardless of source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// UI/overlay errors.
    Ui(UiError),

    /// System/filesystem errors.
    System(SystemError),

    /// Configuration errors.
    Config(ConfigError),
}

impl ShellError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShellError::Ui(err) => {
                if err.is_usage_error() {
                    ErrorCategory::Client
                } else {
                    ErrorCategory::System
                }
            }
            ShellError::System(_) => ErrorCategory::System,
            ShellError::Config(err) => {
                if err.is_user_input() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::Configuration
                }
            }
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::Ui(err) => err.user_message(),
            ShellError::System(err) => err.user_message(),
            ShellError::Config(err) => err.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ShellError::Ui(err) => err.error_code(),
            ShellError::System(err) => err.error_code(),
            ShellError::Config(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Ui(err) => write!(f, "{}", err),
            ShellError::System(err) => write!(f, "{}", err),
            ShellError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Ui(err) => Some(err),
            ShellError::System(err) => Some(err),
            ShellError::Config(err) => Some(err),
        }
    }
}

impl From<UiError> for ShellError {
    fn from(err: UiError) -> Self {
        ShellError::Ui(err)
    }
}

impl From<SystemError> for ShellError {
    fn from(err: SystemError) -> Self {
        ShellError::System(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::System(SystemError::IoError {
            operation: "io".to_string(),
            path: None,
            message: err.to_string(),
        })
    }
}
