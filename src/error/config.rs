//! Configuration error types.
//!
//! Raised while turning command-line flags and optional files into a
//! [`ShellConfig`](crate::config::ShellConfig).

use thiserror::Error;

/// Error type for command-line and configuration-file problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A flag that needs a value was the last argument.
    #[error("flag '{flag}' expects a value")]
    MissingValue { flag: String },

    /// A flag value could not be interpreted.
    #[error("invalid value '{value}' for '{flag}': {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    /// A navigation file did not contain a valid entry list.
    #[error("invalid navigation file '{path}': {message}")]
    InvalidNavigation { path: String, message: String },

    /// The stored preference file could not be parsed.
    #[error("invalid preference file '{path}': {message}")]
    InvalidPreferences { path: String, message: String },
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingValue { .. } => "E_CFG_MISSING_VALUE",
            ConfigError::InvalidValue { .. } => "E_CFG_INVALID_VALUE",
            ConfigError::InvalidNavigation { .. } => "E_CFG_NAV",
            ConfigError::InvalidPreferences { .. } => "E_CFG_PREFS",
        }
    }

    /// Returns true for mistakes in what the user typed on the command line.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingValue { .. } | ConfigError::InvalidValue { .. }
        )
    }
}
