//! Error category classification.
//!
//! Categories separate programmer mistakes (a sub-component used outside its
//! enclosing overlay, a dismissal registered twice) from problems the user or
//! the environment can fix.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Usage errors in the shell itself (wrong composition, broken invariants).
    /// Never recoverable at runtime - indicates a programming error.
    Client,

    /// Bad input from the user (unknown command-line value, malformed file).
    User,

    /// System/OS errors (filesystem, terminal, missing directories).
    System,

    /// Configuration errors (invalid settings or navigation files).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the shell should abort instead of reporting and continuing.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCategory::Client)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a recovery hint for the category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "This is a bug in the shell. Please report it.",
            ErrorCategory::User => "Check the value you provided and try again.",
            ErrorCategory::System => "Check file permissions and available disk space.",
            ErrorCategory::Configuration => {
                "Check your command-line flags and configuration files."
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
