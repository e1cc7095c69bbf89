//! Result type alias for shell operations.

use super::shell_error::ShellError;

/// Type alias for Results using [`ShellError`].
pub type ShellResult<T> = Result<T, ShellError>;

/// Type alias for overlay wiring results.
pub type UiResult<T> = Result<T, super::ui::UiError>;
