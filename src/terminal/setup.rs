//! Entering and leaving the alternate screen.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Switch to the alternate screen with mouse reporting on.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_shell_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_shell_mode`] and raw mode. Errors are ignored so this is
/// safe from drop and panic paths, and safe to call twice.
pub fn leave_shell_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout after a panic.
pub fn emergency_restore() {
    leave_shell_mode(&mut io::stdout());
}
