//! Terminal lifecycle.
//!
//! `TerminalManager` owns the ratatui terminal and restores the user's
//! terminal when dropped, whichever way the shell exits.
//!
//! ```no_run
//! use hrbuddie::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> hrbuddie::error::ShellResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_shell_mode, leave_shell_mode};

use std::io::{self, Stdout};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{ShellResult, UiError};

/// Restores the terminal on drop.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { restored: false }
    }

    /// Restore now. Later calls do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_shell_mode(&mut io::stdout());
        tracing::debug!("Terminal restored");
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn init_failed(stage: &str, err: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: format!("{}: {}", stage, err),
    }
}

pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Raw mode, alternate screen, mouse capture, cleared screen.
    pub fn new() -> ShellResult<Self> {
        enable_raw_mode().map_err(|e| init_failed("enable raw mode", e))?;
        // From here on the guard undoes whatever succeeded.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_shell_mode(&mut stdout).map_err(|e| init_failed("enter alternate screen", e))?;

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| init_failed("create terminal", e))?;
        terminal.clear().map_err(|e| init_failed("clear", e))?;

        tracing::debug!("Terminal initialized");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore before drop, e.g. to print after the shell exits.
    pub fn restore(&mut self) {
        self.guard.restore();
    }
}
