//! Panic hook restoring the terminal.

use std::panic;

use super::setup::emergency_restore;

/// Chain a terminal restore in front of the current panic hook.
///
/// Install before [`TerminalManager::new`](super::TerminalManager::new) and
/// after `color_eyre::install`, so the report prints on a sane terminal.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
