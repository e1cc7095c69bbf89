//! Controlled / uncontrolled open state.
//!
//! Every overlay routes open-state changes through [`OpenState::request`].
//! When an external owner supplied the value at construction the overlay is
//! *controlled*: the owner is the single source of truth and a request only
//! notifies it. Otherwise the overlay stores the value itself and the
//! notifier, if any, merely observes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{UiError, UiResult};

/// Callback invoked with every requested open value.
pub type Notifier = Box<dyn FnMut(bool)>;

enum Mode {
    Controlled { external: bool },
    Uncontrolled { stored: bool },
}

/// Open/closed state for one overlay instance.
///
/// The mode is fixed at construction and never changes.
pub struct OpenState {
    mode: Mode,
    notifier: Option<Notifier>,
}

impl OpenState {
    /// Build from an optional externally-owned value.
    ///
    /// `Some(v)` makes the state controlled; `None` makes it uncontrolled and
    /// starts from `default_open`.
    pub fn new(external: Option<bool>, default_open: bool, notifier: Option<Notifier>) -> Self {
        let mode = match external {
            Some(external) => Mode::Controlled { external },
            None => Mode::Uncontrolled {
                stored: default_open,
            },
        };
        Self { mode, notifier }
    }

    /// Controlled state fed by an owner.
    pub fn controlled(value: bool, notifier: Option<Notifier>) -> Self {
        Self::new(Some(value), false, notifier)
    }

    /// Internally owned state.
    pub fn uncontrolled(default_open: bool, notifier: Option<Notifier>) -> Self {
        Self::new(None, default_open, notifier)
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, Mode::Controlled { .. })
    }

    /// The value the overlay should render with.
    pub fn current(&self) -> bool {
        match self.mode {
            Mode::Controlled { external } => external,
            Mode::Uncontrolled { stored } => stored,
        }
    }

    /// Ask for a new open value.
    ///
    /// Controlled: only the notifier sees `value`. Uncontrolled: `value` is
    /// stored first, then the notifier observes it.
    pub fn request(&mut self, value: bool) {
        if let Mode::Uncontrolled { stored } = &mut self.mode {
            *stored = value;
        }
        if let Some(notify) = self.notifier.as_mut() {
            notify(value);
        }
    }

    /// Feed the owner's value back into a controlled state.
    ///
    /// Returns the previous value. Syncing an uncontrolled state is a wiring
    /// bug and is rejected.
    pub fn sync(&mut self, value: bool, overlay: &str) -> UiResult<bool> {
        match &mut self.mode {
            Mode::Controlled { external } => Ok(std::mem::replace(external, value)),
            Mode::Uncontrolled { .. } => Err(UiError::NotControlled {
                overlay: overlay.to_string(),
            }),
        }
    }
}

/// Notifier kept outside the overlay's own borrow.
///
/// Overlays behind `Rc<RefCell<_>>` call it only after their borrow has
/// ended, so the owner may read or sync the overlay from inside the callback.
/// Requests made re-entrantly from the callback are not notified again.
#[derive(Clone, Default)]
pub struct SharedNotifier(Rc<RefCell<Option<Notifier>>>);

impl SharedNotifier {
    pub fn new(notifier: Option<Notifier>) -> Self {
        Self(Rc::new(RefCell::new(notifier)))
    }

    pub fn notify(&self, value: bool) {
        let taken = self.0.borrow_mut().take();
        if let Some(mut notify) = taken {
            notify(value);
            let mut slot = self.0.borrow_mut();
            if slot.is_none() {
                *slot = Some(notify);
            }
        }
    }
}

impl fmt::Debug for SharedNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedNotifier")
            .field("present", &self.0.borrow().is_some())
            .finish()
    }
}

impl fmt::Debug for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenState")
            .field("open", &self.current())
            .field("controlled", &self.is_controlled())
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}
