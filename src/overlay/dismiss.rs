//! Outside-click and Escape dismissal.
//!
//! [`activate`] registers a capture-phase observer and hands back a
//! [`DismissalGuard`]. The guard is the only way to stop observing: release it
//! explicitly or drop it. Releasing twice is harmless; holding two guards for
//! one overlay is prevented by [`DismissalSlot`].

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;

use super::router::{EventRouter, ListenerId};
use crate::error::{UiError, UiResult};

/// Why an overlay was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    OutsidePointer,
    Escape,
}

/// Screen regions that count as "inside" the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub owner: Rect,
    pub trigger: Rect,
}

impl Regions {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        region_contains(self.owner, x, y) || region_contains(self.trigger, x, y)
    }
}

fn region_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Begin observing outside pointer-downs and Escape presses.
///
/// `on_dismiss` runs at most once per event. Observation lasts until the
/// returned guard is released or dropped.
pub fn activate<F>(router: &EventRouter, owner: Rect, trigger: Rect, mut on_dismiss: F) -> DismissalGuard
where
    F: FnMut(DismissReason) + 'static,
{
    let regions = Rc::new(Cell::new(Regions { owner, trigger }));
    let watched = Rc::clone(&regions);

    let id = router.listen_capture(move |event, _| {
        let reason = match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) if !watched.get().contains(mouse.column, mouse.row) => {
                    Some(DismissReason::OutsidePointer)
                }
                _ => None,
            },
            Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc => {
                Some(DismissReason::Escape)
            }
            _ => None,
        };
        if let Some(reason) = reason {
            on_dismiss(reason);
        }
    });
    tracing::debug!("Dismissal observer {:?} active", id);

    DismissalGuard {
        router: router.clone(),
        listener: Some(id),
        regions,
    }
}

/// Live registration of one dismissal observer.
#[derive(Debug)]
pub struct DismissalGuard {
    router: EventRouter,
    listener: Option<ListenerId>,
    regions: Rc<Cell<Regions>>,
}

impl DismissalGuard {
    /// Replace the inside regions, typically after the overlay is laid out.
    pub fn set_regions(&self, owner: Rect, trigger: Rect) {
        self.regions.set(Regions { owner, trigger });
    }

    pub fn regions(&self) -> Regions {
        self.regions.get()
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Stop observing. Returns false when already released.
    pub fn release(&mut self) -> bool {
        match self.listener.take() {
            Some(id) => {
                self.router.remove(id);
                tracing::debug!("Dismissal observer {:?} released", id);
                true
            }
            None => false,
        }
    }
}

impl Drop for DismissalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Holder for an overlay's single dismissal guard.
#[derive(Debug, Default)]
pub struct DismissalSlot {
    guard: Option<DismissalGuard>,
}

impl DismissalSlot {
    pub fn is_active(&self) -> bool {
        self.guard.as_ref().is_some_and(DismissalGuard::is_active)
    }

    /// Store a freshly activated guard.
    ///
    /// Fails without touching the held guard if one is already active; the
    /// rejected guard is released as it drops.
    pub fn acquire(&mut self, overlay: &str, guard: DismissalGuard) -> UiResult<()> {
        if self.is_active() {
            tracing::error!("Overlay '{}' activated dismissal twice", overlay);
            return Err(UiError::DismissalAlreadyActive {
                overlay: overlay.to_string(),
            });
        }
        self.guard = Some(guard);
        Ok(())
    }

    /// Release and forget the held guard. Returns false if none was active.
    pub fn release(&mut self) -> bool {
        self.guard.take().is_some_and(|mut guard| guard.release())
    }

    pub fn set_regions(&self, owner: Rect, trigger: Rect) {
        if let Some(guard) = &self.guard {
            guard.set_regions(owner, trigger);
        }
    }

    pub fn regions(&self) -> Option<Regions> {
        self.guard.as_ref().map(DismissalGuard::regions)
    }
}
