//! Two-phase input dispatch.
//!
//! Capture listeners observe every event before the shell's own handler runs,
//! so nothing the handler does (including stopping propagation) can hide an
//! event from them. Overlays use this to watch for outside clicks.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crossterm::event::Event;

/// Boxed capture-phase listener.
pub type CaptureListener = Box<dyn FnMut(&Event, &mut Propagation)>;

/// Identifies a registered capture listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Propagation flag shared by every stage of one dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Propagation {
    stopped: bool,
}

impl Propagation {
    /// Stop later stages from seeing the event.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

struct Slot {
    id: ListenerId,
    // None while the listener is being invoked.
    listener: Option<CaptureListener>,
}

#[derive(Default)]
struct RouterInner {
    next_id: u64,
    slots: Vec<Slot>,
}

/// Handle to the shell's input router. Clones share the same listeners.
#[derive(Clone, Default)]
pub struct EventRouter {
    inner: Rc<RefCell<RouterInner>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capture-phase listener.
    pub fn listen_capture<F>(&self, listener: F) -> ListenerId
    where
        F: FnMut(&Event, &mut Propagation) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.slots.push(Slot {
            id,
            listener: Some(Box::new(listener)),
        });
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn remove(&self, id: ListenerId) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let index = inner.slots.iter().position(|slot| slot.id == id);
            index.map(|i| inner.slots.remove(i))
        };
        // Drop the listener outside the borrow; its captures may touch the router.
        removed.is_some()
    }

    /// Number of live capture listeners.
    pub fn capture_len(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Dispatch one event: every capture listener first, then `bubble`
    /// unless a capture listener stopped propagation.
    ///
    /// Listeners may register or remove listeners (including themselves)
    /// while running; listeners added during a dispatch first see the next event.
    pub fn dispatch<F>(&self, event: &Event, bubble: F) -> Propagation
    where
        F: FnOnce(&Event, &mut Propagation),
    {
        let mut propagation = Propagation::default();
        let ids: Vec<ListenerId> = self.inner.borrow().slots.iter().map(|s| s.id).collect();

        for id in ids {
            if propagation.is_stopped() {
                break;
            }
            let taken = {
                let mut inner = self.inner.borrow_mut();
                inner
                    .slots
                    .iter_mut()
                    .find(|slot| slot.id == id)
                    .and_then(|slot| slot.listener.take())
            };
            let Some(mut listener) = taken else {
                continue;
            };

            listener(event, &mut propagation);

            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.slots.iter_mut().find(|slot| slot.id == id) {
                slot.listener = Some(listener);
            }
        }

        if !propagation.is_stopped() {
            bubble(event, &mut propagation);
        }
        propagation
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRouter")
            .field("capture_listeners", &self.capture_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::Cell;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_capture_runs_before_bubble() {
        let router = EventRouter::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let o = Rc::clone(&order);
        router.listen_capture(move |_, _| o.borrow_mut().push("capture"));

        router.dispatch(&key(KeyCode::Enter), |_, _| order.borrow_mut().push("bubble"));
        assert_eq!(*order.borrow(), vec!["capture", "bubble"]);
    }

    #[test]
    fn test_bubble_stop_does_not_affect_capture() {
        let router = EventRouter::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        router.listen_capture(move |_, _| h.set(h.get() + 1));

        for _ in 0..3 {
            let p = router.dispatch(&key(KeyCode::Char('x')), |_, p| p.stop());
            assert!(p.is_stopped());
        }
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_capture_stop_skips_bubble() {
        let router = EventRouter::new();
        router.listen_capture(|_, p| p.stop());
        let mut bubbled = false;
        router.dispatch(&key(KeyCode::Esc), |_, _| bubbled = true);
        assert!(!bubbled);
    }

    #[test]
    fn test_listener_can_remove_itself() {
        let router = EventRouter::new();
        let handle = router.clone();
        let own_id = Rc::new(Cell::new(None));
        let id_slot = Rc::clone(&own_id);
        let id = router.listen_capture(move |_, _| {
            if let Some(id) = id_slot.get() {
                handle.remove(id);
            }
        });
        own_id.set(Some(id));

        assert_eq!(router.capture_len(), 1);
        router.dispatch(&key(KeyCode::Esc), |_, _| {});
        assert_eq!(router.capture_len(), 0);
        assert!(!router.remove(id));
    }
}
