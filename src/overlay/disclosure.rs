//! Inline expand/collapse.
//!
//! No floating geometry and no dismissal: the content's visible height is a
//! pure function of the open flag.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::scope::{OverlayContext, OverlayId, OverlayKind, Scope};
use super::slot::{self, Slot, TriggerProps};
use super::state::{Notifier, OpenState};
use super::{Overlay, OverlayCommand};
use crate::error::UiResult;
use crate::ui::interaction::HitAreaRegistry;

/// Root of a disclosure.
#[derive(Debug)]
pub struct Disclosure {
    id: OverlayId,
    name: String,
    state: OpenState,
}

impl Disclosure {
    pub fn new(
        name: impl Into<String>,
        external: Option<bool>,
        default_open: bool,
        notifier: Option<Notifier>,
    ) -> Self {
        Self {
            id: OverlayId::next(),
            name: name.into(),
            state: OpenState::new(external, default_open, notifier),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_controlled(&self) -> bool {
        self.state.is_controlled()
    }

    /// Request a new open value.
    pub fn set_open(&mut self, open: bool) {
        tracing::debug!("Disclosure '{}' requested open={}", self.name, open);
        self.state.request(open);
    }

    /// Feed the owner's value back in.
    pub fn sync(&mut self, open: bool) -> UiResult<()> {
        self.state.sync(open, &self.name).map(|_| ())
    }
}

impl Overlay for Disclosure {
    fn id(&self) -> OverlayId {
        self.id
    }

    fn kind(&self) -> OverlayKind {
        OverlayKind::Disclosure
    }

    fn is_open(&self) -> bool {
        self.state.current()
    }

    fn apply(&mut self, command: OverlayCommand) -> UiResult<()> {
        match command {
            OverlayCommand::Toggle => self.set_open(!self.is_open()),
            OverlayCommand::Open => self.set_open(true),
            OverlayCommand::Close => self.set_open(false),
            _ => {}
        }
        Ok(())
    }
}

/// Element that toggles its disclosure.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureTrigger {
    ctx: OverlayContext,
}

impl DisclosureTrigger {
    pub fn new(scope: &Scope<'_>) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Disclosure, "DisclosureTrigger")?;
        Ok(Self { ctx })
    }

    pub fn props(&self) -> TriggerProps {
        TriggerProps::new(self.ctx, OverlayCommand::Toggle)
    }

    /// Add the toggle behavior to an element the caller already drew.
    pub fn attach(&self, slot: Slot) -> Slot {
        slot.push_overlay(self.props().action)
    }

    /// Draw through `build`, then register the decorated element.
    pub fn render_with<F>(&self, frame: &mut Frame, area: Rect, hits: &mut HitAreaRegistry, build: F) -> Rect
    where
        F: FnOnce(&mut Frame, Rect, &TriggerProps) -> Slot,
    {
        slot::render_with(frame, area, hits, self.props(), build)
    }
}

/// Collapsible region of a disclosure.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureContent {
    open: bool,
}

impl DisclosureContent {
    pub fn new(scope: &Scope<'_>) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Disclosure, "DisclosureContent")?;
        Ok(Self { open: ctx.open })
    }

    pub fn is_visible(&self) -> bool {
        self.open
    }

    /// Rows the content occupies given the rows it would need when open.
    pub fn visible_height(&self, natural: u16) -> u16 {
        if self.open {
            natural
        } else {
            0
        }
    }
}
