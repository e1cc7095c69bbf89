//! Composition contract between overlays and caller-drawn elements.
//!
//! A caller draws its own element and describes it as a [`Slot`]: the area it
//! covers plus whatever actions it already performs. Triggers `attach` their
//! behavior to the slot, appending after the element's own actions, and the
//! finished slot is registered as a single hit area.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::scope::{OverlayContext, OverlayId};
use super::OverlayCommand;
use crate::ui::interaction::{HitAreaRegistry, ShellAction};

/// A command aimed at one overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayAction {
    pub id: OverlayId,
    pub command: OverlayCommand,
}

/// What a trigger gives the element it decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerProps {
    pub open: bool,
    pub action: OverlayAction,
}

impl TriggerProps {
    pub(crate) fn new(ctx: OverlayContext, command: OverlayCommand) -> Self {
        Self {
            open: ctx.open,
            action: OverlayAction {
                id: ctx.id,
                command,
            },
        }
    }
}

/// A caller-drawn element waiting to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub rect: Rect,
    pub actions: Vec<ShellAction>,
    pub hover: Option<OverlayId>,
}

impl Slot {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            actions: Vec::new(),
            hover: None,
        }
    }

    /// Add an action of the element itself.
    pub fn with_action(mut self, action: ShellAction) -> Self {
        self.actions.push(action);
        self
    }

    pub(crate) fn push_overlay(mut self, action: OverlayAction) -> Self {
        self.actions.push(ShellAction::Overlay(action));
        self
    }

    /// Register this slot as a hit area, returning its rect as the anchor.
    pub fn register(self, hits: &mut HitAreaRegistry) -> Rect {
        let rect = self.rect;
        hits.register_slot(self);
        rect
    }
}

/// Draw a caller element with trigger props, attach the trigger's behavior and
/// register it.
pub(crate) fn render_with<F>(
    frame: &mut Frame,
    area: Rect,
    hits: &mut HitAreaRegistry,
    props: TriggerProps,
    build: F,
) -> Rect
where
    F: FnOnce(&mut Frame, Rect, &TriggerProps) -> Slot,
{
    let slot = build(frame, area, &props);
    slot.push_overlay(props.action).register(hits)
}
