//! Hit areas for pointer interaction.
//!
//! Components register hit areas while rendering; the event loop queries the
//! registry on mouse input. Later registrations sit on top of earlier ones,
//! which is how floating layers win over the page beneath them.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::overlay::{OverlayAction, OverlayId, Slot};

/// Something a click can make the shell do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Go to a route
    Navigate(String),
    /// Flip between light and dark
    ToggleTheme,
    /// Collapse or expand the sidebar
    ToggleSidebar,
    /// Forward a command to one overlay
    Overlay(OverlayAction),
    /// Swallow the click
    Absorb,
}

/// A clickable region with the actions it performs, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct HitArea {
    pub rect: Rect,
    pub actions: Vec<ShellAction>,
    /// Tooltip opened while the pointer rests here
    pub hover: Option<OverlayId>,
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ShellAction) -> Self {
        Self {
            rect,
            actions: vec![action],
            hover: None,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas for one frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every area. Call at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, action: ShellAction, hover_style: Option<Style>) {
        self.register_chain(rect, vec![action], None, hover_style);
    }

    /// Register an area that runs several actions.
    pub fn register_chain(
        &mut self,
        rect: Rect,
        actions: Vec<ShellAction>,
        hover: Option<OverlayId>,
        hover_style: Option<Style>,
    ) {
        if rect.is_empty() {
            return;
        }
        self.areas.push(HitArea {
            rect,
            actions,
            hover,
            hover_style,
        });
    }

    /// Register a caller-drawn element.
    pub fn register_slot(&mut self, slot: Slot) {
        self.register_chain(slot.rect, slot.actions, slot.hover, None);
    }

    fn topmost(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Actions of the topmost area under the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Vec<ShellAction>> {
        self.topmost(x, y).map(|i| self.areas[i].actions.clone())
    }

    /// Tooltip owned by the topmost area under the point.
    pub fn hover_target_at(&self, x: u16, y: u16) -> Option<OverlayId> {
        self.topmost(x, y).and_then(|i| self.areas[i].hover)
    }

    /// Returns true when the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let hovered = self.topmost(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// The area under the pointer after the last `update_hover`.
    pub fn hovered_area(&self) -> Option<&HitArea> {
        self.areas.get(self.hovered?)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
