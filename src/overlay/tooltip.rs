//! Hover/focus tooltip.
//!
//! Always owns its state: pointer or focus entering the trigger opens it,
//! leaving closes it.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::position::{self, AnchorRect, FloatRect, Placement};
use super::scope::{OverlayContext, OverlayId, OverlayKind, Scope};
use super::slot::Slot;
use super::state::OpenState;
use super::{Overlay, OverlayCommand};
use crate::error::UiResult;
use crate::theme::Palette;

/// Root of a tooltip.
#[derive(Debug)]
pub struct Tooltip {
    id: OverlayId,
    name: String,
    state: OpenState,
}

impl Tooltip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OverlayId::next(),
            name: name.into(),
            state: OpenState::uncontrolled(false, None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn set_open(&mut self, open: bool) {
        if self.state.current() != open {
            tracing::trace!("Tooltip '{}' open={}", self.name, open);
            self.state.request(open);
        }
    }
}

impl Overlay for Tooltip {
    fn id(&self) -> OverlayId {
        self.id
    }

    fn kind(&self) -> OverlayKind {
        OverlayKind::Tooltip
    }

    fn is_open(&self) -> bool {
        self.state.current()
    }

    fn apply(&mut self, command: OverlayCommand) -> UiResult<()> {
        match command {
            OverlayCommand::PointerEnter | OverlayCommand::FocusGained => self.set_open(true),
            OverlayCommand::PointerLeave | OverlayCommand::FocusLost | OverlayCommand::Close => {
                self.set_open(false)
            }
            _ => {}
        }
        Ok(())
    }
}

/// Marks an element as the tooltip's hover target.
#[derive(Debug, Clone, Copy)]
pub struct TooltipTrigger {
    ctx: OverlayContext,
}

impl TooltipTrigger {
    pub fn new(scope: &Scope<'_>) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Tooltip, "TooltipTrigger")?;
        Ok(Self { ctx })
    }

    pub fn attach(&self, mut slot: Slot) -> Slot {
        slot.hover = Some(self.ctx.id);
        slot
    }
}

/// Floating label drawn beside the trigger.
#[derive(Debug, Clone, Copy)]
pub struct TooltipContent {
    ctx: OverlayContext,
    placement: Placement,
    hidden: bool,
}

impl TooltipContent {
    pub fn new(scope: &Scope<'_>, placement: Placement) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Tooltip, "TooltipContent")?;
        Ok(Self {
            ctx,
            placement,
            hidden: false,
        })
    }

    /// Suppress rendering even while open.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.ctx.open && !self.hidden
    }

    /// Text plus one column of padding and a border on each side.
    pub fn size(text: &str) -> (u16, u16) {
        (text.width() as u16 + 4, 3)
    }

    pub fn place(&self, anchor: Rect, text: &str) -> FloatRect {
        let (width, height) = Self::size(text);
        position::compute_centered(&AnchorRect::from(anchor), self.placement).resolve(width, height)
    }

    pub fn render(&self, frame: &mut Frame, anchor: Rect, text: &str, palette: &Palette) -> Option<Rect> {
        if !self.is_visible() {
            return None;
        }
        let visible = self.place(anchor, text).clip(frame.area())?;
        frame.render_widget(Clear, visible);
        frame.render_widget(
            Paragraph::new(format!(" {} ", text)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.popover).fg(palette.popover_foreground)),
            ),
            visible,
        );
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::position::Side;

    #[test]
    fn test_pointer_and_focus_drive_state() {
        let mut tip = Tooltip::new("Orders");
        tip.apply(OverlayCommand::PointerEnter).unwrap();
        assert!(tip.is_open());
        tip.apply(OverlayCommand::PointerLeave).unwrap();
        assert!(!tip.is_open());
        tip.apply(OverlayCommand::FocusGained).unwrap();
        assert!(tip.is_open());
        tip.apply(OverlayCommand::Toggle).unwrap();
        assert!(tip.is_open());
        tip.apply(OverlayCommand::FocusLost).unwrap();
        assert!(!tip.is_open());
    }

    #[test]
    fn test_hidden_content_not_visible() {
        let mut tip = Tooltip::new("Orders");
        tip.apply(OverlayCommand::PointerEnter).unwrap();
        let root = Scope::root();
        let scope = root.enter(tip.context());
        let content = TooltipContent::new(&scope, Placement::new(Side::Right, 1)).unwrap();
        assert!(content.is_visible());
        assert!(!content.hidden(true).is_visible());
    }

    #[test]
    fn test_right_placement_centers_vertically() {
        let tip = Tooltip::new("Orders");
        let root = Scope::root();
        let scope = root.enter(tip.context());
        let content = TooltipContent::new(&scope, Placement::new(Side::Right, 1)).unwrap();
        let placed = content.place(Rect::new(0, 10, 7, 1), "Orders");
        assert_eq!(placed.x, 8);
        assert_eq!(placed.y, 9);
        assert_eq!((placed.width, placed.height), (10, 3));
    }

    #[test]
    fn test_trigger_marks_hover_target() {
        let tip = Tooltip::new("Orders");
        let root = Scope::root();
        let scope = root.enter(tip.context());
        let slot = TooltipTrigger::new(&scope).unwrap().attach(Slot::new(Rect::new(0, 0, 7, 1)));
        assert_eq!(slot.hover, Some(tip.id()));
    }
}
