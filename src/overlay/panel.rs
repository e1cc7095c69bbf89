//! Edge-anchored sheet over a dimmed backdrop.
//!
//! Clicking the backdrop or the close affordance closes the panel. The panel
//! registers no dismissal observer of its own; Escape is left to the owner.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::position::Side;
use super::scope::{OverlayContext, OverlayId, OverlayKind, Scope};
use super::slot::{self, OverlayAction, Slot, TriggerProps};
use super::state::{Notifier, OpenState};
use super::{Overlay, OverlayCommand};
use crate::error::UiResult;
use crate::theme::Palette;
use crate::ui::interaction::{HitAreaRegistry, ShellAction};

/// Widest a side sheet gets.
pub const MAX_SHEET_WIDTH: u16 = 40;

/// Root of a panel.
#[derive(Debug)]
pub struct Panel {
    id: OverlayId,
    name: String,
    state: OpenState,
}

impl Panel {
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

    pub fn set_open(&mut self, open: bool) {
        tracing::debug!("Panel '{}' requested open={}", self.name, open);
        self.state.request(open);
    }

    pub fn sync(&mut self, open: bool) -> UiResult<()> {
        self.state.sync(open, &self.name).map(|_| ())
    }
}

impl Overlay for Panel {
    fn id(&self) -> OverlayId {
        self.id
    }

    fn kind(&self) -> OverlayKind {
        OverlayKind::Panel
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

/// Element that opens its panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelTrigger {
    ctx: OverlayContext,
}

impl PanelTrigger {
    pub fn new(scope: &Scope<'_>) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Panel, "PanelTrigger")?;
        Ok(Self { ctx })
    }

    pub fn props(&self) -> TriggerProps {
        TriggerProps::new(self.ctx, OverlayCommand::Open)
    }

    pub fn attach(&self, slot: Slot) -> Slot {
        slot.push_overlay(self.props().action)
    }

    pub fn render_with<F>(&self, frame: &mut Frame, area: Rect, hits: &mut HitAreaRegistry, build: F) -> Rect
    where
        F: FnOnce(&mut Frame, Rect, &TriggerProps) -> Slot,
    {
        slot::render_with(frame, area, hits, self.props(), build)
    }
}

/// Element that closes its panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelClose {
    ctx: OverlayContext,
}

impl PanelClose {
    pub fn new(scope: &Scope<'_>) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Panel, "PanelClose")?;
        Ok(Self { ctx })
    }

    pub fn props(&self) -> TriggerProps {
        TriggerProps::new(self.ctx, OverlayCommand::Close)
    }

    pub fn attach(&self, slot: Slot) -> Slot {
        slot.push_overlay(self.props().action)
    }
}

/// Where a sheet sits inside `area`.
///
/// Side sheets take three quarters of the width up to [`MAX_SHEET_WIDTH`];
/// top and bottom sheets span the width at `extent` rows.
pub fn sheet_rect(area: Rect, side: Side, extent: u16) -> Rect {
    match side {
        Side::Left | Side::Right => {
            let width = (area.width.saturating_mul(3) / 4).min(MAX_SHEET_WIDTH);
            let x = if side == Side::Left {
                area.x
            } else {
                area.right().saturating_sub(width)
            };
            Rect::new(x, area.y, width, area.height)
        }
        Side::Top | Side::Bottom => {
            let height = extent.min(area.height);
            let y = if side == Side::Top {
                area.y
            } else {
                area.bottom().saturating_sub(height)
            };
            Rect::new(area.x, y, area.width, height)
        }
    }
}

/// The sheet itself.
#[derive(Debug, Clone, Copy)]
pub struct PanelContent {
    ctx: OverlayContext,
    side: Side,
    extent: u16,
}

impl PanelContent {
    pub fn new(scope: &Scope<'_>, side: Side) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Panel, "PanelContent")?;
        Ok(Self { ctx, side, extent: 10 })
    }

    /// Rows used by top and bottom sheets.
    pub fn extent(mut self, rows: u16) -> Self {
        self.extent = rows;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Draw backdrop and sheet, returning the area left for the body.
    ///
    /// Registration order matters: the backdrop goes first so everything the
    /// sheet registers sits on top of it.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        hits: &mut HitAreaRegistry,
        palette: &Palette,
        title: &str,
        description: Option<&str>,
    ) -> Option<Rect> {
        if !self.ctx.open || area.is_empty() {
            return None;
        }
        let close = ShellAction::Overlay(OverlayAction {
            id: self.ctx.id,
            command: OverlayCommand::Close,
        });

        hits.register(area, close.clone(), None);
        frame.render_widget(
            Block::default().style(Style::default().fg(palette.backdrop).add_modifier(Modifier::DIM)),
            area,
        );

        let sheet = sheet_rect(area, self.side, self.extent);
        frame.render_widget(Clear, sheet);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background).fg(palette.foreground));
        let inner = block.inner(sheet);
        frame.render_widget(block, sheet);
        hits.register(sheet, ShellAction::Absorb, None);

        if inner.width < 2 || inner.height == 0 {
            return Some(inner);
        }

        let close_rect = Rect::new(inner.right().saturating_sub(2), inner.y, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("✕", Style::default().fg(palette.muted))),
            close_rect,
        );
        hits.register(close_rect, close, Some(Style::default().fg(palette.foreground)));

        let mut header = vec![Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(text) = description {
            header.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(palette.muted),
            )));
        }
        let header_height = (header.len() as u16).min(inner.height);
        frame.render_widget(
            Paragraph::new(header),
            Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(4), header_height),
        );

        let body_top = inner.y + header_height + 1;
        Some(Rect::new(
            inner.x,
            body_top.min(inner.bottom()),
            inner.width,
            inner.bottom().saturating_sub(body_top),
        ))
    }
}
