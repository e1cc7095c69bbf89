//! Anchored dropdown menu.
//!
//! Opening acquires a dismissal observer; every path that closes the menu
//! (toggle, item selection, outside click, Escape, owner sync, drop) lets it go.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::dismiss::{self, DismissReason, DismissalSlot, Regions};
use super::position::{self, AnchorRect, FloatRect, Placement};
use super::router::EventRouter;
use super::scope::{OverlayContext, OverlayId, OverlayKind, Scope};
use super::slot::{self, OverlayAction, Slot, TriggerProps};
use super::state::{Notifier, OpenState, SharedNotifier};
use super::{Overlay, OverlayCommand};
use crate::error::UiResult;
use crate::theme::Palette;
use crate::ui::interaction::{HitAreaRegistry, ShellAction};

/// Narrowest menu, borders included.
pub const MIN_MENU_WIDTH: u16 = 15;

struct MenuCore {
    name: String,
    state: OpenState,
    dismissal: DismissalSlot,
    trigger: Rect,
    content: Rect,
    highlighted: Option<usize>,
    selectable: Vec<bool>,
}

impl MenuCore {
    /// Drop open-only state once the menu reads as closed.
    fn settle(&mut self) {
        if self.state.current() {
            return;
        }
        if self.dismissal.release() {
            tracing::debug!("Menu '{}' closed", self.name);
        }
        self.highlighted = None;
        self.content = Rect::default();
    }

    fn dismiss(&mut self, reason: DismissReason) {
        tracing::debug!("Menu '{}' dismissed by {:?}", self.name, reason);
        self.state.request(false);
        self.settle();
    }

    fn move_highlight(&mut self, forward: bool) {
        let candidates: Vec<usize> = self
            .selectable
            .iter()
            .enumerate()
            .filter_map(|(i, selectable)| selectable.then_some(i))
            .collect();
        if candidates.is_empty() {
            self.highlighted = None;
            return;
        }
        let next = match self.highlighted.and_then(|h| candidates.iter().position(|&c| c == h)) {
            Some(pos) if forward => candidates[(pos + 1) % candidates.len()],
            Some(pos) => candidates[(pos + candidates.len() - 1) % candidates.len()],
            None if forward => candidates[0],
            None => candidates[candidates.len() - 1],
        };
        self.highlighted = Some(next);
    }
}

/// Root of a dropdown menu.
pub struct Menu {
    id: OverlayId,
    name: String,
    router: EventRouter,
    notifier: SharedNotifier,
    core: Rc<RefCell<MenuCore>>,
}

impl Menu {
    /// Build a menu. `external` selects controlled mode; a menu that starts
    /// open begins observing dismissal immediately.
    pub fn new(
        name: impl Into<String>,
        router: &EventRouter,
        external: Option<bool>,
        notifier: Option<Notifier>,
    ) -> UiResult<Self> {
        let menu = Self::build(name.into(), router, OpenState::new(external, false, None), notifier);
        menu.reconcile()?;
        Ok(menu)
    }

    /// Closed menu that owns its state.
    pub fn uncontrolled(name: impl Into<String>, router: &EventRouter) -> Self {
        Self::build(name.into(), router, OpenState::uncontrolled(false, None), None)
    }

    fn build(name: String, router: &EventRouter, state: OpenState, notifier: Option<Notifier>) -> Self {
        Self {
            id: OverlayId::next(),
            name: name.clone(),
            router: router.clone(),
            notifier: SharedNotifier::new(notifier),
            core: Rc::new(RefCell::new(MenuCore {
                name,
                state,
                dismissal: DismissalSlot::default(),
                trigger: Rect::default(),
                content: Rect::default(),
                highlighted: None,
                selectable: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_controlled(&self) -> bool {
        self.core.borrow().state.is_controlled()
    }

    /// Request a new open value.
    ///
    /// The notifier runs last, with no borrow held, so a controlled owner
    /// can `sync` from inside it.
    pub fn request(&self, open: bool) -> UiResult<()> {
        self.core.borrow_mut().state.request(open);
        self.reconcile()?;
        self.notifier.notify(open);
        Ok(())
    }

    /// Feed the owner's value back into a controlled menu.
    pub fn sync(&self, open: bool) -> UiResult<()> {
        self.core.borrow_mut().state.sync(open, &self.name)?;
        self.reconcile()
    }

    /// True while a dismissal observer is registered.
    pub fn is_listening(&self) -> bool {
        self.core.borrow().dismissal.is_active()
    }

    pub fn regions(&self) -> Option<Regions> {
        self.core.borrow().dismissal.regions()
    }

    /// Record where the trigger was drawn this frame.
    pub fn track_trigger(&self, rect: Rect) {
        let mut core = self.core.borrow_mut();
        core.trigger = rect;
        core.dismissal.set_regions(core.content, rect);
    }

    /// Record where the content was drawn this frame.
    pub fn track_content(&self, rect: Rect) {
        let mut core = self.core.borrow_mut();
        core.content = rect;
        core.dismissal.set_regions(rect, core.trigger);
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.core.borrow().highlighted
    }

    /// Tell the menu which of its items can be highlighted.
    pub fn set_selectable(&self, mask: Vec<bool>) {
        let mut core = self.core.borrow_mut();
        if let Some(h) = core.highlighted {
            if !mask.get(h).copied().unwrap_or(false) {
                core.highlighted = None;
            }
        }
        core.selectable = mask;
    }

    fn reconcile(&self) -> UiResult<()> {
        let (open, listening, trigger) = {
            let core = self.core.borrow();
            (core.state.current(), core.dismissal.is_active(), core.trigger)
        };

        if open && !listening {
            let weak = Rc::downgrade(&self.core);
            let notifier = self.notifier.clone();
            let guard = dismiss::activate(&self.router, Rect::default(), trigger, move |reason| {
                let Some(core) = weak.upgrade() else {
                    return;
                };
                core.borrow_mut().dismiss(reason);
                notifier.notify(false);
            });
            self.core.borrow_mut().dismissal.acquire(&self.name, guard)?;
            tracing::debug!("Menu '{}' opened", self.name);
        } else if !open {
            self.core.borrow_mut().settle();
        }
        Ok(())
    }
}

impl Overlay for Menu {
    fn id(&self) -> OverlayId {
        self.id
    }

    fn kind(&self) -> OverlayKind {
        OverlayKind::Menu
    }

    fn is_open(&self) -> bool {
        self.core.borrow().state.current()
    }

    fn apply(&mut self, command: OverlayCommand) -> UiResult<()> {
        match command {
            OverlayCommand::Toggle => self.request(!self.is_open()),
            OverlayCommand::Open => self.request(true),
            OverlayCommand::Close => self.request(false),
            OverlayCommand::Select(index) => {
                tracing::debug!("Menu '{}' item {} selected", self.name, index);
                self.request(false)
            }
            OverlayCommand::HighlightNext | OverlayCommand::HighlightPrev => {
                if self.is_open() {
                    self.core
                        .borrow_mut()
                        .move_highlight(command == OverlayCommand::HighlightNext);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("open", &self.is_open())
            .field("listening", &self.is_listening())
            .finish()
    }
}

/// Element that toggles its menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuTrigger {
    ctx: OverlayContext,
}

impl MenuTrigger {
    pub fn new(scope: &Scope<'_>) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Menu, "MenuTrigger")?;
        Ok(Self { ctx })
    }

    pub fn props(&self) -> TriggerProps {
        TriggerProps::new(self.ctx, OverlayCommand::Toggle)
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemKind {
    Action,
    Label,
    Separator,
    Checkbox { checked: bool },
    Radio { checked: bool },
}

/// One row of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    kind: MenuItemKind,
    text: String,
    actions: Vec<ShellAction>,
    shortcut: Option<String>,
    active: bool,
    inset: bool,
}

impl MenuItem {
    fn build(scope: &Scope<'_>, component: &'static str, kind: MenuItemKind, text: &str) -> UiResult<Self> {
        scope.require(OverlayKind::Menu, component)?;
        Ok(Self {
            kind,
            text: text.to_string(),
            actions: Vec::new(),
            shortcut: None,
            active: false,
            inset: false,
        })
    }

    pub fn new(scope: &Scope<'_>, text: &str) -> UiResult<Self> {
        Self::build(scope, "MenuItem", MenuItemKind::Action, text)
    }

    pub fn label(scope: &Scope<'_>, text: &str) -> UiResult<Self> {
        Self::build(scope, "MenuLabel", MenuItemKind::Label, text)
    }

    pub fn separator(scope: &Scope<'_>) -> UiResult<Self> {
        Self::build(scope, "MenuSeparator", MenuItemKind::Separator, "")
    }

    pub fn checkbox(scope: &Scope<'_>, text: &str, checked: bool) -> UiResult<Self> {
        Self::build(scope, "MenuCheckboxItem", MenuItemKind::Checkbox { checked }, text)
    }

    /// Radio items for `options`; the one whose value equals `value` is checked.
    pub fn radio_group(
        scope: &Scope<'_>,
        value: &str,
        options: &[(&str, ShellAction)],
    ) -> UiResult<Vec<Self>> {
        options
            .iter()
            .map(|(option, action)| {
                Self::build(
                    scope,
                    "MenuRadioItem",
                    MenuItemKind::Radio {
                        checked: *option == value,
                    },
                    option,
                )
                .map(|item| item.with_action(action.clone()))
            })
            .collect()
    }

    pub fn with_action(mut self, action: ShellAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    pub fn kind(&self) -> MenuItemKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn actions(&self) -> &[ShellAction] {
        &self.actions
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_selectable(&self) -> bool {
        matches!(
            self.kind,
            MenuItemKind::Action | MenuItemKind::Checkbox { .. } | MenuItemKind::Radio { .. }
        )
    }

    fn marker(&self) -> &'static str {
        match self.kind {
            MenuItemKind::Checkbox { checked: true } => "✓ ",
            MenuItemKind::Radio { checked: true } => "● ",
            MenuItemKind::Checkbox { .. } | MenuItemKind::Radio { .. } => "  ",
            _ if self.inset => "  ",
            _ => "",
        }
    }

    fn width(&self) -> u16 {
        let shortcut = self.shortcut.as_deref().map_or(0, |s| s.width() + 2);
        (self.marker().width() + self.text.width() + shortcut) as u16
    }

    fn line(&self, width: u16, highlighted: bool, palette: &Palette) -> Line<'static> {
        if self.kind == MenuItemKind::Separator {
            return Line::from(Span::styled(
                "─".repeat(width as usize),
                Style::default().fg(palette.border),
            ));
        }

        let mut style = Style::default().fg(palette.popover_foreground);
        if self.kind == MenuItemKind::Label {
            style = style.add_modifier(Modifier::BOLD);
        }
        if highlighted || self.active {
            style = style.bg(palette.accent).fg(palette.accent_foreground);
        }

        let left = format!(" {}{}", self.marker(), self.text);
        let right = self
            .shortcut
            .as_deref()
            .map(|s| format!("{} ", s))
            .unwrap_or_else(|| " ".to_string());
        let pad = (width as usize).saturating_sub(left.width() + right.width());

        Line::from(vec![
            Span::styled(left, style),
            Span::styled(" ".repeat(pad), style),
            Span::styled(right, style.add_modifier(Modifier::DIM)),
        ])
    }
}

/// Floating list of a menu's items.
#[derive(Debug, Clone, Copy)]
pub struct MenuContent {
    ctx: OverlayContext,
    placement: Placement,
    min_width: u16,
}

impl MenuContent {
    pub fn new(scope: &Scope<'_>, placement: Placement) -> UiResult<Self> {
        let ctx = scope.require(OverlayKind::Menu, "MenuContent")?;
        Ok(Self {
            ctx,
            placement,
            min_width: MIN_MENU_WIDTH,
        })
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    /// Outer size for `items`: one row each, a border, one column of padding.
    pub fn size(&self, items: &[MenuItem]) -> (u16, u16) {
        let inner = items.iter().map(MenuItem::width).max().unwrap_or(0) + 2;
        let width = (inner + 2).max(self.min_width);
        (width, items.len() as u16 + 2)
    }

    /// Where the content goes, before clipping to the screen.
    pub fn place(&self, anchor: Rect, items: &[MenuItem]) -> FloatRect {
        let (width, height) = self.size(items);
        position::compute(&AnchorRect::from(anchor), self.placement).resolve(width, height)
    }

    /// Draw the menu next to `anchor` and register its items.
    ///
    /// Returns the visible rectangle, or `None` when closed or off-screen.
    pub fn render(
        &self,
        frame: &mut Frame,
        hits: &mut HitAreaRegistry,
        anchor: Rect,
        items: &[MenuItem],
        highlighted: Option<usize>,
        palette: &Palette,
    ) -> Option<Rect> {
        if !self.ctx.open {
            return None;
        }
        let screen = frame.area();
        let placed = self.place(anchor, items);
        let visible = placed.clip(screen)?;

        frame.render_widget(Clear, visible);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.popover).fg(palette.popover_foreground)),
            visible,
        );
        // Clicks on borders and labels stay inside the menu.
        hits.register(visible, ShellAction::Absorb, None);

        let row_width = placed.width.saturating_sub(2);
        for (index, item) in items.iter().enumerate() {
            let row = FloatRect {
                x: placed.x + 1,
                y: placed.y + 1 + index as i32,
                width: row_width,
                height: 1,
            };
            let Some(row_rect) = row.clip(screen) else {
                continue;
            };
            let line = item.line(row_width, highlighted == Some(index), palette);
            frame.render_widget(Paragraph::new(line), row_rect);

            if item.is_selectable() {
                let mut actions = item.actions.clone();
                actions.push(ShellAction::Overlay(OverlayAction {
                    id: self.ctx.id,
                    command: OverlayCommand::Select(index),
                }));
                hits.register_chain(row_rect, actions, None, Some(Style::default().bg(palette.accent)));
            }
        }
        Some(visible)
    }
}
