//! Sidebar rendering.
//!
//! Entries are drawn top to bottom: brand, main group, secondary group, then
//! the theme toggle pinned to the bottom. Expanded mode shows labels and
//! inline submenus; compact mode shows icons and hands submenus to floating
//! menus, which the caller draws afterwards from the returned anchors.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, FocusTarget};
use crate::error::UiResult;
use crate::nav::{AccordionPolicy, NavEntry, SidebarMode};
use crate::overlay::{
    DisclosureContent, DisclosureTrigger, MenuItem, MenuTrigger, Overlay, Scope, Slot, TooltipTrigger,
};
use crate::theme::Palette;
use crate::ui::interaction::{HitAreaRegistry, ShellAction};

pub const BRAND: &str = "HrBuddie";
const MAIN_GROUP: &str = "Main Menu";
const SECONDARY_GROUP: &str = "Tools & Settings";

/// Where entry triggers landed, for overlays drawn on top later.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SidebarAnchors {
    /// Entry index and trigger rect of each floating-menu trigger
    pub menus: Vec<(usize, Rect)>,
    /// Entry index and row of every top-level entry
    pub tooltips: Vec<(usize, Rect)>,
}

/// Hands out one-row rects from the top of an area.
struct Rows {
    area: Rect,
    next: u16,
}

impl Rows {
    fn new(area: Rect) -> Self {
        Self { area, next: area.y }
    }

    fn take(&mut self) -> Option<Rect> {
        if self.next >= self.area.bottom() {
            return None;
        }
        let row = Rect::new(self.area.x, self.next, self.area.width, 1);
        self.next += 1;
        Some(row)
    }

    fn skip(&mut self) {
        self.next = self.next.saturating_add(1);
    }
}

fn row_style(palette: &Palette, active: bool, focused: bool) -> Style {
    let mut style = Style::default().fg(palette.sidebar_foreground);
    if active {
        style = style.fg(palette.primary).add_modifier(Modifier::BOLD);
    }
    if focused {
        style = style.bg(palette.accent).fg(palette.accent_foreground);
    }
    style
}

/// `left` and `right` on one row, padded to `width`.
fn spread(left: String, right: &str, width: u16, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(left.width() + right.width());
    Line::from(vec![
        Span::styled(left, style),
        Span::styled(" ".repeat(pad), style),
        Span::styled(right.to_string(), style),
    ])
}

/// Items of an entry's floating menu: the entry label, then its children.
pub fn submenu_items(scope: &Scope<'_>, entry: &NavEntry, policy: &AccordionPolicy) -> UiResult<Vec<MenuItem>> {
    let mut items = vec![MenuItem::label(scope, &entry.label)?];
    for sub in &entry.sub_items {
        items.push(
            MenuItem::new(scope, &sub.label)?
                .with_action(ShellAction::Navigate(sub.href.clone()))
                .active(policy.is_sub_active(sub)),
        );
    }
    Ok(items)
}

/// Draw the sidebar into `area`.
///
/// A `docked` sidebar sits beside the page with its own brand row and a
/// right-hand border; an undocked one fills the navigation sheet, which
/// already carries the brand as its title.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    hits: &mut HitAreaRegistry,
    mode: SidebarMode,
    docked: bool,
) -> UiResult<SidebarAnchors> {
    let palette = app.theme.palette();
    let mut block = Block::default().style(Style::default().bg(palette.sidebar).fg(palette.sidebar_foreground));
    if docked {
        block = block
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(palette.border));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut anchors = SidebarAnchors::default();
    if inner.is_empty() {
        return Ok(anchors);
    }
    let compact = mode == SidebarMode::Compact;

    let header = if docked { 2 } else { 0 };
    if docked {
        let brand = if compact {
            " ⌘".to_string()
        } else {
            format!(" ⌘ {}", BRAND)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                brand,
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            )),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
    }

    let footer = if app.theme.is_mounted() { 2 } else { 0 };
    let list = Rect::new(
        inner.x,
        inner.y.saturating_add(header).min(inner.bottom()),
        inner.width,
        inner.height.saturating_sub(header + footer),
    );
    let mut rows = Rows::new(list);

    let tree = app.policy.tree();
    let main: Vec<usize> = (0..tree.len()).filter(|&i| !tree[i].is_secondary).collect();
    let secondary: Vec<usize> = (0..tree.len()).filter(|&i| tree[i].is_secondary).collect();
    let root = Scope::root();

    for (group, indices) in [(MAIN_GROUP, main), (SECONDARY_GROUP, secondary)] {
        if indices.is_empty() {
            continue;
        }
        if !compact {
            if let Some(row) = rows.take() {
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {}", group), Style::default().fg(palette.muted))),
                    row,
                );
            }
        }
        for index in indices {
            render_entry(frame, &mut rows, app, index, compact, hits, &root, &palette, &mut anchors)?;
        }
        rows.skip();
    }

    if footer > 0 && inner.height > footer {
        render_theme_toggle(frame, inner, app, hits, compact, &palette);
    }
    Ok(anchors)
}

#[allow(clippy::too_many_arguments)]
fn render_entry(
    frame: &mut Frame,
    rows: &mut Rows,
    app: &App,
    index: usize,
    compact: bool,
    hits: &mut HitAreaRegistry,
    root: &Scope<'_>,
    palette: &Palette,
    anchors: &mut SidebarAnchors,
) -> UiResult<()> {
    let Some(row) = rows.take() else {
        return Ok(());
    };
    let entry = &app.policy.tree()[index];
    let overlays = &app.entries[index];
    let active = app.policy.is_active(entry);
    let style = row_style(palette, active, app.focus == Some(FocusTarget::Entry(index)));
    let marker = if active { "▎" } else { " " };

    let tooltip_scope = root.enter(overlays.tooltip.context());
    let tooltip = TooltipTrigger::new(&tooltip_scope)?;
    anchors.tooltips.push((index, row));

    let text = if compact {
        format!("{} {}", marker, entry.glyph())
    } else {
        format!("{} {} {}", marker, entry.glyph(), entry.label)
    };

    if !entry.has_sub_items() {
        frame.render_widget(Paragraph::new(spread(text, "", row.width, style)), row);
        tooltip
            .attach(Slot::new(row).with_action(ShellAction::Navigate(entry.href.clone())))
            .register(hits);
        return Ok(());
    }

    if compact {
        let Some(menu) = overlays.menu.as_ref() else {
            return Ok(());
        };
        let scope = tooltip_scope.enter(menu.context());
        let rect = MenuTrigger::new(&scope)?.render_with(frame, row, hits, |frame, rect, props| {
            let style = if props.open {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            frame.render_widget(Paragraph::new(spread(text, "", rect.width, style)), rect);
            tooltip.attach(Slot::new(rect))
        });
        menu.track_trigger(rect);
        anchors.menus.push((index, rect));
        return Ok(());
    }

    let Some(disclosure) = overlays.disclosure.as_ref() else {
        return Ok(());
    };
    let scope = tooltip_scope.enter(disclosure.context());
    DisclosureTrigger::new(&scope)?.render_with(frame, row, hits, |frame, rect, props| {
        let chevron = if props.open { "▾ " } else { "▸ " };
        frame.render_widget(Paragraph::new(spread(text, chevron, rect.width, style)), rect);
        tooltip.attach(Slot::new(rect))
    });

    let content = DisclosureContent::new(&scope)?;
    let visible = content.visible_height(entry.sub_items.len() as u16) as usize;
    for (sub_index, sub) in entry.sub_items.iter().enumerate().take(visible) {
        let Some(row) = rows.take() else {
            break;
        };
        let focused = app.focus == Some(FocusTarget::SubItem(index, sub_index));
        let style = row_style(palette, app.policy.is_sub_active(sub), focused);
        frame.render_widget(
            Paragraph::new(spread(format!("     {}", sub.label), "", row.width, style)),
            row,
        );
        Slot::new(row)
            .with_action(ShellAction::Navigate(sub.href.clone()))
            .register(hits);
    }
    Ok(())
}

fn render_theme_toggle(
    frame: &mut Frame,
    inner: Rect,
    app: &App,
    hits: &mut HitAreaRegistry,
    compact: bool,
    palette: &Palette,
) {
    let rule = Rect::new(inner.x, inner.bottom() - 2, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(palette.border),
        )),
        rule,
    );

    let row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    let label = app.theme.label();
    let glyph = if label == "Dark Mode" { "☾" } else { "☀" };
    let text = if compact {
        format!("  {}", glyph)
    } else {
        format!("  {} {}", glyph, label)
    };
    let style = row_style(palette, false, app.focus == Some(FocusTarget::ThemeToggle));
    frame.render_widget(Paragraph::new(spread(text, "", row.width, style)), row);
    hits.register(
        row,
        ShellAction::ToggleTheme,
        Some(Style::default().bg(palette.accent).fg(palette.accent_foreground)),
    );
}
