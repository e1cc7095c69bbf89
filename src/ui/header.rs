//! Shell header
//!
//! Left: the sidebar control and the breadcrumb. Right: today's date.
//! The sidebar control collapses the docked sidebar on wide terminals and
//! opens the navigation sheet on narrow ones.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::error::UiResult;
use crate::nav::{breadcrumb, SidebarMode};
use crate::overlay::{Overlay, PanelTrigger, Scope, Slot};
use crate::ui::interaction::{HitAreaRegistry, ShellAction};

/// Breadcrumb separator
pub const CRUMB_SEPARATOR: &str = " › ";

/// Breadcrumb text for the current location.
pub fn crumb_text(app: &App) -> String {
    match breadcrumb(app.policy.tree(), app.location.path()) {
        Some(labels) => labels.join(CRUMB_SEPARATOR),
        None => app.location.path().to_string(),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitAreaRegistry) -> UiResult<()> {
    let palette = app.theme.palette();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background).fg(palette.foreground));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height == 0 {
        return Ok(());
    }

    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let button = Rect::new(row.x + 1, row.y, 3, 1);
    let button_style = Style::default().fg(palette.muted);

    if app.is_mobile() {
        let root = Scope::root();
        let scope = root.enter(app.mobile_nav.context());
        PanelTrigger::new(&scope)?.render_with(frame, button, hits, |frame, rect, _| {
            frame.render_widget(Paragraph::new(Span::styled(" ≡ ", button_style)), rect);
            Slot::new(rect)
        });
    } else {
        let glyph = match app.sidebar_mode() {
            SidebarMode::Expanded => " « ",
            SidebarMode::Compact => " » ",
        };
        frame.render_widget(Paragraph::new(Span::styled(glyph, button_style)), button);
        hits.register(
            button,
            ShellAction::ToggleSidebar,
            Some(Style::default().bg(palette.accent).fg(palette.accent_foreground)),
        );
    }

    let date = chrono::Local::now().format("%a %d %b %Y").to_string();
    let date_width = date.chars().count() as u16 + 1;
    let crumbs = Rect::new(
        button.right() + 1,
        row.y,
        row.right().saturating_sub(button.right() + 1 + date_width),
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            crumb_text(app),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        crumbs,
    );

    if row.width > date_width + button.width + 10 {
        frame.render_widget(
            Paragraph::new(Span::styled(date, Style::default().fg(palette.muted))),
            Rect::new(row.right() - date_width, row.y, date_width, 1),
        );
    }
    Ok(())
}
