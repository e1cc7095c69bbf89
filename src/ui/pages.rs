//! Routed page content.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::nav::{breadcrumb, DEFAULT_ROUTE, USAGE};
use crate::theme::Palette;

pub const KEY_HINTS: &str = "q quit · ^B sidebar · t theme · m menu · ↑↓ focus · ⏎ open · ⌫ back";
pub const NOT_FOUND_TITLE: &str = "404 · Page not found";

/// What the main column shows for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    /// A route in the navigation tree, titled by its last breadcrumb label
    Section(String),
    NotFound,
}

pub fn page_for(app: &App) -> Page {
    let path = app.location.path();
    if path == DEFAULT_ROUTE {
        return Page::Dashboard;
    }
    match breadcrumb(app.policy.tree(), path).and_then(|mut labels| labels.pop()) {
        Some(title) => Page::Section(title),
        None => Page::NotFound,
    }
}

pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    if area.is_empty() {
        return;
    }
    let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .padding(Padding::new(2, 2, 1, 0))
        .style(Style::default().bg(palette.background).fg(palette.foreground));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    match page_for(app) {
        Page::Dashboard => render_dashboard(frame, inner, &palette),
        Page::Section(title) => render_section(frame, inner, &title, &palette),
        Page::NotFound => render_not_found(frame, inner, app.location.path(), &palette),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", KEY_HINTS), Style::default().fg(palette.muted)))
            .style(Style::default().bg(palette.background)),
        hints,
    );
}

fn title_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn render_dashboard(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [title, chart] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(title_line("Dashboard")), title);

    let block = Block::default()
        .title(" Usage by section ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(chart);
    frame.render_widget(block, chart);

    let lines: Vec<Line> = USAGE
        .iter()
        .take(inner.height as usize)
        .map(|(label, value)| usage_bar(label, *value, inner.width, palette))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// `label  ██████  value` scaled so 100 fills the space left for the bar.
fn usage_bar(label: &str, value: u64, width: u16, palette: &Palette) -> Line<'static> {
    const LABEL_WIDTH: usize = 14;
    let value_text = format!(" {:>3}", value);
    let room = (width as usize).saturating_sub(LABEL_WIDTH + value_text.width() + 1);
    let filled = (room as u64 * value.min(100) / 100) as usize;
    let pad = LABEL_WIDTH.saturating_sub(label.width());

    Line::from(vec![
        Span::raw(format!(" {}{}", label, " ".repeat(pad))),
        Span::styled("█".repeat(filled), Style::default().fg(palette.chart)),
        Span::styled("░".repeat(room - filled), Style::default().fg(palette.border)),
        Span::styled(value_text, Style::default().fg(palette.muted)),
    ])
}

fn render_section(frame: &mut Frame, area: Rect, title: &str, palette: &Palette) {
    let lines = vec![
        title_line(title),
        Line::default(),
        Line::from(Span::styled(
            format!("Nothing to show in {} yet.", title),
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_not_found(frame: &mut Frame, area: Rect, path: &str, palette: &Palette) {
    let lines = vec![
        title_line(NOT_FOUND_TITLE),
        Line::default(),
        Line::from(Span::styled(
            format!("No page lives at {}.", path),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            "Press Backspace to go back.",
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_usage_bar_scales_to_room() {
        let line = usage_bar("Orders", 50, 40, &Palette::DARK);
        let rendered = text(&line);
        // 40 - 14 label - 4 value - 1 = 21 columns of bar, half filled.
        assert_eq!(rendered.matches('█').count(), 10);
        assert_eq!(rendered.matches('░').count(), 11);
        assert!(rendered.ends_with("  50"));
    }

    #[test]
    fn test_usage_bar_in_narrow_area() {
        let line = usage_bar("Integrations", 20, 10, &Palette::LIGHT);
        assert_eq!(text(&line).matches('█').count(), 0);
    }
}
