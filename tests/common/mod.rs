//! Common test utilities for integration tests.
//!
//! Builds apps with in-memory preferences and a fixed terminal background,
//! draws them on a `TestBackend` and finds text in the rendered buffer so
//! tests can click on what a user would see.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hrbuddie::app::App;
use hrbuddie::config::ShellConfig;
use hrbuddie::nav::default_tree;
use hrbuddie::theme::{FixedDarkModeSignal, MemoryPreferenceStore, ThemePreference, ThemeProvider};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Builder for apps used in integration tests.
pub struct TestAppBuilder {
    config: ShellConfig,
    theme: ThemePreference,
    dark_terminal: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: ShellConfig::default(),
            theme: ThemePreference::Dark,
            dark_terminal: true,
        }
    }

    pub fn route(mut self, route: &str) -> Self {
        self.config = self.config.with_initial_route(route);
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.config = self.config.with_collapsed(true);
        self
    }

    pub fn theme(mut self, theme: ThemePreference) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> App {
        let provider = ThemeProvider::new(
            self.theme,
            Box::new(MemoryPreferenceStore::new()),
            Box::new(FixedDarkModeSignal(self.dark_terminal)),
        );
        let mut app = App::new(self.config, default_tree(), provider);
        app.mount();
        app
    }
}

/// A mounted app at `route` with the default tree.
pub fn test_app(route: &str) -> App {
    TestAppBuilder::new().route(route).build()
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test terminal")
}

/// Render one frame and return a copy of the buffer.
pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Buffer {
    terminal
        .draw(|f| app.render(f).expect("render"))
        .expect("draw");
    terminal.backend().buffer().clone()
}

/// First cell where `text` starts, scanning rows top to bottom.
pub fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    find_text_in(buffer, text, 0, buffer.area.width)
}

/// Like [`find_text`] but only starting in columns `from..to`.
pub fn find_text_in(buffer: &Buffer, text: &str, from: u16, to: u16) -> Option<(u16, u16)> {
    let wanted: Vec<String> = text.chars().map(|c| c.to_string()).collect();
    let area = buffer.area;
    for y in area.y..area.bottom() {
        let cells: Vec<&str> = (area.x..area.right()).map(|x| buffer[(x, y)].symbol()).collect();
        for start in from..to.min(area.width) {
            let start = start as usize;
            if start + wanted.len() > cells.len() {
                break;
            }
            if wanted.iter().enumerate().all(|(i, ch)| cells[start + i] == ch) {
                return Some((area.x + start as u16, y));
            }
        }
    }
    None
}

pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.x..area.right()).map(|x| buffer[(x, y)].symbol()).collect()
}

pub fn click(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), x, y)
}

pub fn hover(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Moved, x, y)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}
