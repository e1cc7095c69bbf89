//! Colors for the light and dark themes.

use ratatui::style::Color;

/// Semantic colors used by every widget in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text
    pub muted: Color,
    pub border: Color,
    /// Highlighted rows
    pub accent: Color,
    pub accent_foreground: Color,
    /// Brand and active markers
    pub primary: Color,
    /// Floating surfaces: menus and tooltips
    pub popover: Color,
    pub popover_foreground: Color,
    pub sidebar: Color,
    pub sidebar_foreground: Color,
    /// Dimmed layer behind a panel
    pub backdrop: Color,
    /// Bars on the dashboard
    pub chart: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(10, 10, 18),
        foreground: Color::Rgb(235, 235, 240),
        muted: Color::DarkGray,
        border: Color::Rgb(50, 50, 65),
        accent: Color::Rgb(38, 38, 56),
        accent_foreground: Color::White,
        primary: Color::Rgb(124, 92, 255),
        popover: Color::Rgb(18, 18, 30),
        popover_foreground: Color::Rgb(235, 235, 240),
        sidebar: Color::Rgb(14, 14, 24),
        sidebar_foreground: Color::White,
        backdrop: Color::DarkGray,
        chart: Color::Rgb(124, 92, 255),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 252),
        foreground: Color::Rgb(20, 20, 30),
        muted: Color::Gray,
        border: Color::Rgb(215, 215, 225),
        accent: Color::Rgb(236, 234, 250),
        accent_foreground: Color::Rgb(20, 20, 30),
        primary: Color::Rgb(98, 66, 230),
        popover: Color::White,
        popover_foreground: Color::Rgb(20, 20, 30),
        // The sidebar keeps a dark surface in both themes.
        sidebar: Color::Rgb(30, 27, 58),
        sidebar_foreground: Color::White,
        backdrop: Color::Gray,
        chart: Color::Rgb(98, 66, 230),
    };

    pub fn for_dark(dark: bool) -> Palette {
        if dark {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DARK
    }
}
