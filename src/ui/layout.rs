//! Shell layout.
//!
//! The frame splits into an optional sidebar column on the left and a main
//! column holding the header and the routed page. On narrow terminals the
//! sidebar column disappears and the navigation moves into a sheet.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::nav::SidebarMode;

// ============================================================================
// Dimensions
// ============================================================================

/// Sidebar width with labels
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 26;
/// Sidebar width with icons only
pub const SIDEBAR_COMPACT_WIDTH: u16 = 7;
/// Header rows, border included
pub const HEADER_HEIGHT: u16 = 3;

/// Sidebar column width for a mode.
pub fn sidebar_width(mode: SidebarMode) -> u16 {
    match mode {
        SidebarMode::Expanded => SIDEBAR_EXPANDED_WIDTH,
        SidebarMode::Compact => SIDEBAR_COMPACT_WIDTH,
    }
}

// ============================================================================
// Shell Layout
// ============================================================================

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// Docked sidebar, absent on narrow terminals
    pub sidebar: Option<Rect>,
    pub header: Rect,
    pub main: Rect,
}

/// Split `area` for the given sidebar mode.
///
/// ```ignore
/// let layout = shell_layout(Rect::new(0, 0, 120, 40), SidebarMode::Compact, false);
/// assert_eq!(layout.sidebar.map(|r| r.width), Some(SIDEBAR_COMPACT_WIDTH));
/// ```
pub fn shell_layout(area: Rect, mode: SidebarMode, mobile: bool) -> ShellLayout {
    let (sidebar, content) = if mobile {
        (None, area)
    } else {
        let width = sidebar_width(mode).min(area.width);
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        (Some(sidebar), content)
    };

    let [header, main] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(content);

    ShellLayout { sidebar, header, main }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_layout() {
        let layout = shell_layout(Rect::new(0, 0, 120, 40), SidebarMode::Expanded, false);
        assert_eq!(layout.sidebar, Some(Rect::new(0, 0, 26, 40)));
        assert_eq!(layout.header, Rect::new(26, 0, 94, 3));
        assert_eq!(layout.main, Rect::new(26, 3, 94, 37));
    }

    #[test]
    fn test_compact_layout() {
        let layout = shell_layout(Rect::new(0, 0, 120, 40), SidebarMode::Compact, false);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(SIDEBAR_COMPACT_WIDTH));
        assert_eq!(layout.header.x, SIDEBAR_COMPACT_WIDTH);
    }

    #[test]
    fn test_mobile_layout_has_no_sidebar() {
        let layout = shell_layout(Rect::new(0, 0, 60, 20), SidebarMode::Expanded, true);
        assert_eq!(layout.sidebar, None);
        assert_eq!(layout.header, Rect::new(0, 0, 60, 3));
        assert_eq!(layout.main, Rect::new(0, 3, 60, 17));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let layout = shell_layout(Rect::new(0, 0, 4, 2), SidebarMode::Expanded, false);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(4));
        assert_eq!(layout.header.width, 0);
    }
}
