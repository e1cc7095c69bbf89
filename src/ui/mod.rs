//! UI rendering for the HrBuddie shell
//!
//! One frame is drawn back to front:
//! - background, docked sidebar, header and the routed page
//! - the navigation sheet on narrow terminals
//! - floating submenus of the compact sidebar
//! - tooltips of the compact sidebar
//!
//! Hit areas are registered in the same order, so whatever is drawn last
//! also receives the click.

pub mod header;
pub mod interaction;
pub mod layout;
pub mod pages;
pub mod sidebar;

pub use header::{crumb_text, render_header};
pub use layout::{shell_layout, ShellLayout, HEADER_HEIGHT, SIDEBAR_COMPACT_WIDTH, SIDEBAR_EXPANDED_WIDTH};
pub use pages::{page_for, render_page, Page};
pub use sidebar::{render_sidebar, submenu_items, SidebarAnchors, BRAND};

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use crate::error::UiResult;
use crate::nav::SidebarMode;
use crate::overlay::{MenuContent, Overlay, PanelContent, Placement, Scope, Side, TooltipContent};
use interaction::HitAreaRegistry;

/// Columns between a trigger and its floating content
const FLOAT_OFFSET: u16 = 1;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole shell and register its hit areas.
pub fn render_shell(frame: &mut Frame, app: &App, hits: &mut HitAreaRegistry) -> UiResult<()> {
    let area = frame.area();
    let palette = app.theme.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let mode = app.sidebar_mode();
    let mobile = app.is_mobile();
    let layout = shell_layout(area, mode, mobile);

    let anchors = match layout.sidebar {
        Some(sidebar) => render_sidebar(frame, sidebar, app, hits, mode, true)?,
        None => SidebarAnchors::default(),
    };
    render_header(frame, layout.header, app, hits)?;
    render_page(frame, layout.main, app);

    let root = Scope::root();

    if mobile {
        let scope = root.enter(app.mobile_nav.context());
        let sheet = PanelContent::new(&scope, Side::Left)?.render(
            frame,
            area,
            hits,
            &palette,
            BRAND,
            Some("Navigation"),
        );
        if let Some(body) = sheet {
            render_sidebar(frame, body, app, hits, SidebarMode::Expanded, false)?;
        }
    }

    let placement = Placement::new(Side::Right, FLOAT_OFFSET);

    for &(index, anchor) in &anchors.menus {
        let Some(menu) = app.entries[index].menu.as_ref() else {
            continue;
        };
        let scope = root.enter(menu.context());
        let items = submenu_items(&scope, &app.policy.tree()[index], &app.policy)?;
        let drawn = MenuContent::new(&scope, placement)?.render(
            frame,
            hits,
            anchor,
            &items,
            menu.highlighted(),
            &palette,
        );
        if let Some(rect) = drawn {
            menu.track_content(rect);
        }
    }

    let open_menu = app.open_menu();
    for &(index, anchor) in &anchors.tooltips {
        let tooltip = &app.entries[index].tooltip;
        let scope = root.enter(tooltip.context());
        TooltipContent::new(&scope, placement)?
            .hidden(mode != SidebarMode::Compact || open_menu == Some(index))
            .render(frame, anchor, &app.entries[index].label, &palette);
    }

    Ok(())
}
