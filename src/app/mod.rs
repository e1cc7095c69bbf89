//! Application state for the shell.
//!
//! `App` owns the navigation model, the theme, every overlay instance and the
//! event router. Controlled overlays report through an unbounded channel of
//! [`AppMessage`]s; the app applies them and pushes the result back with
//! `sync`, so the app stays the single owner of that state.

mod focus;
mod handlers;
mod messages;

pub use focus::{focus_order, FocusTarget};
pub use messages::AppMessage;

use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::config::ShellConfig;
use crate::error::UiResult;
use crate::nav::{AccordionPolicy, Location, NavEntry, SidebarMode};
use crate::overlay::{Disclosure, EventRouter, Menu, Overlay, OverlayId, Panel, Tooltip};
use crate::theme::ThemeProvider;
use crate::ui::{self, interaction::HitAreaRegistry};

/// Overlays belonging to one top-level sidebar entry.
#[derive(Debug)]
pub struct EntryOverlays {
    pub label: String,
    /// Inline submenu, for entries with children
    pub disclosure: Option<Disclosure>,
    /// Floating submenu used in compact mode, for entries with children
    pub menu: Option<Menu>,
    /// Label shown beside the icon in compact mode
    pub tooltip: Tooltip,
}

impl EntryOverlays {
    fn new(
        entry: &NavEntry,
        open: bool,
        router: &EventRouter,
        tx: &mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let disclosure = entry.has_sub_items().then(|| {
            let tx = tx.clone();
            let label = entry.label.clone();
            Disclosure::new(
                entry.label.clone(),
                Some(open),
                false,
                Some(Box::new(move |open| {
                    let _ = tx.send(AppMessage::SubmenuToggled {
                        label: label.clone(),
                        open,
                    });
                })),
            )
        });
        let menu = entry.has_sub_items().then(|| {
            let menu = Menu::uncontrolled(entry.label.clone(), router);
            // Row 0 is the entry's own label.
            menu.set_selectable(
                std::iter::once(false)
                    .chain(entry.sub_items.iter().map(|_| true))
                    .collect(),
            );
            menu
        });
        Self {
            label: entry.label.clone(),
            disclosure,
            menu,
            tooltip: Tooltip::new(entry.label.clone()),
        }
    }
}

pub struct App {
    pub config: ShellConfig,
    pub location: Location,
    pub policy: AccordionPolicy,
    pub theme: ThemeProvider,
    /// User asked for the icon-only sidebar
    pub collapsed: bool,
    /// Area of the last rendered frame
    pub viewport: Option<Rect>,
    pub router: EventRouter,
    /// One set per top-level entry, same order as the tree
    pub entries: Vec<EntryOverlays>,
    /// Sidebar shown as a sheet on narrow terminals
    pub mobile_nav: Panel,
    mobile_open: bool,
    pub hits: HitAreaRegistry,
    /// Last pointer position
    pub pointer: Option<(u16, u16)>,
    /// Tooltip under the pointer
    pub hovered: Option<OverlayId>,
    pub focus: Option<FocusTarget>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
    pub should_quit: bool,
    /// Set when something visible changed since the last frame
    pub dirty: bool,
}

impl App {
    pub fn new(config: ShellConfig, tree: Vec<NavEntry>, theme: ThemeProvider) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let router = EventRouter::new();
        let location = Location::new(&config.initial_route);
        let mode = if config.collapsed {
            SidebarMode::Compact
        } else {
            SidebarMode::Expanded
        };
        let policy = AccordionPolicy::new(tree, location.path(), mode);

        let entries = policy
            .tree()
            .iter()
            .map(|entry| EntryOverlays::new(entry, policy.is_open(&entry.label), &router, &message_tx))
            .collect();

        let panel_tx = message_tx.clone();
        let mobile_nav = Panel::new(
            "Navigation",
            Some(false),
            false,
            Some(Box::new(move |open| {
                let _ = panel_tx.send(AppMessage::MobileNavChanged(open));
            })),
        );

        tracing::info!(
            "Shell created at {} ({} entries, {:?})",
            location.path(),
            policy.tree().len(),
            mode
        );

        Self {
            collapsed: config.collapsed,
            config,
            location,
            policy,
            theme,
            viewport: None,
            router,
            entries,
            mobile_nav,
            mobile_open: false,
            hits: HitAreaRegistry::new(),
            pointer: None,
            hovered: None,
            focus: None,
            message_tx,
            message_rx,
            should_quit: false,
            dirty: true,
        }
    }

    /// Resolve the theme; the theme toggle appears from here on.
    pub fn mount(&mut self) {
        self.theme.mount();
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport
            .is_some_and(|area| area.width < self.config.mobile_breakpoint)
    }

    /// Compact only applies to the docked sidebar.
    pub fn sidebar_mode(&self) -> SidebarMode {
        if self.collapsed && !self.is_mobile() {
            SidebarMode::Compact
        } else {
            SidebarMode::Expanded
        }
    }

    pub fn is_mobile_nav_open(&self) -> bool {
        self.mobile_open
    }

    /// Index of the entry whose floating menu is open.
    pub fn open_menu(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.menu.as_ref().is_some_and(|m| m.is_open()))
    }

    pub fn navigate(&mut self, href: &str) -> UiResult<()> {
        if self.location.navigate(href) {
            self.location_changed()?;
        }
        self.set_mobile_nav(false)
    }

    pub fn back(&mut self) -> UiResult<()> {
        if self.location.back() {
            self.location_changed()?;
        }
        Ok(())
    }

    fn location_changed(&mut self) -> UiResult<()> {
        self.policy.on_location_change(self.location.path());
        self.mark_dirty();
        self.sync_disclosures()
    }

    pub fn toggle_sidebar(&mut self) -> UiResult<()> {
        if self.is_mobile() {
            return self.mobile_nav.apply(crate::overlay::OverlayCommand::Toggle);
        }
        self.collapsed = !self.collapsed;
        tracing::info!("Sidebar collapsed={}", self.collapsed);
        self.sync_mode()
    }

    /// Bring the policy, menus and mobile panel in line with the current
    /// collapse flag and viewport.
    pub fn sync_mode(&mut self) -> UiResult<()> {
        let mode = self.sidebar_mode();
        if mode != self.policy.mode() {
            self.policy.on_mode_change(mode);
            if mode == SidebarMode::Expanded {
                for menu in self.entries.iter().filter_map(|e| e.menu.as_ref()) {
                    menu.request(false)?;
                }
            }
            self.sync_disclosures()?;
            self.mark_dirty();
        }
        if !self.is_mobile() {
            self.set_mobile_nav(false)?;
        }
        Ok(())
    }

    /// Push the policy's open set into every disclosure.
    pub fn sync_disclosures(&mut self) -> UiResult<()> {
        for entry in &mut self.entries {
            if let Some(disclosure) = entry.disclosure.as_mut() {
                disclosure.sync(self.policy.is_open(&entry.label))?;
            }
        }
        Ok(())
    }

    fn set_mobile_nav(&mut self, open: bool) -> UiResult<()> {
        if self.mobile_open == open {
            return Ok(());
        }
        tracing::debug!("Mobile navigation open={}", open);
        self.mobile_open = open;
        self.mark_dirty();
        self.mobile_nav.sync(open)
    }

    /// Apply queued overlay notifications.
    pub fn drain_messages(&mut self) -> UiResult<()> {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message)?;
        }
        Ok(())
    }

    pub fn handle_message(&mut self, message: AppMessage) -> UiResult<()> {
        self.mark_dirty();
        match message {
            AppMessage::SubmenuToggled { label, open } => {
                if self.policy.toggle(&label, open) {
                    self.sync_disclosures()?;
                }
                Ok(())
            }
            AppMessage::MobileNavChanged(open) => self.set_mobile_nav(open),
        }
    }

    /// Draw one frame and rebuild the hit areas.
    pub fn render(&mut self, frame: &mut Frame) -> UiResult<()> {
        let area = frame.area();
        if self.viewport != Some(area) {
            tracing::debug!("Viewport {}x{}", area.width, area.height);
            self.viewport = Some(area);
            self.sync_mode()?;
        }

        let mut hits = std::mem::take(&mut self.hits);
        hits.clear();
        let result = ui::render_shell(frame, self, &mut hits);
        if let Some((x, y)) = self.pointer {
            hits.update_hover(x, y);
            let hovered = hits.hovered_area().and_then(|a| a.hover_style.map(|s| (a.rect, s)));
            if let Some((rect, style)) = hovered {
                frame.buffer_mut().set_style(rect, style);
            }
        }
        self.hits = hits;
        self.dirty = false;
        result
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("location", &self.location.path())
            .field("mode", &self.sidebar_mode())
            .field("open", &self.policy.open_set().open_labels())
            .field("mobile_open", &self.mobile_open)
            .field("focus", &self.focus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::default_tree;
    use crate::theme::{FixedDarkModeSignal, MemoryPreferenceStore, ThemePreference};

    fn app(route: &str, collapsed: bool) -> App {
        let config = ShellConfig::default()
            .with_initial_route(route)
            .with_collapsed(collapsed);
        let theme = ThemeProvider::new(
            ThemePreference::System,
            Box::new(MemoryPreferenceStore::new()),
            Box::new(FixedDarkModeSignal(true)),
        );
        App::new(config, default_tree(), theme)
    }

    fn disclosure_open(app: &App, label: &str) -> bool {
        app.entries
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.disclosure.as_ref())
            .is_some_and(|d| d.is_open())
    }

    #[test]
    fn test_initial_route_opens_parent() {
        let app = app("/settings/security", false);
        assert!(app.policy.is_open("Settings"));
        assert!(disclosure_open(&app, "Settings"));
        assert!(!disclosure_open(&app, "Customers"));
    }

    #[test]
    fn test_disclosure_toggle_goes_through_policy() {
        let mut app = app("/orders", false);
        let customers = app.entries.iter().position(|e| e.label == "Customers").unwrap();

        app.entries[customers]
            .disclosure
            .as_mut()
            .unwrap()
            .apply(crate::overlay::OverlayCommand::Toggle)
            .unwrap();
        // Controlled: nothing moves until the message is applied.
        assert!(!disclosure_open(&app, "Customers"));

        app.drain_messages().unwrap();
        assert!(disclosure_open(&app, "Customers"));
        assert_eq!(app.policy.open_set().open_labels(), ["Customers"]);
    }

    #[test]
    fn test_navigation_rederives_open_set() {
        let mut app = app("/customers/segments", false);
        assert!(disclosure_open(&app, "Customers"));
        app.navigate("/settings/archive").unwrap();
        assert!(!disclosure_open(&app, "Customers"));
        assert!(disclosure_open(&app, "Settings"));

        app.back().unwrap();
        assert!(disclosure_open(&app, "Customers"));
    }

    #[test]
    fn test_collapse_clears_and_closes_menus() {
        let mut app = app("/settings/general", false);
        app.toggle_sidebar().unwrap();
        assert_eq!(app.sidebar_mode(), SidebarMode::Compact);
        assert!(app.policy.open_set().is_empty());
        assert!(!disclosure_open(&app, "Settings"));

        let settings = app.entries.iter().position(|e| e.label == "Settings").unwrap();
        app.entries[settings].menu.as_ref().unwrap().request(true).unwrap();
        assert_eq!(app.open_menu(), Some(settings));
        assert_eq!(app.router.capture_len(), 1);

        app.toggle_sidebar().unwrap();
        assert_eq!(app.open_menu(), None);
        assert_eq!(app.router.capture_len(), 0);
        assert!(disclosure_open(&app, "Settings"));
    }

    #[test]
    fn test_narrow_viewport_forces_expanded() {
        let mut app = app("/orders", true);
        app.viewport = Some(Rect::new(0, 0, 60, 30));
        assert!(app.is_mobile());
        assert_eq!(app.sidebar_mode(), SidebarMode::Expanded);
    }
}
