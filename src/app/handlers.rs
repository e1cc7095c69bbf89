//! Input handling for the App.
//!
//! Every terminal event goes through the [`EventRouter`] first so open menus
//! see it in the capture phase; whatever is left bubbles to the shell.
//!
//! [`EventRouter`]: crate::overlay::EventRouter

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::focus::{self, FocusTarget};
use super::App;
use crate::error::UiResult;
use crate::nav::SidebarMode;
use crate::overlay::{Overlay, OverlayAction, OverlayCommand, OverlayId};
use crate::ui::interaction::ShellAction;

impl App {
    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> UiResult<()> {
        // Escape already spent on a dismissal should not close the panel too.
        let observed = self.router.capture_len() > 0;
        let router = self.router.clone();

        let mut result = Ok(());
        router.dispatch(event, |event, _| {
            result = self.bubble(event, observed);
        });
        result?;
        self.drain_messages()
    }

    fn bubble(&mut self, event: &Event, observed: bool) -> UiResult<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key, observed),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => {
                tracing::debug!("Resize {}x{}", width, height);
                self.viewport = Some(ratatui::layout::Rect::new(0, 0, *width, *height));
                self.mark_dirty();
                self.sync_mode()
            }
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, observed: bool) -> UiResult<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('b') if ctrl => self.toggle_sidebar()?,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.perform_action(ShellAction::ToggleTheme)?,
            KeyCode::Char('m') if self.is_mobile() => self.mobile_nav.apply(OverlayCommand::Toggle)?,
            KeyCode::Backspace => self.back()?,
            KeyCode::Esc if !observed && self.is_mobile_nav_open() => {
                self.mobile_nav.apply(OverlayCommand::Close)?
            }
            KeyCode::Down | KeyCode::Tab => self.move_focus(true)?,
            KeyCode::Up | KeyCode::BackTab => self.move_focus(false)?,
            KeyCode::Enter => self.activate()?,
            _ => return Ok(()),
        }
        self.mark_dirty();
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> UiResult<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(actions) = self.hits.hit_test(mouse.column, mouse.row) else {
                    return Ok(());
                };
                tracing::trace!("Click at ({}, {}): {:?}", mouse.column, mouse.row, actions);
                for action in actions {
                    self.perform_action(action)?;
                }
                self.mark_dirty();
                Ok(())
            }
            MouseEventKind::Moved => {
                self.pointer = Some((mouse.column, mouse.row));
                let target = self.hits.hover_target_at(mouse.column, mouse.row);
                if target != self.hovered {
                    if let Some(old) = self.hovered.take() {
                        self.send(old, OverlayCommand::PointerLeave)?;
                    }
                    if let Some(new) = target {
                        self.send(new, OverlayCommand::PointerEnter)?;
                    }
                    self.hovered = target;
                    self.mark_dirty();
                }
                if self.hits.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Run one action from a hit area or a key binding.
    pub fn perform_action(&mut self, action: ShellAction) -> UiResult<()> {
        match action {
            ShellAction::Navigate(href) => self.navigate(&href),
            ShellAction::ToggleTheme => {
                self.theme.toggle();
                self.mark_dirty();
                Ok(())
            }
            ShellAction::ToggleSidebar => self.toggle_sidebar(),
            ShellAction::Overlay(OverlayAction { id, command }) => self.send(id, command),
            ShellAction::Absorb => Ok(()),
        }
    }

    fn overlay_mut(&mut self, id: OverlayId) -> Option<&mut dyn Overlay> {
        if self.mobile_nav.id() == id {
            return Some(&mut self.mobile_nav);
        }
        for entry in &mut self.entries {
            if entry.tooltip.id() == id {
                return Some(&mut entry.tooltip);
            }
            if let Some(d) = entry.disclosure.as_mut().filter(|d| d.id() == id) {
                return Some(d);
            }
            if let Some(m) = entry.menu.as_mut().filter(|m| m.id() == id) {
                return Some(m);
            }
        }
        None
    }

    /// Forward a command to the overlay with `id`.
    fn send(&mut self, id: OverlayId, command: OverlayCommand) -> UiResult<()> {
        match self.overlay_mut(id) {
            Some(overlay) => overlay.apply(command),
            None => {
                tracing::warn!("No overlay {} for {:?}", id, command);
                Ok(())
            }
        }
    }

    fn focus_order(&self) -> Vec<FocusTarget> {
        let expanded = self.sidebar_mode() == SidebarMode::Expanded;
        let entries = &self.entries;
        focus::focus_order(
            self.policy.tree(),
            |i| expanded && entries[i].disclosure.as_ref().is_some_and(|d| d.is_open()),
            self.theme.is_mounted(),
        )
    }

    /// Arrow keys move the open menu's highlight, otherwise sidebar focus.
    fn move_focus(&mut self, forward: bool) -> UiResult<()> {
        let command = if forward {
            OverlayCommand::HighlightNext
        } else {
            OverlayCommand::HighlightPrev
        };
        if let Some(index) = self.open_menu() {
            if let Some(menu) = self.entries[index].menu.as_mut() {
                return menu.apply(command);
            }
        }

        let next = focus::step(&self.focus_order(), self.focus, forward);
        if next == self.focus {
            return Ok(());
        }
        if let Some(FocusTarget::Entry(old)) = self.focus {
            let id = self.entries[old].tooltip.id();
            self.send(id, OverlayCommand::FocusLost)?;
        }
        if let Some(FocusTarget::Entry(new)) = next {
            let id = self.entries[new].tooltip.id();
            self.send(id, OverlayCommand::FocusGained)?;
        }
        self.focus = next;
        Ok(())
    }

    /// Enter: choose the highlighted menu item or activate the focused target.
    fn activate(&mut self) -> UiResult<()> {
        if let Some(index) = self.open_menu() {
            let highlighted = self.entries[index].menu.as_ref().and_then(|m| m.highlighted());
            if let Some(row) = highlighted {
                // Row 0 is the entry label.
                let href = self.policy.tree()[index]
                    .sub_items
                    .get(row.wrapping_sub(1))
                    .map(|sub| sub.href.clone());
                let id = self.entries[index].menu.as_ref().map(|m| m.id());
                if let Some(href) = href {
                    self.navigate(&href)?;
                }
                if let Some(id) = id {
                    self.send(id, OverlayCommand::Select(row))?;
                }
                return Ok(());
            }
        }

        match self.focus {
            Some(FocusTarget::Entry(index)) => {
                let entry = &self.policy.tree()[index];
                if !entry.has_sub_items() {
                    let href = entry.href.clone();
                    return self.navigate(&href);
                }
                let compact = self.sidebar_mode() == SidebarMode::Compact;
                let overlays = &mut self.entries[index];
                match (compact, overlays.menu.as_mut(), overlays.disclosure.as_mut()) {
                    (true, Some(menu), _) => menu.apply(OverlayCommand::Toggle),
                    (false, _, Some(disclosure)) => disclosure.apply(OverlayCommand::Toggle),
                    _ => Ok(()),
                }
            }
            Some(FocusTarget::SubItem(index, sub)) => {
                let href = self.policy.tree()[index].sub_items.get(sub).map(|s| s.href.clone());
                match href {
                    Some(href) => self.navigate(&href),
                    None => Ok(()),
                }
            }
            Some(FocusTarget::ThemeToggle) => self.perform_action(ShellAction::ToggleTheme),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::nav::default_tree;
    use crate::theme::{FixedDarkModeSignal, MemoryPreferenceStore, ThemePreference, ThemeProvider};
    use ratatui::layout::Rect;

    fn app(collapsed: bool) -> App {
        let config = ShellConfig::default()
            .with_initial_route("/dashboard")
            .with_collapsed(collapsed);
        let theme = ThemeProvider::new(
            ThemePreference::Light,
            Box::new(MemoryPreferenceStore::new()),
            Box::new(FixedDarkModeSignal(false)),
        );
        let mut app = App::new(config, default_tree(), theme);
        app.viewport = Some(Rect::new(0, 0, 120, 40));
        app.mount();
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn index_of(app: &App, label: &str) -> usize {
        app.entries.iter().position(|e| e.label == label).unwrap()
    }

    // ============================================================
    // Keyboard
    // ============================================================

    #[test]
    fn test_quit_keys() {
        let mut a = app(false);
        a.handle_event(&key(KeyCode::Char('q'))).unwrap();
        assert!(a.should_quit);

        let mut a = app(false);
        a.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
            .unwrap();
        assert!(a.should_quit);
    }

    #[test]
    fn test_theme_key_toggles() {
        let mut a = app(false);
        assert!(!a.theme.is_dark());
        a.handle_event(&key(KeyCode::Char('t'))).unwrap();
        assert!(a.theme.is_dark());
    }

    #[test]
    fn test_enter_on_parent_toggles_submenu() {
        let mut a = app(false);
        let customers = index_of(&a, "Customers");
        a.focus = Some(FocusTarget::Entry(customers));
        a.handle_event(&key(KeyCode::Enter)).unwrap();
        assert!(a.policy.is_open("Customers"));
        assert!(a.entries[customers].disclosure.as_ref().unwrap().is_open());

        // Children are now focusable right after the parent.
        a.handle_event(&key(KeyCode::Down)).unwrap();
        a.handle_event(&key(KeyCode::Down)).unwrap();
        assert_eq!(a.focus, Some(FocusTarget::SubItem(customers, 1)));
        a.handle_event(&key(KeyCode::Enter)).unwrap();
        assert_eq!(a.location.path(), "/customers/segments");
        assert!(a.policy.is_open("Customers"));
    }

    #[test]
    fn test_enter_in_compact_opens_menu_and_selects() {
        let mut a = app(true);
        let settings = index_of(&a, "Settings");
        a.focus = Some(FocusTarget::Entry(settings));
        a.handle_event(&key(KeyCode::Enter)).unwrap();
        assert_eq!(a.open_menu(), Some(settings));

        a.handle_event(&key(KeyCode::Down)).unwrap();
        assert_eq!(a.entries[settings].menu.as_ref().unwrap().highlighted(), Some(1));
        a.handle_event(&key(KeyCode::Enter)).unwrap();

        assert_eq!(a.open_menu(), None);
        assert_eq!(a.router.capture_len(), 0);
        assert_eq!(a.location.path(), a.policy.tree()[settings].sub_items[0].href);
    }

    #[test]
    fn test_escape_closes_menu_before_panel() {
        let mut a = app(true);
        let settings = index_of(&a, "Settings");
        a.entries[settings].menu.as_ref().unwrap().request(true).unwrap();

        a.handle_event(&key(KeyCode::Esc)).unwrap();
        assert_eq!(a.open_menu(), None);
        assert_eq!(a.router.capture_len(), 0);
    }

    #[test]
    fn test_focus_reaches_compact_tooltips() {
        let mut a = app(true);
        a.handle_event(&key(KeyCode::Down)).unwrap();
        assert_eq!(a.focus, Some(FocusTarget::Entry(0)));
        assert!(a.entries[0].tooltip.is_open());

        a.handle_event(&key(KeyCode::Down)).unwrap();
        assert!(!a.entries[0].tooltip.is_open());
    }

    // ============================================================
    // Mobile
    // ============================================================

    #[test]
    fn test_mobile_panel_open_navigate_close() {
        let mut a = app(false);
        a.handle_event(&Event::Resize(60, 30)).unwrap();
        assert!(a.is_mobile());

        a.handle_event(&key(KeyCode::Char('m'))).unwrap();
        assert!(a.is_mobile_nav_open());
        assert!(a.mobile_nav.is_open());

        a.perform_action(ShellAction::Navigate("/reports".to_string())).unwrap();
        assert!(!a.is_mobile_nav_open());
        assert_eq!(a.location.path(), "/reports");
    }

    #[test]
    fn test_mobile_panel_escape_and_widen() {
        let mut a = app(false);
        a.handle_event(&Event::Resize(60, 30)).unwrap();
        a.handle_event(&key(KeyCode::Char('m'))).unwrap();
        a.handle_event(&key(KeyCode::Esc)).unwrap();
        assert!(!a.is_mobile_nav_open());

        a.handle_event(&key(KeyCode::Char('m'))).unwrap();
        a.handle_event(&Event::Resize(120, 30)).unwrap();
        assert!(!a.is_mobile_nav_open());
    }

    #[test]
    fn test_toggle_sidebar_on_mobile_opens_panel() {
        let mut a = app(false);
        a.handle_event(&Event::Resize(60, 30)).unwrap();
        a.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)))
            .unwrap();
        assert!(a.is_mobile_nav_open());
        assert!(!a.collapsed);
    }
}
