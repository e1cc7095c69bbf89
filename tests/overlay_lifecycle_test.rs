// Integration tests for overlay dismissal
// Every way a menu can close must leave no capture listener behind.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hrbuddie::error::UiError;
use hrbuddie::overlay::{
    activate, DismissReason, DismissalSlot, EventRouter, Menu, Overlay, OverlayCommand,
};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn esc() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
}

fn open_menu(router: &EventRouter) -> Menu {
    let menu = Menu::uncontrolled("Settings", router);
    menu.track_trigger(Rect::new(0, 12, 7, 1));
    menu.request(true).unwrap();
    menu.track_content(Rect::new(8, 12, 15, 6));
    menu
}

// =============================================================================
// Close paths
// =============================================================================

#[test]
fn test_every_close_path_releases() {
    type Close = fn(&EventRouter, &mut Menu);
    let paths: [(&str, Close); 6] = [
        ("outside click", |r, _| {
            r.dispatch(&click(60, 30), |_, _| {});
        }),
        ("escape", |r, _| {
            r.dispatch(&esc(), |_, _| {});
        }),
        ("toggle", |_, m| m.apply(OverlayCommand::Toggle).unwrap()),
        ("close", |_, m| m.apply(OverlayCommand::Close).unwrap()),
        ("select", |_, m| m.apply(OverlayCommand::Select(1)).unwrap()),
        ("request", |_, m| m.request(false).unwrap()),
    ];

    for (name, close) in paths {
        let router = EventRouter::new();
        let mut menu = open_menu(&router);
        assert_eq!(router.capture_len(), 1, "{}: listening while open", name);

        close(&router, &mut menu);
        assert!(!menu.is_open(), "{}: closed", name);
        assert!(!menu.is_listening(), "{}: guard released", name);
        assert_eq!(router.capture_len(), 0, "{}: listener removed", name);
    }
}

#[test]
fn test_drop_releases() {
    let router = EventRouter::new();
    let menu = open_menu(&router);
    drop(menu);
    assert_eq!(router.capture_len(), 0);
}

#[test]
fn test_inside_clicks_keep_menu_open() {
    let router = EventRouter::new();
    let menu = open_menu(&router);

    router.dispatch(&click(3, 12), |_, _| {});
    router.dispatch(&click(10, 14), |_, _| {});
    assert!(menu.is_open());
    assert_eq!(router.capture_len(), 1);
}

#[test]
fn test_dismissal_does_not_stop_propagation() {
    let router = EventRouter::new();
    let menu = open_menu(&router);

    let mut reached = false;
    let propagation = router.dispatch(&click(60, 30), |_, _| reached = true);
    assert!(reached);
    assert!(!propagation.is_stopped());
    assert!(!menu.is_open());
}

#[test]
fn test_reopen_after_dismissal() {
    let router = EventRouter::new();
    let menu = open_menu(&router);
    router.dispatch(&esc(), |_, _| {});
    menu.request(true).unwrap();
    assert!(menu.is_listening());
    assert_eq!(router.capture_len(), 1);
}

// =============================================================================
// Guards
// =============================================================================

#[test]
fn test_second_guard_is_rejected() {
    let router = EventRouter::new();
    let mut slot = DismissalSlot::default();
    slot.acquire("Settings", activate(&router, Rect::default(), Rect::default(), |_| {}))
        .unwrap();

    let err = slot
        .acquire("Settings", activate(&router, Rect::default(), Rect::default(), |_| {}))
        .unwrap_err();
    assert!(matches!(err, UiError::DismissalAlreadyActive { .. }));
    // The rejected guard was dropped with its listener.
    assert_eq!(router.capture_len(), 1);

    assert!(slot.release());
    assert!(!slot.release());
    assert_eq!(router.capture_len(), 0);
}

#[test]
fn test_guard_reports_reasons() {
    let router = EventRouter::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _guard = activate(&router, Rect::new(0, 0, 10, 5), Rect::default(), move |reason| {
        sink.borrow_mut().push(reason)
    });

    router.dispatch(&click(2, 2), |_, _| {});
    router.dispatch(&click(20, 20), |_, _| {});
    router.dispatch(&esc(), |_, _| {});
    assert_eq!(
        *seen.borrow(),
        vec![DismissReason::OutsidePointer, DismissReason::Escape]
    );
}
