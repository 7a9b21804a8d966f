use super::*;

#[test]
fn starts_closed() {
    let menu = MegaMenu::new();
    assert!(!menu.is_open());
    assert_eq!(menu.active(), None);
}

#[test]
fn hover_opens_and_highlights_column() {
    let mut menu = MegaMenu::new();
    menu.hover_item(2);
    assert!(menu.is_open());
    assert!(menu.is_active(2));
    menu.hover_item(0);
    assert!(menu.is_active(0));
    assert!(!menu.is_active(2));
}

#[test]
fn leave_then_elapsed_closes() {
    let mut menu = MegaMenu::new();
    menu.hover_item(1);
    let token = menu.leave();
    assert!(menu.is_open());
    assert!(menu.close_pending());
    assert!(menu.close_elapsed(token));
    assert!(!menu.is_open());
    assert_eq!(menu.active(), None);
}

#[test]
fn entering_dropdown_cancels_close() {
    let mut menu = MegaMenu::new();
    menu.hover_item(1);
    let token = menu.leave();
    menu.hover_dropdown();
    assert!(!menu.close_elapsed(token));
    assert!(menu.is_open());
    assert!(menu.is_active(1));
}

#[test]
fn rehover_cancels_close() {
    let mut menu = MegaMenu::new();
    menu.hover_item(0);
    let token = menu.leave();
    menu.hover_item(3);
    assert!(!menu.close_elapsed(token));
    assert!(menu.is_active(3));
}

#[test]
fn stale_token_ignored_after_newer_leave() {
    let mut menu = MegaMenu::new();
    menu.hover_item(0);
    let first = menu.leave();
    menu.hover_dropdown();
    let second = menu.leave();
    assert_ne!(first, second);
    assert!(!menu.close_elapsed(first));
    assert!(menu.is_open());
    assert!(menu.close_elapsed(second));
    assert!(!menu.is_open());
}
