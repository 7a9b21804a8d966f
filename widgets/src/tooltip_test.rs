use super::*;

#[test]
fn hidden_by_default() {
    assert!(!Tooltip::default().is_visible());
}

#[test]
fn show_then_leave_hides() {
    let mut tip = Tooltip::default();
    tip.show();
    assert!(tip.is_visible());
    tip.hide();
    assert!(!tip.is_visible());
}

#[test]
fn timer_hides_current_tooltip() {
    let mut tip = Tooltip::default();
    let token = tip.show();
    assert!(tip.expire(token));
    assert!(!tip.is_visible());
}

#[test]
fn stale_timer_does_not_hide_newer_hover() {
    let mut tip = Tooltip::default();
    let first = tip.show();
    tip.hide();
    let second = tip.show();
    assert!(!tip.expire(first));
    assert!(tip.is_visible());
    assert!(tip.expire(second));
}

#[test]
fn timer_after_leave_is_a_no_op() {
    let mut tip = Tooltip::default();
    let token = tip.show();
    tip.hide();
    assert!(!tip.expire(token));
}
