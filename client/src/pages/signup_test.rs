use super::*;

fn position(region: FormRegion) -> usize {
    FORM_LAYOUT.iter().position(|r| *r == region).unwrap()
}

#[test]
fn step_errors_precede_the_panels() {
    assert_eq!(FORM_LAYOUT[0], FormRegion::Errors);
    assert!(position(FormRegion::Errors) < position(FormRegion::Panels));
}

#[test]
fn buttons_close_the_form() {
    assert!(position(FormRegion::Panels) < position(FormRegion::Buttons));
    assert_eq!(FORM_LAYOUT.last(), Some(&FormRegion::Buttons));
}

#[test]
fn panel_index_is_zero_based() {
    assert_eq!(panel_index(Step::Agreement), 0);
    assert_eq!(panel_index(Step::Complete), 4);
}
