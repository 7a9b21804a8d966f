use super::*;

// =============================================================
// Step indexing
// =============================================================

#[test]
fn from_index_round_trips_every_step() {
    for step in Step::ALL {
        assert_eq!(Step::from_index(step.index()), Ok(step));
    }
}

#[test]
fn from_index_rejects_zero_and_six() {
    assert_eq!(Step::from_index(0), Err(WizardError::StepOutOfRange(0)));
    assert_eq!(Step::from_index(6), Err(WizardError::StepOutOfRange(6)));
}

#[test]
fn default_step_is_agreement() {
    assert_eq!(Step::default(), Step::Agreement);
}

#[test]
fn next_and_prev_stop_at_the_ends() {
    assert_eq!(Step::Agreement.prev(), None);
    assert_eq!(Step::Agreement.next(), Some(Step::Credentials));
    assert_eq!(Step::Financial.next(), Some(Step::Complete));
    assert_eq!(Step::Complete.next(), None);
    assert_eq!(Step::Complete.prev(), Some(Step::Financial));
}

#[test]
fn only_financial_is_last_input() {
    let last: Vec<Step> = Step::ALL.into_iter().filter(|s| s.is_last_input()).collect();
    assert_eq!(last, vec![Step::Financial]);
}

#[test]
fn error_message_names_index() {
    assert_eq!(WizardError::StepOutOfRange(9).to_string(), "step index 9 out of range 1..=5");
}

// =============================================================
// Headers
// =============================================================

#[test]
fn header_table_matches_steps() {
    assert_eq!(Step::Agreement.header(), StepHeader { indicator: "STEP 01.", title: "약관 동의" });
    assert_eq!(Step::Credentials.header().indicator, "STEP 02.");
    assert_eq!(Step::Personal.header().title, "개인정보를 입력해주세요.");
    assert_eq!(Step::Financial.header().title, "금융정보를 입력해주세요.");
    assert_eq!(Step::Complete.header(), StepHeader { indicator: "STEP 05.", title: "가입완료" });
}

// =============================================================
// WizardView
// =============================================================

#[test]
fn every_view_has_exactly_one_active_panel() {
    for step in Step::ALL {
        let view = WizardView::for_step(step);
        assert_eq!(view.active_panel_count(), 1);
        assert!(view.panels[usize::from(step.index() - 1)]);
        assert_eq!(view.header, step.header());
    }
}

#[test]
fn first_step_hides_prev() {
    let view = WizardView::for_step(Step::Agreement);
    assert!(!view.prev_visible);
    assert!(view.next_visible);
    assert!(!view.terminal_visible);
}

#[test]
fn middle_steps_show_prev_and_next() {
    for step in [Step::Credentials, Step::Personal, Step::Financial] {
        let view = WizardView::for_step(step);
        assert!(view.prev_visible);
        assert!(view.next_visible);
        assert!(!view.terminal_visible);
    }
}

#[test]
fn complete_step_shows_only_terminal_action() {
    let view = WizardView::for_step(Step::Complete);
    assert!(!view.prev_visible);
    assert!(!view.next_visible);
    assert!(view.terminal_visible);
    assert_eq!(view.terminal_label(), "로그인하기");
}
