use super::*;
use widgets::validate::IssueKind;

#[derive(Default)]
struct ScriptedHost {
    answer: bool,
    confirms: usize,
    submits: usize,
    navigated: Vec<String>,
}

impl FormHost for ScriptedHost {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirms += 1;
        self.answer
    }

    fn submit(&mut self) {
        self.submits += 1;
    }

    fn navigate(&mut self, href: &str) {
        self.navigated.push(href.to_owned());
    }
}

fn fill_credentials(state: &mut SignupState) {
    state.edit(FieldId::Username, "alice01".into());
    state.edit(FieldId::Password, "s3cure!pw".into());
    state.edit(FieldId::PasswordConfirm, "s3cure!pw".into());
    state.edit(FieldId::Email, "alice@example.com".into());
}

fn fill_personal(state: &mut SignupState) {
    state.edit(FieldId::FullName, "홍길동".into());
    state.edit(FieldId::Age, "30".into());
    state.edit(FieldId::Gender, "1".into());
    state.edit(FieldId::Education, "4".into());
    state.edit(FieldId::MaritalStatus, "2".into());
}

fn fill_financial(state: &mut SignupState) {
    state.edit(FieldId::JobCategory, "1".into());
    state.edit(FieldId::SavingsHabit, "2".into());
}

// =============================================================
// Resume
// =============================================================

#[test]
fn resume_opens_named_step() {
    let mut state = SignupState::default();
    assert_eq!(state.resume_from_query("?step=5"), Ok(()));
    assert_eq!(state.step(), Step::Complete);
    assert!(state.view().terminal_visible);
}

#[test]
fn resume_ignores_missing_or_garbled_step() {
    let mut state = SignupState::default();
    assert_eq!(state.resume_from_query(""), Ok(()));
    assert_eq!(state.resume_from_query("?step=abc"), Ok(()));
    assert_eq!(state.step(), Step::Agreement);
}

#[test]
fn resume_rejects_out_of_range_step() {
    let mut state = SignupState::default();
    assert_eq!(state.resume_from_query("?step=9"), Err(WizardError::StepOutOfRange(9)));
    assert_eq!(state.step(), Step::Agreement);
}

#[test]
fn finish_from_complete_navigates_to_login() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost::default();
    assert_eq!(state.resume_from_query("?step=5"), Ok(()));
    assert!(state.finish(&mut host));
    assert_eq!(host.navigated, vec!["/accounts/login/".to_owned()]);
}

// =============================================================
// Agreements
// =============================================================

#[test]
fn new_state_starts_on_agreement_with_unchecked_boxes() {
    let state = SignupState::default();
    assert_eq!(state.step(), Step::Agreement);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.agreements().len(), AGREEMENTS.len());
    assert!(snapshot.agreements().iter().all(|a| !a.checked));
}

#[test]
fn mandatory_agreements_block_first_step() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost::default();
    assert!(matches!(state.advance(&mut host), Advance::Blocked(_)));
    assert_eq!(state.step_errors(), ["필수 약관에 동의해주세요.".to_owned()]);

    state.set_agreement(0, true);
    assert!(state.step_errors().is_empty());
    state.set_agreement(1, true);
    assert!(matches!(state.advance(&mut host), Advance::Moved(_)));
    assert_eq!(state.step(), Step::Credentials);
}

#[test]
fn select_all_checks_optional_too() {
    let mut state = SignupState::default();
    state.set_all_agreements(true);
    assert!(state.wizard().agreements().all_checked());
    assert!(state.snapshot().agreements().iter().all(|a| a.checked));
}

// =============================================================
// Full walk
// =============================================================

#[test]
fn full_walk_submits_once_after_confirm() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost { answer: true, ..ScriptedHost::default() };
    state.set_all_agreements(true);
    assert!(matches!(state.advance(&mut host), Advance::Moved(_)));
    fill_credentials(&mut state);
    assert!(matches!(state.advance(&mut host), Advance::Moved(_)));
    fill_personal(&mut state);
    assert!(matches!(state.advance(&mut host), Advance::Moved(_)));
    fill_financial(&mut state);
    assert_eq!(state.advance(&mut host), Advance::Submitted);
    assert_eq!(host.confirms, 1);
    assert_eq!(host.submits, 1);

    assert_eq!(state.advance(&mut host), Advance::InFlight);
    assert_eq!(host.submits, 1);
}

#[test]
fn declined_confirm_keeps_financial_step() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost::default();
    state.set_all_agreements(true);
    state.advance(&mut host);
    fill_credentials(&mut state);
    state.advance(&mut host);
    fill_personal(&mut state);
    state.advance(&mut host);
    fill_financial(&mut state);
    assert_eq!(state.advance(&mut host), Advance::Cancelled);
    assert_eq!(state.step(), Step::Financial);
    assert_eq!(host.submits, 0);
}

#[test]
fn values_survive_going_back() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost::default();
    state.set_all_agreements(true);
    state.advance(&mut host);
    fill_credentials(&mut state);
    state.advance(&mut host);
    assert!(state.retreat().is_some());
    assert_eq!(state.step(), Step::Credentials);
    assert_eq!(state.value(FieldId::Username), "alice01");
}

#[test]
fn finish_only_navigates_from_complete() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost::default();
    assert!(!state.finish(&mut host));
    assert!(host.navigated.is_empty());
}

// =============================================================
// Inline errors
// =============================================================

#[test]
fn credential_errors_are_inline_and_clear_on_edit() {
    let mut state = SignupState::default();
    let mut host = ScriptedHost::default();
    state.set_all_agreements(true);
    state.advance(&mut host);
    state.edit(FieldId::Username, "abc".into());
    assert!(matches!(state.advance(&mut host), Advance::Blocked(_)));
    assert_eq!(state.field_error(FieldId::Username), Some("아이디는 4자 이상이어야 합니다."));

    state.edit(FieldId::Username, "abcd".into());
    assert_eq!(state.field_error(FieldId::Username), None);
}

#[test]
fn live_password_feedback_shows_first_failure() {
    let mut state = SignupState::default();
    state.edit(FieldId::Password, "12345678".into());
    assert_eq!(state.field_error(FieldId::Password), Some(IssueKind::PasswordAllDigits.to_string().as_str()));
}

// =============================================================
// Availability
// =============================================================

#[test]
fn availability_flow_updates_message() {
    let config = RuleConfig { require_availability_check: true, ..RuleConfig::default() };
    let mut state = SignupState::new(config);
    assert!(state.availability_enabled());
    assert_eq!(state.availability_message(), None);

    state.edit(FieldId::Username, "  alice01 ".into());
    let value = state.begin_availability_check();
    assert_eq!(value.as_deref(), Some("alice01"));
    assert_eq!(state.availability_message(), Some("확인 중..."));

    state.resolve_availability("alice01", Ok(true));
    assert_eq!(state.availability_message(), Some("사용 가능한 아이디입니다."));
}

#[test]
fn blank_username_does_not_start_check() {
    let config = RuleConfig { require_availability_check: true, ..RuleConfig::default() };
    let mut state = SignupState::new(config);
    assert_eq!(state.begin_availability_check(), None);
    assert_eq!(state.field_error(FieldId::Username), Some("아이디를 입력해주세요."));
}

#[test]
fn failed_lookup_reports_message() {
    let config = RuleConfig { require_availability_check: true, ..RuleConfig::default() };
    let mut state = SignupState::new(config);
    state.edit(FieldId::Username, "alice01".into());
    let value = state.begin_availability_check();
    assert!(value.is_some());
    state.resolve_availability("alice01", Err(AvailabilityError::Status(500)));
    assert!(state.availability_message().is_some_and(|m| m.contains("실패")));
}

// =============================================================
// Field tables
// =============================================================

#[test]
fn select_fields_have_choices() {
    for field in [
        FieldId::Gender,
        FieldId::Education,
        FieldId::MaritalStatus,
        FieldId::JobCategory,
        FieldId::AnnualIncome,
        FieldId::SavingsHabit,
    ] {
        assert!(!field_choices(field).is_empty(), "{field:?}");
    }
    assert!(field_choices(FieldId::Username).is_empty());
}

#[test]
fn step_fields_follow_annual_income_rule() {
    let default = RuleConfig::default();
    assert_eq!(
        step_fields(Step::Credentials, &default),
        vec![FieldId::Username, FieldId::Password, FieldId::PasswordConfirm, FieldId::Email]
    );
    assert!(!step_fields(Step::Financial, &default).contains(&FieldId::AnnualIncome));

    let strict = RuleConfig { require_annual_income: true, ..RuleConfig::default() };
    assert!(step_fields(Step::Financial, &strict).contains(&FieldId::AnnualIncome));
    assert!(step_fields(Step::Agreement, &strict).is_empty());
}
