use super::*;

const LOGIN_FIELDS: &[AuthField] = &[AuthField::Username, AuthField::Password];

// =============================================================
// Blur checks
// =============================================================

#[test]
fn username_blur_messages() {
    assert_eq!(check_on_blur(AuthField::Username, "   ", ""), Some(IssueKind::UsernameRequired));
    assert_eq!(check_on_blur(AuthField::Username, " abc ", ""), Some(IssueKind::UsernameTooShort));
    assert_eq!(check_on_blur(AuthField::Username, "abcd", ""), None);
}

#[test]
fn password_blur_messages() {
    assert_eq!(check_on_blur(AuthField::Password, "", ""), Some(IssueKind::PasswordRequired));
    assert_eq!(check_on_blur(AuthField::Password, "short1", ""), Some(IssueKind::PasswordTooShort));
    assert_eq!(check_on_blur(AuthField::Password, "longenough", ""), None);
}

#[test]
fn password_blur_skips_strength_rules() {
    assert_eq!(check_on_blur(AuthField::Password, "12345678", ""), None);
}

#[test]
fn confirm_blur_compares_with_password() {
    assert_eq!(check_on_blur(AuthField::PasswordConfirm, "", "secret99"), Some(IssueKind::ConfirmRequired));
    assert_eq!(check_on_blur(AuthField::PasswordConfirm, "secret98", "secret99"), Some(IssueKind::ConfirmMismatch));
    assert_eq!(check_on_blur(AuthField::PasswordConfirm, "secret99", "secret99"), None);
}

#[test]
fn email_blur_messages() {
    assert_eq!(check_on_blur(AuthField::Email, "", ""), Some(IssueKind::EmailRequired));
    assert_eq!(check_on_blur(AuthField::Email, "user@host", ""), Some(IssueKind::EmailInvalid));
    assert_eq!(check_on_blur(AuthField::Email, " user@host.kr ", ""), None);
}

#[test]
fn blur_messages_are_user_facing() {
    assert_eq!(IssueKind::UsernameTooShort.to_string(), "아이디는 4자 이상이어야 합니다.");
    assert_eq!(IssueKind::PasswordRequired.to_string(), "비밀번호를 입력해주세요.");
}

// =============================================================
// Password toggle
// =============================================================

#[test]
fn toggle_flips_input_type() {
    let mut toggle = PasswordToggle::default();
    assert_eq!(toggle.input_type(), "password");
    toggle.toggle();
    assert!(toggle.is_shown());
    assert_eq!(toggle.input_type(), "text");
    toggle.toggle();
    assert_eq!(toggle.input_type(), "password");
}

// =============================================================
// AuthForm
// =============================================================

#[test]
fn blur_records_and_edit_clears() {
    let mut form = AuthForm::new(LOGIN_FIELDS);
    form.edit(AuthField::Username, "ab");
    assert!(!form.blur(AuthField::Username));
    assert_eq!(form.error(AuthField::Username), Some(&IssueKind::UsernameTooShort));

    form.edit(AuthField::Username, "abc");
    assert_eq!(form.error(AuthField::Username), None);
}

#[test]
fn blur_on_fixed_value_clears_error() {
    let mut form = AuthForm::new(LOGIN_FIELDS);
    assert!(!form.blur(AuthField::Password));
    form.edit(AuthField::Password, "longenough");
    assert!(form.blur(AuthField::Password));
    assert_eq!(form.error(AuthField::Password), None);
    assert_eq!(form.value(AuthField::Password), "longenough");
}

#[test]
fn blur_only_touches_its_own_field() {
    let mut form = AuthForm::new(LOGIN_FIELDS);
    form.blur(AuthField::Username);
    form.edit(AuthField::Password, "x");
    assert_eq!(form.error(AuthField::Username), Some(&IssueKind::UsernameRequired));
}

#[test]
fn enter_moves_to_next_field_until_last() {
    let form = AuthForm::new(LOGIN_FIELDS);
    assert_eq!(form.fields(), LOGIN_FIELDS);
    assert_eq!(form.next_field(AuthField::Username), Some(AuthField::Password));
    assert_eq!(form.next_field(AuthField::Password), None);
    assert_eq!(form.next_field(AuthField::Email), None);
}

#[test]
fn submit_loading_state_blocks_repeat_until_released() {
    let mut form = AuthForm::new(LOGIN_FIELDS);
    assert!(form.begin_submit());
    assert!(form.is_submitting());
    assert!(!form.begin_submit());
    form.release_submit();
    assert!(!form.is_submitting());
    assert!(form.begin_submit());
}

#[test]
fn submit_is_not_gated_on_errors() {
    let mut form = AuthForm::new(LOGIN_FIELDS);
    form.blur(AuthField::Username);
    assert!(form.begin_submit());
}
