use super::*;

#[test]
fn login_form_has_username_then_password() {
    assert_eq!(LOGIN_FIELDS, [AuthField::Username, AuthField::Password]);
    let form = AuthForm::new(&LOGIN_FIELDS);
    assert_eq!(form.next_field(AuthField::Username), Some(AuthField::Password));
}

#[test]
fn password_input_follows_toggle() {
    let mut toggle = PasswordToggle::default();
    assert_eq!(input_type(AuthField::Password, toggle), "password");
    toggle.toggle();
    assert_eq!(input_type(AuthField::Password, toggle), "text");
    assert_eq!(input_type(AuthField::Username, toggle), "text");
}

#[test]
fn labels() {
    assert_eq!(field_label(AuthField::Username), "아이디");
    assert_eq!(field_label(AuthField::Password), "비밀번호");
}

#[test]
fn blur_errors_render_user_messages() {
    let mut form = AuthForm::new(&LOGIN_FIELDS);
    form.edit(AuthField::Password, "short");
    form.blur(AuthField::Password);
    assert_eq!(
        form.error(AuthField::Password).map(ToString::to_string).as_deref(),
        Some("비밀번호는 8자 이상이어야 합니다.")
    );
}
