//! Login form state: blur validation, the password visibility toggle, and
//! the submit button's loading state.
//!
//! Unlike the signup wizard nothing here blocks submission. A field is
//! checked when it loses focus and its message is cleared as soon as the user
//! types again; the server still has the final word on credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::collections::BTreeMap;

use crate::consts::{PASSWORD_MIN_LEN, USERNAME_MIN_LEN};
use crate::validate::{IssueKind, is_email_shaped};

/// Inputs that get checked on blur, keyed by their `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthField {
    Username,
    Password,
    PasswordConfirm,
    Email,
}

impl AuthField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::PasswordConfirm => "password_confirm",
            Self::Email => "email",
        }
    }
}

/// Check one field as it loses focus. `value` is trimmed; `password` is the
/// raw password input, compared against the confirmation.
#[must_use]
pub fn check_on_blur(field: AuthField, value: &str, password: &str) -> Option<IssueKind> {
    let value = value.trim();
    match field {
        AuthField::Username if value.is_empty() => Some(IssueKind::UsernameRequired),
        AuthField::Username if value.chars().count() < USERNAME_MIN_LEN => Some(IssueKind::UsernameTooShort),
        AuthField::Password if value.is_empty() => Some(IssueKind::PasswordRequired),
        AuthField::Password if value.chars().count() < PASSWORD_MIN_LEN => Some(IssueKind::PasswordTooShort),
        AuthField::PasswordConfirm if value.is_empty() => Some(IssueKind::ConfirmRequired),
        AuthField::PasswordConfirm if value != password => Some(IssueKind::ConfirmMismatch),
        AuthField::Email if value.is_empty() => Some(IssueKind::EmailRequired),
        AuthField::Email if !is_email_shaped(value) => Some(IssueKind::EmailInvalid),
        _ => None,
    }
}

/// Show/hide state of one password input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordToggle {
    shown: bool,
}

impl PasswordToggle {
    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self.shown
    }

    /// Value for the input's `type` attribute.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        if self.shown { "text" } else { "password" }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    order: Vec<AuthField>,
    values: BTreeMap<AuthField, String>,
    errors: BTreeMap<AuthField, IssueKind>,
    submitting: bool,
}

impl AuthForm {
    /// Form with the given inputs in tab order.
    #[must_use]
    pub fn new(fields: &[AuthField]) -> Self {
        Self { order: fields.to_vec(), ..Self::default() }
    }

    #[must_use]
    pub fn fields(&self) -> &[AuthField] {
        &self.order
    }

    #[must_use]
    pub fn value(&self, field: AuthField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Store typed input and clear that field's message.
    pub fn edit(&mut self, field: AuthField, value: &str) {
        value.clone_into(self.values.entry(field).or_default());
        self.errors.remove(&field);
    }

    /// Re-check a field that lost focus. Returns whether it is clean.
    pub fn blur(&mut self, field: AuthField) -> bool {
        let password = self.value(AuthField::Password);
        match check_on_blur(field, self.value(field), password) {
            Some(issue) => {
                tracing::debug!(field = field.name(), %issue, "auth field rejected on blur");
                self.errors.insert(field, issue);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    #[must_use]
    pub fn error(&self, field: AuthField) -> Option<&IssueKind> {
        self.errors.get(&field)
    }

    /// Where Enter moves focus from `field`; `None` on the last input, where
    /// Enter submits the form.
    #[must_use]
    pub fn next_field(&self, field: AuthField) -> Option<AuthField> {
        let index = self.order.iter().position(|f| *f == field)?;
        self.order.get(index + 1).copied()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Put the submit button into its loading state. Returns `false` when a
    /// submit is already under way.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Restore the button if the page is still here after the restore delay.
    pub fn release_submit(&mut self) {
        self.submitting = false;
    }
}
