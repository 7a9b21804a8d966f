//! Per-step validation rules.
//!
//! [`validate_step`] is a pure function of the snapshot and the rule
//! configuration: the same inputs always produce the same ordered issues,
//! whatever happened before. Credentials issues are field-level (rendered
//! next to the offending input); all other steps report step-level issues
//! (rendered as one list at the top of the panel).

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::consts::{COMMON_PASSWORDS, PASSWORD_MIN_LEN, USERNAME_MIN_LEN};
use crate::form::{FieldId, FormSnapshot};
use crate::rules::RuleConfig;
use crate::step::Step;

/// Why a step failed. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    #[error("필수 약관에 동의해주세요.")]
    MandatoryAgreement,
    #[error("아이디를 입력해주세요.")]
    UsernameRequired,
    #[error("아이디는 4자 이상이어야 합니다.")]
    UsernameTooShort,
    #[error("아이디 중복확인을 해주세요.")]
    UsernameNotChecked,
    #[error("이미 사용 중인 아이디입니다.")]
    UsernameTaken,
    #[error("비밀번호를 입력해주세요.")]
    PasswordRequired,
    #[error("비밀번호는 8자 이상이어야 합니다.")]
    PasswordTooShort,
    #[error("숫자로만 구성된 비밀번호는 사용할 수 없습니다.")]
    PasswordAllDigits,
    #[error("영문자로만 구성된 비밀번호는 사용할 수 없습니다.")]
    PasswordAllLetters,
    #[error("일상적인 단어는 비밀번호로 사용할 수 없습니다.")]
    PasswordCommon,
    #[error("비밀번호 확인을 입력해주세요.")]
    ConfirmRequired,
    #[error("비밀번호가 일치하지 않습니다.")]
    ConfirmMismatch,
    #[error("이메일을 입력해주세요.")]
    EmailRequired,
    #[error("올바른 이메일 형식이 아닙니다.")]
    EmailInvalid,
    #[error("이름을 입력해주세요.")]
    NameRequired,
    #[error("이름은 {min}자 이상이어야 합니다.")]
    NameTooShort { min: usize },
    #[error("연령을 입력해주세요.")]
    AgeRequired,
    #[error("연령은 숫자로 입력해주세요.")]
    AgeNotNumeric,
    #[error("연령은 {min}세 이상 {max}세 이하여야 합니다.")]
    AgeOutOfRange { min: u32, max: u32 },
    #[error("성별을 선택해주세요.")]
    GenderRequired,
    #[error("교육수준을 선택해주세요.")]
    EducationRequired,
    #[error("결혼상태를 선택해주세요.")]
    MaritalStatusRequired,
    #[error("직업분류를 선택해주세요.")]
    JobCategoryRequired,
    #[error("연간 소득을 선택해주세요.")]
    AnnualIncomeRequired,
    #[error("저축습관을 선택해주세요.")]
    SavingsHabitRequired,
}

/// One validation failure, optionally anchored to a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// `Some` for inline field errors, `None` for step-level errors.
    pub field: Option<FieldId>,
    pub kind: IssueKind,
}

impl Issue {
    #[must_use]
    pub fn field(field: FieldId, kind: IssueKind) -> Self {
        Self { field: Some(field), kind }
    }

    #[must_use]
    pub fn step(kind: IssueKind) -> Self {
        Self { field: None, kind }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Ordered outcome of validating one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Messages in report order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(Issue::message).collect()
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<IssueKind> {
        self.issues.iter().map(|i| i.kind.clone()).collect()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    fn require(&mut self, value: &str, kind: IssueKind) -> bool {
        if value.is_empty() {
            self.push(Issue::step(kind));
            false
        } else {
            true
        }
    }
}

/// Validate the fields belonging to `step` only.
#[must_use]
pub fn validate_step(step: Step, snapshot: &FormSnapshot, config: &RuleConfig) -> ValidationResult {
    let mut result = ValidationResult::default();
    match step {
        Step::Agreement => {
            if snapshot.agreements().iter().any(|a| a.mandatory && !a.checked) {
                result.push(Issue::step(IssueKind::MandatoryAgreement));
            }
        }
        Step::Credentials => {
            let username = check_username(snapshot.trimmed(FieldId::Username));
            let password = check_password(snapshot.value(FieldId::Password));
            let confirm =
                check_password_confirm(snapshot.value(FieldId::Password), snapshot.value(FieldId::PasswordConfirm));
            let email = check_email(snapshot.trimmed(FieldId::Email));
            for (field, outcome) in [
                (FieldId::Username, username),
                (FieldId::Password, password),
                (FieldId::PasswordConfirm, confirm),
                (FieldId::Email, email),
            ] {
                if let Err(kind) = outcome {
                    result.push(Issue::field(field, kind));
                }
            }
        }
        Step::Personal => validate_personal(snapshot, config, &mut result),
        Step::Financial => {
            result.require(snapshot.trimmed(FieldId::JobCategory), IssueKind::JobCategoryRequired);
            if config.require_annual_income {
                result.require(snapshot.trimmed(FieldId::AnnualIncome), IssueKind::AnnualIncomeRequired);
            }
            result.require(snapshot.trimmed(FieldId::SavingsHabit), IssueKind::SavingsHabitRequired);
        }
        Step::Complete => {}
    }
    result
}

fn validate_personal(snapshot: &FormSnapshot, config: &RuleConfig, result: &mut ValidationResult) {
    let name = snapshot.trimmed(FieldId::FullName);
    if result.require(name, IssueKind::NameRequired) {
        if let Some(min) = config.name_min_len {
            if name.chars().count() < min {
                result.push(Issue::step(IssueKind::NameTooShort { min }));
            }
        }
    }

    let age = snapshot.trimmed(FieldId::Age);
    if result.require(age, IssueKind::AgeRequired) {
        match age.parse::<i64>() {
            Err(_) => result.push(Issue::step(IssueKind::AgeNotNumeric)),
            Ok(years) => {
                if let Some(bounds) = config.age_bounds {
                    let in_range = u32::try_from(years).is_ok_and(|y| bounds.contains(y));
                    if !in_range {
                        result.push(Issue::step(IssueKind::AgeOutOfRange { min: bounds.min, max: bounds.max }));
                    }
                }
            }
        }
    }

    result.require(snapshot.trimmed(FieldId::Gender), IssueKind::GenderRequired);
    result.require(snapshot.trimmed(FieldId::Education), IssueKind::EducationRequired);
    result.require(snapshot.trimmed(FieldId::MaritalStatus), IssueKind::MaritalStatusRequired);
}

/// Username rule on an already-trimmed value.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn check_username(username: &str) -> Result<(), IssueKind> {
    if username.is_empty() {
        Err(IssueKind::UsernameRequired)
    } else if username.chars().count() < USERNAME_MIN_LEN {
        Err(IssueKind::UsernameTooShort)
    } else {
        Ok(())
    }
}

/// Password rules, reported one at a time in a fixed order.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn check_password(password: &str) -> Result<(), IssueKind> {
    if password.is_empty() {
        return Err(IssueKind::PasswordRequired);
    }
    check_password_strength(password)
}

/// Password rules minus the "required" rule, for live feedback while typing.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn check_password_strength(password: &str) -> Result<(), IssueKind> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        Err(IssueKind::PasswordTooShort)
    } else if password.chars().all(|c| c.is_ascii_digit()) {
        Err(IssueKind::PasswordAllDigits)
    } else if password.chars().all(|c| c.is_ascii_alphabetic()) {
        Err(IssueKind::PasswordAllLetters)
    } else if is_common_password(password) {
        Err(IssueKind::PasswordCommon)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// Returns [`IssueKind::ConfirmRequired`] or [`IssueKind::ConfirmMismatch`].
pub fn check_password_confirm(password: &str, confirm: &str) -> Result<(), IssueKind> {
    if confirm.is_empty() {
        Err(IssueKind::ConfirmRequired)
    } else if password != confirm {
        Err(IssueKind::ConfirmMismatch)
    } else {
        Ok(())
    }
}

/// Email rule on an already-trimmed value.
///
/// # Errors
///
/// Returns [`IssueKind::EmailRequired`] or [`IssueKind::EmailInvalid`].
pub fn check_email(email: &str) -> Result<(), IssueKind> {
    if email.is_empty() {
        Err(IssueKind::EmailRequired)
    } else if is_email_shaped(email) {
        Ok(())
    } else {
        Err(IssueKind::EmailInvalid)
    }
}

/// True when the lowercased password contains any blacklisted word.
#[must_use]
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| lower.contains(common))
}

/// `local@domain.tld`: no whitespace, one `@`, and a dot inside the domain.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Inline feedback while typing into a password field.
///
/// Empty fields produce no feedback; the confirmation field only reports a
/// mismatch.
#[must_use]
pub fn live_feedback(field: FieldId, snapshot: &FormSnapshot) -> Option<Issue> {
    let value = snapshot.value(field);
    if value.is_empty() {
        return None;
    }
    let outcome = match field {
        FieldId::Password => check_password_strength(value),
        FieldId::PasswordConfirm => {
            if value == snapshot.value(FieldId::Password) {
                Ok(())
            } else {
                Err(IssueKind::ConfirmMismatch)
            }
        }
        _ => Ok(()),
    };
    outcome.err().map(|kind| Issue::field(field, kind))
}
