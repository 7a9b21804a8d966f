//! Signup page state: the wizard plus the values typed so far.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignupPage` holds one `RwSignal<SignupState>`. Input handlers call
//! [`SignupState::edit`]; the navigation buttons call `advance`, `retreat`,
//! and `finish` with a [`FormHost`] for the browser side effects.
//!
//! The availability lookup is split around the await point:
//! `begin_availability_check` inside one signal update, the HTTP call outside
//! it, then `resolve_availability` in a second update.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use widgets::availability::{AvailabilityError, GateState};
use widgets::query::QueryParams;
use widgets::form::{FieldId, FormSnapshot};
use widgets::rules::RuleConfig;
use widgets::step::{Step, WizardError, WizardView};
use widgets::wizard::{Advance, FormHost, StepWizard};

/// One row of the agreement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgreementItem {
    pub label: &'static str,
    pub mandatory: bool,
}

pub const AGREEMENTS: &[AgreementItem] = &[
    AgreementItem { label: "서비스 이용약관 동의", mandatory: true },
    AgreementItem { label: "개인정보 수집 및 이용 동의", mandatory: true },
    AgreementItem { label: "마케팅 정보 수신 동의", mandatory: false },
];

#[derive(Clone, Debug)]
pub struct SignupState {
    wizard: StepWizard,
    form: FormSnapshot,
}

impl Default for SignupState {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl SignupState {
    pub fn new(config: RuleConfig) -> Self {
        let mandatory = AGREEMENTS.iter().map(|a| a.mandatory).collect();
        Self { wizard: StepWizard::with_agreements(config, mandatory), form: FormSnapshot::new() }
    }

    /// Open on the step named by a `step=<n>` query parameter. The server
    /// redirects to `?step=5` after a successful signup.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::StepOutOfRange`] for an index outside the
    /// wizard; a missing or non-numeric parameter is ignored.
    pub fn resume_from_query(&mut self, query: &str) -> Result<(), WizardError> {
        let params = QueryParams::parse(query);
        let Some(index) = params.get("step").and_then(|raw| raw.parse::<u8>().ok()) else {
            return Ok(());
        };
        let step = Step::from_index(index)?;
        self.wizard.go_to_step(step);
        Ok(())
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    pub fn step(&self) -> Step {
        self.wizard.current()
    }

    pub fn view(&self) -> WizardView {
        self.wizard.view()
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.form.value(field)
    }

    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.wizard.errors().field_error(field)
    }

    pub fn step_errors(&self) -> &[String] {
        self.wizard.errors().step_errors()
    }

    /// Values plus the current agreement boxes, as validation reads them.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = self.form.clone();
        snapshot.set_agreements(self.wizard.agreement_boxes());
        snapshot
    }

    pub fn edit(&mut self, field: FieldId, value: String) {
        self.form.set(field, value);
        let snapshot = self.snapshot();
        self.wizard.on_field_edited(field, &snapshot);
    }

    pub fn set_all_agreements(&mut self, checked: bool) {
        self.wizard.set_all_agreements(checked);
    }

    pub fn set_agreement(&mut self, index: usize, checked: bool) {
        self.wizard.set_agreement(index, checked);
    }

    pub fn advance<H: FormHost + ?Sized>(&mut self, host: &mut H) -> Advance {
        let snapshot = self.snapshot();
        self.wizard.advance(&snapshot, host)
    }

    pub fn retreat(&mut self) -> Option<WizardView> {
        self.wizard.retreat()
    }

    pub fn finish<H: FormHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.wizard.finish(host)
    }

    pub fn release_submit(&mut self) {
        self.wizard.release_submit();
    }

    /// Start a lookup for the current username; `None` when it is blank.
    pub fn begin_availability_check(&mut self) -> Option<String> {
        let username = self.form.value(FieldId::Username).to_owned();
        self.wizard.begin_availability_check(&username)
    }

    pub fn resolve_availability(&mut self, username: &str, outcome: Result<bool, AvailabilityError>) {
        self.wizard.resolve_availability(username, outcome);
    }

    /// Status line under the username field.
    pub fn availability_message(&self) -> Option<&'static str> {
        match self.wizard.availability() {
            GateState::Unchecked => None,
            GateState::Pending(_) => Some("확인 중..."),
            GateState::Available(_) => Some("사용 가능한 아이디입니다."),
            GateState::Taken(_) => Some("이미 사용 중인 아이디입니다."),
            GateState::Failed(_) => Some("아이디 확인에 실패했습니다. 잠시 후 다시 시도해주세요."),
        }
    }

    /// Whether the "check availability" button should be shown at all.
    pub fn availability_enabled(&self) -> bool {
        self.wizard.config().require_availability_check
    }
}

/// Option lists for the select fields, `(value, label)` pairs as the server
/// form accepts them.
pub fn field_choices(field: FieldId) -> &'static [(&'static str, &'static str)] {
    match field {
        FieldId::Gender => &[("1", "남성"), ("2", "여성")],
        FieldId::Education => &[
            ("1", "고등학교 중퇴 이하"),
            ("2", "고등학교 졸업"),
            ("3", "대학교 중퇴/전문대 졸업"),
            ("4", "대학교 졸업 이상"),
        ],
        FieldId::MaritalStatus => &[("1", "기혼"), ("2", "미혼/기타")],
        FieldId::JobCategory => &[
            ("1", "일반 직장인/중간관리직"),
            ("2", "고소득 전문직/사업가/경영진"),
            ("3", "은퇴자/연금수급자"),
            ("4", "저소득층/학생/비정규직"),
        ],
        FieldId::AnnualIncome => &[
            ("1", "2,000만원 미만"),
            ("2", "2,000만원 ~ 4,000만원"),
            ("3", "4,000만원 ~ 6,000만원"),
            ("4", "6,000만원 ~ 8,000만원"),
            ("5", "8,000만원 ~ 1억원"),
            ("6", "1억원 이상"),
        ],
        FieldId::SavingsHabit => &[("1", "저축 안함"), ("2", "일부 저축"), ("3", "적극적 저축")],
        _ => &[],
    }
}

/// Label shown next to each input.
pub fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::Username => "아이디",
        FieldId::Password => "비밀번호",
        FieldId::PasswordConfirm => "비밀번호 확인",
        FieldId::Email => "이메일",
        FieldId::FullName => "이름",
        FieldId::Age => "연령",
        FieldId::Gender => "성별",
        FieldId::Education => "교육수준",
        FieldId::MaritalStatus => "결혼상태",
        FieldId::JobCategory => "직업분류",
        FieldId::AnnualIncome => "연간 소득",
        FieldId::SavingsHabit => "저축습관",
    }
}

/// Fields rendered on `step`, in display order. Annual income is only asked
/// for when the rules require it.
pub fn step_fields(step: Step, config: &RuleConfig) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|f| f.step() == step)
        .filter(|f| *f != FieldId::AnnualIncome || config.require_annual_income)
        .collect()
}
