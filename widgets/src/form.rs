//! Form field identifiers and the snapshot read model used by validation.
//!
//! A [`FormSnapshot`] is taken from the live form controls at the moment a
//! rule runs. Nothing is copied between steps; values persist only in the
//! controls themselves.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::step::Step;

/// Every field the wizard validates, keyed to its server-rendered DOM id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Username,
    Password,
    PasswordConfirm,
    Email,
    FullName,
    Age,
    Gender,
    Education,
    MaritalStatus,
    JobCategory,
    AnnualIncome,
    SavingsHabit,
}

impl FieldId {
    pub const ALL: [FieldId; 12] = [
        FieldId::Username,
        FieldId::Password,
        FieldId::PasswordConfirm,
        FieldId::Email,
        FieldId::FullName,
        FieldId::Age,
        FieldId::Gender,
        FieldId::Education,
        FieldId::MaritalStatus,
        FieldId::JobCategory,
        FieldId::AnnualIncome,
        FieldId::SavingsHabit,
    ];

    /// The `id` attribute Django renders for this field.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Username => "id_username",
            Self::Password => "id_password1",
            Self::PasswordConfirm => "id_password2",
            Self::Email => "id_email",
            Self::FullName => "id_full_name",
            Self::Age => "id_age",
            Self::Gender => "id_gender",
            Self::Education => "id_education",
            Self::MaritalStatus => "id_marital_status",
            Self::JobCategory => "id_job_category",
            Self::AnnualIncome => "id_annual_income",
            Self::SavingsHabit => "id_savings_habit",
        }
    }

    /// The form `name` attribute (the DOM id without its `id_` prefix).
    #[must_use]
    pub fn name(self) -> &'static str {
        let id = self.dom_id();
        id.strip_prefix("id_").unwrap_or(id)
    }

    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.dom_id() == id)
    }

    /// The step whose panel contains this field.
    #[must_use]
    pub fn step(self) -> Step {
        match self {
            Self::Username | Self::Password | Self::PasswordConfirm | Self::Email => Step::Credentials,
            Self::FullName | Self::Age | Self::Gender | Self::Education | Self::MaritalStatus => Step::Personal,
            Self::JobCategory | Self::AnnualIncome | Self::SavingsHabit => Step::Financial,
        }
    }
}

/// One agreement checkbox on the first step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgreementBox {
    pub mandatory: bool,
    pub checked: bool,
}

/// Field values and agreement checkboxes at validation time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, String>,
    agreements: Vec<AgreementBox>,
}

impl FormSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn with_agreement(mut self, mandatory: bool, checked: bool) -> Self {
        self.agreements.push(AgreementBox { mandatory, checked });
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn set_agreements(&mut self, agreements: Vec<AgreementBox>) {
        self.agreements = agreements;
    }

    /// Raw value of `field`; missing fields read as empty.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn trimmed(&self, field: FieldId) -> &str {
        self.value(field).trim()
    }

    #[must_use]
    pub fn agreements(&self) -> &[AgreementBox] {
        &self.agreements
    }
}
