//! Profile edit form.
//!
//! The save button is enabled only while every required field is filled and
//! at least one value differs from what the page loaded with. Unsaved changes
//! trigger the browser's leave-page prompt until the form is submitted.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::BTreeMap;

use crate::query::QueryParams;

/// Query flag the server appends after a successful save.
pub const SAVED_FLAG: &str = "saved";

pub const SAVED_TITLE: &str = "프로필 정보 수정 완료";

pub const SAVED_LINES: [&str; 2] = ["프로필 정보가 업데이트 되었습니다.", "맞춤 상품을 확인하시겠습니까?"];

/// Stored by the server from its own analysis; shown read-only and never
/// submitted with the form.
pub const RISK_ATTITUDE_FIELD: &str = "금융위험태도";

pub const RISK_ATTITUDE_TOOLTIP: &str = "이 값은 시스템에서 자동으로 분석하여 업데이트됩니다.";

pub const LEAVE_WARNING: &str = "변경사항이 저장되지 않았습니다. 페이지를 나가시겠습니까?";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("필수 항목을 모두 입력해주세요.")]
    MissingRequired(Vec<String>),
    #[error("profile form is already submitting")]
    AlreadySubmitting,
}

#[derive(Clone, Debug, Default)]
pub struct ProfileEditor {
    initial: BTreeMap<String, String>,
    current: BTreeMap<String, String>,
    required: Vec<String>,
    submitting: bool,
}

impl ProfileEditor {
    /// Capture the values the page rendered with.
    pub fn new<I, K, V>(initial: I, required: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let initial: BTreeMap<String, String> =
            initial.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            current: initial.clone(),
            initial,
            required: required.iter().map(|r| (*r).to_owned()).collect(),
            submitting: false,
        }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.current.insert(name.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.current.get(name).map_or("", String::as_str)
    }

    /// Required fields that are empty or whitespace, in declaration order.
    #[must_use]
    pub fn blank_required(&self) -> Vec<String> {
        self.required.iter().filter(|name| self.value(name).trim().is_empty()).cloned().collect()
    }

    #[must_use]
    pub fn is_field_invalid(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name) && self.value(name).trim().is_empty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.blank_required().is_empty()
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.initial.keys().chain(self.current.keys()).any(|k| {
            self.initial.get(k).map_or("", String::as_str) != self.current.get(k).map_or("", String::as_str)
        })
    }

    #[must_use]
    pub fn save_enabled(&self) -> bool {
        !self.submitting && self.is_valid() && self.has_changes()
    }

    #[must_use]
    pub fn warn_on_leave(&self) -> bool {
        !self.submitting && self.has_changes()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Gate the native submit. On success the leave warning is disarmed and
    /// the button shows its busy state.
    ///
    /// # Errors
    ///
    /// [`ProfileError::MissingRequired`] lists the blank required fields;
    /// [`ProfileError::AlreadySubmitting`] rejects a second submit.
    pub fn begin_submit(&mut self) -> Result<(), ProfileError> {
        if self.submitting {
            return Err(ProfileError::AlreadySubmitting);
        }
        let blank = self.blank_required();
        if !blank.is_empty() {
            return Err(ProfileError::MissingRequired(blank));
        }
        self.submitting = true;
        tracing::info!(fields = self.current.len(), "profile submit");
        Ok(())
    }
}

/// Buttons on the dialog shown after a successful save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavedAction {
    Home,
    Products,
}

impl SavedAction {
    pub const ALL: [Self; 2] = [Self::Home, Self::Products];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "홈으로 돌아가기",
            Self::Products => "맞춤 상품 보기",
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Products => "/products/list/",
        }
    }
}

/// Detect the post-save flag. Returns the query with the flag removed when it
/// was present, so the caller can replace the history entry.
#[must_use]
pub fn saved_notice(query: &str) -> Option<QueryParams> {
    let mut params = QueryParams::parse(query);
    params.take_flag(SAVED_FLAG, "true").then_some(params)
}
