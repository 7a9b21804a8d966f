//! Wizard steps, their header table, and the derived view model.
//!
//! `Step` is the only way to name a step, so an out-of-range step can only
//! appear at the raw-index boundary ([`Step::from_index`]), where it becomes a
//! [`WizardError`]. [`WizardView`] is everything a renderer needs to draw the
//! wizard chrome for one step.

#[cfg(test)]
#[path = "step_test.rs"]
mod step_test;

use serde::{Deserialize, Serialize};

use crate::consts::TOTAL_STEPS;

/// Error returned when a raw step index cannot name a wizard step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Index is outside `1..=TOTAL_STEPS`.
    #[error("step index {0} out of range 1..={TOTAL_STEPS}")]
    StepOutOfRange(u8),
}

/// One of the five signup steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Terms of service agreement.
    #[default]
    Agreement,
    /// Username, password, and email.
    Credentials,
    /// Name, age, and demographic selections.
    Personal,
    /// Job category, income, and savings habit.
    Financial,
    /// Confirmation landing state; no inputs.
    Complete,
}

/// Indicator label and title shown above the active step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepHeader {
    pub indicator: &'static str,
    pub title: &'static str,
}

impl Step {
    pub const ALL: [Step; TOTAL_STEPS as usize] =
        [Step::Agreement, Step::Credentials, Step::Personal, Step::Financial, Step::Complete];

    /// Resolve a 1-based step index.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::StepOutOfRange`] for indices outside `1..=5`.
    pub fn from_index(index: u8) -> Result<Self, WizardError> {
        match index {
            1 => Ok(Self::Agreement),
            2 => Ok(Self::Credentials),
            3 => Ok(Self::Personal),
            4 => Ok(Self::Financial),
            5 => Ok(Self::Complete),
            other => Err(WizardError::StepOutOfRange(other)),
        }
    }

    /// 1-based position of this step.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Agreement => 1,
            Self::Credentials => 2,
            Self::Personal => 3,
            Self::Financial => 4,
            Self::Complete => 5,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Agreement => Some(Self::Credentials),
            Self::Credentials => Some(Self::Personal),
            Self::Personal => Some(Self::Financial),
            Self::Financial => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Agreement => None,
            Self::Credentials => Some(Self::Agreement),
            Self::Personal => Some(Self::Credentials),
            Self::Financial => Some(Self::Personal),
            Self::Complete => Some(Self::Financial),
        }
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::Agreement
    }

    /// The step whose successful validation submits the form.
    #[must_use]
    pub fn is_last_input(self) -> bool {
        self == Self::Financial
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Complete
    }

    #[must_use]
    pub fn header(self) -> StepHeader {
        let (indicator, title) = match self {
            Self::Agreement => ("STEP 01.", "약관 동의"),
            Self::Credentials => ("STEP 02.", "회원정보를 입력해주세요."),
            Self::Personal => ("STEP 03.", "개인정보를 입력해주세요."),
            Self::Financial => ("STEP 04.", "금융정보를 입력해주세요."),
            Self::Complete => ("STEP 05.", "가입완료"),
        };
        StepHeader { indicator, title }
    }
}

/// Render model for the wizard chrome at one step.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardView {
    pub step: Step,
    /// `panels[i]` is true when step `i + 1` is the visible panel.
    pub panels: [bool; TOTAL_STEPS as usize],
    pub header: StepHeader,
    pub prev_visible: bool,
    pub next_visible: bool,
    /// The completion step's "go to login" action.
    pub terminal_visible: bool,
}

impl WizardView {
    #[must_use]
    pub fn for_step(step: Step) -> Self {
        let panels = Step::ALL.map(|s| s == step);
        let terminal = step.is_terminal();
        Self {
            step,
            panels,
            header: step.header(),
            prev_visible: !terminal && !step.is_first(),
            next_visible: !terminal,
            terminal_visible: terminal,
        }
    }

    /// Number of panels marked active. Always one.
    #[must_use]
    pub fn active_panel_count(&self) -> usize {
        self.panels.iter().filter(|active| **active).count()
    }

    /// Label of the terminal action button.
    #[must_use]
    pub fn terminal_label(&self) -> &'static str {
        "로그인하기"
    }
}
