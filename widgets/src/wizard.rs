//! The signup step wizard.
//!
//! DESIGN
//! ======
//! `StepWizard` is the single owner of wizard state for one page: the current
//! step, the rule configuration, the availability gate, the displayed errors,
//! and the agreement checkbox group. Every transition is a synchronous
//! `&mut self` method that validates first and mutates after, so callers never
//! observe a half-applied step change.
//!
//! Browser effects (the blocking confirm dialog, the real form submission,
//! navigation) go through [`FormHost`], which keeps this module testable
//! without a DOM.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use tracing::{debug, info};

use crate::availability::{AvailabilityError, AvailabilityGate, GateState, UsernameAvailability};
use crate::checkbox::CheckGroup;
use crate::consts::{LOGIN_URL, SUBMIT_CONFIRM_MESSAGE};
use crate::errors::ErrorBoard;
use crate::form::{AgreementBox, FieldId, FormSnapshot};
use crate::rules::RuleConfig;
use crate::step::{Step, WizardView};
use crate::validate::{Issue, IssueKind, ValidationResult, live_feedback, validate_step};

/// Browser side effects the wizard triggers but does not perform.
pub trait FormHost {
    /// Blocking yes/no confirmation.
    fn confirm(&mut self, message: &str) -> bool;
    /// Submit the owning form (a full page navigation).
    fn submit(&mut self);
    fn navigate(&mut self, href: &str);
}

/// Outcome of [`StepWizard::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; the step did not change.
    Blocked(ValidationResult),
    /// Moved forward to the contained view.
    Moved(WizardView),
    /// Confirmed and handed to the form for submission.
    Submitted,
    /// The user declined the submission confirmation.
    Cancelled,
    /// A submission is already in flight.
    InFlight,
    /// Already on the completion step; nothing to do.
    AtEnd,
}

#[derive(Clone, Debug, Default)]
pub struct StepWizard {
    step: Step,
    config: RuleConfig,
    availability: AvailabilityGate,
    errors: ErrorBoard,
    agreements: CheckGroup,
    mandatory: Vec<bool>,
    submitting: bool,
}

impl StepWizard {
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// A wizard whose first step lists agreements with the given mandatory
    /// flags, all initially unchecked.
    #[must_use]
    pub fn with_agreements(config: RuleConfig, mandatory: Vec<bool>) -> Self {
        Self { config, agreements: CheckGroup::new(mandatory.len()), mandatory, ..Self::default() }
    }

    #[must_use]
    pub fn current(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorBoard {
        &self.errors
    }

    #[must_use]
    pub fn availability(&self) -> &GateState {
        self.availability.state()
    }

    #[must_use]
    pub fn agreements(&self) -> &CheckGroup {
        &self.agreements
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn view(&self) -> WizardView {
        WizardView::for_step(self.step)
    }

    /// Show `step`. Leaving a step clears its step-level errors.
    pub fn go_to_step(&mut self, step: Step) -> WizardView {
        if step != self.step {
            self.errors.clear_step();
            debug!(from = self.step.index(), to = step.index(), "wizard step change");
        }
        self.step = step;
        self.view()
    }

    /// Validate `step` against `snapshot` under this wizard's rules.
    #[must_use]
    pub fn validate(&self, step: Step, snapshot: &FormSnapshot) -> ValidationResult {
        validate_step(step, snapshot, &self.config)
    }

    /// Try to move forward, submitting the form from the last input step.
    pub fn advance<H>(&mut self, snapshot: &FormSnapshot, host: &mut H) -> Advance
    where
        H: FormHost + ?Sized,
    {
        if self.step.is_terminal() {
            return Advance::AtEnd;
        }
        if self.submitting {
            return Advance::InFlight;
        }

        let mut result = self.validate(self.step, snapshot);
        if self.step == Step::Credentials && self.config.require_availability_check {
            let username_ok = result.issues.iter().all(|i| i.field != Some(FieldId::Username));
            if username_ok {
                if let Some(kind) = self.availability.blocking_issue(snapshot.value(FieldId::Username)) {
                    result.push(Issue::field(FieldId::Username, kind));
                }
            }
        }

        if !result.valid() {
            debug!(step = self.step.index(), issues = result.issues.len(), "wizard step blocked");
            self.errors.show(&result);
            return Advance::Blocked(result);
        }
        self.errors.clear_all();

        if self.step.is_last_input() {
            if !host.confirm(SUBMIT_CONFIRM_MESSAGE) {
                debug!("signup submission declined");
                return Advance::Cancelled;
            }
            info!("submitting signup form");
            self.submitting = true;
            host.submit();
            return Advance::Submitted;
        }

        match self.step.next() {
            Some(next) => Advance::Moved(self.go_to_step(next)),
            None => Advance::AtEnd,
        }
    }

    /// Move back one step without validation. `None` on the first step.
    pub fn retreat(&mut self) -> Option<WizardView> {
        let prev = self.step.prev()?;
        Some(self.go_to_step(prev))
    }

    /// The completion step's terminal action. Returns `false` elsewhere.
    pub fn finish<H>(&mut self, host: &mut H) -> bool
    where
        H: FormHost + ?Sized,
    {
        if !self.step.is_terminal() {
            return false;
        }
        host.navigate(LOGIN_URL);
        true
    }

    /// Re-enable forward progress after a submission that did not navigate
    /// away (driven by the button restore timer).
    pub fn release_submit(&mut self) {
        self.submitting = false;
    }

    /// React to an edit of `field`; `snapshot` holds the new values.
    pub fn on_field_edited(&mut self, field: FieldId, snapshot: &FormSnapshot) {
        self.errors.clear_field(field);
        if field.step() == self.step {
            self.errors.clear_step();
        }
        if field == FieldId::Username {
            self.availability.invalidate_if_changed(snapshot.value(FieldId::Username));
        }
        if self.config.live_password_feedback {
            if let Some(issue) = live_feedback(field, snapshot) {
                self.errors.show_issue(&issue);
            }
        }
    }

    /// The group "agree to all" box changed.
    pub fn set_all_agreements(&mut self, checked: bool) {
        self.agreements.set_all(checked);
        self.errors.clear_step();
    }

    pub fn set_agreement(&mut self, index: usize, checked: bool) {
        self.agreements.set_item(index, checked);
        self.errors.clear_step();
    }

    /// Agreement checkboxes in the shape validation reads them.
    #[must_use]
    pub fn agreement_boxes(&self) -> Vec<AgreementBox> {
        self.mandatory
            .iter()
            .zip(self.agreements.items())
            .map(|(mandatory, checked)| AgreementBox { mandatory: *mandatory, checked: *checked })
            .collect()
    }

    /// Begin an availability check; returns the value to send.
    pub fn begin_availability_check(&mut self, username: &str) -> Option<String> {
        let value = self.availability.begin(username);
        if value.is_none() {
            self.errors.show_issue(&Issue::field(FieldId::Username, IssueKind::UsernameRequired));
        }
        value
    }

    /// Apply an availability answer for `username` and update the inline
    /// username error. Stale answers change nothing.
    pub fn resolve_availability(&mut self, username: &str, outcome: Result<bool, AvailabilityError>) {
        if !self.availability.resolve(username, outcome) {
            return;
        }
        match self.availability.state() {
            GateState::Available(_) => self.errors.clear_field(FieldId::Username),
            GateState::Taken(_) => {
                self.errors.show_issue(&Issue::field(FieldId::Username, IssueKind::UsernameTaken));
            }
            _ => {}
        }
    }

    /// Run a full availability check against `checker`.
    pub async fn check_username<C>(&mut self, checker: &C, username: &str)
    where
        C: UsernameAvailability + ?Sized,
    {
        if let Some(value) = self.begin_availability_check(username) {
            let outcome = checker.check_username_available(&value).await;
            self.resolve_availability(&value, outcome);
        }
    }
}
