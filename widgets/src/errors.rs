//! Displayed validation errors and their clearing rules.
//!
//! Field errors sit next to one input and disappear when that input is
//! edited. Step errors are one aggregated list at the top of the active panel
//! and disappear on any corrective edit within the step, or when the user
//! leaves the step.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::BTreeMap;

use crate::form::FieldId;
use crate::validate::{Issue, ValidationResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBoard {
    field: BTreeMap<FieldId, String>,
    step: Vec<String>,
}

impl ErrorBoard {
    /// Replace everything shown with the issues of a fresh validation run.
    pub fn show(&mut self, result: &ValidationResult) {
        self.clear_all();
        for issue in &result.issues {
            self.show_issue(issue);
        }
    }

    /// Add one issue without disturbing the rest. A second issue for the same
    /// field replaces the first.
    pub fn show_issue(&mut self, issue: &Issue) {
        match issue.field {
            Some(field) => {
                self.field.insert(field, issue.message());
            }
            None => self.step.push(issue.message()),
        }
    }

    pub fn clear_field(&mut self, field: FieldId) {
        self.field.remove(&field);
    }

    pub fn clear_step(&mut self) {
        self.step.clear();
    }

    pub fn clear_all(&mut self) {
        self.field.clear();
        self.step.clear();
    }

    #[must_use]
    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.field.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn step_errors(&self) -> &[String] {
        &self.step
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field.is_empty() && self.step.is_empty()
    }
}
