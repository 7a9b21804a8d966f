//! Username availability: the async collaborator and the gate that binds a
//! result to the exact value it was checked for.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend check is owned by the server. The gate only remembers which
//! value was confirmed available; editing the username to anything else
//! drops that confirmation, and a late answer for a value the user has since
//! abandoned is discarded.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use tracing::{debug, warn};

use crate::validate::IssueKind;

/// Error returned by a [`UsernameAvailability`] collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvailabilityError {
    #[error("availability request failed: {0}")]
    Request(String),
    #[error("availability check returned status {0}")]
    Status(u16),
    #[error("availability response parse failed: {0}")]
    Decode(String),
}

/// Asks the backend whether a username is free.
#[async_trait::async_trait(?Send)]
pub trait UsernameAvailability {
    /// # Errors
    ///
    /// Returns an [`AvailabilityError`] when the backend cannot answer.
    async fn check_username_available(&self, username: &str) -> Result<bool, AvailabilityError>;
}

/// Where the availability check stands, with the value it concerns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unchecked,
    Pending(String),
    Available(String),
    Taken(String),
    Failed(String),
}

impl GateState {
    fn value(&self) -> Option<&str> {
        match self {
            Self::Unchecked => None,
            Self::Pending(v) | Self::Available(v) | Self::Taken(v) | Self::Failed(v) => Some(v),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailabilityGate {
    state: GateState,
}

impl AvailabilityGate {
    #[must_use]
    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Start a check. Returns the trimmed value to send, or `None` when the
    /// username is blank and nothing should be sent.
    pub fn begin(&mut self, username: &str) -> Option<String> {
        let value = username.trim();
        if value.is_empty() {
            self.state = GateState::Unchecked;
            return None;
        }
        self.state = GateState::Pending(value.to_owned());
        Some(value.to_owned())
    }

    /// Apply a collaborator answer. Returns `false` when the answer is stale.
    pub fn resolve(&mut self, username: &str, outcome: Result<bool, AvailabilityError>) -> bool {
        if self.state != GateState::Pending(username.to_owned()) {
            debug!(username, "discarding stale availability result");
            return false;
        }
        self.state = match outcome {
            Ok(true) => GateState::Available(username.to_owned()),
            Ok(false) => GateState::Taken(username.to_owned()),
            Err(e) => {
                warn!(error = %e, username, "username availability check failed");
                GateState::Failed(username.to_owned())
            }
        };
        true
    }

    /// Forget any result that does not concern `current`.
    pub fn invalidate_if_changed(&mut self, current: &str) {
        if self.state.value().is_some_and(|v| v != current.trim()) {
            self.state = GateState::Unchecked;
        }
    }

    #[must_use]
    pub fn is_available_for(&self, username: &str) -> bool {
        matches!(&self.state, GateState::Available(v) if v == username.trim())
    }

    /// The reason forward progress is blocked for `username`, if any.
    #[must_use]
    pub fn blocking_issue(&self, username: &str) -> Option<IssueKind> {
        match &self.state {
            GateState::Available(v) if v == username.trim() => None,
            GateState::Taken(v) if v == username.trim() => Some(IssueKind::UsernameTaken),
            _ => Some(IssueKind::UsernameNotChecked),
        }
    }

    /// Run one full check against `checker`.
    pub async fn check<C>(&mut self, checker: &C, username: &str) -> &GateState
    where
        C: UsernameAvailability + ?Sized,
    {
        if let Some(value) = self.begin(username) {
            let outcome = checker.check_username_available(&value).await;
            self.resolve(&value, outcome);
        }
        &self.state
    }
}
