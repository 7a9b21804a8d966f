//! Rule configuration for the signup validation table.
//!
//! Several page variants enforce slightly different rules (income field
//! present or not, age range checked or not). Each divergence is a flag here
//! rather than a separate code path. The server renders the flags as JSON;
//! every field defaults, so `{}` is a valid configuration.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AGE_MAX, AGE_MIN, NAME_MIN_LEN};

/// Error returned by [`RuleConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("rule config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid age bounds: min {min} > max {max}")]
    AgeBounds { min: u32, max: u32 },
}

/// Inclusive age range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for AgeBounds {
    fn default() -> Self {
        Self { min: AGE_MIN, max: AGE_MAX }
    }
}

impl AgeBounds {
    #[must_use]
    pub fn contains(self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

/// Optional rules layered over the always-on validation table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Minimum full-name length; `None` only requires a value.
    pub name_min_len: Option<usize>,
    /// Inclusive age range; `None` only requires a number.
    pub age_bounds: Option<AgeBounds>,
    pub require_annual_income: bool,
    /// Block the credentials step until the username is confirmed available.
    pub require_availability_check: bool,
    /// Re-check password fields on every keystroke.
    pub live_password_feedback: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            name_min_len: Some(NAME_MIN_LEN),
            age_bounds: Some(AgeBounds::default()),
            require_annual_income: false,
            require_availability_check: false,
            live_password_feedback: true,
        }
    }
}

impl RuleConfig {
    /// Parse a configuration blob rendered by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::AgeBounds`] when the range is inverted.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if let Some(AgeBounds { min, max }) = config.age_bounds {
            if min > max {
                return Err(ConfigError::AgeBounds { min, max });
            }
        }
        Ok(config)
    }
}
