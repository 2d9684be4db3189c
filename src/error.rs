//! Error taxonomy for the monitoring core
//!
//! Only two conditions are hard errors: a malformed threshold catalog at
//! construction time and an empty evaluation window. Everything local to a
//! single variable or pair (missing catalog entry, too few samples) degrades
//! the specific output instead of failing the evaluation.

use thiserror::Error;

/// Errors surfaced by the monitoring core
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A threshold band definition is malformed. Fatal at startup.
    #[error("invalid threshold configuration for '{variable}': {reason}")]
    InvalidConfig { variable: String, reason: String },

    /// The supplied reading window contains no readings. Callers must treat
    /// this as a distinct, reportable condition, not an all-nominal snapshot.
    #[error("evaluation window contains no readings")]
    EmptyWindow,
}

impl MonitorError {
    pub(crate) fn invalid_config(variable: impl Into<String>, reason: impl Into<String>) -> Self {
        MonitorError::InvalidConfig {
            variable: variable.into(),
            reason: reason.into(),
        }
    }
}
