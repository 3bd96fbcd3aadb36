//! Error type for feature runs.

use thiserror::Error;

/// Error reported when a feature run does not meet the suite's policy.
///
/// Step failures, pending steps and undefined steps are ordinary results
/// recorded in the suite's statistics. They become an error only when the
/// suite runs in strict mode.
///
/// # Examples
///
/// ```
/// use stepwise::SuiteError;
///
/// let error = SuiteError::Strict {
///     feature: "Manage users".into(),
///     failures: 0,
///     pending: 1,
///     undefined: 0,
/// };
/// assert_eq!(
///     error.to_string(),
///     "feature 'Manage users' has non-passing scenarios (0 failures, 1 pending, 0 undefined)",
/// );
/// assert_eq!(error.feature(), "Manage users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SuiteError {
    /// Strict mode is enabled and at least one scenario did not pass.
    #[error(
        "feature '{feature}' has non-passing scenarios ({failures} failures, {pending} pending, {undefined} undefined)"
    )]
    Strict {
        /// Name of the feature that was run.
        feature: String,
        /// Scenarios that ended in failure.
        failures: usize,
        /// Scenarios that ended pending.
        pending: usize,
        /// Scenarios that ended with an undefined step.
        undefined: usize,
    },
}

impl SuiteError {
    /// Name of the feature the error refers to.
    #[must_use]
    pub fn feature(&self) -> &str {
        match self {
            Self::Strict { feature, .. } => feature,
        }
    }
}
