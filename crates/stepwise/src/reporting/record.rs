//! Data structures describing what a suite executed.

use crate::types::{Outcome, StepKeyword};

/// Status attached to each executed feature, scenario and step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// Ran and passed.
    Passed,
    /// Ran and reported itself pending.
    Pending,
    /// Ran and failed.
    Failed,
    /// No step definition matched.
    Undefined,
    /// Matched, but not run because an earlier step was unsuccessful.
    Skipped,
}

impl LineStatus {
    /// Retrieve the lowercase label for the status.
    ///
    /// # Examples
    /// ```
    /// use stepwise::reporting::LineStatus;
    ///
    /// assert_eq!(LineStatus::Undefined.label(), "undefined");
    /// ```
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Undefined => "undefined",
            Self::Skipped => "skipped",
        }
    }
}

impl From<&Outcome> for LineStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::Passed,
            Outcome::Pending(_) => Self::Pending,
            Outcome::NotImplemented(_) => Self::Undefined,
            Outcome::Failure(_) => Self::Failed,
        }
    }
}

/// A step as it was executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub(crate) keyword: StepKeyword,
    pub(crate) description: String,
    pub(crate) line: usize,
    pub(crate) status: LineStatus,
    pub(crate) message: Option<String>,
}

impl StepRecord {
    /// Keyword that introduced the step.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Step text after the keyword.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// One-based source line, or zero when unknown.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// How the step ended.
    #[must_use]
    pub fn status(&self) -> LineStatus {
        self.status
    }

    /// Reason given by a pending or failing step.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// A scenario as it was executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioRecord {
    pub(crate) feature_name: String,
    pub(crate) name: String,
    pub(crate) line: usize,
    pub(crate) outcome: Outcome,
    pub(crate) steps: Vec<StepRecord>,
}

impl ScenarioRecord {
    /// Name of the feature containing the scenario.
    #[must_use]
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    /// Scenario description.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-based line of the scenario header, or zero when unknown.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Rolled-up result of the scenario.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Status derived from [`outcome`](Self::outcome).
    #[must_use]
    pub fn status(&self) -> LineStatus {
        LineStatus::from(&self.outcome)
    }

    /// Reason carried by a pending or failed outcome, or the undefined step.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Success => None,
            Outcome::Pending(reason) | Outcome::Failure(reason) => Some(reason.clone()),
            Outcome::NotImplemented(step) => Some(format!("Not Implemented: {step}")),
        }
    }

    /// Steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }
}

/// A feature run and the scenarios it executed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureRecord {
    pub(crate) name: String,
    pub(crate) scenarios: Vec<ScenarioRecord>,
}

impl FeatureRecord {
    /// Feature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenarios in execution order.
    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    /// Status of the most severe scenario, or `Passed` for an empty feature.
    #[must_use]
    pub fn status(&self) -> LineStatus {
        let worst = self
            .scenarios
            .iter()
            .fold(Outcome::Success, |acc, s| acc.escalate(s.outcome.clone()));
        LineStatus::from(&worst)
    }
}
