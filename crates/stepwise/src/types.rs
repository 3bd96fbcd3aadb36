//! Core types shared across the crate.
//!
//! The module defines the parsed feature tree produced by the scanner, the
//! argument map handed to step actions, the error type actions return, and
//! the [`Outcome`] enum the driver rolls results up with.

use derive_more::{Deref, From, IntoIterator};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use stepwise_patterns::{StepKeyword, StepKeywordParseError};

/// Reason attached to the pending result of generated stubs.
pub const NOT_IMPLEMENTED_REASON: &str = "Not implemented";

/// A parsed `Feature:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    /// Text following `Feature: ` on the header line.
    pub name: String,
    /// Lines between the header and the first scenario, each prefixed with
    /// a line break.
    pub description: String,
    /// Scenarios in execution order.
    pub scenarios: Vec<Scenario>,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feature: {}", self.name)?;
        writeln!(f, "{}", self.description)
    }
}

/// A parsed `Scenario:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Text following `Scenario: ` on the header line.
    pub description: String,
    /// Steps in execution order.
    pub steps: Vec<Step>,
    /// One-based line of the scenario header.
    pub line: usize,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scenario: {}", self.description)
    }
}

/// A single `Given`/`When`/`Then`/`And`/`But` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    /// Keyword that introduced the step.
    pub keyword: StepKeyword,
    /// Text following the keyword; this is what step patterns match.
    pub description: String,
    /// One-based line of the step.
    pub line: usize,
}

impl Step {
    /// Construct a step that did not come from a scanned source.
    ///
    /// # Examples
    /// ```
    /// use stepwise::{Step, StepKeyword};
    ///
    /// let step = Step::new(StepKeyword::When, "I press the button");
    /// assert_eq!(step.to_string(), "When I press the button");
    /// ```
    #[must_use]
    pub fn new(keyword: StepKeyword, description: impl Into<String>) -> Self {
        Self {
            keyword,
            description: description.into(),
            line: 0,
        }
    }

    /// Render a registration stub that a developer can paste into their
    /// step definitions to implement this step.
    ///
    /// # Examples
    /// ```
    /// use stepwise::{Step, StepKeyword};
    ///
    /// let step = Step::new(StepKeyword::Then, r#"the total is "12""#);
    /// assert_eq!(
    ///     step.snippet(),
    ///     concat!(
    ///         "registry.then(r#\"^the total is \"([0-9+-]+)\"$\"#, |_args| {\n",
    ///         "    Err(StepError::pending(\"Not implemented\"))\n",
    ///         "});",
    ///     ),
    /// );
    /// ```
    #[must_use]
    pub fn snippet(&self) -> String {
        let regex = stepwise_patterns::build_snippet_regex(&self.description);
        format!(
            "registry.{}({}, |_args| {{\n    Err(StepError::pending(\"{NOT_IMPLEMENTED_REASON}\"))\n}});",
            self.keyword.method_name(),
            raw_string_literal(&regex),
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword, self.description)
    }
}

/// Quote `text` as a raw string literal with enough `#` marks to contain it.
fn raw_string_literal(text: &str) -> String {
    let mut longest = 0usize;
    let mut run: Option<usize> = None;
    for ch in text.chars() {
        run = match (ch, run) {
            ('"', _) => Some(0),
            ('#', Some(count)) => Some(count + 1),
            _ => None,
        };
        if let Some(count) = run {
            longest = longest.max(count);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Named captures from a matched step pattern.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use stepwise::Args;
///
/// let args = Args::from(HashMap::from([("count".to_string(), "3".to_string())]));
/// assert_eq!(args.get("count"), Some("3"));
/// assert_eq!(args.parse::<u32>("count").ok(), Some(3));
/// assert!(args.parse::<u32>("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Args(HashMap<String, String>);

impl Args {
    /// Look up the text captured by the group called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parse the text captured by the group called `name`.
    ///
    /// # Errors
    /// Returns [`StepError::Failure`] when the group is absent or its text
    /// does not parse as `T`.
    pub fn parse<T>(&self, name: &str) -> Result<T, StepError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self
            .get(name)
            .ok_or_else(|| StepError::failure(format!("missing step argument '{name}'")))?;
        raw.parse().map_err(|e| {
            StepError::failure(format!("invalid value '{raw}' for step argument '{name}': {e}"))
        })
    }
}

/// Error returned by a step action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StepError {
    /// The step is recognised but deliberately not implemented yet.
    #[error("{reason}")]
    Pending {
        /// Why the step is pending.
        reason: String,
    },
    /// The step ran and its expectation did not hold.
    #[error("{reason}")]
    Failure {
        /// What went wrong.
        reason: String,
    },
}

impl StepError {
    /// Construct a pending result.
    #[must_use]
    pub fn pending(reason: impl Into<String>) -> Self {
        Self::Pending {
            reason: reason.into(),
        }
    }

    /// Construct a failure result.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// The reason carried by either variant.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Pending { reason } | Self::Failure { reason } => reason,
        }
    }
}

/// Result of executing a step, or the rollup for a scenario.
///
/// Rollups keep the most severe outcome, ranked
/// `Failure > Pending > NotImplemented > Success`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// Every step ran and passed.
    Success,
    /// A step is pending.
    Pending(String),
    /// No registered pattern matches the step.
    NotImplemented(Step),
    /// A step failed.
    Failure(String),
}

impl Outcome {
    pub(crate) const fn severity(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NotImplemented(_) => 1,
            Self::Pending(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    /// Keep whichever of `self` and `other` is more severe, preferring `self`
    /// on ties so the first occurrence wins.
    pub(crate) fn escalate(self, other: Self) -> Self {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    /// Whether this is [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<Result<(), StepError>> for Outcome {
    fn from(result: Result<(), StepError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(StepError::Pending { reason }) => Self::Pending(reason),
            Err(StepError::Failure { reason }) => Self::Failure(reason),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Pending(reason) => write!(f, "pending: {reason}"),
            Self::Failure(reason) => write!(f, "failure: {reason}"),
            Self::NotImplemented(step) => write!(
                f,
                "Not Implemented: {step}\nYou can implement step definition with following snippet:\n{}",
                step.snippet()
            ),
        }
    }
}
