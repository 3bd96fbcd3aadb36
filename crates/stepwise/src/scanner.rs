//! Line-oriented scanner turning feature text into a [`Feature`] tree.
//!
//! The accepted grammar is narrow and indentation sensitive:
//!
//! ```text
//! Feature: <name>
//! <free text, kept as the description>
//!   Scenario: <description>
//!     Given|When|Then|And|But <description>
//! ```
//!
//! Anything before the first `Feature:` header is ignored. Inside a
//! scenario, blank lines are skipped and any other unrecognised line ends
//! the feature.

use crate::types::{Feature, Scenario, Step, StepKeyword};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;
use thiserror::Error;

static FEATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Feature: (?P<name>.+)$")
        .unwrap_or_else(|_| unreachable!("feature header regex should compile"))
});

static SCENARIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^  Scenario: (?P<description>.+)$")
        .unwrap_or_else(|_| unreachable!("scenario header regex should compile"))
});

static STEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^    (?P<keyword>Given|When|Then|But|And) (?P<description>.+)$")
        .unwrap_or_else(|_| unreachable!("step line regex should compile"))
});

/// Errors raised while scanning feature text from a reader.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// Reading a line failed.
    #[error("failed to read feature text at line {line}: {source}")]
    Io {
        /// One-based number of the line that could not be read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
enum State {
    Seeking,
    InFeature(Feature),
    InScenario(Feature, Scenario),
    /// A malformed line ended the current feature; wait for the next header.
    Stopped,
}

enum Line {
    FeatureHeader(String),
    ScenarioHeader(String),
    Step(StepKeyword, String),
    Blank,
    Other,
}

fn capture<'t>(caps: &regex::Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn classify(text: &str) -> Line {
    if let Some(caps) = FEATURE_RE.captures(text) {
        return Line::FeatureHeader(capture(&caps, "name").to_owned());
    }
    if let Some(caps) = SCENARIO_RE.captures(text) {
        return Line::ScenarioHeader(capture(&caps, "description").to_owned());
    }
    if let Some(caps) = STEP_RE.captures(text) {
        if let Ok(keyword) = StepKeyword::try_from(capture(&caps, "keyword")) {
            return Line::Step(keyword, capture(&caps, "description").to_owned());
        }
    }
    if text.trim().is_empty() {
        Line::Blank
    } else {
        Line::Other
    }
}

/// Incremental scanner; feed it lines in order and collect finished
/// features.
#[derive(Debug)]
struct Scanner {
    state: State,
    features: Vec<Feature>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Seeking,
            features: Vec::new(),
        }
    }

    fn push_line(&mut self, number: usize, text: &str) {
        let state = std::mem::replace(&mut self.state, State::Seeking);
        self.state = match (state, classify(text)) {
            (state, Line::FeatureHeader(name)) => {
                if let Some(feature) = close(state) {
                    self.features.push(feature);
                }
                log::debug!("line {number}: feature '{name}'");
                State::InFeature(Feature {
                    name,
                    ..Feature::default()
                })
            }
            (state @ (State::Seeking | State::Stopped), _) => {
                log::debug!("line {number}: skipped outside a feature");
                state
            }
            (State::InFeature(feature), Line::ScenarioHeader(description)) => {
                State::InScenario(feature, new_scenario(description, number))
            }
            (State::InFeature(mut feature), _) => {
                feature.description.push('\n');
                feature.description.push_str(text);
                State::InFeature(feature)
            }
            (State::InScenario(mut feature, scenario), Line::ScenarioHeader(description)) => {
                feature.scenarios.push(scenario);
                State::InScenario(feature, new_scenario(description, number))
            }
            (State::InScenario(feature, mut scenario), Line::Step(keyword, description)) => {
                scenario.steps.push(Step {
                    keyword,
                    description,
                    line: number,
                });
                State::InScenario(feature, scenario)
            }
            (state @ State::InScenario(..), Line::Blank) => state,
            (State::InScenario(feature, scenario), Line::Other) => {
                log::warn!(
                    "line {number}: unrecognised line in scenario '{}' ends feature '{}': {text:?}",
                    scenario.description,
                    feature.name
                );
                self.features.extend(close(State::InScenario(feature, scenario)));
                State::Stopped
            }
        };
    }

    fn finish(mut self) -> Vec<Feature> {
        self.features.extend(close(self.state));
        self.features
    }
}

/// Complete the feature held by `state`, if any.
fn close(state: State) -> Option<Feature> {
    match state {
        State::InFeature(feature) => Some(feature),
        State::InScenario(mut feature, scenario) => {
            feature.scenarios.push(scenario);
            Some(feature)
        }
        State::Seeking | State::Stopped => None,
    }
}

fn new_scenario(description: String, line: usize) -> Scenario {
    Scenario {
        description,
        steps: Vec::new(),
        line,
    }
}

/// Scan every feature in `text`.
///
/// A `Feature:` header always ends the feature in progress and starts a
/// new one.
#[must_use]
pub fn scan_all_str(text: &str) -> Vec<Feature> {
    let mut scanner = Scanner::new();
    for (index, line) in text.lines().enumerate() {
        scanner.push_line(index + 1, line);
    }
    scanner.finish()
}

/// Scan the first feature in `text`.
///
/// Returns `None` when the text contains no `Feature:` header.
///
/// # Examples
/// ```
/// use stepwise::{StepKeyword, scan_str};
///
/// let text = "Feature: Cukes\n  Scenario: Eating\n    Given I have 3 cukes\n";
/// let feature = scan_str(text).unwrap_or_default();
/// assert_eq!(feature.name, "Cukes");
/// assert_eq!(feature.scenarios[0].steps[0].keyword, StepKeyword::Given);
/// ```
#[must_use]
pub fn scan_str(text: &str) -> Option<Feature> {
    scan_all_str(text).into_iter().next()
}

/// Scan every feature read from `reader`.
///
/// # Errors
/// Returns [`ScanError::Io`] if reading from `reader` fails.
pub fn scan_all_reader<R: BufRead>(reader: R) -> Result<Vec<Feature>, ScanError> {
    let mut scanner = Scanner::new();
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| ScanError::Io {
            line: number,
            source,
        })?;
        scanner.push_line(number, &line);
    }
    Ok(scanner.finish())
}

/// Scan the first feature read from `reader`.
///
/// The whole input is consumed so that read errors after the first
/// feature are still reported.
///
/// # Errors
/// Returns [`ScanError::Io`] if reading from `reader` fails.
pub fn scan_reader<R: BufRead>(reader: R) -> Result<Option<Feature>, ScanError> {
    Ok(scan_all_reader(reader)?.into_iter().next())
}
