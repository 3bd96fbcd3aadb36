//! Rendering of suite results.
//!
//! Text output comes from methods on [`Suite`]: [`Suite::summary`],
//! [`Suite::snippets`], [`Suite::transcript`] and [`Suite::report`]. The
//! [`junit`] and `json` writers serialise the suite's [`FeatureRecord`]s for
//! external tools.

use std::fmt;

use crate::execution::Suite;

/// JSON report writer for feature records.
#[cfg(feature = "diagnostics")]
pub mod json;
/// JUnit XML writer for feature records.
pub mod junit;
mod record;

pub use record::{FeatureRecord, LineStatus, ScenarioRecord, StepRecord};

/// Header printed above the generated snippets in [`Suite::report`].
pub const SNIPPETS_HEADER: &str =
    "You can implement step definition for undefined steps with these snippets:";

/// One line of an execution transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Nesting level: 0 for features, 1 for scenarios, 2 for steps.
    pub depth: usize,
    /// Line text without indentation.
    pub text: String,
    /// How the feature, scenario or step ended.
    pub status: LineStatus,
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.text, indent = self.depth * 2)
    }
}

impl Suite<'_> {
    /// Two-line tally of scenarios and steps.
    ///
    /// ```text
    /// <N> scenario (<U> undefined, <F> failures, <P> pending)
    /// <N> steps (<U> undefined, <F> failures, <P> pending, <O> optout)
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let scenarios = &self.stats.scenarios;
        let steps = &self.stats.steps;
        format!(
            "{} scenario ({} undefined, {} failures, {} pending)\n{} steps ({} undefined, {} failures, {} pending, {} optout)",
            scenarios.total,
            scenarios.undefined,
            scenarios.failures,
            scenarios.pending,
            steps.total,
            steps.undefined,
            steps.failures,
            steps.pending,
            steps.optout,
        )
    }

    /// Registration stubs for every distinct undefined step, sorted and
    /// joined with line breaks. Empty when every step was defined.
    #[must_use]
    pub fn snippets(&self) -> String {
        self.snippets
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The executed tree, one line per feature, scenario and step.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptLine> {
        let mut lines = Vec::new();
        for feature in &self.records {
            lines.push(TranscriptLine {
                depth: 0,
                text: format!("Feature: {}", feature.name()),
                status: feature.status(),
            });
            for scenario in feature.scenarios() {
                lines.push(TranscriptLine {
                    depth: 1,
                    text: format!("Scenario: {}", scenario.name()),
                    status: scenario.status(),
                });
                lines.extend(scenario.steps().iter().map(|step| TranscriptLine {
                    depth: 2,
                    text: format!("{} {}", step.keyword(), step.description()),
                    status: step.status(),
                }));
            }
        }
        lines
    }

    /// Transcript, summary and, when any step was undefined, the snippets
    /// that would define the missing steps.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        for line in self.transcript() {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.summary());
        out.push('\n');
        if !self.snippets.is_empty() {
            out.push('\n');
            out.push_str(SNIPPETS_HEADER);
            out.push_str("\n\n");
            out.push_str(&self.snippets());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Suite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests;
