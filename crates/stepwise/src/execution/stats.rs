//! Aggregate counters kept by a suite.

use crate::types::Outcome;

/// Tallies for one level of the feature tree.
///
/// Counters only ever grow while a suite runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Items processed.
    pub total: usize,
    /// Items that passed.
    pub success: usize,
    /// Items that failed.
    pub failures: usize,
    /// Items that ended pending.
    pub pending: usize,
    /// Items that hit a step with no matching definition.
    pub undefined: usize,
    /// Steps whose action was skipped after an earlier unsuccessful step.
    /// Only step counters use this field.
    pub optout: usize,
}

impl Counters {
    /// Count one scenario-level result: `total` plus the bucket matching
    /// `outcome`.
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Pending(_) => self.pending += 1,
            Outcome::NotImplemented(_) => self.undefined += 1,
            Outcome::Failure(_) => self.failures += 1,
        }
    }

    /// Number of items that did not pass.
    #[must_use]
    pub fn unsuccessful(&self) -> usize {
        self.failures + self.pending + self.undefined
    }
}

/// Counters for features, scenarios and steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Feature-level tallies.
    ///
    /// Each scenario adds to `success`, `pending` or `failures` by its
    /// result; a scenario with an undefined step adds to none of them.
    pub features: Counters,
    /// Scenario-level tallies.
    pub scenarios: Counters,
    /// Step-level tallies.
    pub steps: Counters,
}
