//! Feature execution and statistics.
//!
//! A [`Suite`] walks a [`Feature`] scenario by scenario, looks each step up
//! in a borrowed [`StepRegistry`], and keeps running tallies, generated
//! snippets for undefined steps and a record of what ran.
//!
//! # Key Components
//!
//! - [`Suite`]: the driver; one per run.
//! - [`Stats`] and [`Counters`]: the tallies, grouped by tree level.
//! - [`TestHandle`]: how a run signals failure to the surrounding harness.
//! - [`SuiteError`]: raised by strict runs with non-passing scenarios.

mod error;
mod stats;

use std::collections::BTreeSet;

use crate::config::SuiteConfig;
use crate::registry::{StepMatch, StepRegistry};
use crate::reporting::{FeatureRecord, LineStatus, ScenarioRecord, StepRecord};
use crate::types::{Feature, Outcome, Scenario, Step, StepError};

pub use error::SuiteError;
pub use stats::{Counters, Stats};

/// Receiver for the pass/fail verdict of a feature run.
///
/// Implement this for whatever the host harness uses to mark a test as
/// failed.
pub trait TestHandle {
    /// Mark the current test as failed.
    fn fail(&mut self);
}

/// Minimal [`TestHandle`] that remembers whether it was failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureFlag {
    failed: bool,
}

impl FailureFlag {
    /// Whether [`TestHandle::fail`] has been called.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failed
    }
}

impl TestHandle for FailureFlag {
    fn fail(&mut self) {
        self.failed = true;
    }
}

/// Driver running features against a step registry.
///
/// # Examples
///
/// ```
/// use stepwise::{StepError, StepRegistry, Suite, scan_str};
///
/// let mut registry = StepRegistry::new();
/// registry
///     .given("^a registered step$", |_| Ok(()))
///     .expect("pattern compiles");
/// registry
///     .then("^it is pending$", |_| Err(StepError::pending("later")))
///     .expect("pattern compiles");
///
/// let feature = scan_str(
///     "Feature: Demo\n  Scenario: One\n    Given a registered step\n    Then it is pending\n",
/// )
/// .expect("feature parses");
///
/// let mut suite = Suite::new(&registry);
/// suite.test_feature(&feature).expect("lenient runs do not fail");
/// assert_eq!(
///     suite.summary(),
///     "1 scenario (0 undefined, 0 failures, 1 pending)\n2 steps (0 undefined, 0 failures, 1 pending, 0 optout)",
/// );
/// ```
#[derive(Debug)]
pub struct Suite<'r> {
    registry: &'r StepRegistry,
    config: SuiteConfig,
    pub(crate) stats: Stats,
    pub(crate) snippets: BTreeSet<String>,
    pub(crate) records: Vec<FeatureRecord>,
}

impl<'r> Suite<'r> {
    /// Create a suite with the default configuration.
    #[must_use]
    pub fn new(registry: &'r StepRegistry) -> Self {
        Self::with_config(registry, SuiteConfig::default())
    }

    /// Create a suite with an explicit configuration.
    #[must_use]
    pub fn with_config(registry: &'r StepRegistry, config: SuiteConfig) -> Self {
        Self {
            registry,
            config,
            stats: Stats::default(),
            snippets: BTreeSet::new(),
            records: Vec::new(),
        }
    }

    /// Configuration the suite runs with.
    #[must_use]
    pub fn config(&self) -> SuiteConfig {
        self.config
    }

    /// Tallies accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Features run so far, in order.
    #[must_use]
    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    /// Run one step.
    ///
    /// With `opt_out` set, a matching definition is counted as opted out
    /// instead of being run and the step reports [`Outcome::Success`]. A
    /// step with no matching definition is undefined either way.
    pub fn test_step(&mut self, step: &Step, opt_out: bool) -> Outcome {
        self.run_step(step, opt_out).0
    }

    fn run_step(&mut self, step: &Step, opt_out: bool) -> (Outcome, StepRecord) {
        let steps = &mut self.stats.steps;
        steps.total += 1;
        let (outcome, status) = match self.registry.find(&step.description, opt_out) {
            StepMatch::Unmatched => {
                steps.undefined += 1;
                (Outcome::NotImplemented(step.clone()), LineStatus::Undefined)
            }
            StepMatch::OptedOut => {
                steps.optout += 1;
                (Outcome::Success, LineStatus::Skipped)
            }
            StepMatch::Executed(Ok(())) => {
                steps.success += 1;
                (Outcome::Success, LineStatus::Passed)
            }
            StepMatch::Executed(Err(StepError::Pending { reason })) => {
                steps.pending += 1;
                (Outcome::Pending(reason), LineStatus::Pending)
            }
            StepMatch::Executed(Err(StepError::Failure { reason })) => {
                steps.failures += 1;
                (Outcome::Failure(reason), LineStatus::Failed)
            }
        };
        log::debug!("{step}: {}", status.label());
        let message = match &outcome {
            Outcome::Pending(reason) | Outcome::Failure(reason) => Some(reason.clone()),
            Outcome::Success | Outcome::NotImplemented(_) => None,
        };
        let record = StepRecord {
            keyword: step.keyword,
            description: step.description.clone(),
            line: step.line,
            status,
            message,
        };
        (outcome, record)
    }

    /// Run every step of `scenario` in order.
    ///
    /// Once a step is undefined, pending or failing, later matched steps are
    /// opted out. Undefined steps add their snippet to the suite. The result
    /// is the first failure if any, else the first pending step, else the
    /// first undefined step, else success.
    pub fn test_scenario(&mut self, feature: &Feature, scenario: &Scenario) -> Outcome {
        let mut opt_out = false;
        let mut result = Outcome::Success;
        let mut steps = Vec::with_capacity(scenario.steps.len());
        for step in &scenario.steps {
            let (outcome, record) = self.run_step(step, opt_out);
            if let Outcome::NotImplemented(missing) = &outcome {
                self.snippets.insert(missing.snippet());
            }
            opt_out |= !outcome.is_success();
            result = result.escalate(outcome);
            steps.push(record);
        }
        self.stats.scenarios.record(&result);
        log::debug!("{scenario}: {}", LineStatus::from(&result).label());

        let record = ScenarioRecord {
            feature_name: feature.name.clone(),
            name: scenario.description.clone(),
            line: scenario.line,
            outcome: result.clone(),
            steps,
        };
        self.push_scenario_record(record);
        result
    }

    /// Append to the latest feature record, starting a new one when the
    /// scenario belongs to a different feature.
    fn push_scenario_record(&mut self, record: ScenarioRecord) {
        match self.records.last_mut() {
            Some(feature) if feature.name == record.feature_name => feature.scenarios.push(record),
            _ => self.records.push(FeatureRecord {
                name: record.feature_name.clone(),
                scenarios: vec![record],
            }),
        }
    }

    /// Run every scenario of `feature`.
    ///
    /// # Errors
    /// In strict mode, returns [`SuiteError::Strict`] when any scenario did
    /// not pass. Every scenario runs regardless.
    pub fn test_feature(&mut self, feature: &Feature) -> Result<(), SuiteError> {
        log::info!("running feature '{}'", feature.name);
        self.stats.features.total += 1;
        self.records.push(FeatureRecord {
            name: feature.name.clone(),
            scenarios: Vec::new(),
        });

        let mut failures = 0;
        let mut pending = 0;
        let mut undefined = 0;
        for scenario in &feature.scenarios {
            match self.test_scenario(feature, scenario) {
                Outcome::Success => self.stats.features.success += 1,
                Outcome::Pending(_) => {
                    self.stats.features.pending += 1;
                    pending += 1;
                }
                Outcome::Failure(_) => {
                    self.stats.features.failures += 1;
                    failures += 1;
                }
                Outcome::NotImplemented(_) => undefined += 1,
            }
        }
        log::info!(
            "finished feature '{}': {} scenarios, {failures} failed, {pending} pending, {undefined} undefined",
            feature.name,
            feature.scenarios.len()
        );

        if self.config.strict && failures + pending + undefined > 0 {
            return Err(SuiteError::Strict {
                feature: feature.name.clone(),
                failures,
                pending,
                undefined,
            });
        }
        Ok(())
    }

    /// Run `feature` on behalf of a harness, failing `handle` on error.
    ///
    /// # Errors
    /// Propagates the error from [`test_feature`](Self::test_feature) after
    /// marking `handle` as failed.
    pub fn test<H: TestHandle>(
        &mut self,
        feature: &Feature,
        handle: &mut H,
    ) -> Result<(), SuiteError> {
        self.test_feature(feature).inspect_err(|e| {
            log::error!("test framework failed for: {}: {e}", feature.name);
            handle.fail();
        })
    }
}
