//! Core library for `stepwise`.
//! This crate scans plain-text feature descriptions, runs their steps against
//! a registry of regular-expression step definitions, and reports tallies and
//! snippets for steps that have no definition yet.
//!
//! # Overview
//!
//! ```
//! use stepwise::{StepError, StepRegistry, Suite, scan_str};
//!
//! let mut registry = StepRegistry::new();
//! registry
//!     .given(r"^I have (?P<count>\d+) cukes$", |args| {
//!         let _count: u32 = args.parse("count")?;
//!         Ok(())
//!     })
//!     .expect("pattern compiles");
//!
//! let feature = scan_str(
//!     "Feature: Cukes\n  Scenario: Eating\n    Given I have 3 cukes\n    When I eat 2 cukes\n",
//! )
//! .expect("feature header present");
//!
//! let mut suite = Suite::new(&registry);
//! suite.test_feature(&feature).expect("lenient suites report through stats");
//! assert_eq!(suite.stats().steps.undefined, 1);
//! assert!(suite.snippets().starts_with("registry.when(r#\"^I eat 2 cukes$\"#"));
//! ```
//!
//! The library logs through the `log` facade and never installs a logger.

pub mod config;
pub mod execution;
mod panic;
pub mod registry;
pub mod reporting;
pub mod scanner;
mod types;

pub use config::{ConfigError, SuiteConfig};
pub use execution::{Counters, FailureFlag, Stats, Suite, SuiteError, TestHandle};
pub use panic::panic_message;
pub use registry::{StepAction, StepDefinition, StepMatch, StepRegistry};
pub use reporting::{FeatureRecord, LineStatus, ScenarioRecord, StepRecord, TranscriptLine};
pub use scanner::{ScanError, scan_all_reader, scan_all_str, scan_reader, scan_str};
pub use stepwise_patterns::PatternError;
pub use types::{
    Args, Feature, NOT_IMPLEMENTED_REASON, Outcome, Scenario, Step, StepError, StepKeyword,
    StepKeywordParseError,
};
