//! Shared step-pattern utilities for stepwise.
//!
//! The crate holds the pieces of step handling that do not depend on the
//! runtime: the canonical [`StepKeyword`] enum, regex compilation for
//! registered step patterns, named-capture extraction, and the regex source
//! used when generating stubs for undefined steps.

mod capture;
mod errors;
mod keyword;
mod pattern;

pub use capture::extract_named_captures;
pub use errors::PatternError;
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use pattern::{build_snippet_regex, compile_step_regex};
