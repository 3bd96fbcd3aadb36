//! Step registration and lookup.
//!
//! A [`StepRegistry`] owns the step definitions for a run. Definitions are
//! kept in registration order and matched with a linear scan: the first
//! pattern that matches the step text wins, whatever keyword it was
//! registered under. Registration happens through `&mut self` during setup;
//! lookups only need `&self`, so one registry can serve several suites.

use crate::panic::panic_message;
use crate::types::{Args, StepError, StepKeyword};
use regex::Regex;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use stepwise_patterns::{PatternError, compile_step_regex, extract_named_captures};

mod diagnostics;

/// Boxed step behaviour invoked with the named captures of its pattern.
pub type StepAction = Box<dyn Fn(&Args) -> Result<(), StepError> + Send + Sync>;

/// Represents a single step definition registered with a [`StepRegistry`].
pub struct StepDefinition {
    keyword: StepKeyword,
    regex: Regex,
    action: StepAction,
    used: AtomicBool,
}

impl StepDefinition {
    /// Keyword the definition was registered under.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Pattern text as supplied at registration.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the definition has matched any step text so far.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.used.load(Ordering::Relaxed)
    }

    fn mark_used(&self) {
        self.used.store(true, Ordering::Relaxed);
    }

    fn invoke(&self, text: &str) -> Result<(), StepError> {
        let args = Args::from(extract_named_captures(&self.regex, text).unwrap_or_default());
        catch_unwind(AssertUnwindSafe(|| (self.action)(&args))).unwrap_or_else(|payload| {
            Err(StepError::failure(format!(
                "step panicked: {}",
                panic_message(payload.as_ref())
            )))
        })
    }
}

impl fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("keyword", &self.keyword)
            .field("pattern", &self.pattern())
            .field("used", &self.is_used())
            .finish_non_exhaustive()
    }
}

/// Result of looking a step up in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StepMatch {
    /// No registered pattern matches the step text.
    Unmatched,
    /// A pattern matches but the caller asked not to run it.
    OptedOut,
    /// A pattern matched and its action ran.
    Executed(Result<(), StepError>),
}

impl StepMatch {
    /// Whether a registered pattern matched the step text.
    #[must_use]
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

/// Ordered collection of step definitions.
///
/// # Examples
///
/// ```
/// use stepwise::{StepError, StepMatch, StepRegistry};
///
/// let mut registry = StepRegistry::new();
/// registry
///     .given(r"^I have (?P<count>\d+) cukes$", |args| {
///         let count: u32 = args.parse("count")?;
///         if count > 10 {
///             return Err(StepError::failure("too many cukes"));
///         }
///         Ok(())
///     })
///     .expect("pattern compiles");
///
/// assert_eq!(registry.find("I have 3 cukes", false), StepMatch::Executed(Ok(())));
/// assert_eq!(registry.find("I have 3 cukes", true), StepMatch::OptedOut);
/// assert_eq!(registry.find("I have no cukes", false), StepMatch::Unmatched);
/// ```
#[derive(Debug, Default)]
pub struct StepRegistry {
    definitions: Vec<StepDefinition>,
}

impl StepRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` for step text matching `pattern`.
    ///
    /// The pattern is compiled as written; include `^` and `$` to anchor it.
    /// A pattern that does not compile is logged at `warn` level and
    /// discarded, leaving the registry unchanged.
    ///
    /// # Errors
    /// Returns [`PatternError`] when `pattern` is not a valid regular
    /// expression.
    pub fn register<F>(
        &mut self,
        keyword: StepKeyword,
        pattern: &str,
        action: F,
    ) -> Result<(), PatternError>
    where
        F: Fn(&Args) -> Result<(), StepError> + Send + Sync + 'static,
    {
        let regex = compile_step_regex(pattern).inspect_err(|e| {
            log::warn!("discarding {keyword} step definition: {e}");
        })?;
        log::debug!("registered {keyword} step definition '{pattern}'");
        self.definitions.push(StepDefinition {
            keyword,
            regex,
            action: Box::new(action),
            used: AtomicBool::new(false),
        });
        Ok(())
    }

    /// Register a `Given` step.
    ///
    /// # Errors
    /// See [`register`](Self::register).
    pub fn given<F>(&mut self, pattern: &str, action: F) -> Result<(), PatternError>
    where
        F: Fn(&Args) -> Result<(), StepError> + Send + Sync + 'static,
    {
        self.register(StepKeyword::Given, pattern, action)
    }

    /// Register a `When` step.
    ///
    /// # Errors
    /// See [`register`](Self::register).
    pub fn when<F>(&mut self, pattern: &str, action: F) -> Result<(), PatternError>
    where
        F: Fn(&Args) -> Result<(), StepError> + Send + Sync + 'static,
    {
        self.register(StepKeyword::When, pattern, action)
    }

    /// Register a `Then` step.
    ///
    /// # Errors
    /// See [`register`](Self::register).
    pub fn then<F>(&mut self, pattern: &str, action: F) -> Result<(), PatternError>
    where
        F: Fn(&Args) -> Result<(), StepError> + Send + Sync + 'static,
    {
        self.register(StepKeyword::Then, pattern, action)
    }

    /// Register an `And` step.
    ///
    /// # Errors
    /// See [`register`](Self::register).
    pub fn and<F>(&mut self, pattern: &str, action: F) -> Result<(), PatternError>
    where
        F: Fn(&Args) -> Result<(), StepError> + Send + Sync + 'static,
    {
        self.register(StepKeyword::And, pattern, action)
    }

    /// Register a `But` step.
    ///
    /// # Errors
    /// See [`register`](Self::register).
    pub fn but<F>(&mut self, pattern: &str, action: F) -> Result<(), PatternError>
    where
        F: Fn(&Args) -> Result<(), StepError> + Send + Sync + 'static,
    {
        self.register(StepKeyword::But, pattern, action)
    }

    /// Find the first definition matching `text` and, unless `opt_out` is
    /// set, run its action.
    ///
    /// A panicking action is reported as [`StepError::Failure`].
    pub fn find(&self, text: &str, opt_out: bool) -> StepMatch {
        let Some(definition) = self.definitions.iter().find(|d| d.regex.is_match(text)) else {
            log::debug!("no step definition matches '{text}'");
            return StepMatch::Unmatched;
        };
        definition.mark_used();
        if opt_out {
            log::debug!("skipping '{text}' after an earlier unsuccessful step");
            return StepMatch::OptedOut;
        }
        StepMatch::Executed(definition.invoke(text))
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &StepDefinition> {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests;
