//! Registry introspection for tooling.
//!
//! `unused` reports definitions that never matched a step, which usually
//! points at a stale pattern. With the `diagnostics` feature enabled the
//! registry can also be dumped as JSON.

use super::{StepDefinition, StepRegistry};

impl StepRegistry {
    /// Definitions that have not matched any step text yet.
    ///
    /// A definition counts as used once it matches, even if the step was
    /// opted out and its action never ran.
    pub fn unused(&self) -> impl Iterator<Item = &StepDefinition> {
        self.definitions().filter(|d| !d.is_used())
    }

    /// Serialise every definition as a JSON array of
    /// `{ "keyword", "pattern", "used" }` objects in registration order.
    ///
    /// # Errors
    /// Returns any error raised by `serde_json` while serialising.
    #[cfg(feature = "diagnostics")]
    pub fn dump_registry(&self) -> serde_json::Result<String> {
        let steps: Vec<_> = self
            .definitions()
            .map(|d| DumpedStep {
                keyword: d.keyword().as_str(),
                pattern: d.pattern(),
                used: d.is_used(),
            })
            .collect();
        serde_json::to_string(&steps)
    }
}

#[cfg(feature = "diagnostics")]
#[derive(serde::Serialize)]
struct DumpedStep<'a> {
    keyword: &'static str,
    pattern: &'a str,
    used: bool,
}
