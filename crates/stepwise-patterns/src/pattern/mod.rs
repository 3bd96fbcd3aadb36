//! Step-pattern compilation and snippet-regex helpers.

mod compiler;
mod lexer;

use crate::errors::PatternError;
use regex::Regex;

pub use compiler::build_snippet_regex;

/// Compile a registered step pattern into a regular expression.
///
/// The pattern is used verbatim. Callers anchor it themselves (`^...$`);
/// an unanchored pattern matches any step text that merely contains it.
///
/// # Errors
/// Returns [`PatternError::Regex`] when the pattern is not a valid regular
/// expression.
///
/// # Examples
/// ```
/// use stepwise_patterns::compile_step_regex;
///
/// let regex = compile_step_regex(r"^I have (?P<count>\d+) cukes$")
///     .expect("example ensures fallible call succeeds");
/// assert!(regex.is_match("I have 12 cukes"));
/// ```
pub fn compile_step_regex(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Regex {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_anchor_patterns() {
        let Ok(regex) = compile_step_regex("a step") else {
            panic!("pattern should compile");
        };
        assert_eq!(regex.as_str(), "a step");
        assert!(regex.is_match("before a step after"));
    }

    #[test]
    fn surfaces_regex_compilation_errors() {
        let Err(err) = compile_step_regex("^(unclosed$") else {
            panic!("pattern should fail");
        };
        assert!(matches!(err, PatternError::Regex { .. }));
        assert_eq!(err.pattern(), "^(unclosed$");
    }
}
