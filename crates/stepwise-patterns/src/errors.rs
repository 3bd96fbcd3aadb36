//! Error types shared by the pattern modules.

use thiserror::Error;

/// Errors surfaced while compiling a registered step pattern.
///
/// # Examples
/// ```
/// use stepwise_patterns::{PatternError, compile_step_regex};
///
/// let Err(err) = compile_step_regex("^broken (group$") else {
///     panic!("unbalanced group should not compile");
/// };
/// assert!(matches!(err, PatternError::Regex { .. }));
/// assert!(err.to_string().starts_with("invalid step pattern `^broken (group$`"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    #[error("invalid step pattern `{pattern}`: {source}")]
    Regex {
        /// Pattern text as supplied at registration.
        pattern: String,
        /// Underlying compilation failure.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Pattern text that failed to compile.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Regex { pattern, .. } => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_pattern_and_cause() {
        let err = PatternError::Regex {
            pattern: "^(a$".into(),
            source: regex::Error::Syntax("bad".into()),
        };
        assert_eq!(err.to_string(), "invalid step pattern `^(a$`: bad");
        assert_eq!(err.pattern(), "^(a$");
    }

    #[test]
    fn exposes_regex_error_as_source() {
        let err = PatternError::Regex {
            pattern: "x".into(),
            source: regex::Error::Syntax("bad".into()),
        };
        let source = std::error::Error::source(&err)
            .map(ToString::to_string)
            .unwrap_or_default();
        assert_eq!(source, "bad");
    }
}
