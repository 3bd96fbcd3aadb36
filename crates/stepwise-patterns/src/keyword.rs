//! Shared step keyword type and parsing utilities.
//!
//! [`StepKeyword`] is used by the scanner to classify step lines, by the
//! registry to label definitions, and by snippet generation to pick the
//! registration method a stub should call.

use std::fmt;
use std::str::FromStr;

/// Keyword that introduces a Gherkin step.
///
/// Matching against the registry ignores the keyword; it is kept for
/// reporting and for rendering snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
}

impl StepKeyword {
    /// Every keyword, in the order the scanner alternation lists them.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::But, Self::And];

    /// Return the keyword as written in feature text.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepwise_patterns::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Return the name of the registry method that registers this keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepwise_patterns::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Then.method_name(), "then");
    /// ```
    #[must_use]
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
            Self::And => "and",
            Self::But => "but",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
///
/// Contains the unrecognised keyword text for diagnostic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kw| trimmed.eq_ignore_ascii_case(kw.as_str()))
            .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

impl TryFrom<&str> for StepKeyword {
    type Error = StepKeywordParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
    fn parse_kw(input: &str) -> StepKeyword {
        input
            .parse()
            .expect("test input should parse to a valid keyword")
    }

    #[rstest]
    #[case("Given", StepKeyword::Given)]
    #[case("given", StepKeyword::Given)]
    #[case(" WhEn ", StepKeyword::When)]
    #[case("THEN", StepKeyword::Then)]
    #[case("AND", StepKeyword::And)]
    #[case(" but ", StepKeyword::But)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: StepKeyword) {
        assert_eq!(parse_kw(input), expected);
    }

    #[test]
    fn rejects_invalid_keyword() {
        let Err(err) = "Asterisk".parse::<StepKeyword>() else {
            panic!("expected parse error for invalid keyword");
        };
        assert_eq!(err.0, "Asterisk");
        assert_eq!(err.to_string(), "invalid step keyword: Asterisk");
    }

    #[test]
    fn display_matches_feature_text() {
        for kw in StepKeyword::ALL {
            assert_eq!(kw.to_string(), kw.as_str());
            assert_eq!(kw.method_name(), kw.as_str().to_ascii_lowercase());
        }
    }
}
