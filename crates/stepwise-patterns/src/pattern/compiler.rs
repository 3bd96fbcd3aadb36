//! Convert lexed step descriptions into anchored regular-expression sources.

use super::lexer::{Token, lex_description};

/// Capture group emitted in place of each quoted numeric literal.
const QUOTED_NUMBER_CAPTURE: &str = r#""([0-9+-]+)""#;

/// Build the anchored regular expression a generated stub registers for a
/// step description.
///
/// Regex metacharacters in the description are escaped. Quoted numeric
/// literals are replaced with a capture group so that one stub covers steps
/// that differ only in the numbers they mention.
///
/// # Examples
/// ```
/// use stepwise_patterns::build_snippet_regex;
///
/// assert_eq!(
///     build_snippet_regex("only one user-record should exist"),
///     "^only one user-record should exist$",
/// );
/// assert_eq!(
///     build_snippet_regex(r#"I have "3" cukes (fresh)"#),
///     r#"^I have "([0-9+-]+)" cukes \(fresh\)$"#,
/// );
/// ```
#[must_use]
pub fn build_snippet_regex(description: &str) -> String {
    let mut regex = String::with_capacity(description.len().saturating_mul(2) + 2);
    regex.push('^');

    for token in lex_description(description) {
        match token {
            Token::Literal(text) => push_escaped(&mut regex, text),
            Token::QuotedNumber => regex.push_str(QUOTED_NUMBER_CAPTURE),
        }
    }

    regex.push('$');
    regex
}

/// Escape characters that carry meaning outside a character class.
///
/// Unlike `regex::escape`, `-`, `#`, `&` and `~` are left as written.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case("I press the create button", "^I press the create button$")]
    #[case("a.b*c", r"^a\.b\*c$")]
    #[case("cost is $5 [approx]", r"^cost is \$5 \[approx\]$")]
    #[case(r#"I add "12" and "+3""#, r#"^I add "([0-9+-]+)" and "([0-9+-]+)"$"#)]
    #[case(r#"score "1.5""#, r#"^score "1\.5"$"#)]
    fn builds_expected_source(#[case] description: &str, #[case] expected: &str) {
        assert_eq!(build_snippet_regex(description), expected);
    }

    #[rstest]
    #[case("a (weird) step? with | pipes", "a (weird) step? with | pipes")]
    #[case(r#"I add "7" items"#, r#"I add "42" items"#)]
    fn generated_source_matches_step_text(#[case] description: &str, #[case] text: &str) {
        let Ok(re) = Regex::new(&build_snippet_regex(description)) else {
            panic!("generated source must compile for {description:?}");
        };
        assert!(re.is_match(text), "{} should match {text:?}", re.as_str());
    }
}
