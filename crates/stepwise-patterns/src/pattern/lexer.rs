//! Lexer splitting step descriptions into literal text and quoted numbers.

use regex::Regex;
use std::sync::LazyLock;

/// Quoted numeric literal such as `"42"` or `"-3"`.
static QUOTED_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safe: the pattern is a compile-time constant and is valid.
    Regex::new(r#""[0-9+-]+""#).unwrap_or_else(|_| unreachable!("quoted number regex is valid"))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Literal(&'a str),
    QuotedNumber,
}

pub(crate) fn lex_description(description: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    for found in QUOTED_NUMBER_RE.find_iter(description) {
        if let Some(text) = description.get(pos..found.start()).filter(|t| !t.is_empty()) {
            tokens.push(Token::Literal(text));
        }
        tokens.push(Token::QuotedNumber);
        pos = found.end();
    }

    if let Some(text) = description.get(pos..).filter(|t| !t.is_empty()) {
        tokens.push(Token::Literal(text));
    }

    tokens
}
