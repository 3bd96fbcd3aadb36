//! Tests for step pattern compilation and capture extraction.

#![expect(clippy::expect_used, reason = "test asserts conversion path")]

use stepwise_patterns::{
    PatternError, StepKeyword, build_snippet_regex, compile_step_regex, extract_named_captures,
};

#[test]
fn compile_step_regex_smoke_test() {
    let regex = compile_step_regex(r"^I have (?P<n>\d+) cukes$")
        .expect("pattern should compile into regex");
    assert!(regex.is_match("I have 12 cukes"));

    assert!(
        compile_step_regex("^broken (").is_err(),
        "malformed pattern should fail to compile"
    );
}

#[test]
fn compiles_and_extracts_named_values() {
    let regex = compile_step_regex(r"^(?P<who>\w+) has (?P<count>\d+) cukes$")
        .expect("pattern should compile");
    let captures =
        extract_named_captures(&regex, "alice has 12 cukes").expect("expected captures for step");
    assert_eq!(captures.get("who").map(String::as_str), Some("alice"));
    assert_eq!(captures.get("count").map(String::as_str), Some("12"));
}

#[test]
fn exposes_pattern_error_details() {
    let Err(err) = compile_step_regex("^[a-$") else {
        panic!("expected pattern error");
    };
    let PatternError::Regex { pattern, source } = err else {
        panic!("expected regex error");
    };
    assert_eq!(pattern, "^[a-$");
    assert!(!source.to_string().is_empty());
}

#[test]
fn snippet_regex_round_trips_through_the_compiler() {
    let source = build_snippet_regex(r#"I withdraw "20" from account (savings)"#);
    let regex = compile_step_regex(&source).expect("snippet regex should compile");
    assert!(regex.is_match(r#"I withdraw "150" from account (savings)"#));
    assert!(!regex.is_match(r#"I withdraw "twenty" from account (savings)"#));
}

#[test]
fn keywords_parse_from_feature_text() {
    for kw in StepKeyword::ALL {
        assert_eq!(kw.as_str().parse::<StepKeyword>().ok(), Some(kw));
    }
}
