//! Unit tests for step registration and lookup.

use super::*;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

#[fixture]
fn registry() -> StepRegistry {
    StepRegistry::new()
}

#[rstest]
fn first_registered_match_wins(mut registry: StepRegistry) {
    registry
        .given("^I have a cat$", |_| Err(StepError::pending("first")))
        .unwrap_or_else(|e| panic!("{e}"));
    registry
        .then("cat", |_| Err(StepError::failure("second")))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(
        registry.find("I have a cat", false),
        StepMatch::Executed(Err(StepError::pending("first")))
    );
}

#[rstest]
fn keyword_does_not_restrict_matching(mut registry: StepRegistry) {
    registry
        .when("^the door opens$", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        registry.find("the door opens", false),
        StepMatch::Executed(Ok(()))
    );
}

#[rstest]
fn patterns_are_not_anchored(mut registry: StepRegistry) {
    registry
        .given("cukes", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));
    assert!(registry.find("I have 3 cukes in my belly", false).is_match());
}

#[rstest]
#[expect(clippy::expect_used, reason = "test asserts the error path")]
fn invalid_pattern_is_rejected_and_not_stored(mut registry: StepRegistry) {
    let err = registry
        .given("^broken ( pattern$", |_| Ok(()))
        .expect_err("unbalanced group must not compile");
    assert_eq!(err.pattern(), "^broken ( pattern$");
    assert!(registry.is_empty());
    assert_eq!(registry.find("broken ( pattern", false), StepMatch::Unmatched);
}

#[rstest]
fn opted_out_match_does_not_run_action(mut registry: StepRegistry) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    registry
        .and("^it runs$", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(registry.find("it runs", true), StepMatch::OptedOut);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(registry.find("it runs", false), StepMatch::Executed(Ok(())));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn unmatched_text_is_reported_even_when_opted_out(registry: StepRegistry) {
    assert_eq!(registry.find("anything", true), StepMatch::Unmatched);
    assert_eq!(registry.find("anything", false), StepMatch::Unmatched);
}

#[rstest]
fn action_receives_named_captures(mut registry: StepRegistry) {
    registry
        .given(r"^(?P<who>\w+) has (\d+) (?P<what>\w+)$", |args| {
            assert_eq!(args.get("who"), Some("Alice"));
            assert_eq!(args.get("what"), Some("apples"));
            assert_eq!(args.len(), 2, "unnamed groups are omitted: {args:?}");
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        registry.find("Alice has 3 apples", false),
        StepMatch::Executed(Ok(()))
    );
}

#[rstest]
fn panicking_action_becomes_failure(mut registry: StepRegistry) {
    registry
        .but("^it explodes$", |_| panic!("kaboom"))
        .unwrap_or_else(|e| panic!("{e}"));
    let StepMatch::Executed(Err(StepError::Failure { reason })) =
        registry.find("it explodes", false)
    else {
        panic!("expected a failure");
    };
    assert_eq!(reason, "step panicked: kaboom");
}

#[rstest]
fn unused_tracks_matches_including_opt_outs(mut registry: StepRegistry) {
    registry
        .given("^one$", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));
    registry
        .given("^two$", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));
    registry
        .given("^three$", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));

    let _ = registry.find("one", false);
    let _ = registry.find("two", true);

    let unused: Vec<_> = registry.unused().map(StepDefinition::pattern).collect();
    assert_eq!(unused, ["^three$"]);
    assert_eq!(registry.len(), 3);
}

#[rstest]
fn definitions_keep_registration_order(mut registry: StepRegistry) {
    registry
        .then("^b$", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));
    registry
        .given("^a$", |_| Ok(()))
        .unwrap_or_else(|e| panic!("{e}"));
    let listed: Vec<_> = registry
        .definitions()
        .map(|d| (d.keyword(), d.pattern()))
        .collect();
    assert_eq!(
        listed,
        [(StepKeyword::Then, "^b$"), (StepKeyword::Given, "^a$")]
    );
}
