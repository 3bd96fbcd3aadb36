//! Unit tests for record rendering.

use super::*;
use crate::types::{Outcome, Step, StepKeyword};
use rstest::rstest;

fn step_record(keyword: StepKeyword, text: &str, status: LineStatus) -> StepRecord {
    StepRecord {
        keyword,
        description: text.into(),
        line: 0,
        status,
        message: None,
    }
}

fn scenario_record(name: &str, outcome: Outcome, steps: Vec<StepRecord>) -> ScenarioRecord {
    ScenarioRecord {
        feature_name: "Billing & <payments>".into(),
        name: name.into(),
        line: 2,
        outcome,
        steps,
    }
}

fn feature_record() -> FeatureRecord {
    FeatureRecord {
        name: "Billing & <payments>".into(),
        scenarios: vec![
            scenario_record(
                "pays \"invoice\"",
                Outcome::Success,
                vec![step_record(StepKeyword::Given, "an invoice", LineStatus::Passed)],
            ),
            scenario_record("rejects card", Outcome::Failure("card\ndeclined".into()), Vec::new()),
            scenario_record(
                "refunds",
                Outcome::NotImplemented(Step::new(StepKeyword::When, "I refund")),
                Vec::new(),
            ),
        ],
    }
}

#[rstest]
#[case(0, "Feature: F", "Feature: F")]
#[case(1, "Scenario: S", "  Scenario: S")]
#[case(2, "Given x", "    Given x")]
fn transcript_lines_indent_by_depth(#[case] depth: usize, #[case] text: &str, #[case] expected: &str) {
    let line = TranscriptLine {
        depth,
        text: text.into(),
        status: LineStatus::Passed,
    };
    assert_eq!(line.to_string(), expected);
}

#[test]
fn feature_status_is_most_severe_scenario() {
    assert_eq!(feature_record().status(), LineStatus::Failed);
    assert_eq!(FeatureRecord::default().status(), LineStatus::Passed);
}

#[test]
fn scenario_message_describes_outcome() {
    let record = feature_record();
    let messages: Vec<_> = record.scenarios().iter().map(ScenarioRecord::message).collect();
    assert_eq!(
        messages,
        [
            None,
            Some("card\ndeclined".to_string()),
            Some("Not Implemented: When I refund".to_string()),
        ]
    );
}

#[test]
fn junit_escapes_and_classifies_scenarios() {
    let mut output = String::new();
    junit::write(&mut output, &[feature_record()]).unwrap_or_else(|e| panic!("{e}"));
    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites>\n"));
    assert!(output.contains(
        "<testsuite name=\"Billing &amp; &lt;payments&gt;\" tests=\"3\" failures=\"1\" skipped=\"1\">"
    ));
    assert!(output.contains(
        "<testcase name=\"pays &quot;invoice&quot;\" classname=\"Billing &amp; &lt;payments&gt;\" />"
    ));
    assert!(output.contains("<failure message=\"card&#10;declined\" />"));
    assert!(output.contains("<skipped message=\"Not Implemented: When I refund\" />"));
    assert!(output.ends_with("  </testsuite>\n</testsuites>\n"));
}

#[test]
fn junit_replaces_invalid_xml_characters() {
    let feature = FeatureRecord {
        name: "bell\u{7}".into(),
        scenarios: Vec::new(),
    };
    let mut output = String::new();
    junit::write(&mut output, &[feature]).unwrap_or_else(|e| panic!("{e}"));
    assert!(output.contains("name=\"bell&#xFFFD;\""));
}

#[cfg(feature = "diagnostics")]
#[test]
fn json_report_uses_lowercase_labels_and_omits_empty_messages() {
    let json = json::to_string(&[feature_record()]).unwrap_or_else(|e| panic!("{e}"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{e}"));
    let feature = &value["features"][0];
    assert_eq!(feature["status"], "failed");
    assert_eq!(feature["scenarios"][0]["status"], "passed");
    assert!(feature["scenarios"][0].get("message").is_none());
    assert_eq!(feature["scenarios"][0]["steps"][0]["keyword"], "Given");
    assert_eq!(feature["scenarios"][1]["message"], "card\ndeclined");
    assert_eq!(feature["scenarios"][2]["status"], "undefined");
}
