//! JSON writer for feature records.
//!
//! Status labels are lowercase and optional fields are omitted when empty,
//! so downstream tools can rely on a stable shape:
//!
//! ```json
//! {"features":[{"name":"…","status":"pending","scenarios":[
//!   {"name":"…","line":3,"status":"pending","message":"…","steps":[
//!     {"keyword":"Given","text":"…","line":4,"status":"pending","message":"…"}]}]}]}
//! ```

use std::io::Write;

use serde::Serialize;

use super::{FeatureRecord, ScenarioRecord, StepRecord};

#[derive(Serialize)]
struct JsonReport<'a> {
    features: Vec<JsonFeature<'a>>,
}

#[derive(Serialize)]
struct JsonFeature<'a> {
    name: &'a str,
    status: &'static str,
    scenarios: Vec<JsonScenario<'a>>,
}

#[derive(Serialize)]
struct JsonScenario<'a> {
    name: &'a str,
    line: usize,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    steps: Vec<JsonStep<'a>>,
}

#[derive(Serialize)]
struct JsonStep<'a> {
    keyword: &'static str,
    text: &'a str,
    line: usize,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<'a> From<&'a [FeatureRecord]> for JsonReport<'a> {
    fn from(records: &'a [FeatureRecord]) -> Self {
        let features = records.iter().map(JsonFeature::from).collect();
        Self { features }
    }
}

impl<'a> From<&'a FeatureRecord> for JsonFeature<'a> {
    fn from(record: &'a FeatureRecord) -> Self {
        Self {
            name: record.name(),
            status: record.status().label(),
            scenarios: record.scenarios().iter().map(JsonScenario::from).collect(),
        }
    }
}

impl<'a> From<&'a ScenarioRecord> for JsonScenario<'a> {
    fn from(record: &'a ScenarioRecord) -> Self {
        Self {
            name: record.name(),
            line: record.line(),
            status: record.status().label(),
            message: record.message(),
            steps: record.steps().iter().map(JsonStep::from).collect(),
        }
    }
}

impl<'a> From<&'a StepRecord> for JsonStep<'a> {
    fn from(record: &'a StepRecord) -> Self {
        Self {
            keyword: record.keyword().as_str(),
            text: record.description(),
            line: record.line(),
            status: record.status().label(),
            message: record.message(),
        }
    }
}

/// Serialize the provided feature records into the supplied writer.
///
/// # Examples
/// ```rust
/// use stepwise::{StepRegistry, Suite, reporting::json, scan_str};
///
/// let registry = StepRegistry::new();
/// let feature = scan_str("Feature: F\n  Scenario: S\n").unwrap_or_default();
/// let mut suite = Suite::new(&registry);
/// let _ = suite.test_feature(&feature);
///
/// let mut buffer = Vec::new();
/// json::write(&mut buffer, suite.records()).unwrap_or_default();
/// let output = String::from_utf8(buffer).unwrap_or_default();
/// assert!(output.contains("\"status\":\"passed\""));
/// ```
///
/// # Errors
/// Returns an error when serialization of the provided records fails.
pub fn write<W: Write>(writer: &mut W, records: &[FeatureRecord]) -> serde_json::Result<()> {
    serde_json::to_writer(writer, &JsonReport::from(records))
}

/// Produce a JSON string representation of the provided feature records.
///
/// # Errors
/// Returns an error when serializing the provided records fails.
pub fn to_string(records: &[FeatureRecord]) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport::from(records))
}
