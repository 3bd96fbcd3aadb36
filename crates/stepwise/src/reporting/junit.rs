//! JUnit XML writer for feature records.
//!
//! Each feature becomes a `<testsuite>` and each scenario a `<testcase>`
//! inside a single `<testsuites>` document. Failed scenarios carry a
//! `<failure>` child; pending and undefined scenarios are reported as
//! `<skipped>` with the reason as the message.

use std::fmt::{self, Write};

use super::{FeatureRecord, LineStatus};

/// Render the supplied feature records as a `JUnit` XML document.
///
/// # Examples
/// ```
/// use stepwise::{StepRegistry, Suite, reporting::junit, scan_str};
///
/// let registry = StepRegistry::new();
/// let feature = scan_str("Feature: F\n  Scenario: S\n    Given nothing\n").unwrap_or_default();
/// let mut suite = Suite::new(&registry);
/// let _ = suite.test_feature(&feature);
///
/// let mut output = String::new();
/// junit::write(&mut output, suite.records()).unwrap_or_default();
/// assert!(output.contains("<testsuite name=\"F\" tests=\"1\" failures=\"0\" skipped=\"1\">"));
/// ```
///
/// # Errors
/// Returns an error if writing to the provided formatter fails.
pub fn write<W: Write>(writer: &mut W, features: &[FeatureRecord]) -> fmt::Result {
    writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    writer.write_str("<testsuites>\n")?;
    for feature in features {
        write_suite(writer, feature)?;
    }
    writer.write_str("</testsuites>\n")
}

fn write_suite<W: Write>(writer: &mut W, feature: &FeatureRecord) -> fmt::Result {
    let scenarios = feature.scenarios();
    let count = |wanted: &[LineStatus]| {
        scenarios
            .iter()
            .filter(|scenario| wanted.contains(&scenario.status()))
            .count()
    };
    let failures = count(&[LineStatus::Failed]);
    let skipped = count(&[LineStatus::Pending, LineStatus::Undefined]);

    writer.write_str("  <testsuite name=\"")?;
    write_escaped(writer, feature.name())?;
    writeln!(
        writer,
        "\" tests=\"{}\" failures=\"{failures}\" skipped=\"{skipped}\">",
        scenarios.len()
    )?;
    for scenario in scenarios {
        writer.write_str("    <testcase name=\"")?;
        write_escaped(writer, scenario.name())?;
        writer.write_str("\" classname=\"")?;
        write_escaped(writer, scenario.feature_name())?;
        writer.write_char('"')?;
        let message = scenario.message().unwrap_or_default();
        match scenario.status() {
            LineStatus::Failed => {
                writer.write_str(">\n      <failure message=\"")?;
                write_escaped(writer, &message)?;
                writer.write_str("\" />\n    </testcase>\n")?;
            }
            LineStatus::Pending | LineStatus::Undefined => {
                writer.write_str(">\n      <skipped message=\"")?;
                write_escaped(writer, &message)?;
                writer.write_str("\" />\n    </testcase>\n")?;
            }
            LineStatus::Passed | LineStatus::Skipped => writer.write_str(" />\n")?,
        }
    }
    writer.write_str("  </testsuite>\n")
}

fn write_escaped<W: Write>(writer: &mut W, value: &str) -> fmt::Result {
    const INVALID_REPLACEMENT: &str = "&#xFFFD;";
    for character in value.chars() {
        if !is_valid_xml_character(character) {
            writer.write_str(INVALID_REPLACEMENT)?;
            continue;
        }
        match character {
            '&' => writer.write_str("&amp;")?,
            '<' => writer.write_str("&lt;")?,
            '>' => writer.write_str("&gt;")?,
            '"' => writer.write_str("&quot;")?,
            '\'' => writer.write_str("&apos;")?,
            '\n' => writer.write_str("&#10;")?,
            other => writer.write_char(other)?,
        }
    }
    Ok(())
}

fn is_valid_xml_character(character: char) -> bool {
    matches!(
        u32::from(character),
        0x09 | 0x0A | 0x0D
            | 0x20..=0xD7FF
            | 0xE000..=0xFFFD
            | 0x1_0000..=0x10_FFFF
    )
}
