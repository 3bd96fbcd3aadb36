//! Regex capture helpers shared by the registry and its tests.

use std::collections::HashMap;

use regex::Regex;

/// Extract the named capture groups when `text` matches `re`, returning `None`
/// otherwise.
///
/// Only named groups that participated in the match contribute an entry.
/// Unnamed groups and the implicit whole-match group are ignored, so step
/// actions look values up by the labels they declared in their pattern.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use stepwise_patterns::extract_named_captures;
/// let regex = Regex::new(r"^(?P<count>\d+) (?P<item>\w+)$")
///     .expect("example ensures fallible call succeeds");
/// let values = extract_named_captures(&regex, "42 cukes")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(values.get("count").map(String::as_str), Some("42"));
/// assert_eq!(values.get("item").map(String::as_str), Some("cukes"));
/// ```
///
/// ```
/// # use regex::Regex;
/// # use stepwise_patterns::extract_named_captures;
/// let regex = Regex::new(r"^(?P<n>\d+)$")
///     .expect("example ensures fallible call succeeds");
/// assert!(extract_named_captures(&regex, "nope").is_none());
/// ```
#[must_use]
pub fn extract_named_captures(re: &Regex, text: &str) -> Option<HashMap<String, String>> {
    let caps = re.captures(text)?;
    let values = re
        .capture_names()
        .flatten()
        .filter_map(|name| {
            caps.name(name)
                .map(|m| (name.to_string(), m.as_str().to_string()))
        })
        .collect();
    Some(values)
}
