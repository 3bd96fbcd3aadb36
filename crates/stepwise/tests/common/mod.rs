//! Shared helpers for `stepwise` integration tests.

use std::sync::{Mutex, Once, PoisonError};

use stepwise::{StepError, StepRegistry};

/// Feature text with one scenario of five steps, two of them defined.
pub const MANAGE_USERS: &str = include_str!("../fixtures/manage_users.feature");

/// Registry defining the first two steps of [`MANAGE_USERS`] as pending.
///
/// # Panics
/// Panics if a pattern fails to compile.
#[must_use]
pub fn manage_users_registry() -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry
        .given(
            "^I'm successfully logged in as an admin in users pane$",
            |_| Err(StepError::pending("Not implemented")),
        )
        .unwrap_or_else(|e| panic!("{e}"));
    registry
        .and(
            "^I fill in a new developer named hacker with password changeme$",
            |_| Err(StepError::pending("Not implemented")),
        )
        .unwrap_or_else(|e| panic!("{e}"));
    registry
}

/// Logger that keeps every record it receives.
struct CapturingLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};
static INIT_LOGGER: Once = Once::new();

/// Install the capturing logger and clear anything it captured so far.
///
/// Tests reading captured logs must run `#[serial]`.
pub fn reset_logs() {
    INIT_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);
    });
    LOGGER
        .records
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Messages captured at `level` since the last [`reset_logs`].
#[must_use]
pub fn logs_at(level: log::Level) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message.clone())
        .collect()
}
