//! Run configuration for a [`Suite`](crate::Suite).
//!
//! The only setting today is `strict`, which turns non-passing scenarios
//! into a [`SuiteError`](crate::SuiteError). It can be set in code or read
//! from the `STEPWISE_STRICT` environment variable.

use std::env;
use thiserror::Error;

/// Environment variable consulted by [`SuiteConfig::from_env`].
pub const STRICT_ENV: &str = "STEPWISE_STRICT";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set to something other than a recognised boolean.
    #[error("invalid value '{value}' for {variable}, expected one of: 1, true, yes, on, 0, false, no, off")]
    InvalidValue {
        /// Name of the offending variable.
        variable: &'static str,
        /// Value as read from the environment.
        value: String,
    },
}

/// Settings applied to every feature a suite runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Report features with any non-passing scenario as an error.
    pub strict: bool,
}

impl SuiteConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `STEPWISE_STRICT` holds an
    /// unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a value is not a
    /// recognised boolean.
    ///
    /// # Examples
    /// ```
    /// use stepwise::SuiteConfig;
    ///
    /// let config = SuiteConfig::from_lookup(|_| Some("yes".into())).unwrap_or_default();
    /// assert!(config.strict);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict = lookup(STRICT_ENV)
            .map(|value| {
                parse_env_bool(&value).ok_or(ConfigError::InvalidValue {
                    variable: STRICT_ENV,
                    value,
                })
            })
            .transpose()?
            .unwrap_or(false);
        Ok(Self { strict })
    }

    /// Return a copy with `strict` set to `enabled`.
    #[must_use]
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }
}

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" | "on" | "ON" | "On" => Some(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "No" | "off" | "OFF" | "Off" => {
            Some(false)
        }
        _ => None,
    }
}
