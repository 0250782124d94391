use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification of a log event, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Error from the strict severity parser.
#[derive(Debug, thiserror::Error)]
#[error("unknown severity: {0:?}")]
pub struct ParseSeverityError(String);

impl Severity {
    /// Maps an arbitrary level string onto a severity.
    ///
    /// Accepts the usual console level spellings; anything unrecognized
    /// (asserts, exceptions, engine-specific levels) maps to `Error`.
    pub fn from_level(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "info" | "log" => Self::Info,
            "warning" | "warn" => Self::Warning,
            _ => Self::Error,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Strict parser for configuration values: only the canonical
    /// lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(ParseSeverityError(other.to_owned())),
        }
    }
}
