use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// A raw log event as delivered by the application's log pipeline,
/// before tagging and severity coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLogEvent {
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stack_trace: String,
    pub level: String,
}

/// One captured log event plus its collapse bookkeeping.
///
/// Immutable after creation except for `repeat_count`, which collapse
/// merging increments and a projection rebuild resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub tag: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stack_trace: String,
    pub severity: Severity,
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
    pub timestamp: DateTime<Utc>,
}

fn default_repeat_count() -> u32 {
    1
}

impl LogEntry {
    /// Creates an entry with a repeat count of 1, stamped with the current time.
    pub fn new(
        tag: impl Into<String>,
        message: impl Into<String>,
        stack_trace: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            tag: tag.into(),
            message: message.into(),
            stack_trace: stack_trace.into(),
            severity,
            repeat_count: 1,
            timestamp: Utc::now(),
        }
    }

    /// Resets the repeat count back to 1.
    pub fn reset(&mut self) {
        self.repeat_count = 1;
    }

    /// The identity under which equivalent entries merge when collapsed.
    pub fn collapse_key(&self) -> CollapseKey {
        CollapseKey {
            tag: self.tag.clone(),
            message: self.message.clone(),
            severity: self.severity,
        }
    }
}

/// Identity of "equivalent" log entries for collapse merging.
///
/// Stack trace, repeat count, and timestamp are deliberately excluded:
/// two events with the same tag, message, and severity collapse into one
/// row even when their traces differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollapseKey {
    pub tag: String,
    pub message: String,
    pub severity: Severity,
}
