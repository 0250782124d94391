use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Per-severity tallies of the projected entries.
///
/// A collapsed run of duplicates counts once, on its first occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    /// Increments the tally for one severity.
    pub fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Info => self.info += 1,
            Severity::Warning => self.warning += 1,
            Severity::Error => self.error += 1,
        }
    }

    /// The tally for one severity.
    pub fn get(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Sum across all severities.
    pub fn total(&self) -> u32 {
        self.info + self.warning + self.error
    }

    /// Zeroes every tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
