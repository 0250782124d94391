use overlog_model::Severity;
use serde::{Deserialize, Serialize};

/// Per-severity visibility flags.
///
/// Flags are independent: any subset of severities can be visible at once.
/// An entry is eligible for display iff the flag for its severity is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityFilter {
    #[serde(default = "default_on")]
    pub info: bool,
    #[serde(default = "default_on")]
    pub warning: bool,
    #[serde(default = "default_on")]
    pub error: bool,
}

fn default_on() -> bool {
    true
}

impl Default for SeverityFilter {
    /// All severities selected.
    fn default() -> Self {
        Self {
            info: true,
            warning: true,
            error: true,
        }
    }
}

impl SeverityFilter {
    /// Whether entries of this severity are currently selected.
    pub fn selected(&self, severity: Severity) -> bool {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Sets the flag for one severity.
    pub fn set(&mut self, severity: Severity, selected: bool) {
        match severity {
            Severity::Info => self.info = selected,
            Severity::Warning => self.warning = selected,
            Severity::Error => self.error = selected,
        }
    }
}
