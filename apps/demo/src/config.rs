//! Demo configuration.
//!
//! Loaded from `overlog.toml` in the working directory. Every field has a
//! default, so a missing file just runs with the stock settings.

use std::path::Path;

use overlog_console::SeverityFilter;
use serde::{Deserialize, Serialize};

/// Demo settings: initial console flags plus generator cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial severity filter flags.
    #[serde(default)]
    pub filter: SeverityFilter,

    /// Start with duplicate collapsing enabled.
    #[serde(default)]
    pub collapsed: bool,

    /// How many demo events to generate.
    #[serde(default = "default_event_count")]
    pub event_count: u32,
}

fn default_event_count() -> u32 {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: SeverityFilter::default(),
            collapsed: false,
            event_count: default_event_count(),
        }
    }
}

impl Config {
    /// Loads configuration from the given path, or returns defaults if the
    /// file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}
