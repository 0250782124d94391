use std::sync::{Arc, Mutex};

use overlog_console::LogConsole;
use overlog_model::{RawLogEvent, Severity};

use crate::dispatcher::LogSink;

/// Tag stamped on captured entries when none is configured.
pub const DEFAULT_TAG: &str = "console";

/// Bridges raw log events into a shared [`LogConsole`].
///
/// Maps the event's level string onto a severity (unknown levels coerce
/// to `Error`), stamps the configured tag, and ingests. The mutex keeps
/// ingestion serialized when the host raises events from more than one
/// thread.
pub struct ConsoleSink {
    console: Arc<Mutex<LogConsole>>,
    tag: String,
}

impl ConsoleSink {
    /// Creates a sink feeding the given console under [`DEFAULT_TAG`].
    pub fn new(console: Arc<Mutex<LogConsole>>) -> Self {
        Self::with_tag(console, DEFAULT_TAG)
    }

    /// Creates a sink with an explicit source tag.
    pub fn with_tag(console: Arc<Mutex<LogConsole>>, tag: impl Into<String>) -> Self {
        Self {
            console,
            tag: tag.into(),
        }
    }
}

impl LogSink for ConsoleSink {
    fn receive(&mut self, event: &RawLogEvent) {
        let severity = Severity::from_level(&event.level);
        let mut console = self.console.lock().unwrap();
        console.ingest(
            self.tag.as_str(),
            event.message.as_str(),
            event.stack_trace.as_str(),
            severity,
        );
    }
}
