//! Shared data types for the overlog console.
//!
//! Everything here is plain data: the capture layer produces it, the
//! console aggregates it, the display layer reads it.

pub mod counts;
pub mod entry;
pub mod severity;

pub use counts::SeverityCounts;
pub use entry::{CollapseKey, LogEntry, RawLogEvent};
pub use severity::{ParseSeverityError, Severity};
