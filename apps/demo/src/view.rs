//! Plain-text rendering of the console projection.
//!
//! A stand-in for a real display layer: on refresh it re-reads the
//! visible entries and counts wholesale and renders them as lines.

use std::fmt::Write;

use overlog_console::LogConsole;

/// Renders the current projection as display lines.
pub fn render(console: &LogConsole) -> String {
    let counts = console.counts();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "-- info {} | warning {} | error {} | rows {} --",
        counts.info,
        counts.warning,
        counts.error,
        console.visible().len()
    );

    for entry in console.visible() {
        let _ = write!(out, "[{}] {}: {}", entry.severity, entry.tag, entry.message);
        if entry.repeat_count > 1 {
            let _ = write!(out, " (x{})", entry.repeat_count);
        }
        let _ = writeln!(out);
        if !entry.stack_trace.is_empty() {
            for line in entry.stack_trace.lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
    }
    out
}
