//! Log console aggregation state.
//!
//! Owns the full history of captured log entries and maintains a
//! filtered/collapsed projection of it for display. Fed synchronously by
//! the capture layer, read wholesale by the display layer after each
//! refresh notification.

mod console;
mod filters;

pub use console::{LogConsole, RefreshFn};
pub use filters::SeverityFilter;
