//! Log event capture plumbing.
//!
//! The application publishes raw log events into a [`LogDispatcher`];
//! registered sinks receive them synchronously, on the publishing thread.
//! [`ConsoleSink`] is the bridge that coerces raw levels and feeds a
//! shared console.

mod bridge;
mod dispatcher;

pub use bridge::{ConsoleSink, DEFAULT_TAG};
pub use dispatcher::{LogDispatcher, LogSink, Subscription};
