use std::sync::{Arc, Mutex, Weak};

use overlog_model::RawLogEvent;

/// Receives raw log events published through a dispatcher.
///
/// Called synchronously on the publishing thread; implementations must
/// not block.
pub trait LogSink: Send {
    fn receive(&mut self, event: &RawLogEvent);
}

struct DispatcherState {
    sinks: Vec<(u64, Box<dyn LogSink>)>,
    next_id: u64,
}

/// Fans raw log events out to registered sinks.
///
/// Cheap to clone; clones share one sink registry. Delivery order is
/// registration order.
#[derive(Clone)]
pub struct LogDispatcher {
    inner: Arc<Mutex<DispatcherState>>,
}

impl LogDispatcher {
    /// Creates a dispatcher with no sinks.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DispatcherState {
                sinks: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Registers a sink and returns its subscription guard.
    ///
    /// The sink receives every event published while the guard is alive;
    /// dropping the guard unregisters it.
    pub fn subscribe(&self, sink: Box<dyn LogSink>) -> Subscription {
        let mut state = self.inner.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.sinks.push((id, sink));
        tracing::debug!(id, sinks = state.sinks.len(), "log sink registered");

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Delivers one event to every registered sink, in registration order.
    pub fn publish(&self, event: RawLogEvent) {
        let mut state = self.inner.lock().unwrap();
        for (_, sink) in &mut state.sinks {
            sink.receive(&event);
        }
    }

    /// Number of currently registered sinks.
    pub fn sink_count(&self) -> usize {
        self.inner.lock().unwrap().sinks.len()
    }
}

impl Default for LogDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a sink registered; dropping it unregisters the sink.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<DispatcherState>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut state) = inner.lock() {
                state.sinks.retain(|(id, _)| *id != self.id);
                tracing::debug!(id = self.id, "log sink unregistered");
            }
        }
    }
}
