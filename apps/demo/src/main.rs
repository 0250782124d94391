//! overlog demo entry point.
//!
//! Wires the pieces together the way a host application would: a
//! dispatcher as the log source, a shared console as the aggregator, and
//! a terminal view as the display collaborator. A randomized generator
//! stands in for real application logging.

mod config;
mod view;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use overlog_capture::{ConsoleSink, LogDispatcher};
use overlog_console::LogConsole;
use overlog_model::RawLogEvent;
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting overlog demo");

    let config = config::Config::load(Path::new("overlog.toml"))?;
    tracing::info!(
        collapsed = config.collapsed,
        events = config.event_count,
        "configuration loaded"
    );

    let console = Arc::new(Mutex::new(LogConsole::with_flags(
        config.filter,
        config.collapsed,
    )));

    // The display callback; a real UI would re-render here. The demo just
    // tallies refreshes and renders snapshots at each phase below.
    let refreshes = Arc::new(AtomicUsize::new(0));
    {
        let seen = Arc::clone(&refreshes);
        console.lock().unwrap().set_on_refresh(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
    }

    let dispatcher = LogDispatcher::new();
    let _subscription = dispatcher.subscribe(Box::new(ConsoleSink::new(Arc::clone(&console))));

    publish_demo_events(&dispatcher, config.event_count);
    println!("all events:\n{}", view::render(&console.lock().unwrap()));

    console.lock().unwrap().set_collapsed(true);
    println!("collapsed:\n{}", view::render(&console.lock().unwrap()));

    {
        let mut console = console.lock().unwrap();
        console.set_info(false);
        console.set_warning(false);
    }
    println!("errors only:\n{}", view::render(&console.lock().unwrap()));

    console.lock().unwrap().clear();
    println!("cleared:\n{}", view::render(&console.lock().unwrap()));

    tracing::info!(
        refreshes = refreshes.load(Ordering::SeqCst),
        "demo finished"
    );
    Ok(())
}

/// Publishes a randomized mix of demo events.
///
/// Messages are drawn from a small pool so collapse mode has duplicates
/// to merge; levels use the raw spellings a host pipeline would deliver.
fn publish_demo_events(dispatcher: &LogDispatcher, count: u32) {
    const EVENTS: &[(&str, &str, &str)] = &[
        ("log", "asset bundle loaded", ""),
        ("log", "frame budget ok", ""),
        ("warn", "frame took 21ms", ""),
        ("warn", "texture fallback in use", ""),
        ("error", "shader compile failed", "at compile()\nat load()"),
        ("error", "null reference in spawner", "at spawn()\nat tick()"),
    ];

    let mut rng = rand::thread_rng();
    for _ in 0..count {
        let (level, message, stack_trace) = EVENTS[rng.gen_range(0..EVENTS.len())];
        dispatcher.publish(RawLogEvent {
            message: message.into(),
            stack_trace: stack_trace.into(),
            level: level.into(),
        });
    }
}
