fn main() {
    println!("Run `cargo test -p console-flow` to execute the console flow tests.");
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use overlog_capture::{ConsoleSink, LogDispatcher, Subscription};
    use overlog_console::LogConsole;
    use overlog_model::{RawLogEvent, Severity};

    /// Wires a dispatcher to a fresh shared console, the way the demo
    /// composition root does.
    fn wired_console() -> (LogDispatcher, Arc<Mutex<LogConsole>>, Subscription) {
        let console = Arc::new(Mutex::new(LogConsole::new()));
        let dispatcher = LogDispatcher::new();
        let subscription = dispatcher.subscribe(Box::new(ConsoleSink::new(Arc::clone(&console))));
        (dispatcher, console, subscription)
    }

    fn event(level: &str, message: &str) -> RawLogEvent {
        RawLogEvent {
            message: message.into(),
            stack_trace: String::new(),
            level: level.into(),
        }
    }

    #[test]
    fn one_event_per_severity_projects_in_order() {
        let (dispatcher, console, _sub) = wired_console();

        dispatcher.publish(event("log", "a"));
        dispatcher.publish(event("warn", "b"));
        dispatcher.publish(event("error", "c"));

        let console = console.lock().unwrap();
        let messages: Vec<&str> = console.visible().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
        assert_eq!(console.counts().info, 1);
        assert_eq!(console.counts().warning, 1);
        assert_eq!(console.counts().error, 1);
    }

    #[test]
    fn deselecting_warnings_hides_and_uncounts_them() {
        let (dispatcher, console, _sub) = wired_console();

        dispatcher.publish(event("log", "a"));
        dispatcher.publish(event("warn", "b"));
        dispatcher.publish(event("error", "c"));
        console.lock().unwrap().set_warning(false);

        let console = console.lock().unwrap();
        let messages: Vec<&str> = console.visible().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "c"]);
        assert_eq!(console.counts().info, 1);
        assert_eq!(console.counts().warning, 0);
        assert_eq!(console.counts().error, 1);
    }

    #[test]
    fn collapsed_repeats_merge_into_one_row() {
        let (dispatcher, console, _sub) = wired_console();

        console.lock().unwrap().set_collapsed(true);
        for _ in 0..3 {
            dispatcher.publish(event("error", "x"));
        }

        let console = console.lock().unwrap();
        assert_eq!(console.visible().len(), 1);
        assert_eq!(console.visible()[0].repeat_count, 3);
        assert_eq!(console.counts().error, 1);
    }

    #[test]
    fn history_counts_every_published_event() {
        let (dispatcher, console, _sub) = wired_console();

        {
            let mut console = console.lock().unwrap();
            console.set_collapsed(true);
            console.set_info(false);
        }
        for i in 0..10 {
            let level = if i % 2 == 0 { "log" } else { "error" };
            dispatcher.publish(event(level, "tick"));
        }

        let console = console.lock().unwrap();
        assert_eq!(console.history().len(), 10);
    }

    #[test]
    fn projection_is_a_pure_function_of_history_and_flags() {
        let (dispatcher, console, _sub) = wired_console();
        for i in 0..12 {
            let level = ["log", "warn", "error"][i % 3];
            dispatcher.publish(event(level, "repeated message"));
        }

        // Reach the same flag state along two different toggle paths and
        // compare the projections.
        let first = {
            let mut console = console.lock().unwrap();
            console.set_collapsed(true);
            console.set_info(false);
            console.set_info(true);
            (
                console.visible().to_vec(),
                console.counts(),
            )
        };
        let second = {
            let mut console = console.lock().unwrap();
            console.set_collapsed(false);
            console.set_info(false);
            console.set_collapsed(true);
            console.set_info(true);
            (
                console.visible().to_vec(),
                console.counts(),
            )
        };

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn unknown_levels_arrive_as_errors() {
        let (dispatcher, console, _sub) = wired_console();

        dispatcher.publish(event("assert", "invariant violated"));
        dispatcher.publish(event("exception", "unhandled"));

        let console = console.lock().unwrap();
        assert_eq!(console.counts().error, 2);
        assert!(console.visible().iter().all(|e| e.severity == Severity::Error));
    }

    #[test]
    fn dropping_the_subscription_stops_ingestion() {
        let (dispatcher, console, sub) = wired_console();

        dispatcher.publish(event("log", "before"));
        drop(sub);
        dispatcher.publish(event("log", "after"));

        let console = console.lock().unwrap();
        assert_eq!(console.history().len(), 1);
        assert_eq!(console.visible()[0].message, "before");
    }

    #[test]
    fn clear_then_publish_starts_fresh() {
        let (dispatcher, console, _sub) = wired_console();

        dispatcher.publish(event("error", "old"));
        console.lock().unwrap().clear();
        dispatcher.publish(event("log", "new"));

        let console = console.lock().unwrap();
        assert_eq!(console.history().len(), 1);
        assert_eq!(console.visible()[0].message, "new");
        assert_eq!(console.counts().info, 1);
        assert_eq!(console.counts().error, 0);
    }
}
