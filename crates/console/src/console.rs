use std::collections::HashMap;

use overlog_model::{CollapseKey, LogEntry, Severity, SeverityCounts};

use crate::filters::SeverityFilter;

/// Callback invoked after every state-changing operation.
///
/// Receives the console so the display can re-read `visible()` and
/// `counts()` wholesale; no diffs are pushed.
pub type RefreshFn = Box<dyn FnMut(&LogConsole) + Send>;

/// Aggregates a stream of log events into a filtered/collapsed projection.
///
/// `history` retains every ingested event in order. `visible` and the
/// severity counts are always exactly what a from-scratch replay of
/// `history` under the current flags would produce: ingest applies one
/// incremental projection step, every flag change replays the whole
/// history instead of patching the projection in place.
pub struct LogConsole {
    history: Vec<LogEntry>,
    visible: Vec<LogEntry>,
    dedup: HashMap<CollapseKey, usize>,
    counts: SeverityCounts,
    filter: SeverityFilter,
    collapsed: bool,
    on_refresh: Option<RefreshFn>,
}

impl LogConsole {
    /// Creates a console with the default flags: not collapsed, all
    /// severities selected.
    pub fn new() -> Self {
        Self::with_flags(SeverityFilter::default(), false)
    }

    /// Creates a console with explicit initial flags.
    pub fn with_flags(filter: SeverityFilter, collapsed: bool) -> Self {
        Self {
            history: Vec::new(),
            visible: Vec::new(),
            dedup: HashMap::new(),
            counts: SeverityCounts::default(),
            filter,
            collapsed,
            on_refresh: None,
        }
    }

    /// Installs the display callback. The composition root wires this once
    /// at startup.
    pub fn set_on_refresh(&mut self, on_refresh: RefreshFn) {
        self.on_refresh = Some(on_refresh);
    }

    /// Ingests one raw log event.
    ///
    /// The event is retained in history unconditionally, projected under
    /// the current flags, and the display is notified. Never fails.
    pub fn ingest(
        &mut self,
        tag: impl Into<String>,
        message: impl Into<String>,
        stack_trace: impl Into<String>,
        severity: Severity,
    ) {
        let entry = LogEntry::new(tag, message, stack_trace, severity);
        self.history.push(entry.clone());
        self.project(entry);
        self.notify();
    }

    /// Sets collapse mode and replays the history.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        self.rebuild();
    }

    /// Sets the info filter flag and replays the history.
    pub fn set_info(&mut self, selected: bool) {
        self.filter.info = selected;
        self.rebuild();
    }

    /// Sets the warning filter flag and replays the history.
    pub fn set_warning(&mut self, selected: bool) {
        self.filter.warning = selected;
        self.rebuild();
    }

    /// Sets the error filter flag and replays the history.
    pub fn set_error(&mut self, selected: bool) {
        self.filter.error = selected;
        self.rebuild();
    }

    /// Discards the entire history and resets the projection.
    pub fn clear(&mut self) {
        self.history.clear();
        tracing::debug!("console cleared");
        self.rebuild();
    }

    /// Every event ever ingested, in arrival order.
    pub fn history(&self) -> &[LogEntry] {
        &self.history
    }

    /// The current projection, in display order.
    pub fn visible(&self) -> &[LogEntry] {
        &self.visible
    }

    /// Tallies of the projected entries per severity.
    pub fn counts(&self) -> SeverityCounts {
        self.counts
    }

    /// The current severity filter flags.
    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    /// Whether duplicate entries are merged into one row.
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// One incremental projection step.
    ///
    /// Counters and `visible` membership are gated on the same selection
    /// predicate; a collapsed duplicate only bumps the repeat count of its
    /// representative row.
    fn project(&mut self, entry: LogEntry) {
        if !self.collapsed {
            if self.filter.selected(entry.severity) {
                self.counts.bump(entry.severity);
                self.visible.push(entry);
            }
        } else {
            let key = entry.collapse_key();
            if let Some(&index) = self.dedup.get(&key) {
                self.visible[index].repeat_count += 1;
            } else if self.filter.selected(entry.severity) {
                self.counts.bump(entry.severity);
                self.dedup.insert(key, self.visible.len());
                self.visible.push(entry);
            }
        }
    }

    /// Replays the whole history under the current flags.
    ///
    /// Repeat counts are reset before the replay so collapse merging
    /// re-derives them from scratch.
    fn rebuild(&mut self) {
        self.counts.reset();
        self.visible.clear();
        self.dedup.clear();

        let mut history = std::mem::take(&mut self.history);
        for entry in &mut history {
            entry.reset();
            self.project(entry.clone());
        }
        self.history = history;

        tracing::debug!(
            history = self.history.len(),
            visible = self.visible.len(),
            collapsed = self.collapsed,
            "console rebuilt"
        );
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(mut on_refresh) = self.on_refresh.take() {
            on_refresh(self);
            self.on_refresh = Some(on_refresh);
        }
    }
}

impl Default for LogConsole {
    fn default() -> Self {
        Self::new()
    }
}
