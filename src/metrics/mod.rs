//! Counters describing one run of the placement search.

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Mutable counters owned by the search engine while it runs.
#[derive(Debug, Default, Clone)]
pub struct SearchMetrics {
    iterations: u64,
    expanded_positioned: u64,
    expanded_unpositioned: u64,
    enqueued: u64,
    fallback_skips: u64,
    peak_open_set: u64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    pub fn record_positioned_expansion(&mut self) {
        self.expanded_positioned = self.expanded_positioned.saturating_add(1);
    }

    pub fn record_unpositioned_expansion(&mut self) {
        self.expanded_unpositioned = self.expanded_unpositioned.saturating_add(1);
    }

    pub fn record_enqueue(&mut self, open_set_len: usize) {
        self.enqueued = self.enqueued.saturating_add(1);
        self.peak_open_set = self.peak_open_set.max(open_set_len as u64);
    }

    pub fn record_fallback_skip(&mut self) {
        self.fallback_skips = self.fallback_skips.saturating_add(1);
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            iterations: self.iterations,
            expanded_positioned: self.expanded_positioned,
            expanded_unpositioned: self.expanded_unpositioned,
            enqueued: self.enqueued,
            fallback_skips: self.fallback_skips,
            peak_open_set: self.peak_open_set,
        }
    }
}

/// Immutable view of the counters after a search finishes.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub iterations: u64,
    pub expanded_positioned: u64,
    pub expanded_unpositioned: u64,
    pub enqueued: u64,
    pub fallback_skips: u64,
    pub peak_open_set: u64,
}

impl SearchSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "search_complete".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("iterations".to_string(), json!(self.iterations));
        map.insert(
            "expanded_positioned".to_string(),
            json!(self.expanded_positioned),
        );
        map.insert(
            "expanded_unpositioned".to_string(),
            json!(self.expanded_unpositioned),
        );
        map.insert("enqueued".to_string(), json!(self.enqueued));
        map.insert("fallback_skips".to_string(), json!(self.fallback_skips));
        map.insert("peak_open_set".to_string(), json!(self.peak_open_set));
        map
    }
}
