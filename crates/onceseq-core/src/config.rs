//! Trace configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Emit events at all. A disabled config still counts pulls.
    pub enabled: bool,

    /// Label attached to every event so interleaved chains can be told apart.
    pub label: String,

    /// Stop emitting per-element events after this many pulls.
    pub max_events: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: "onceseq".to_string(),
            max_events: None,
        }
    }
}

impl TraceConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ONCESEQ_TRACE`: `0` or `false` disables events
    /// - `ONCESEQ_TRACE_LABEL`: event label
    /// - `ONCESEQ_TRACE_MAX_EVENTS`: per-element event cap
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ONCESEQ_TRACE") {
            match s.trim() {
                "0" | "false" => cfg.enabled = false,
                "1" | "true" => cfg.enabled = true,
                _ => {}
            }
        }

        if let Ok(s) = std::env::var("ONCESEQ_TRACE_LABEL") {
            cfg.label = s;
        }

        if let Ok(s) = std::env::var("ONCESEQ_TRACE_MAX_EVENTS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_events = Some(v);
            }
        }

        cfg
    }

    /// Whether the `pulled`-th element (0-based) should produce an event.
    pub fn should_emit(&self, pulled: usize) -> bool {
        self.enabled && self.max_events.map_or(true, |max| pulled < max)
    }
}
