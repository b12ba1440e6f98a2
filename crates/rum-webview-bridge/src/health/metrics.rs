//! Bridge counters, readable while events are flowing.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::errors::BridgeError;

/// Lock-free counters for every terminal state of a bridged event.
#[derive(Debug, Default)]
pub struct BridgeMetrics {
    rum_written: AtomicU64,
    logs_written: AtomicU64,
    passed_through: AtomicU64,
    ignored: AtomicU64,
    rejected_unknown_category: AtomicU64,
    rejected_malformed: AtomicU64,
    sink_failures: AtomicU64,
}

/// Point-in-time copy of [`BridgeMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BridgeMetricsSnapshot {
    pub rum_written: u64,
    pub logs_written: u64,
    pub passed_through: u64,
    pub ignored: u64,
    pub rejected_unknown_category: u64,
    pub rejected_malformed: u64,
    pub sink_failures: u64,
}

impl BridgeMetricsSnapshot {
    pub fn rejected(&self) -> u64 {
        self.rejected_unknown_category + self.rejected_malformed
    }
}

impl BridgeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rum_written(&self) {
        self.rum_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_log_written(&self) {
        self.logs_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_passthrough(&self) {
        self.passed_through.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ignored(&self) {
        self.ignored.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a rejected event under its reason.
    pub fn record_rejected(&self, error: &BridgeError) {
        match error {
            BridgeError::UnknownTopLevelCategory { .. }
            | BridgeError::UnknownRumSubCategory { .. } => {
                self.rejected_unknown_category.fetch_add(1, Ordering::Relaxed);
            }
            _ => {
                self.rejected_malformed.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Returns the running total, for log fields.
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn snapshot(&self) -> BridgeMetricsSnapshot {
        BridgeMetricsSnapshot {
            rum_written: self.rum_written.load(Ordering::Relaxed),
            logs_written: self.logs_written.load(Ordering::Relaxed),
            passed_through: self.passed_through.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
            rejected_unknown_category: self.rejected_unknown_category.load(Ordering::Relaxed),
            rejected_malformed: self.rejected_malformed.load(Ordering::Relaxed),
            sink_failures: self.sink_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_split_by_reason() {
        let metrics = BridgeMetrics::new();
        metrics.record_rejected(&BridgeError::UnknownTopLevelCategory {
            event_type: "x".to_string(),
        });
        metrics.record_rejected(&BridgeError::InvalidEnvelope {
            reason: "missing eventType".to_string(),
        });
        let snap = metrics.snapshot();
        assert_eq!(snap.rejected_unknown_category, 1);
        assert_eq!(snap.rejected_malformed, 1);
        assert_eq!(snap.rejected(), 2);
    }

    #[test]
    fn test_sink_failure_running_total() {
        let metrics = BridgeMetrics::new();
        assert_eq!(metrics.record_sink_failure(), 1);
        assert_eq!(metrics.record_sink_failure(), 2);
        assert_eq!(metrics.snapshot().sink_failures, 2);
    }
}
