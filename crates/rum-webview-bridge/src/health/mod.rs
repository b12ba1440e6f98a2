//! Bridge health: event counters by terminal state.

pub mod metrics;

pub use metrics::{BridgeMetrics, BridgeMetricsSnapshot};
