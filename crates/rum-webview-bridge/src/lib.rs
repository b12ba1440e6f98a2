//! # rum-webview-bridge
//!
//! Brings RUM events and logs produced inside embedded web views into the
//! native RUM session. Web content calls in with one serialized envelope at a
//! time; the bridge classifies it, re-attributes it to the native session and
//! corrects its clock, then hands the result to the host's persistence sink.
//!
//! ## Modules
//! - `config` — BridgeConfig, WebLogConfig, validation
//! - `dispatch` — envelope split, top-level category routing
//! - `errors` — BridgeError, RecoveryAction
//! - `event_mapping` — offset cache, reconciler, remapper, RUM and log consumers
//! - `health` — per-outcome counters
//! - `logging` — optional `tracing` subscriber setup
//! - `providers` — host-side session and clock holders
//! - `rum` — typed RUM event model and category parser
//! - `sink` — in-memory sink
//! - `traits` — IEventSink, ISessionContextProvider, IServerTimeProvider
//! - `types` — shared data structures (SessionContext, SinkRecord, ConsumeOutcome)

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod event_mapping;
pub mod health;
pub mod logging;
pub mod providers;
pub mod rum;
pub mod sink;
pub mod traits;
pub mod types;

pub use config::BridgeConfig;
pub use errors::{BridgeError, BridgeResult};
pub use types::ConsumeOutcome;

use std::sync::Arc;

use tracing::{info, warn};

use dispatch::WebEventConsumer;
use event_mapping::{TimeOffsetReconciler, WebLogEventConsumer, WebRumEventConsumer};
use health::{BridgeMetrics, BridgeMetricsSnapshot};
use traits::{IEventSink, IServerTimeProvider, ISessionContextProvider};

/// The bridge entry point exposed to web content.
///
/// One instance per web view integration. All methods take `&self` and may be
/// called concurrently from any thread.
pub struct WebViewEventBridge {
    config: BridgeConfig,
    consumer: WebEventConsumer,
    metrics: Arc<BridgeMetrics>,
}

impl WebViewEventBridge {
    /// Build a bridge over the host's collaborators. Fails if `config` does not
    /// validate.
    pub fn new(
        config: BridgeConfig,
        sink: Arc<dyn IEventSink>,
        context_provider: Arc<dyn ISessionContextProvider>,
        time_provider: Arc<dyn IServerTimeProvider>,
    ) -> BridgeResult<Self> {
        config.validate()?;

        let metrics = Arc::new(BridgeMetrics::new());
        let rum_consumer = WebRumEventConsumer::with_capacity(
            Arc::clone(&sink),
            Arc::clone(&context_provider),
            Arc::clone(&time_provider),
            config.offset_cache_capacity,
            Arc::clone(&metrics),
        );
        let log_consumer = WebLogEventConsumer::new(
            sink,
            context_provider,
            time_provider,
            config.logs.clone(),
            Arc::clone(&metrics),
        );

        info!(
            allowed_hosts = config.allowed_hosts.len(),
            offset_cache_capacity = config.offset_cache_capacity,
            forward_internal_logs = config.logs.forward_internal_logs,
            "Web view event bridge initialized"
        );

        Ok(Self {
            config,
            consumer: WebEventConsumer::new(rum_consumer, log_consumer),
            metrics,
        })
    }

    /// Bridge-facing entry: fire and forget.
    pub fn send(&self, serialized: &str) {
        let _ = self.consume(serialized);
    }

    /// Same as `send`, but reports what happened to the event.
    pub fn consume(&self, serialized: &str) -> ConsumeOutcome {
        self.consumer.consume(serialized)
    }

    /// Allowed hosts as a JSON array string, for the web SDK's host check.
    pub fn allowed_hosts(&self) -> String {
        match serde_json::to_string(&self.config.allowed_hosts) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize allowed hosts, reporting none");
                "[]".to_string()
            }
        }
    }

    /// The validated configuration this bridge was built with.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Per-view offset state, shared by every RUM event this bridge handles.
    pub fn reconciler(&self) -> &TimeOffsetReconciler {
        self.consumer.rum_consumer().reconciler()
    }

    /// Point-in-time copy of the outcome counters. Safe to call while events
    /// are flowing; counters may advance between fields.
    pub fn metrics(&self) -> BridgeMetricsSnapshot {
        self.metrics.snapshot()
    }
}
