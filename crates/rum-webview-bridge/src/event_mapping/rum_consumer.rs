//! WebRumEventConsumer: parse → reconcile → remap → write, or pass through.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::RecoveryAction;
use crate::health::BridgeMetrics;
use crate::providers::active_session;
use crate::rum::{self, ParsedRumEvent};
use crate::traits::{IEventSink, IServerTimeProvider, ISessionContextProvider};
use crate::types::{ConsumeOutcome, RawWebEvent, RumEventCategory, SinkRecord};

use super::delivery::{deliver, reject};
use super::mapper::WebRumEventMapper;
use super::offsets::{TimeOffsetReconciler, MAX_VIEW_TIME_OFFSETS_RETAIN};

/// Brings web RUM events into the native session.
pub struct WebRumEventConsumer {
    sink: Arc<dyn IEventSink>,
    context_provider: Arc<dyn ISessionContextProvider>,
    reconciler: TimeOffsetReconciler,
    mapper: WebRumEventMapper,
    metrics: Arc<BridgeMetrics>,
}

impl WebRumEventConsumer {
    pub fn new(
        sink: Arc<dyn IEventSink>,
        context_provider: Arc<dyn ISessionContextProvider>,
        time_provider: Arc<dyn IServerTimeProvider>,
    ) -> Self {
        Self::with_capacity(
            sink,
            context_provider,
            time_provider,
            MAX_VIEW_TIME_OFFSETS_RETAIN,
            Arc::new(BridgeMetrics::new()),
        )
    }

    pub fn with_capacity(
        sink: Arc<dyn IEventSink>,
        context_provider: Arc<dyn ISessionContextProvider>,
        time_provider: Arc<dyn IServerTimeProvider>,
        offset_cache_capacity: usize,
        metrics: Arc<BridgeMetrics>,
    ) -> Self {
        Self {
            sink,
            context_provider,
            reconciler: TimeOffsetReconciler::with_capacity(time_provider, offset_cache_capacity),
            mapper: WebRumEventMapper::new(),
            metrics,
        }
    }

    /// Consume a RUM body tagged with a free-form category string.
    pub fn consume(&self, body: &str, event_type: &str) -> ConsumeOutcome {
        match rum::parse(body, event_type) {
            Ok(event) => self.route(event, body),
            Err(e) => reject(&self.metrics, event_type, e),
        }
    }

    /// Consume a RUM body whose category the dispatcher already resolved.
    pub fn consume_category(&self, body: &str, category: RumEventCategory) -> ConsumeOutcome {
        match rum::parse_category(body, category) {
            Ok(event) => self.route(event, body),
            Err(e) => reject(&self.metrics, category.as_str(), e),
        }
    }

    fn route(&self, event: ParsedRumEvent, body: &str) -> ConsumeOutcome {
        let event_type = event.category().as_str();

        let Some(ctx) = active_session(self.context_provider.as_ref()) else {
            debug!(event_type, "No active native RUM session, passing web event through");
            return self.pass_through(body, event_type);
        };

        let offset = match self.reconciler.offset_for(event.view_id()) {
            Ok(offset) => offset,
            Err(e) => {
                warn!(
                    event_type,
                    view_id = event.view_id(),
                    error = %e,
                    action = %RecoveryAction::for_error(&e),
                    "Could not resolve web view time offset"
                );
                return self.pass_through(body, event_type);
            }
        };

        let remapped = self.mapper.map(event, &ctx, offset);
        deliver(
            self.sink.as_ref(),
            &self.metrics,
            SinkRecord::Rum(remapped),
            event_type,
            ConsumeOutcome::Written,
        )
    }

    fn pass_through(&self, body: &str, event_type: &str) -> ConsumeOutcome {
        let raw = RawWebEvent {
            event_type: event_type.to_string(),
            payload: body.to_string(),
        };
        deliver(
            self.sink.as_ref(),
            &self.metrics,
            SinkRecord::Raw(raw),
            event_type,
            ConsumeOutcome::PassedThrough,
        )
    }

    pub fn reconciler(&self) -> &TimeOffsetReconciler {
        &self.reconciler
    }

    pub fn metrics(&self) -> &BridgeMetrics {
        &self.metrics
    }
}
