//! WebEventConsumer: envelope → log or RUM consumer.

use tracing::trace;

use crate::event_mapping::delivery::reject;
use crate::event_mapping::{WebLogEventConsumer, WebRumEventConsumer};
use crate::health::BridgeMetrics;
use crate::types::{ConsumeOutcome, WebEventType};

use super::envelope::WebEventEnvelope;

/// Routes each serialized bridge call to the consumer for its family.
/// Stateless: every call is independent and one-shot.
pub struct WebEventConsumer {
    rum_consumer: WebRumEventConsumer,
    log_consumer: WebLogEventConsumer,
}

impl WebEventConsumer {
    pub fn new(rum_consumer: WebRumEventConsumer, log_consumer: WebLogEventConsumer) -> Self {
        Self {
            rum_consumer,
            log_consumer,
        }
    }

    pub fn consume(&self, serialized: &str) -> ConsumeOutcome {
        let envelope = match WebEventEnvelope::parse(serialized) {
            Ok(envelope) => envelope,
            Err(e) => return reject(self.metrics(), "envelope", e),
        };

        let event_type = match envelope.event_type.parse::<WebEventType>() {
            Ok(event_type) => event_type,
            Err(e) => return reject(self.metrics(), &envelope.event_type, e),
        };

        if let Err(e) = envelope.ensure_object_body() {
            return reject(self.metrics(), event_type.as_str(), e);
        }

        trace!(event_type = event_type.as_str(), "Classified bridged web event");
        match event_type {
            WebEventType::Log(log_type) => self.log_consumer.consume(envelope.body, log_type),
            WebEventType::Rum(category) => self.rum_consumer.consume_category(envelope.body, category),
        }
    }

    pub fn rum_consumer(&self) -> &WebRumEventConsumer {
        &self.rum_consumer
    }

    fn metrics(&self) -> &BridgeMetrics {
        self.rum_consumer.metrics()
    }
}
