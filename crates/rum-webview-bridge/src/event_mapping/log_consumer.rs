//! WebLogEventConsumer: forwards web logs with server-aligned dates and
//! native session tags.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::WebLogConfig;
use crate::errors::BridgeError;
use crate::health::BridgeMetrics;
use crate::providers::active_session;
use crate::traits::{IEventSink, IServerTimeProvider, ISessionContextProvider};
use crate::types::{ConsumeOutcome, LogEventType, RawWebEvent, SinkRecord};

use super::delivery::{deliver, reject};

pub const DDTAGS_KEY: &str = "ddtags";
pub const APPLICATION_ID_KEY: &str = "application_id";
pub const SESSION_ID_KEY: &str = "session_id";

#[derive(Deserialize)]
struct WebLogEvent {
    date: i64,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

pub struct WebLogEventConsumer {
    sink: Arc<dyn IEventSink>,
    context_provider: Arc<dyn ISessionContextProvider>,
    time_provider: Arc<dyn IServerTimeProvider>,
    config: WebLogConfig,
    metrics: Arc<BridgeMetrics>,
}

impl WebLogEventConsumer {
    pub fn new(
        sink: Arc<dyn IEventSink>,
        context_provider: Arc<dyn ISessionContextProvider>,
        time_provider: Arc<dyn IServerTimeProvider>,
        config: WebLogConfig,
        metrics: Arc<BridgeMetrics>,
    ) -> Self {
        Self {
            sink,
            context_provider,
            time_provider,
            config,
            metrics,
        }
    }

    pub fn consume(&self, body: &str, log_type: LogEventType) -> ConsumeOutcome {
        let event_type = log_type.as_str();
        match log_type {
            LogEventType::Internal if !self.config.forward_internal_logs => {
                debug!(event_type, "Ignoring internal web SDK log");
                self.metrics.record_ignored();
                ConsumeOutcome::Ignored
            }
            LogEventType::Internal => {
                let raw = RawWebEvent {
                    event_type: event_type.to_string(),
                    payload: body.to_string(),
                };
                deliver(
                    self.sink.as_ref(),
                    &self.metrics,
                    SinkRecord::Raw(raw),
                    event_type,
                    ConsumeOutcome::LogWritten,
                )
            }
            LogEventType::User => match serde_json::from_str::<WebLogEvent>(body) {
                Ok(event) => {
                    let mapped = self.map(event);
                    deliver(
                        self.sink.as_ref(),
                        &self.metrics,
                        SinkRecord::Log(mapped),
                        event_type,
                        ConsumeOutcome::LogWritten,
                    )
                }
                Err(e) => reject(&self.metrics, event_type, BridgeError::parse_failure(event_type, e)),
            },
        }
    }

    fn map(&self, event: WebLogEvent) -> Map<String, Value> {
        let WebLogEvent { date, mut attributes } = event;

        // Logs are not tied to a view, so the live offset is used.
        let corrected = date.saturating_add(self.time_provider.server_offset_millis());
        attributes.insert("date".to_string(), Value::from(corrected));

        self.add_tags(&mut attributes);

        if let Some(ctx) = active_session(self.context_provider.as_ref()) {
            attributes.insert(APPLICATION_ID_KEY.to_string(), Value::String(ctx.application_id));
            attributes.insert(SESSION_ID_KEY.to_string(), Value::String(ctx.session_id));
        }
        attributes
    }

    fn add_tags(&self, attributes: &mut Map<String, Value>) {
        let mut tags: Vec<String> = Vec::new();
        if let Some(existing) = attributes.get(DDTAGS_KEY).and_then(Value::as_str) {
            if !existing.is_empty() {
                tags.push(existing.to_string());
            }
        }
        if let Some(env) = &self.config.env {
            tags.push(format!("env:{}", env));
        }
        if let Some(version) = &self.config.version {
            tags.push(format!("version:{}", version));
        }
        if !tags.is_empty() {
            attributes.insert(DDTAGS_KEY.to_string(), Value::String(tags.join(",")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ServerOffsetClock, SessionContextHolder};
    use crate::sink::InMemoryEventSink;
    use crate::types::{RejectReason, SessionContext};
    use serde_json::json;

    fn make_consumer(
        config: WebLogConfig,
        session: Option<SessionContext>,
    ) -> (WebLogEventConsumer, Arc<InMemoryEventSink>) {
        let sink = Arc::new(InMemoryEventSink::new());
        let holder = Arc::new(match session {
            Some(ctx) => SessionContextHolder::with_context(ctx),
            None => SessionContextHolder::new(),
        });
        let consumer = WebLogEventConsumer::new(
            sink.clone(),
            holder,
            Arc::new(ServerOffsetClock::new(25)),
            config,
            Arc::new(BridgeMetrics::new()),
        );
        (consumer, sink)
    }

    #[test]
    fn test_user_log_corrected_and_tagged() {
        let config = WebLogConfig {
            env: Some("prod".to_string()),
            version: Some("1.2.3".to_string()),
            ..Default::default()
        };
        let (consumer, sink) = make_consumer(config, Some(SessionContext::new("app", "sess")));
        let body = json!({ "date": 100, "message": "hello", "ddtags": "source:browser" }).to_string();

        assert_eq!(consumer.consume(&body, LogEventType::User), ConsumeOutcome::LogWritten);
        let records = sink.records();
        let log = records[0].as_log().unwrap();
        assert_eq!(log["date"], 125);
        assert_eq!(log["message"], "hello");
        assert_eq!(log["ddtags"], "source:browser,env:prod,version:1.2.3");
        assert_eq!(log["application_id"], "app");
        assert_eq!(log["session_id"], "sess");
    }

    #[test]
    fn test_user_log_without_session_has_no_ids() {
        let (consumer, sink) = make_consumer(WebLogConfig::default(), None);
        let body = json!({ "date": 100, "message": "hi" }).to_string();
        consumer.consume(&body, LogEventType::User);
        let records = sink.records();
        let log = records[0].as_log().unwrap();
        assert!(log.get("application_id").is_none());
        assert!(log.get("ddtags").is_none());
    }

    #[test]
    fn test_malformed_log_rejected() {
        let (consumer, sink) = make_consumer(WebLogConfig::default(), None);
        let outcome = consumer.consume("{\"message\": \"no date\"}", LogEventType::User);
        assert_eq!(outcome, ConsumeOutcome::Rejected(RejectReason::StructuralParseFailure));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_internal_logs_ignored_unless_forwarded() {
        let (consumer, sink) = make_consumer(WebLogConfig::default(), None);
        assert_eq!(consumer.consume("{}", LogEventType::Internal), ConsumeOutcome::Ignored);
        assert!(sink.is_empty());

        let config = WebLogConfig {
            forward_internal_logs: true,
            ..Default::default()
        };
        let (consumer, sink) = make_consumer(config, None);
        assert_eq!(consumer.consume("{}", LogEventType::Internal), ConsumeOutcome::LogWritten);
        assert_eq!(sink.records()[0].as_raw().unwrap().payload, "{}");
    }
}
