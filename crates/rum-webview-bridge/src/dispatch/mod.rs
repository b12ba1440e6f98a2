//! Dispatch: classify a serialized bridge call and route it.
//!
//! - `envelope` — splits `{"eventType", "event"}` without re-encoding the body
//! - `web_event_consumer` — routes log tags and RUM categories to their consumers

pub mod envelope;
pub mod web_event_consumer;

pub use envelope::{WebEventEnvelope, EVENT_KEY, EVENT_TYPE_KEY};
pub use web_event_consumer::WebEventConsumer;
