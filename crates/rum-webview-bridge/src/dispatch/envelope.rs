//! The bridge envelope: `{"eventType": "<tag>", "event": { ... }}`.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::errors::{BridgeError, BridgeResult};

pub const EVENT_TYPE_KEY: &str = "eventType";
pub const EVENT_KEY: &str = "event";

#[derive(Deserialize)]
struct Envelope<'a> {
    #[serde(rename = "eventType", default)]
    event_type: Option<String>,
    #[serde(borrow, default)]
    event: Option<&'a RawValue>,
}

/// An envelope split into its tag and the untouched body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebEventEnvelope<'a> {
    pub event_type: String,
    /// Exact bytes of the `event` member, borrowed from the input.
    pub body: &'a str,
}

impl<'a> WebEventEnvelope<'a> {
    pub fn parse(serialized: &'a str) -> BridgeResult<Self> {
        let envelope: Envelope<'a> = serde_json::from_str(serialized)
            .map_err(|e| BridgeError::parse_failure("envelope", e))?;

        let event_type = envelope.event_type.ok_or_else(|| BridgeError::InvalidEnvelope {
            reason: format!("missing `{}`", EVENT_TYPE_KEY),
        })?;
        let body = envelope.event.map(RawValue::get).ok_or_else(|| BridgeError::InvalidEnvelope {
            reason: format!("missing `{}`", EVENT_KEY),
        })?;

        Ok(Self { event_type, body })
    }

    /// Every known event family carries a JSON object body. Checked after the
    /// tag is classified so unknown tags are reported as such.
    pub fn ensure_object_body(&self) -> BridgeResult<()> {
        if self.body.starts_with('{') {
            Ok(())
        } else {
            Err(BridgeError::InvalidEnvelope {
                reason: format!("`{}` is not a JSON object", EVENT_KEY),
            })
        }
    }
}
