//! SinkRecord: what the bridge hands to the output sink.

use serde_json::{Map, Value};

use crate::event_mapping::RemappedEvent;

/// A bridged payload forwarded without modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWebEvent {
    /// Envelope `eventType` the payload arrived with.
    pub event_type: String,
    /// The event body exactly as the web content sent it.
    pub payload: String,
}

/// One write to the output sink. Ownership moves to the sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkRecord {
    /// RUM event re-stamped into the native session.
    Rum(RemappedEvent),
    /// Web log event with corrected date and session tags.
    Log(Map<String, Value>),
    /// Unmodified payload (no native session yet, or forwarded internal log).
    Raw(RawWebEvent),
}

impl SinkRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rum(_) => "rum",
            Self::Log(_) => "log",
            Self::Raw(_) => "raw",
        }
    }

    pub fn as_rum(&self) -> Option<&RemappedEvent> {
        match self {
            Self::Rum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_log(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Log(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawWebEvent> {
        match self {
            Self::Raw(e) => Some(e),
            _ => None,
        }
    }
}
