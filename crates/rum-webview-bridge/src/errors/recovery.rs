//! RecoveryAction enum: what to do with an event when a bridge step fails.

use std::fmt;

use super::BridgeError;

/// Recommended recovery action for a failed bridge step.
///
/// Nothing here is ever surfaced to the web content: the bridge call has no
/// return channel, so every action is local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Drop the event and emit a diagnostic. Later events are unaffected.
    Drop,
    /// Forward the payload to the sink unmodified, as if no session existed.
    Passthrough,
    /// Must be fixed by the embedding application (bad configuration).
    Escalate,
    /// Count it and move on; the event already left the bridge.
    Ignore,
}

impl RecoveryAction {
    /// Determine the recommended recovery action for a BridgeError.
    pub fn for_error(error: &BridgeError) -> Self {
        match error {
            // Untrusted input: drop
            BridgeError::UnknownTopLevelCategory { .. } => Self::Drop,
            BridgeError::UnknownRumSubCategory { .. } => Self::Drop,
            BridgeError::StructuralParseFailure { .. } => Self::Drop,
            BridgeError::InvalidEnvelope { .. } => Self::Drop,
            BridgeError::Serialization(_) => Self::Drop,

            // No usable time base: behave as if the session is not ready yet
            BridgeError::OffsetUnavailable { .. } => Self::Passthrough,

            // Sink owns the event after write; only count the failure
            BridgeError::SinkWriteFailed { .. } => Self::Ignore,

            BridgeError::Config(_) => Self::Escalate,
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => write!(f, "Drop"),
            Self::Passthrough => write!(f, "Passthrough"),
            Self::Escalate => write!(f, "Escalate"),
            Self::Ignore => write!(f, "Ignore"),
        }
    }
}
