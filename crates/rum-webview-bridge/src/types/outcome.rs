//! ConsumeOutcome: terminal state of one bridged event.

use crate::errors::BridgeError;

/// Why an event was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnknownTopLevelCategory,
    UnknownRumSubCategory,
    StructuralParseFailure,
}

impl RejectReason {
    pub fn from_error(error: &BridgeError) -> Self {
        match error {
            BridgeError::UnknownTopLevelCategory { .. } => Self::UnknownTopLevelCategory,
            BridgeError::UnknownRumSubCategory { .. } => Self::UnknownRumSubCategory,
            _ => Self::StructuralParseFailure,
        }
    }
}

/// Where a bridged event ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// RUM event reconciled into the native session and written.
    Written,
    /// Web log event mapped and written.
    LogWritten,
    /// Written unmodified: no native session, or no usable offset.
    PassedThrough,
    /// Accepted but intentionally not forwarded (internal web SDK logs).
    Ignored,
    /// Dropped at the trust boundary.
    Rejected(RejectReason),
    /// Reached the sink, which refused it.
    SinkFailed,
}

impl ConsumeOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
