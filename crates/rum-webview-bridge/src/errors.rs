//! Bridge error types (thiserror).

pub mod recovery;

pub use recovery::RecoveryAction;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown web event type: {event_type}")]
    UnknownTopLevelCategory { event_type: String },

    #[error("Unknown RUM event type: {category}")]
    UnknownRumSubCategory { category: String },

    #[error("Malformed {context} payload: {source}")]
    StructuralParseFailure {
        context: String,
        source: serde_json::Error,
    },

    #[error("Invalid bridge envelope: {reason}")]
    InvalidEnvelope { reason: String },

    #[error("Time offset unavailable: {reason}")]
    OffsetUnavailable { reason: String },

    #[error("Sink write failed: {reason}")]
    SinkWriteFailed { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// Wrap a serde failure raised while decoding a `context` payload.
    pub fn parse_failure(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::StructuralParseFailure {
            context: context.into(),
            source,
        }
    }

    /// Short, stable label used in diagnostics and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTopLevelCategory { .. } => "unknown_top_level_category",
            Self::UnknownRumSubCategory { .. } => "unknown_rum_sub_category",
            Self::StructuralParseFailure { .. } => "structural_parse_failure",
            Self::InvalidEnvelope { .. } => "invalid_envelope",
            Self::OffsetUnavailable { .. } => "offset_unavailable",
            Self::SinkWriteFailed { .. } => "sink_write_failed",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
