//! Shared data structures for the bridge (no logic).

pub mod event_type;
pub mod outcome;
pub mod session_context;
pub mod sink_record;

pub use event_type::{LogEventType, RumEventCategory, WebEventType};
pub use outcome::{ConsumeOutcome, RejectReason};
pub use session_context::SessionContext;
pub use sink_record::{RawWebEvent, SinkRecord};
