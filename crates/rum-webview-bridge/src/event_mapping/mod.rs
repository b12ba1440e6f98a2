//! Event mapping: web RUM/log events → native-session records.
//!
//! - `offsets` — per-view server time offsets, FIFO-bounded
//! - `mapper` — identity substitution and date correction
//! - `rum_consumer` / `log_consumer` — per-family pipelines ending at the sink

pub(crate) mod delivery;
pub mod log_consumer;
pub mod mapper;
pub mod offsets;
pub mod rum_consumer;

pub use log_consumer::WebLogEventConsumer;
pub use mapper::{RemappedEvent, WebRumEventMapper};
pub use offsets::{TimeOffsetReconciler, ViewOffsetCache, MAX_VIEW_TIME_OFFSETS_RETAIN};
pub use rum_consumer::WebRumEventConsumer;
