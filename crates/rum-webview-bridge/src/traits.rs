//! Collaborator traits: the seams between the bridge and the native SDK.
//!
//! The bridge never reaches into global SDK state. The host injects:
//! - `IEventSink` — persistence writer that receives bridged records
//! - `ISessionContextProvider` — current native RUM session identity
//! - `IServerTimeProvider` — native estimate of server clock offset
//!
//! All three are called synchronously from whatever thread delivered the
//! bridge call, so implementations must be `Send + Sync` and must not block.

use std::sync::Arc;

use crate::errors::BridgeResult;
use crate::types::{SessionContext, SinkRecord};

/// Output sink for bridged events.
pub trait IEventSink: Send + Sync {
    /// Hand a record to persistence. The sink owns it afterwards.
    fn write(&self, record: SinkRecord) -> BridgeResult<()>;
}

/// Read-only view of the native RUM session.
pub trait ISessionContextProvider: Send + Sync {
    /// Consistent snapshot of the current session, or `None` before the
    /// native session starts.
    fn current(&self) -> Option<SessionContext>;
}

/// Native server-time offset estimate.
pub trait IServerTimeProvider: Send + Sync {
    /// Milliseconds to add to a local timestamp to express it in server time.
    /// Must be a fast local read; no network round-trip.
    fn server_offset_millis(&self) -> i64;
}

// ── Arc<T> blanket impls ──

impl<T: IEventSink + ?Sized> IEventSink for Arc<T> {
    fn write(&self, record: SinkRecord) -> BridgeResult<()> {
        (**self).write(record)
    }
}

impl<T: ISessionContextProvider + ?Sized> ISessionContextProvider for Arc<T> {
    fn current(&self) -> Option<SessionContext> {
        (**self).current()
    }
}

impl<T: IServerTimeProvider + ?Sized> IServerTimeProvider for Arc<T> {
    fn server_offset_millis(&self) -> i64 {
        (**self).server_offset_millis()
    }
}
