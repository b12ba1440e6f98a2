//! Host-side implementations of the session and clock collaborators.
//!
//! The native RUM tracker pushes updates into these; the bridge only reads.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::traits::{IServerTimeProvider, ISessionContextProvider};
use crate::types::SessionContext;

/// Current session context as an atomically swapped snapshot.
///
/// Readers clone an `Arc` under a short read lock, so a context is never
/// observed half-updated.
#[derive(Debug, Default)]
pub struct SessionContextHolder {
    current: RwLock<Option<Arc<SessionContext>>>,
}

impl SessionContextHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(ctx: SessionContext) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(ctx))),
        }
    }

    /// Replace the current context.
    pub fn update(&self, ctx: SessionContext) {
        self.store(Some(Arc::new(ctx)));
    }

    /// Forget the current context (session ended).
    pub fn clear(&self) {
        self.store(None);
    }

    fn store(&self, value: Option<Arc<SessionContext>>) {
        match self.current.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => {
                warn!("Session context lock poisoned, overwriting");
                *poisoned.into_inner() = value;
            }
        }
    }
}

impl ISessionContextProvider for SessionContextHolder {
    fn current(&self) -> Option<SessionContext> {
        let snapshot = match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        snapshot.map(|ctx| (*ctx).clone())
    }
}

/// Server offset kept up to date by the native time sync.
#[derive(Debug, Default)]
pub struct ServerOffsetClock {
    offset_millis: AtomicI64,
}

impl ServerOffsetClock {
    pub fn new(offset_millis: i64) -> Self {
        Self {
            offset_millis: AtomicI64::new(offset_millis),
        }
    }

    pub fn set_offset_millis(&self, offset_millis: i64) {
        self.offset_millis.store(offset_millis, Ordering::Relaxed);
    }
}

impl IServerTimeProvider for ServerOffsetClock {
    fn server_offset_millis(&self) -> i64 {
        self.offset_millis.load(Ordering::Relaxed)
    }
}

/// Session context if the native SDK has a live session, `None` otherwise.
pub fn active_session(provider: &dyn ISessionContextProvider) -> Option<SessionContext> {
    provider.current().filter(SessionContext::is_active)
}
