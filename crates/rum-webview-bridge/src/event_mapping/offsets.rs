//! Per-view server time offsets with insertion-ordered eviction.
//!
//! Every event of a web view must be shifted by the same offset, even if the
//! native clock sync moves in between. The first event of a view fixes its
//! offset; it is reused until the view is evicted. Only the last
//! `capacity` views (default 3) are retained, oldest *inserted* first out.
//! Lookups do not refresh an entry: this is FIFO, not LRU.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::errors::{BridgeError, BridgeResult};
use crate::traits::IServerTimeProvider;

/// Default number of web view offsets retained.
pub const MAX_VIEW_TIME_OFFSETS_RETAIN: usize = 3;

#[derive(Default)]
struct OffsetEntries {
    /// View ids, oldest insertion at the front.
    order: VecDeque<String>,
    offsets: HashMap<String, i64>,
}

/// Bounded view id → offset map. All access goes through one lock.
pub struct ViewOffsetCache {
    entries: Mutex<OffsetEntries>,
    capacity: usize,
}

impl ViewOffsetCache {
    /// Create a cache retaining the default 3 views.
    pub fn new() -> Self {
        Self::with_capacity(MAX_VIEW_TIME_OFFSETS_RETAIN)
    }

    /// Create a cache with a custom bound. A zero bound is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(OffsetEntries::default()),
            capacity: capacity.max(1),
        }
    }

    /// Return the cached offset for `view_id`, or compute, insert and return
    /// it. Lookup, insert and eviction happen under a single lock, so
    /// `compute` runs at most once per resident view id.
    ///
    /// A panicking `compute` yields `OffsetUnavailable` and inserts nothing;
    /// the cache stays usable for later views.
    pub fn offset_for<F>(&self, view_id: &str, compute: F) -> BridgeResult<i64>
    where
        F: FnOnce() -> i64,
    {
        let mut entries = self.entries();

        if let Some(offset) = entries.offsets.get(view_id) {
            return Ok(*offset);
        }

        let offset = std::panic::catch_unwind(std::panic::AssertUnwindSafe(compute)).map_err(|_| {
            BridgeError::OffsetUnavailable {
                reason: format!("time provider panicked computing offset for view {}", view_id),
            }
        })?;
        entries.offsets.insert(view_id.to_string(), offset);
        entries.order.push_back(view_id.to_string());

        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.offsets.remove(&oldest);
                debug!(view_id = %oldest, "Evicted web view time offset");
            }
        }

        Ok(offset)
    }

    /// Cached offset for `view_id`, without computing one.
    pub fn get(&self, view_id: &str) -> Option<i64> {
        self.entries().offsets.get(view_id).copied()
    }

    /// Whether `view_id` currently has a resident offset.
    pub fn contains(&self, view_id: &str) -> bool {
        self.get(view_id).is_some()
    }

    /// Resident view ids, oldest insertion first.
    pub fn view_ids(&self) -> Vec<String> {
        self.entries().order.iter().cloned().collect()
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.entries().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Entries are only mutated after `compute` returns, so a poisoned guard
    // still holds a consistent queue and map.
    fn entries(&self) -> MutexGuard<'_, OffsetEntries> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Offset cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for ViewOffsetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the offset for a web view against the native time provider.
pub struct TimeOffsetReconciler {
    cache: ViewOffsetCache,
    time_provider: Arc<dyn IServerTimeProvider>,
}

impl TimeOffsetReconciler {
    pub fn new(time_provider: Arc<dyn IServerTimeProvider>) -> Self {
        Self::with_capacity(time_provider, MAX_VIEW_TIME_OFFSETS_RETAIN)
    }

    pub fn with_capacity(time_provider: Arc<dyn IServerTimeProvider>, capacity: usize) -> Self {
        Self {
            cache: ViewOffsetCache::with_capacity(capacity),
            time_provider,
        }
    }

    /// Stable offset for every event of `view_id` while it stays resident.
    pub fn offset_for(&self, view_id: &str) -> BridgeResult<i64> {
        self.cache
            .offset_for(view_id, || self.time_provider.server_offset_millis())
    }

    /// Current offset from the provider, bypassing the per-view cache.
    pub fn current_offset(&self) -> i64 {
        self.time_provider.server_offset_millis()
    }

    pub fn cache(&self) -> &ViewOffsetCache {
        &self.cache
    }
}
