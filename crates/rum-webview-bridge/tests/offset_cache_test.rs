//! Property tests for the per-view offset cache.
//!
//! The cache must behave exactly like an insertion-ordered queue of at most
//! `capacity` view ids, and a resident view's offset must never change.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use proptest::prelude::*;

use rum_webview_bridge::event_mapping::{TimeOffsetReconciler, ViewOffsetCache};
use rum_webview_bridge::providers::ServerOffsetClock;

// =============================================================================
// Strategy helpers
// =============================================================================

fn view_id_strategy() -> impl Strategy<Value = String> {
    "[a-f]".prop_map(|s| format!("view-{s}"))
}

/// Insertion-ordered reference model.
struct FifoModel {
    order: VecDeque<String>,
    offsets: HashMap<String, i64>,
    capacity: usize,
}

impl FifoModel {
    fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::new(),
            offsets: HashMap::new(),
            capacity,
        }
    }

    fn offset_for(&mut self, view_id: &str, fresh: i64) -> i64 {
        if let Some(offset) = self.offsets.get(view_id) {
            return *offset;
        }
        self.order.push_back(view_id.to_string());
        self.offsets.insert(view_id.to_string(), fresh);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.offsets.remove(&oldest);
            }
        }
        fresh
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn offset_cache_matches_fifo_model(
        capacity in 1usize..5,
        ids in prop::collection::vec(view_id_strategy(), 0..40),
    ) {
        let cache = ViewOffsetCache::with_capacity(capacity);
        let mut model = FifoModel::new(capacity);

        for (step, id) in ids.iter().enumerate() {
            let fresh = step as i64 * 10;
            let got = cache.offset_for(id, || fresh).unwrap();
            let expected = model.offset_for(id, fresh);
            prop_assert_eq!(got, expected);
            prop_assert!(cache.len() <= capacity);
        }

        let expected_ids: Vec<String> = model.order.iter().cloned().collect();
        prop_assert_eq!(cache.view_ids(), expected_ids);
    }

    #[test]
    fn offset_cache_resident_offset_ignores_clock_moves(
        offsets in prop::collection::vec(-10_000i64..10_000, 1..20),
    ) {
        let clock = Arc::new(ServerOffsetClock::new(offsets[0]));
        let reconciler = TimeOffsetReconciler::new(clock.clone());
        let first = reconciler.offset_for("view-a").unwrap();

        for offset in &offsets {
            clock.set_offset_millis(*offset);
            prop_assert_eq!(reconciler.offset_for("view-a").unwrap(), first);
            prop_assert_eq!(reconciler.current_offset(), *offset);
        }
    }
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn offset_cache_zero_capacity_is_raised_to_one() {
    let cache = ViewOffsetCache::with_capacity(0);
    assert_eq!(cache.capacity(), 1);
    cache.offset_for("a", || 1).unwrap();
    cache.offset_for("b", || 2).unwrap();
    assert_eq!(cache.view_ids(), vec!["b"]);
}

#[test]
fn offset_cache_get_does_not_insert() {
    let cache = ViewOffsetCache::new();
    assert_eq!(cache.get("a"), None);
    assert!(cache.is_empty());
}

#[test]
fn offset_cache_empty_view_id_is_a_valid_key() {
    let cache = ViewOffsetCache::new();
    assert_eq!(cache.offset_for("", || 7).unwrap(), 7);
    assert_eq!(cache.offset_for("", || 8).unwrap(), 7);
}
