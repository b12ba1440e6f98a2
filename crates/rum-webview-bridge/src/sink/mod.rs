//! In-memory `IEventSink`, for hosts that batch elsewhere and for tests.

use std::sync::Mutex;

use crate::errors::{BridgeError, BridgeResult};
use crate::traits::IEventSink;
use crate::types::SinkRecord;

/// Collects every written record in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    records: Mutex<Vec<SinkRecord>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Take everything written so far, leaving the sink empty.
    pub fn drain(&self) -> Vec<SinkRecord> {
        if let Ok(mut records) = self.records.lock() {
            std::mem::take(&mut *records)
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IEventSink for InMemoryEventSink {
    fn write(&self, record: SinkRecord) -> BridgeResult<()> {
        let mut records = self.records.lock().map_err(|e| BridgeError::SinkWriteFailed {
            reason: e.to_string(),
        })?;
        records.push(record);
        Ok(())
    }
}
