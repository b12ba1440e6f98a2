//! Shared tail of every consumer: write to the sink, or drop with a diagnostic.

use tracing::{trace, warn};

use crate::errors::BridgeError;
use crate::health::BridgeMetrics;
use crate::traits::IEventSink;
use crate::types::{ConsumeOutcome, RejectReason, SinkRecord};

/// Write `record` and map the result to an outcome. Sink errors are counted
/// and logged, never propagated.
pub(crate) fn deliver(
    sink: &dyn IEventSink,
    metrics: &BridgeMetrics,
    record: SinkRecord,
    event_type: &str,
    on_success: ConsumeOutcome,
) -> ConsumeOutcome {
    let kind = record.kind();
    match sink.write(record) {
        Ok(()) => {
            match on_success {
                ConsumeOutcome::Written => metrics.record_rum_written(),
                ConsumeOutcome::LogWritten => metrics.record_log_written(),
                ConsumeOutcome::PassedThrough => metrics.record_passthrough(),
                _ => {}
            }
            trace!(event_type, record = kind, "Bridged web event written");
            on_success
        }
        Err(e) => {
            let total_failures = metrics.record_sink_failure();
            warn!(
                event_type,
                record = kind,
                error = %e,
                total_failures,
                "Sink refused bridged web event"
            );
            ConsumeOutcome::SinkFailed
        }
    }
}

/// Drop an event at the trust boundary.
pub(crate) fn reject(metrics: &BridgeMetrics, event_type: &str, error: BridgeError) -> ConsumeOutcome {
    metrics.record_rejected(&error);
    warn!(
        event_type,
        kind = error.kind(),
        error = %error,
        "Dropped bridged web event"
    );
    ConsumeOutcome::Rejected(RejectReason::from_error(&error))
}
