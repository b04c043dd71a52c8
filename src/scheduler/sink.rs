//! Completion sinks.
//!
//! The simulation hands each finished process to a sink and never looks
//! at it again. Formatting and storage are the sink's concern.

use crate::models::CompletionRecord;

/// Receives one record per finished process, in completion order.
pub trait CompletionSink {
    fn complete(&mut self, record: CompletionRecord);
}

impl CompletionSink for Vec<CompletionRecord> {
    fn complete(&mut self, record: CompletionRecord) {
        self.push(record);
    }
}

/// Adapts a closure into a sink.
///
/// ```
/// use mlfq_sim::scheduler::{CompletionSink, FnSink};
/// # use mlfq_sim::models::CompletionRecord;
///
/// let mut ends = Vec::new();
/// let mut sink = FnSink(|r: CompletionRecord| ends.push(r.end_time));
/// # sink.complete(CompletionRecord { pid: 0, initial_priority: 0, final_priority: 0,
/// #     time_required: 1, start_time: 0, end_time: 1 });
/// ```
#[derive(Debug)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(CompletionRecord)> CompletionSink for FnSink<F> {
    fn complete(&mut self, record: CompletionRecord) {
        (self.0)(record)
    }
}
