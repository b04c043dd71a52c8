//! Completion record model.

use serde::{Deserialize, Serialize};

use super::{Pid, Process, Ticks};

/// Report emitted once per finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Process identifier.
    pub pid: Pid,
    /// Priority at admission.
    pub initial_priority: usize,
    /// Priority when the last slice finished.
    pub final_priority: usize,
    /// Total work the process needed.
    pub time_required: Ticks,
    /// Clock value at admission.
    pub start_time: Ticks,
    /// Clock value when the last slice finished.
    pub end_time: Ticks,
}

impl CompletionRecord {
    /// Builds the record for a finished process at `end_time`.
    pub fn from_process(process: &Process, end_time: Ticks) -> Self {
        debug_assert!(process.is_finished(), "pid {} still has work", process.pid());
        Self {
            pid: process.pid(),
            initial_priority: process.initial_priority(),
            final_priority: process.priority(),
            time_required: process.time_required(),
            start_time: process.start_time(),
            end_time,
        }
    }

    /// Time from admission to completion.
    pub fn turnaround(&self) -> Ticks {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Time spent ready but not running.
    pub fn wait_time(&self) -> Ticks {
        self.turnaround().saturating_sub(self.time_required)
    }

    /// Number of levels the process moved while being preempted.
    pub fn priority_boost(&self) -> usize {
        self.initial_priority.abs_diff(self.final_priority)
    }
}
