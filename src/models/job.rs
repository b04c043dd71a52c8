//! Job descriptor model.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// A job waiting in the future source, not yet admitted.
///
/// Carries only what the input provides. Identity (pid) and timing
/// (start time) are assigned on admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Priority level the process starts at.
    pub initial_priority: usize,
    /// Total work units needed to finish.
    pub time_required: Ticks,
}

impl JobSpec {
    /// Creates a job descriptor.
    pub fn new(initial_priority: usize, time_required: Ticks) -> Self {
        Self {
            initial_priority,
            time_required,
        }
    }
}
