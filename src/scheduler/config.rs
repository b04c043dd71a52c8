//! Simulation parameters.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Ticks;
use crate::queue::PriorityOrder;
use crate::validation::validate_config;

/// Parameters of a simulation run.
///
/// # Example
/// ```
/// use mlfq_sim::queue::PriorityOrder;
/// use mlfq_sim::scheduler::SimConfig;
///
/// let config = SimConfig::new(10, 15, 2).with_order(PriorityOrder::ZeroLowest);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of priority levels (queue buckets).
    pub levels: usize,
    /// Maximum ticks per dispatch.
    pub slice: Ticks,
    /// Slices between automatic admissions from the future source.
    pub pull_freq: u64,
    /// Which bucket index is most urgent.
    #[serde(default)]
    pub order: PriorityOrder,
}

impl SimConfig {
    /// Creates a configuration with the default ordering (bucket 0 most urgent).
    pub fn new(levels: usize, slice: Ticks, pull_freq: u64) -> Self {
        Self {
            levels,
            slice,
            pull_freq,
            order: PriorityOrder::default(),
        }
    }

    /// Sets the priority-ordering convention.
    pub fn with_order(mut self, order: PriorityOrder) -> Self {
        self.order = order;
        self
    }

    /// Checks that every parameter is positive.
    ///
    /// # Errors
    /// The first `Construction` error found.
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(|mut errors| errors.swap_remove(0))
    }

    /// Ticks between two forced admissions while the CPU is busy.
    ///
    /// `None` if the interval does not fit in [`Ticks`].
    pub fn admission_interval(&self) -> Option<Ticks> {
        self.pull_freq.checked_mul(self.slice)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(10, 15, 1)
    }
}
