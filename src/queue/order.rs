//! Priority-ordering convention.
//!
//! Which end of the bucket array counts as "most urgent" is a single
//! choice made here. The dispatcher scan and the aging step both derive
//! from it, so the two can never disagree.

use serde::{Deserialize, Serialize};

/// Which bucket index is the most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrder {
    /// Bucket 0 is most urgent; aging decrements toward 0.
    #[default]
    ZeroHighest,
    /// Bucket `levels - 1` is most urgent; aging increments toward it.
    ZeroLowest,
}

impl PriorityOrder {
    /// Bucket indices from most to least urgent.
    pub fn scan(self, levels: usize) -> Box<dyn Iterator<Item = usize>> {
        match self {
            PriorityOrder::ZeroHighest => Box::new(0..levels),
            PriorityOrder::ZeroLowest => Box::new((0..levels).rev()),
        }
    }

    /// The most urgent bucket index. `levels` must be non-zero.
    pub fn most_urgent(self, levels: usize) -> usize {
        match self {
            PriorityOrder::ZeroHighest => 0,
            PriorityOrder::ZeroLowest => levels.saturating_sub(1),
        }
    }

    /// One aging step: moves `priority` one level toward the most urgent
    /// bucket, stopping there.
    pub fn age(self, priority: usize, levels: usize) -> usize {
        match self {
            PriorityOrder::ZeroHighest => priority.saturating_sub(1),
            PriorityOrder::ZeroLowest => (priority + 1).min(self.most_urgent(levels)),
        }
    }
}
