//! Multilevel priority queue.
//!
//! Holds the ready population of processes in one FIFO bucket per
//! priority level and yields the most urgent one on demand. The queue also
//! owns the pid counter, so pids are strictly increasing per queue with no
//! global state.
//!
//! # Usage
//!
//! ```
//! use mlfq_sim::models::JobSpec;
//! use mlfq_sim::queue::MultilevelQueue;
//! use mlfq_sim::workload::FutureJobs;
//!
//! let mut queue = MultilevelQueue::new(4).unwrap();
//! let mut future: FutureJobs = vec![JobSpec::new(2, 30), JobSpec::new(1, 10)]
//!     .into_iter()
//!     .collect();
//!
//! queue.admit_from_future(&mut future, 0).unwrap();
//! queue.admit_from_future(&mut future, 5).unwrap();
//!
//! let next = queue.pop_highest_priority().unwrap();
//! assert_eq!(next.pid(), 1); // bucket 1 beats bucket 2
//! ```

mod order;

pub use order::PriorityOrder;

use std::collections::VecDeque;

use crate::error::{Result, SchedError};
use crate::models::{Pid, Process, Ticks};
use crate::workload::FutureJobs;

/// Fixed array of FIFO buckets indexed by priority level.
#[derive(Debug, Clone)]
pub struct MultilevelQueue {
    buckets: Vec<VecDeque<Process>>,
    order: PriorityOrder,
    next_pid: Pid,
}

impl MultilevelQueue {
    /// Creates a queue with `levels` buckets, bucket 0 most urgent.
    ///
    /// # Errors
    /// `Construction` if `levels` is zero.
    pub fn new(levels: usize) -> Result<Self> {
        Self::with_order(levels, PriorityOrder::default())
    }

    /// Creates a queue with `levels` buckets and an explicit ordering.
    pub fn with_order(levels: usize, order: PriorityOrder) -> Result<Self> {
        if levels == 0 {
            return Err(SchedError::construction(
                "Priority queue needs at least one level",
            ));
        }
        Ok(Self {
            buckets: (0..levels).map(|_| VecDeque::new()).collect(),
            order,
            next_pid: 0,
        })
    }

    /// Appends `process` to the bucket matching its current priority.
    ///
    /// # Errors
    /// `OutOfRange` if the priority has no bucket. The process is dropped.
    pub fn push(&mut self, process: Process) -> Result<()> {
        let levels = self.level_count();
        let bucket = self
            .buckets
            .get_mut(process.priority())
            .ok_or_else(|| SchedError::out_of_range(process.priority(), levels))?;
        bucket.push_back(process);
        Ok(())
    }

    /// Admits the front job of `source` at clock value `clock`.
    ///
    /// Assigns the next pid, sets the start time, resets priority and
    /// remaining work from the descriptor, and pushes the new process.
    ///
    /// # Errors
    /// - `EmptySource` if `source` has nothing to admit.
    /// - `OutOfRange` if the job's priority has no bucket. The job stays in
    ///   `source` and no pid is consumed.
    pub fn admit_from_future(&mut self, source: &mut FutureJobs, clock: Ticks) -> Result<Pid> {
        let spec = *source.front().ok_or_else(SchedError::empty_source)?;
        if spec.initial_priority >= self.level_count() {
            return Err(SchedError::out_of_range(
                spec.initial_priority,
                self.level_count(),
            ));
        }
        source.pop_front();

        let pid = self.next_pid;
        self.next_pid += 1;
        log::debug!(
            "admit pid={pid} priority={} work={} at t={clock}",
            spec.initial_priority,
            spec.time_required
        );
        self.push(Process::admit(pid, spec, clock))?;
        Ok(pid)
    }

    /// Removes and returns the front of the most urgent non-empty bucket.
    ///
    /// Returns `None`, with no side effects, when every bucket is empty.
    pub fn pop_highest_priority(&mut self) -> Option<Process> {
        let level = self
            .order
            .scan(self.level_count())
            .find(|&level| !self.buckets[level].is_empty())?;
        self.buckets[level].pop_front()
    }

    /// Returns the process that `pop_highest_priority` would yield.
    pub fn peek_highest_priority(&self) -> Option<&Process> {
        self.order
            .scan(self.level_count())
            .find_map(|level| self.buckets[level].front())
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(VecDeque::is_empty)
    }

    /// Number of priority levels, fixed at construction.
    pub fn level_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of queued processes.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).sum()
    }

    /// Number of processes queued at `level` (0 for unknown levels).
    pub fn level_len(&self, level: usize) -> usize {
        self.buckets.get(level).map_or(0, VecDeque::len)
    }

    pub fn order(&self) -> PriorityOrder {
        self.order
    }

    /// Pid the next admission will receive.
    pub fn next_pid(&self) -> Pid {
        self.next_pid
    }
}
