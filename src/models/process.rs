//! Process record model.
//!
//! A process is an admitted job. It is moved, never shared, between a
//! queue bucket and the CPU slot until its remaining work reaches zero.

use serde::Serialize;

use super::{JobSpec, Pid, Ticks};

/// An admitted, schedulable unit of work.
///
/// `pid`, `initial_priority`, `time_required`, and `start_time` are fixed
/// at admission. `priority` and `time_left` change as the process runs.
///
/// Serialize-only: a process is created by admission, never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pid: Pid,
    initial_priority: usize,
    time_required: Ticks,
    start_time: Ticks,
    priority: usize,
    time_left: Ticks,
}

impl Process {
    /// Creates a fresh process from raw fields.
    ///
    /// Current priority starts at `initial_priority` and remaining work at
    /// `time_required`.
    pub fn new(
        pid: Pid,
        initial_priority: usize,
        time_required: Ticks,
        start_time: Ticks,
    ) -> Self {
        Self {
            pid,
            initial_priority,
            time_required,
            start_time,
            priority: initial_priority,
            time_left: time_required,
        }
    }

    /// Admits a job descriptor under `pid` at clock value `clock`.
    pub fn admit(pid: Pid, spec: JobSpec, clock: Ticks) -> Self {
        Self::new(pid, spec.initial_priority, spec.time_required, clock)
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn initial_priority(&self) -> usize {
        self.initial_priority
    }

    pub fn time_required(&self) -> Ticks {
        self.time_required
    }

    pub fn start_time(&self) -> Ticks {
        self.start_time
    }

    /// Current priority level (queue bucket index).
    pub fn priority(&self) -> usize {
        self.priority
    }

    /// Remaining work.
    pub fn time_left(&self) -> Ticks {
        self.time_left
    }

    /// Whether all required work has been done.
    pub fn is_finished(&self) -> bool {
        self.time_left == 0
    }

    /// Runs the process for at most `slice` ticks.
    ///
    /// Returns the ticks actually consumed: `slice`, or the remaining work
    /// if that is shorter.
    pub(crate) fn run_slice(&mut self, slice: Ticks) -> Ticks {
        let used = self.time_left.min(slice);
        self.time_left -= used;
        used
    }

    pub(crate) fn set_priority(&mut self, priority: usize) {
        self.priority = priority;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_copies_spec() {
        let p = Process::admit(7, JobSpec::new(3, 40), 90);
        assert_eq!(p.pid(), 7);
        assert_eq!(p.initial_priority(), 3);
        assert_eq!(p.priority(), 3);
        assert_eq!(p.time_required(), 40);
        assert_eq!(p.time_left(), 40);
        assert_eq!(p.start_time(), 90);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_run_full_slice() {
        let mut p = Process::new(0, 0, 40, 0);
        assert_eq!(p.run_slice(15), 15);
        assert_eq!(p.time_left(), 25);
    }

    #[test]
    fn test_partial_final_slice() {
        let mut p = Process::new(0, 0, 10, 0);
        assert_eq!(p.run_slice(15), 10);
        assert_eq!(p.time_left(), 0);
        assert!(p.is_finished());
    }

    #[test]
    fn test_exact_slice_finishes() {
        let mut p = Process::new(0, 0, 15, 0);
        assert_eq!(p.run_slice(15), 15);
        assert!(p.is_finished());
    }

    #[test]
    fn test_serializes_for_inspection() {
        let p = Process::new(2, 4, 30, 15);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["pid"], 2);
        assert_eq!(json["time_left"], 30);
    }

    #[test]
    fn test_set_priority_keeps_initial() {
        let mut p = Process::new(0, 5, 10, 0);
        p.set_priority(4);
        assert_eq!(p.priority(), 4);
        assert_eq!(p.initial_priority(), 5);
    }
}
