//! Multilevel feedback queue simulation loop.
//!
//! # Algorithm
//!
//! Start: admit one job at t=0 and dispatch it. Then repeat:
//!
//! 1. If `pull_freq` slices have passed and jobs remain, admit one and
//!    reset the slice counter; otherwise count this slice.
//! 2. Idle CPU: jump the clock to the next forced admission.
//! 3. Busy CPU: run the current process for `min(slice, time_left)` ticks.
//!    Report it if finished, otherwise age it one level and requeue.
//! 4. Dispatch the most urgent ready process.
//!
//! The run ends when the CPU is idle and both the future source and the
//! ready queue are empty.
//!
//! # Complexity
//! O(d * L) where d = number of dispatches, L = number of levels.

use crate::error::Result;
use crate::models::{CompletionRecord, JobSpec, Process, Ticks};
use crate::queue::MultilevelQueue;
use crate::validation::validate_input;
use crate::workload::FutureJobs;

use super::{CompletionSink, SimConfig};

/// A single-CPU MLFQ simulation.
///
/// Deterministic: the same configuration and jobs always produce the same
/// completion records in the same order.
///
/// # Example
///
/// ```
/// use mlfq_sim::models::{CompletionRecord, JobSpec};
/// use mlfq_sim::scheduler::{SimConfig, Simulation};
/// use mlfq_sim::workload::FutureJobs;
///
/// let jobs = FutureJobs::from_specs([JobSpec::new(0, 15)]);
/// let mut sim = Simulation::new(SimConfig::new(10, 15, 2), jobs).unwrap();
///
/// let mut records: Vec<CompletionRecord> = Vec::new();
/// sim.run(&mut records);
///
/// assert!(sim.is_finished());
/// assert_eq!(records[0].end_time, 15);
/// assert_eq!(records[0].final_priority, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    queue: MultilevelQueue,
    future: FutureJobs,
    current: Option<Process>,
    clock: Ticks,
    slice_count: u64,
    completed: usize,
}

impl Simulation {
    /// Validates the input, then admits and dispatches the first job at t=0.
    ///
    /// An empty job source gives a simulation that is already finished.
    ///
    /// # Errors
    /// - `Construction` for zero levels, slice, or pull frequency.
    /// - `MalformedJob` for a job with no work or an out-of-range priority.
    pub fn new(config: SimConfig, mut future: FutureJobs) -> Result<Self> {
        let specs: Vec<JobSpec> = future.iter().copied().collect();
        validate_input(&config, &specs).map_err(|mut errors| errors.swap_remove(0))?;

        let mut queue = MultilevelQueue::with_order(config.levels, config.order)?;
        let mut current = None;
        if !future.is_empty() {
            queue.admit_from_future(&mut future, 0)?;
            current = queue.pop_highest_priority();
        }

        Ok(Self {
            config,
            queue,
            future,
            current,
            clock: 0,
            slice_count: 0,
            completed: 0,
        })
    }

    /// Advances the simulation by one slice (or one idle jump).
    ///
    /// Returns `false` once the run has reached its terminal state; further
    /// calls are no-ops.
    pub fn step<S: CompletionSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.is_finished() {
            return false;
        }

        if self.slice_count == self.config.pull_freq && !self.future.is_empty() {
            self.admit_next();
            self.slice_count = 0;
        } else {
            self.slice_count += 1;
        }

        match self.current.take() {
            None => {
                // Bounded by `validate_input`, which checks the worst-case clock.
                let interval = self.config.admission_interval().unwrap_or(Ticks::MAX);
                let elapsed = self.slice_count.saturating_mul(self.config.slice);
                self.clock += interval.saturating_sub(elapsed);
                self.slice_count = self.config.pull_freq;
                log::trace!("cpu idle, clock -> {}", self.clock);
            }
            Some(mut process) => {
                self.clock += process.run_slice(self.config.slice);

                if process.is_finished() {
                    let record = CompletionRecord::from_process(&process, self.clock);
                    log::debug!(
                        "pid={} finished at t={} (priority {} -> {})",
                        record.pid,
                        record.end_time,
                        record.initial_priority,
                        record.final_priority
                    );
                    self.completed += 1;
                    sink.complete(record);
                } else {
                    let aged = self
                        .config
                        .order
                        .age(process.priority(), self.config.levels);
                    process.set_priority(aged);
                    log::trace!(
                        "pid={} preempted at t={} with {} left, requeued at level {aged}",
                        process.pid(),
                        self.clock,
                        process.time_left()
                    );
                    self.requeue(process);
                }
            }
        }

        self.current = self.queue.pop_highest_priority();
        if let Some(next) = &self.current {
            log::trace!(
                "dispatch pid={} level={} at t={}",
                next.pid(),
                next.priority(),
                self.clock
            );
        }

        !self.is_finished()
    }

    /// Runs to completion, reporting every finished process to `sink`.
    pub fn run<S: CompletionSink + ?Sized>(&mut self, sink: &mut S) {
        while self.step(sink) {}
        log::info!(
            "simulation finished: {} processes completed at t={}",
            self.completed,
            self.clock
        );
    }

    /// Whether the CPU is idle and no work remains anywhere.
    pub fn is_finished(&self) -> bool {
        self.current.is_none() && self.future.is_empty() && self.queue.is_empty()
    }

    /// Current simulated time.
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    /// Slices counted since the last forced admission.
    pub fn slice_count(&self) -> u64 {
        self.slice_count
    }

    /// The process that will run on the next step.
    pub fn current(&self) -> Option<&Process> {
        self.current.as_ref()
    }

    /// The ready queue.
    pub fn queue(&self) -> &MultilevelQueue {
        &self.queue
    }

    /// Number of jobs not yet admitted.
    pub fn pending(&self) -> usize {
        self.future.len()
    }

    /// Number of processes reported so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn admit_next(&mut self) {
        if let Err(err) = self.queue.admit_from_future(&mut self.future, self.clock) {
            // Unreachable for input accepted by `new`.
            log::error!("dropping job that failed admission: {err}");
            self.future.pop_front();
        }
    }

    fn requeue(&mut self, process: Process) {
        if let Err(err) = self.queue.push(process) {
            // Aging never leaves 0..levels.
            log::error!("dropping process that failed requeue: {err}");
        }
    }
}

/// Runs `jobs` under `config` and collects every completion record.
///
/// # Errors
/// Same as [`Simulation::new`].
pub fn simulate(
    config: &SimConfig,
    jobs: impl IntoIterator<Item = JobSpec>,
) -> Result<Vec<CompletionRecord>> {
    let mut sim = Simulation::new(*config, jobs.into_iter().collect())?;
    let mut records = Vec::new();
    sim.run(&mut records);
    Ok(records)
}
