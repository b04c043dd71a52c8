//! Future job source and workload loading.
//!
//! A workload is a simulation configuration plus the ordered list of jobs
//! that will arrive. It can be parsed from the classic job-file text
//! format or generated from a seeded RNG.
//!
//! # Job File Format
//!
//! Whitespace-separated unsigned integers; layout does not matter:
//!
//! ```text
//! <LEVELS> <SLICE> <PULL_FREQ>
//! <priority> <time_required>
//! <priority> <time_required>
//! ...
//! ```
//!
//! ```
//! use mlfq_sim::workload::Workload;
//!
//! let workload = Workload::parse("10 15 2\n5 50\n7 100\n1 100\n").unwrap();
//! assert_eq!(workload.config.levels, 10);
//! assert_eq!(workload.jobs.len(), 3);
//! ```

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::{JobSpec, Ticks};
use crate::scheduler::{SimConfig, Simulation};
use crate::validation::validate_input;

/// Ordered sequence of jobs not yet admitted, drained front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FutureJobs {
    jobs: VecDeque<JobSpec>,
}

impl FutureJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that yields `specs` in order.
    pub fn from_specs(specs: impl IntoIterator<Item = JobSpec>) -> Self {
        specs.into_iter().collect()
    }

    /// Appends a job at the back (latest arrival).
    pub fn push(&mut self, spec: JobSpec) {
        self.jobs.push_back(spec);
    }

    /// Removes the next job to admit.
    pub fn pop_front(&mut self) -> Option<JobSpec> {
        self.jobs.pop_front()
    }

    /// The next job to admit.
    pub fn front(&self) -> Option<&JobSpec> {
        self.jobs.front()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobSpec> {
        self.jobs.iter()
    }
}

impl FromIterator<JobSpec> for FutureJobs {
    fn from_iter<I: IntoIterator<Item = JobSpec>>(iter: I) -> Self {
        Self {
            jobs: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<JobSpec>> for FutureJobs {
    fn from(jobs: Vec<JobSpec>) -> Self {
        Self { jobs: jobs.into() }
    }
}

/// Simulation parameters plus the jobs in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Queue levels, slice length, pull frequency.
    pub config: SimConfig,
    /// Jobs in arrival order.
    pub jobs: Vec<JobSpec>,
}

impl Workload {
    /// Creates a workload without validating it.
    pub fn new(config: SimConfig, jobs: Vec<JobSpec>) -> Self {
        Self { config, jobs }
    }

    /// Parses and validates the job-file text format.
    ///
    /// A trailing priority without a matching time is ignored, as a reader
    /// stopping at end of input would.
    ///
    /// # Errors
    /// - `Parse` for non-numeric tokens or a missing header.
    /// - `MalformedJob` for negative job fields, zero work, or a priority
    ///   outside the configured levels.
    /// - `Construction` for zero levels, slice, or pull frequency.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace().enumerate();
        let mut header = [0u64; 3];
        for (slot, name) in header.iter_mut().zip(["LEVELS", "SLICE", "PULL_FREQ"]) {
            let (index, token) = tokens
                .next()
                .ok_or_else(|| SchedError::parse(format!("Missing {name} in header")))?;
            *slot = parse_unsigned(index, token, name).map_err(|_| {
                SchedError::parse(format!("{name} must be an unsigned integer, got '{token}'"))
            })?;
        }
        let [levels, slice, pull_freq] = header;
        let levels = usize::try_from(levels)
            .map_err(|_| SchedError::parse(format!("LEVELS {levels} is too large")))?;
        let config = SimConfig::new(levels, slice, pull_freq);

        let mut jobs = Vec::new();
        while let Some((index, priority_token)) = tokens.next() {
            let Some((_, time_token)) = tokens.next() else {
                log::warn!("ignoring unpaired trailing token '{priority_token}'");
                break;
            };
            let job_no = jobs.len();
            let priority = parse_unsigned(index, priority_token, "priority")
                .map_err(|e| with_context(e, job_no))?;
            let time = parse_unsigned(index + 1, time_token, "time_required")
                .map_err(|e| with_context(e, job_no))?;
            jobs.push(JobSpec::new(priority as usize, time));
        }

        let workload = Self::new(config, jobs);
        validate_input(&workload.config, &workload.jobs).map_err(first_error)?;
        Ok(workload)
    }

    /// Generates `count` random jobs for `config`.
    ///
    /// Priorities are uniform over all levels, work is uniform over
    /// `1..=max_time`. Reproducible for a seeded `rng`.
    pub fn random<R: Rng>(config: SimConfig, count: usize, max_time: Ticks, rng: &mut R) -> Self {
        let levels = config.levels.max(1);
        let max_time = max_time.max(1);
        let jobs = (0..count)
            .map(|_| JobSpec::new(rng.random_range(0..levels), rng.random_range(1..=max_time)))
            .collect();
        Self::new(config, jobs)
    }

    /// The jobs as a future source.
    pub fn future_jobs(&self) -> FutureJobs {
        FutureJobs::from_specs(self.jobs.iter().copied())
    }

    /// Builds a validated simulation from this workload.
    pub fn into_simulation(self) -> Result<Simulation> {
        Simulation::new(self.config, self.future_jobs())
    }
}

fn parse_unsigned(index: usize, token: &str, field: &str) -> Result<u64> {
    match token.parse::<i64>() {
        Ok(value) if value < 0 => Err(SchedError::malformed_job(format!(
            "{field} must not be negative, got {value} (token {index})"
        ))),
        Ok(value) => Ok(value as u64),
        Err(_) => token.parse::<u64>().map_err(|_| {
            SchedError::parse(format!("Expected integer for {field}, got '{token}' (token {index})"))
        }),
    }
}

fn with_context(mut err: SchedError, job_no: usize) -> SchedError {
    err.message = format!("job {job_no}: {}", err.message);
    err
}

fn first_error(mut errors: Vec<SchedError>) -> SchedError {
    errors.swap_remove(0)
}
