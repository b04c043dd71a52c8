//! Multilevel feedback queue (MLFQ) CPU-scheduling simulator.
//!
//! Simulates a single CPU serving a stream of jobs through a multilevel
//! priority queue. Jobs are admitted from a future source on a fixed
//! cadence, the most urgent ready process runs for at most one time slice,
//! and preempted processes age one level toward the most urgent bucket.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`JobSpec`, `Process`, `CompletionRecord`)
//! - **`queue`**: `MultilevelQueue` and the configurable `PriorityOrder`
//! - **`workload`**: Future job source, job-file loader, random workloads
//! - **`scheduler`**: `Simulation` loop, `SimConfig`, sinks, run KPIs
//! - **`report`**: CSV rendering of completion records
//! - **`validation`**: Input integrity checks (levels, slices, job ranges)
//!
//! # Determinism
//!
//! A run is a pure function of its configuration and job list. There is no
//! randomness or wall-clock access inside the loop; random workloads are
//! generated up front from a caller-supplied RNG.
//!
//! # Example
//!
//! ```
//! use mlfq_sim::models::JobSpec;
//! use mlfq_sim::scheduler::{simulate, SimConfig};
//!
//! let config = SimConfig::new(10, 15, 2);
//! let jobs = vec![JobSpec::new(5, 50), JobSpec::new(7, 100), JobSpec::new(1, 100)];
//!
//! let records = simulate(&config, jobs).unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].end_time, 50);
//! ```
//!
//! # References
//!
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 8
//! - Corbató et al. (1962), "An Experimental Time-Sharing System"

pub mod error;
pub mod models;
pub mod queue;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, Result, SchedError};
