//! Simulation loop, configuration, completion sinks, and run KPIs.
//!
//! # Algorithm
//!
//! `Simulation` drives a single simulated CPU:
//!
//! 1. Every `pull_freq` slices, admit one job from the future source.
//! 2. Run the current process for at most one slice.
//! 3. Finished processes are reported; preempted ones age one level
//!    toward the most urgent bucket and are requeued.
//! 4. Dispatch the most urgent ready process.
//!
//! When the CPU is idle the clock jumps ahead to the next admission.
//!
//! # KPI
//!
//! `SimulationKpi` summarizes a run: makespan, turnaround, wait time,
//! and how far processes aged.
//!
//! # References
//!
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 8
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.6

mod config;
mod kpi;
mod simulation;
mod sink;

pub use config::SimConfig;
pub use kpi::SimulationKpi;
pub use simulation::{simulate, Simulation};
pub use sink::{CompletionSink, FnSink};
