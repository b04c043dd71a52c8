//! Simulation domain models.
//!
//! Provides the data types that flow through the simulator: job
//! descriptors waiting in the future source, admitted process records
//! moving between queue buckets and the CPU, and completion records
//! emitted when a process finishes.
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Not yet admitted | `JobSpec` | `FutureJobs` |
//! | Ready / running | `Process` | `MultilevelQueue` bucket or CPU slot |
//! | Finished | `CompletionRecord` | `CompletionSink` |

mod completion;
mod job;
mod process;

pub use completion::CompletionRecord;
pub use job::JobSpec;
pub use process::Process;

/// Process identifier, assigned at admission.
pub type Pid = u64;

/// Simulated clock ticks. The unit is arbitrary.
pub type Ticks = u64;
