//! Error type shared by the queue, loader, and simulation.
//!
//! Every error carries a machine-checkable [`ErrorKind`] and a
//! human-readable message. Input problems are detected once, at load or
//! construction time; a simulation built from validated input never fails.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SchedError>;

/// A scheduling error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid simulation parameters (zero levels, slice, or pull frequency).
    Construction,
    /// A job descriptor with zero/negative work or an out-of-range priority.
    MalformedJob,
    /// Push into a priority bucket that does not exist.
    ///
    /// Indicates an internal invariant violation, not bad user input.
    OutOfRange,
    /// Admission attempted from an empty future source.
    EmptySource,
    /// Job-file text that is not a list of integers.
    Parse,
}

impl SchedError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn construction(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Construction, message)
    }

    pub(crate) fn malformed_job(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedJob, message)
    }

    pub(crate) fn out_of_range(priority: usize, levels: usize) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("Priority {priority} outside of 0..{levels}"),
        )
    }

    pub(crate) fn empty_source() -> Self {
        Self::new(ErrorKind::EmptySource, "Future job source is empty")
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Construction => "construction error",
            ErrorKind::MalformedJob => "malformed job",
            ErrorKind::OutOfRange => "priority out of range",
            ErrorKind::EmptySource => "empty source",
            ErrorKind::Parse => "parse error",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SchedError {}
