use crate::core::JobId;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Arrival and burst time lists differ in length ({arrivals} vs {bursts}).")]
    LengthMismatch { arrivals: usize, bursts: usize },
    #[error("Expected {expected} priorities, got {got}.")]
    PriorityLengthMismatch { expected: usize, got: usize },
    #[error("Expected {expected} processes, got {got} arrival/burst times.")]
    ProcessCountMismatch { expected: usize, got: usize },
    #[error("Priority policies require a priority for every process.")]
    MissingPriorities,
    #[error("Round Robin requires a time quantum.")]
    MissingQuantum,
    #[error("Burst time of {0} must be positive, got {1}.")]
    NonPositiveBurst(JobId, i64),
    #[error("Arrival time of {0} must not be negative, got {1}.")]
    NegativeArrival(JobId, i64),
    #[error("Arrivals plus total burst time exceed the simulation clock range.")]
    HorizonOverflow,
    #[error("Time quantum must be positive, got {0}.")]
    NonPositiveQuantum(i64),
    #[error("Unknown scheduling policy '{0}'.")]
    UnknownPolicy(String),
    #[error("Invalid workload: {0}")]
    InvalidWorkload(String),
    #[error("IO Error")]
    IO(io::ErrorKind),
    #[error("Scheduler invariant violated: {0}")]
    LogicInvariantViolation(String),
}

impl Error {
    /// Whether the caller supplied bad arguments, as opposed to the engine
    /// breaking one of its own invariants.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::LogicInvariantViolation(_) | Error::IO(_))
    }
}
