pub mod config;
pub mod core;
pub mod error;
pub mod logger;
pub mod scheduler;
pub mod sim;

pub use config::Workload;
pub use crate::core::{JobId, SimEvent, TimelineSegment};
pub use error::Error;
pub use scheduler::{Policy, Scheduler};
pub use sim::{
    CompletionRecord, Schedule, Sim, Summary, fcfs, priority_non_preemptive, priority_preemptive,
    round_robin, simulate, sjf, srtf,
};
