pub mod fifo;
pub mod priq;
pub mod round_robin;

use crate::{
    core::{
        Ticks,
        state::{Pid, SimCtx},
    },
    error::Error,
};
pub use fifo::FifoScheduler;
pub use priq::{PriqScheduler, SelectKey};
pub use round_robin::RoundRobinScheduler;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// CPU grant returned by `Scheduler::dispatch`: run `pid` for `slice` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub pid: Pid,
    pub slice: Ticks,
}

pub trait Scheduler {
    fn name(&self) -> &'static str;

    /// A process became ready: either it just arrived or it ran a slice and
    /// still has work left.
    fn enqueue(&mut self, ctx: &SimCtx, pid: Pid);

    /// Pick the next process to run, or `None` if nothing is ready.
    fn dispatch(&mut self, ctx: &SimCtx) -> Option<Dispatch>;

    /// Merge back-to-back slices of the same process into one timeline segment.
    fn coalesce_slices(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Policy {
    Fcfs,
    Sjf,
    Srtf,
    PriorityNonPreemptive,
    PriorityPreemptive,
    RoundRobin,
}

impl Policy {
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::PriorityNonPreemptive,
        Policy::PriorityPreemptive,
        Policy::RoundRobin,
    ];

    pub fn needs_priority(self) -> bool {
        matches!(
            self,
            Policy::PriorityNonPreemptive | Policy::PriorityPreemptive
        )
    }

    pub fn needs_quantum(self) -> bool {
        self == Policy::RoundRobin
    }

    pub fn key(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Srtf => "srtf",
            Policy::PriorityNonPreemptive => "priority_non_preemptive",
            Policy::PriorityPreemptive => "priority_preemptive",
            Policy::RoundRobin => "round_robin",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "First Come First Serve"),
            Policy::Sjf => write!(f, "Shortest Job First"),
            Policy::Srtf => write!(f, "Shortest Remaining Time First"),
            Policy::PriorityNonPreemptive => write!(f, "Priority Non Pre-emptive"),
            Policy::PriorityPreemptive => write!(f, "Priority Pre-emptive"),
            Policy::RoundRobin => write!(f, "Round Robin"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "first_come_first_serve" => Ok(Policy::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Policy::Sjf),
            "srtf" | "srt" | "shortest_remaining_time_first" => Ok(Policy::Srtf),
            "npp" | "priority_non_preemptive" | "priority_non_pre_emptive" => {
                Ok(Policy::PriorityNonPreemptive)
            }
            "pp" | "priority_preemptive" | "priority_pre_emptive" => Ok(Policy::PriorityPreemptive),
            "rr" | "round_robin" => Ok(Policy::RoundRobin),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Policy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Policy> for String {
    fn from(policy: Policy) -> Self {
        policy.key().to_string()
    }
}
