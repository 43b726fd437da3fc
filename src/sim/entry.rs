//! One entry point per scheduling policy.
//!
//! Every operation validates its arguments up front and either returns a
//! complete [`Schedule`] or an [`Error`]; no partial output is produced.

use super::{
    driver::Sim,
    job::{Job, validate_quantum},
    report::Schedule,
};
use crate::{
    config::Workload,
    error::Error,
    scheduler::{FifoScheduler, Policy, PriqScheduler, RoundRobinScheduler},
};

/// First-Come-First-Serve: arrival order, ties in input order, run to completion.
pub fn fcfs(arrival_time: &[i64], burst_time: &[i64]) -> Result<Schedule, Error> {
    let jobs = Job::from_arrays(arrival_time, burst_time, None)?;
    Sim::new(jobs, FifoScheduler::new()).run()
}

/// Shortest-Job-First, non-preemptive.
pub fn sjf(arrival_time: &[i64], burst_time: &[i64]) -> Result<Schedule, Error> {
    let jobs = Job::from_arrays(arrival_time, burst_time, None)?;
    Sim::new(jobs, PriqScheduler::shortest_job_first()).run()
}

/// Shortest-Remaining-Time-First, re-evaluated every tick.
pub fn srtf(arrival_time: &[i64], burst_time: &[i64]) -> Result<Schedule, Error> {
    let jobs = Job::from_arrays(arrival_time, burst_time, None)?;
    Sim::new(jobs, PriqScheduler::shortest_remaining_time_first()).run()
}

pub fn priority_non_preemptive(
    arrival_time: &[i64],
    burst_time: &[i64],
    priority: &[i64],
) -> Result<Schedule, Error> {
    let jobs = Job::from_arrays(arrival_time, burst_time, Some(priority))?;
    Sim::new(jobs, PriqScheduler::priority(false)).run()
}

pub fn priority_preemptive(
    arrival_time: &[i64],
    burst_time: &[i64],
    priority: &[i64],
) -> Result<Schedule, Error> {
    let jobs = Job::from_arrays(arrival_time, burst_time, Some(priority))?;
    Sim::new(jobs, PriqScheduler::priority(true)).run()
}

pub fn round_robin(
    arrival_time: &[i64],
    burst_time: &[i64],
    time_quantum: i64,
) -> Result<Schedule, Error> {
    let jobs = Job::from_arrays(arrival_time, burst_time, None)?;
    let quantum = validate_quantum(time_quantum)?;
    Sim::new(jobs, RoundRobinScheduler::new(quantum)).run()
}

/// Run the policy a [`Workload`] names with its arrays.
pub fn simulate(workload: &Workload) -> Result<Schedule, Error> {
    workload.validate()?;

    let arrival = &workload.arrival_time;
    let burst = &workload.burst_time;
    match workload.policy {
        Policy::Fcfs => fcfs(arrival, burst),
        Policy::Sjf => sjf(arrival, burst),
        Policy::Srtf => srtf(arrival, burst),
        Policy::PriorityNonPreemptive => {
            priority_non_preemptive(arrival, burst, workload.priorities()?)
        }
        Policy::PriorityPreemptive => priority_preemptive(arrival, burst, workload.priorities()?),
        Policy::RoundRobin => {
            round_robin(arrival, burst, workload.time_quantum.ok_or(Error::MissingQuantum)?)
        }
    }
}
