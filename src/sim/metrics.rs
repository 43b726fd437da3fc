use crate::{
    core::state::{JobId, Process, Ticks},
    error::Error,
};
use serde::Serialize;

/// Per-process timing statistics, finalized when the process completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionRecord {
    pub job: JobId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub finish_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    pub response_time: Ticks,
}

impl CompletionRecord {
    pub fn from_process(process: &Process) -> Result<Self, Error> {
        let (Some(finish_time), Some(first_start)) =
            (process.completion_time, process.first_start_time)
        else {
            return Err(Error::LogicInvariantViolation(format!(
                "{} has not completed",
                process.job()
            )));
        };
        if !process.is_completed() || finish_time < process.arrival_time + process.burst_time {
            return Err(Error::LogicInvariantViolation(format!(
                "{} finished at {finish_time} in state {:?}",
                process.job(),
                process.state
            )));
        }

        let turnaround_time = finish_time - process.arrival_time;
        Ok(Self {
            job: process.job(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_start - process.arrival_time,
        })
    }
}
