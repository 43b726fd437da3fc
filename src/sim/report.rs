use super::metrics::CompletionRecord;
use crate::{
    core::{JobId, SimCtx, Ticks, Timeline, TimelineSegment},
    error::Error,
};
use average::{Estimate, Mean};
use serde::Serialize;

/// The two outputs of one simulation run: completion records sorted by job,
/// and timeline segments in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub completions: Vec<CompletionRecord>,
    pub timeline: Vec<TimelineSegment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    pub average_response_time: f64,
    // Stop of the last segment
    pub makespan: Ticks,
    pub busy_time: Ticks,
}

impl Schedule {
    pub fn assemble(ctx: &SimCtx, timeline: Timeline) -> Result<Self, Error> {
        let mut completions = ctx
            .processes
            .iter()
            .map(CompletionRecord::from_process)
            .collect::<Result<Vec<_>, _>>()?;
        completions.sort_by_key(|record| record.job);

        Ok(Self {
            completions,
            timeline: timeline.into_segments(),
        })
    }

    pub fn into_parts(self) -> (Vec<CompletionRecord>, Vec<TimelineSegment>) {
        (self.completions, self.timeline)
    }

    /// Segments belonging to one job, in execution order.
    pub fn segments_of(&self, job: JobId) -> impl Iterator<Item = &TimelineSegment> {
        self.timeline.iter().filter(move |segment| segment.job == job)
    }

    pub fn summary(&self) -> Summary {
        let completions = &self.completions;
        Summary {
            average_turnaround_time: avg(completions.iter().map(|c| c.turnaround_time as f64)),
            average_waiting_time: avg(completions.iter().map(|c| c.waiting_time as f64)),
            average_response_time: avg(completions.iter().map(|c| c.response_time as f64)),
            makespan: self.timeline.last().map_or(0, |segment| segment.stop),
            busy_time: self.timeline.iter().map(TimelineSegment::duration).sum(),
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}
