use super::state::{JobId, Ticks};
use serde::Serialize;

/// One contiguous interval of execution, `stop > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineSegment {
    pub job: JobId,
    pub start: Ticks,
    pub stop: Ticks,
}

impl TimelineSegment {
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an execution slice. With `coalesce`, a slice that continues the
    /// previous segment of the same job extends it instead of opening a new one.
    pub fn record(&mut self, job: JobId, start: Ticks, stop: Ticks, coalesce: bool) {
        debug_assert!(stop > start, "Empty slice for {job} at {start}");

        if coalesce {
            if let Some(last) = self.segments.last_mut() {
                if last.job == job && last.stop == start {
                    last.stop = stop;
                    return;
                }
            }
        }

        self.segments.push(TimelineSegment { job, start, stop });
    }

    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<TimelineSegment> {
        self.segments
    }
}
