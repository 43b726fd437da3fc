use super::{
    state::{ProcessState, SimCtx, Ticks},
    timeline::TimelineSegment,
};
use crate::error::Error;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    // Called between scheduling decisions, when no process holds the CPU
    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        debug_assert!(
            ctx.current.is_none(),
            "process {:?} still running after step {}",
            ctx.current,
            self.step
        );

        for process in &ctx.processes {
            let pid = process.pid;
            match process.state {
                ProcessState::Pending => debug_assert!(
                    process.first_start_time.is_none(),
                    "Pending process {pid} has already been dispatched"
                ),
                ProcessState::Ready => debug_assert!(
                    process.remaining_time > 0,
                    "Ready process {pid} has no remaining time"
                ),
                ProcessState::Running => {
                    debug_assert!(false, "process {pid} left Running between steps")
                }
                ProcessState::Completed => debug_assert!(
                    process.remaining_time == 0 && process.completion_time.is_some(),
                    "Completed process {pid} missing its completion"
                ),
            }
        }
    }

    /// End-of-run check: segments are ordered and disjoint, and every job
    /// received exactly its burst time.
    pub fn verify(&self, ctx: &SimCtx, timeline: &[TimelineSegment]) -> Result<(), Error> {
        for pair in timeline.windows(2) {
            if pair[1].start < pair[0].stop {
                return Err(Error::LogicInvariantViolation(format!(
                    "segments {:?} and {:?} overlap",
                    pair[0], pair[1]
                )));
            }
        }

        let mut service: FxHashMap<_, Ticks> = FxHashMap::default();
        for segment in timeline {
            *service.entry(segment.job).or_default() += segment.duration();
        }

        for process in &ctx.processes {
            let served = service.get(&process.job()).copied().unwrap_or(0);
            if served != process.burst_time {
                return Err(Error::LogicInvariantViolation(format!(
                    "{} ran for {served} ticks, burst is {}",
                    process.job(),
                    process.burst_time
                )));
            }
        }

        Ok(())
    }
}
