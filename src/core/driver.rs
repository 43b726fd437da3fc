use super::{
    event::SimEvent,
    observer::Observer,
    state::{Pid, SimCtx, Ticks},
    timeline::Timeline,
};
use crate::{error::Error, scheduler::Scheduler};

/// Outcome of one granted slice, before the process is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub stop: Ticks,
}

pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    timeline: Timeline,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(ctx: SimCtx, scheduler: S) -> Self {
        Self {
            ctx,
            scheduler,
            timeline: Timeline::new(),
            observer: Observer::new(),
        }
    }

    pub fn wake_process(&mut self, pid: Pid) {
        self.ctx.mark_ready(pid);
        self.scheduler.enqueue(&self.ctx, pid);
    }

    /// Ask the scheduler for work and execute the granted slice. `None` means
    /// the CPU has nothing ready.
    pub fn tick(&mut self) -> Result<Option<Slice>, Error> {
        let Some(dispatch) = self.scheduler.dispatch(&self.ctx) else {
            return Ok(None);
        };

        let pid = dispatch.pid;
        let remaining = self.ctx.process(pid).remaining_time;
        if remaining == 0 || self.ctx.process(pid).is_completed() {
            return Err(Error::LogicInvariantViolation(format!(
                "{} dispatched with no remaining time",
                self.ctx.process(pid).job()
            )));
        }
        if dispatch.slice == 0 || dispatch.slice > remaining {
            return Err(Error::LogicInvariantViolation(format!(
                "{} granted slice {} with {remaining} ticks remaining",
                self.ctx.process(pid).job(),
                dispatch.slice
            )));
        }

        let start = self.ctx.now;
        self.ctx.set_running(pid);
        self.ctx.process_mut(pid).remaining_time -= dispatch.slice;
        self.ctx.advance_time(dispatch.slice)?;
        let stop = self.ctx.now;

        let job = self.ctx.process(pid).job();
        self.timeline
            .record(job, start, stop, self.scheduler.coalesce_slices());

        Ok(Some(Slice { pid, start, stop }))
    }

    /// Finish the slice that just ran: complete the process or hand it back to
    /// the scheduler. Callers admit new arrivals first so they queue ahead.
    pub fn settle(&mut self, pid: Pid) -> SimEvent {
        let remaining = self.ctx.process(pid).remaining_time;
        if remaining == 0 {
            self.ctx.mark_completed(pid);
            SimEvent::Completed {
                pid,
                at: self.ctx.now,
            }
        } else {
            self.wake_process(pid);
            SimEvent::Requeued { pid, remaining }
        }
    }

    pub fn idle_until(&mut self, until: Ticks) -> Result<SimEvent, Error> {
        let from = self.ctx.now;
        self.ctx.advance_time(until.saturating_sub(from))?;
        Ok(SimEvent::Idle { from, until })
    }

    pub fn observe(&mut self) {
        self.observer.observe(&self.ctx);
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn finish(self) -> Result<(SimCtx, Timeline), Error> {
        self.observer.verify(&self.ctx, self.timeline.segments())?;
        Ok((self.ctx, self.timeline))
    }
}
