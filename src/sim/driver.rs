use super::{job::Job, report::Schedule};
use crate::{
    core::{
        SimEvent,
        driver::SchedCore,
        state::{Pid, SimCtx, Ticks},
    },
    error::Error,
    scheduler::Scheduler,
};
use log::{debug, trace};

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    // Pids ordered by (arrival_time, input order)
    arrivals: Vec<Pid>,
    arrival_cursor: usize,
}

impl<S: Scheduler> Sim<S> {
    /// Jobs are reported by their position in `jobs`.
    pub fn new(jobs: Vec<Job>, scheduler: S) -> Self {
        let mut ctx = SimCtx::new();
        for job in &jobs {
            ctx.create_process(
                job.arrival_time,
                job.burst_time,
                job.priority.unwrap_or_default(),
            );
        }

        let mut arrivals: Vec<Pid> = (0..ctx.processes.len()).collect();
        // Stable sort keeps input order among equal arrivals
        arrivals.sort_by_key(|&pid| ctx.process(pid).arrival_time);

        Self {
            core: SchedCore::new(ctx, scheduler),
            arrivals,
            arrival_cursor: 0,
        }
    }

    /// Make one scheduling decision: run the next slice, or idle until the
    /// next arrival if nothing is ready.
    pub fn step(&mut self) -> Result<Vec<SimEvent>, Error> {
        let mut events = Vec::new();
        self.handle_arrivals(&mut events);

        match self.core.tick()? {
            Some(slice) => {
                events.push(SimEvent::Dispatched {
                    pid: slice.pid,
                    start: slice.start,
                    stop: slice.stop,
                });
                // Processes that arrived during the slice queue ahead of the
                // one that just ran
                self.handle_arrivals(&mut events);
                events.push(self.core.settle(slice.pid));
            }
            None => {
                let until = self.next_arrival().ok_or_else(|| {
                    Error::LogicInvariantViolation(format!(
                        "nothing ready at t={} and no arrivals pending",
                        self.core.now()
                    ))
                })?;
                events.push(self.core.idle_until(until)?);
            }
        }

        self.core.observe();
        for event in &events {
            trace!("[{}] t={} {:?}", self.core.scheduler.name(), self.core.now(), event);
        }
        Ok(events)
    }

    fn handle_arrivals(&mut self, events: &mut Vec<SimEvent>) {
        let now = self.core.now();
        while let Some(&pid) = self.arrivals.get(self.arrival_cursor) {
            // Contiguous, since arrivals are sorted
            if self.core.ctx.process(pid).arrival_time > now {
                break;
            }
            self.core.wake_process(pid);
            events.push(SimEvent::Arrived { pid });
            self.arrival_cursor += 1;
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.arrivals
            .get(self.arrival_cursor)
            .map(|&pid| self.core.ctx.process(pid).arrival_time)
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.ctx.all_completed()
    }

    pub fn run(mut self) -> Result<Schedule, Error> {
        debug!(
            "{}: simulating {} processes",
            self.core.scheduler.name(),
            self.core.ctx.processes.len()
        );

        while !self.all_jobs_completed() {
            self.step()?;
        }

        let steps = self.core.observer().steps();
        let (ctx, timeline) = self.core.finish()?;
        let schedule = Schedule::assemble(&ctx, timeline)?;
        debug!(
            "finished at t={} after {steps} steps, {} segments",
            ctx.now,
            schedule.timeline.len()
        );
        Ok(schedule)
    }
}
