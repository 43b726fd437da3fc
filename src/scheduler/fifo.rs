use super::{Dispatch, Pid, Scheduler, SimCtx};
use std::collections::VecDeque;

/// First-Come-First-Serve: processes run to completion in admission order.
#[derive(Debug, Default)]
pub struct FifoScheduler {
    ready: VecDeque<Pid>,
}

impl FifoScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FifoScheduler {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn enqueue(&mut self, _ctx: &SimCtx, pid: Pid) {
        self.ready.push_back(pid);
    }

    fn dispatch(&mut self, ctx: &SimCtx) -> Option<Dispatch> {
        let pid = self.ready.pop_front()?;
        Some(Dispatch {
            pid,
            slice: ctx.process(pid).remaining_time,
        })
    }
}
