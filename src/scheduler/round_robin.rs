use std::cmp;
use std::collections::VecDeque;

use super::{Dispatch, Pid, Scheduler, SimCtx, Ticks};

/// FIFO ready queue; each dispatch grants at most one quantum.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    ready: VecDeque<Pid>,
    quantum: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "quantum must be positive");
        Self {
            ready: VecDeque::new(),
            quantum,
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "round_robin"
    }

    // Arrivals and expired slices both join the tail
    fn enqueue(&mut self, _ctx: &SimCtx, pid: Pid) {
        self.ready.push_back(pid);
    }

    fn dispatch(&mut self, ctx: &SimCtx) -> Option<Dispatch> {
        let pid = self.ready.pop_front()?;
        let slice = cmp::min(self.quantum, ctx.process(pid).remaining_time);
        Some(Dispatch { pid, slice })
    }
}
