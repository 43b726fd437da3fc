use std::cmp::Ordering;

use super::{Dispatch, Pid, Scheduler, SimCtx};
use keyed_priority_queue::KeyedPriorityQueue;

/// Field a `PriqScheduler` minimizes when choosing among ready processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    BurstTime,
    RemainingTime,
    // Lower value = higher priority
    Priority,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
struct Rank {
    key: i64,
    pid: Pid,
}

// KeyedPriorityQueue is a max-heap, so the smallest key (then the earliest
// input position) must compare greatest
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.pid.cmp(&self.pid))
    }
}

/// Minimum-key selection over the ready set. Non-preemptive instances run the
/// chosen process to completion; preemptive ones grant a single tick and
/// re-rank on every tick.
pub struct PriqScheduler {
    ready: KeyedPriorityQueue<Pid, Rank>,
    select: SelectKey,
    preemptive: bool,
}

impl PriqScheduler {
    pub fn new(select: SelectKey, preemptive: bool) -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
            select,
            preemptive,
        }
    }

    pub fn shortest_job_first() -> Self {
        Self::new(SelectKey::BurstTime, false)
    }

    pub fn shortest_remaining_time_first() -> Self {
        Self::new(SelectKey::RemainingTime, true)
    }

    pub fn priority(preemptive: bool) -> Self {
        Self::new(SelectKey::Priority, preemptive)
    }

    fn rank(&self, ctx: &SimCtx, pid: Pid) -> Rank {
        let process = ctx.process(pid);
        let key = match self.select {
            SelectKey::BurstTime => ticks_key(process.burst_time),
            SelectKey::RemainingTime => ticks_key(process.remaining_time),
            SelectKey::Priority => process.priority,
        };
        Rank { key, pid }
    }
}

fn ticks_key(ticks: u64) -> i64 {
    i64::try_from(ticks).unwrap_or(i64::MAX)
}

impl Scheduler for PriqScheduler {
    fn name(&self) -> &'static str {
        match (self.select, self.preemptive) {
            (SelectKey::BurstTime, _) => "sjf",
            (SelectKey::RemainingTime, _) => "srtf",
            (SelectKey::Priority, false) => "priority_non_preemptive",
            (SelectKey::Priority, true) => "priority_preemptive",
        }
    }

    fn enqueue(&mut self, ctx: &SimCtx, pid: Pid) {
        let rank = self.rank(ctx, pid);
        self.ready.push(pid, rank);
    }

    fn dispatch(&mut self, ctx: &SimCtx) -> Option<Dispatch> {
        let (pid, _) = self.ready.pop()?;
        let slice = if self.preemptive {
            1
        } else {
            ctx.process(pid).remaining_time
        };
        Some(Dispatch { pid, slice })
    }

    fn coalesce_slices(&self) -> bool {
        self.preemptive
    }
}
