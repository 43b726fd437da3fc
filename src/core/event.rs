use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Arrived {
        pid: Pid,
    },
    Dispatched {
        pid: Pid,
        start: Ticks,
        stop: Ticks,
    },
    // Ran its slice but still has work left
    Requeued {
        pid: Pid,
        remaining: Ticks,
    },
    Completed {
        pid: Pid,
        at: Ticks,
    },
    // Nothing ready; clock jumps to the next arrival
    Idle {
        from: Ticks,
        until: Ticks,
    },
}
