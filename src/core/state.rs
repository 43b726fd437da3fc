use crate::error::Error;
use serde::{Serialize, Serializer};
use std::fmt;

// Index into Process Vec; equal to the input position of the job
pub type Pid = usize;
pub type Ticks = u64;

/// Stable, 1-based job name (`P1`, `P2`, ...) assigned by input order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct JobId(pub(crate) usize);

impl JobId {
    pub fn from_pid(pid: Pid) -> Self {
        Self(pid + 1)
    }

    pub fn pid(self) -> Pid {
        self.0.saturating_sub(1)
    }

    /// The `n` in `Pn`.
    pub fn number(self) -> usize {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl Serialize for JobId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    // Not yet arrived
    Pending,
    Ready,
    Running,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    pub state: ProcessState,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub remaining_time: Ticks,
    pub first_start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl Process {
    pub fn job(&self) -> JobId {
        JobId::from_pid(self.pid)
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }
}

/// Clock plus the process table of a single simulation run.
#[derive(Debug, Default)]
pub struct SimCtx {
    pub now: Ticks,
    pub processes: Vec<Process>,
    pub current: Option<Pid>,
}

impl SimCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_process(&mut self, arrival_time: Ticks, burst_time: Ticks, priority: i64) -> Pid {
        let pid = self.processes.len();
        self.processes.push(Process {
            pid,
            state: ProcessState::Pending,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            first_start_time: None,
            completion_time: None,
        });
        pid
    }

    pub fn advance_time(&mut self, delta: Ticks) -> Result<(), Error> {
        self.now = self.now.checked_add(delta).ok_or_else(|| {
            Error::LogicInvariantViolation(format!("clock overflow at t={} + {delta}", self.now))
        })?;
        Ok(())
    }

    pub fn process(&self, pid: Pid) -> &Process {
        &self.processes[pid]
    }

    pub fn process_mut(&mut self, pid: Pid) -> &mut Process {
        &mut self.processes[pid]
    }

    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    pub fn mark_ready(&mut self, pid: Pid) {
        let process = self.process_mut(pid);
        debug_assert!(
            process.state != ProcessState::Completed,
            "Completed process {pid} cannot become ready"
        );
        process.state = ProcessState::Ready;
        if self.current == Some(pid) {
            self.current = None;
        }
    }

    // Return the previous state of the process
    pub fn set_running(&mut self, pid: Pid) -> ProcessState {
        debug_assert!(self.current.is_none(), "CPU already running {:?}", self.current);

        let now = self.now;
        let process = self.process_mut(pid);
        let prev_state = process.state;
        process.state = ProcessState::Running;
        process.first_start_time.get_or_insert(now);
        self.current = Some(pid);
        prev_state
    }

    pub fn mark_completed(&mut self, pid: Pid) {
        let now = self.now;
        let process = self.process_mut(pid);
        debug_assert!(
            process.state == ProcessState::Running,
            "Process {pid} must have been running before marked complete"
        );
        debug_assert_eq!(process.remaining_time, 0);

        process.state = ProcessState::Completed;
        process.completion_time = Some(now);
        self.current = None;
    }
}
