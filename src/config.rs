use crate::{error::Error, scheduler::Policy};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// A simulation request as read from a JSON workload file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Workload {
    pub policy: Policy,
    pub arrival_time: Vec<i64>,
    pub burst_time: Vec<i64>,
    #[serde(default)]
    pub priority: Option<Vec<i64>>,
    #[serde(default)]
    pub time_quantum: Option<i64>,
    // Declared process count, checked against the arrays when present
    #[serde(default)]
    pub num_processes: Option<usize>,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            policy: Policy::Fcfs,
            arrival_time: vec![0, 1, 2],
            burst_time: vec![5, 3, 1],
            priority: None,
            time_quantum: None,
            num_processes: None,
        }
    }
}

impl Workload {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::InvalidWorkload(error.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|error| Error::IO(error.kind()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|error| Error::InvalidWorkload(error.to_string()))
    }

    /// Checks that only the workload itself can answer; per-process values
    /// are validated by the policy entry points.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(expected) = self.num_processes {
            for got in [self.arrival_time.len(), self.burst_time.len()] {
                if got != expected {
                    return Err(Error::ProcessCountMismatch { expected, got });
                }
            }
        }
        if self.policy.needs_priority() && self.priority.is_none() {
            return Err(Error::MissingPriorities);
        }
        if self.policy.needs_quantum() && self.time_quantum.is_none() {
            return Err(Error::MissingQuantum);
        }
        Ok(())
    }

    pub fn priorities(&self) -> Result<&[i64], Error> {
        self.priority.as_deref().ok_or(Error::MissingPriorities)
    }
}
