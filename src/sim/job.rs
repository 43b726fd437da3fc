use crate::{
    core::state::{JobId, Ticks},
    error::Error,
};

/// Validated input record for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub(crate) id: JobId,
    pub(crate) arrival_time: Ticks,
    pub(crate) burst_time: Ticks,
    pub(crate) priority: Option<i64>,
}

impl Job {
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Build jobs from parallel input arrays, rejecting malformed input before
    /// any simulation starts. Job `i` is named `P{i+1}`.
    pub fn from_arrays(
        arrival_time: &[i64],
        burst_time: &[i64],
        priority: Option<&[i64]>,
    ) -> Result<Vec<Job>, Error> {
        if arrival_time.len() != burst_time.len() {
            return Err(Error::LengthMismatch {
                arrivals: arrival_time.len(),
                bursts: burst_time.len(),
            });
        }
        if let Some(priority) = priority {
            if priority.len() != arrival_time.len() {
                return Err(Error::PriorityLengthMismatch {
                    expected: arrival_time.len(),
                    got: priority.len(),
                });
            }
        }

        let jobs = arrival_time
            .iter()
            .zip(burst_time)
            .enumerate()
            .map(|(i, (&arrival, &burst))| {
                let id = JobId::from_pid(i);
                let arrival_time =
                    Ticks::try_from(arrival).map_err(|_| Error::NegativeArrival(id, arrival))?;
                let burst_time = match Ticks::try_from(burst) {
                    Ok(burst) if burst > 0 => burst,
                    _ => return Err(Error::NonPositiveBurst(id, burst)),
                };

                Ok(Job {
                    id,
                    arrival_time,
                    burst_time,
                    priority: priority.map(|p| p[i]),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        check_horizon(&jobs)?;
        Ok(jobs)
    }
}

// The clock never passes the last arrival plus every burst back to back
fn check_horizon(jobs: &[Job]) -> Result<Ticks, Error> {
    let last_arrival = jobs.iter().map(|job| job.arrival_time).max().unwrap_or(0);
    jobs.iter()
        .try_fold(last_arrival, |horizon, job| horizon.checked_add(job.burst_time))
        .ok_or(Error::HorizonOverflow)
}

pub fn validate_quantum(time_quantum: i64) -> Result<Ticks, Error> {
    match Ticks::try_from(time_quantum) {
        Ok(quantum) if quantum > 0 => Ok(quantum),
        _ => Err(Error::NonPositiveQuantum(time_quantum)),
    }
}
