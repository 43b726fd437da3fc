use sched_sim::{
    CompletionRecord, Error, JobId, Policy, Schedule, Workload, fcfs, priority_non_preemptive,
    priority_preemptive, round_robin, simulate, sjf, srtf,
};

fn segments(schedule: &Schedule) -> Vec<(String, u64, u64)> {
    schedule
        .timeline
        .iter()
        .map(|s| (s.job.to_string(), s.start, s.stop))
        .collect()
}

fn expect(spec: &[(&str, u64, u64)]) -> Vec<(String, u64, u64)> {
    spec.iter()
        .map(|&(job, start, stop)| (job.to_string(), start, stop))
        .collect()
}

// (finish, turnaround, waiting, response)
fn times(record: &CompletionRecord) -> (u64, u64, u64, u64) {
    (
        record.finish_time,
        record.turnaround_time,
        record.waiting_time,
        record.response_time,
    )
}

fn run_all(arrival: &[i64], burst: &[i64], priority: &[i64], quantum: i64) -> Vec<(Policy, Schedule)> {
    Policy::ALL
        .into_iter()
        .map(|policy| {
            let workload = Workload {
                policy,
                arrival_time: arrival.to_vec(),
                burst_time: burst.to_vec(),
                priority: Some(priority.to_vec()),
                time_quantum: Some(quantum),
                num_processes: Some(arrival.len()),
            };
            (policy, simulate(&workload).unwrap())
        })
        .collect()
}

const WORKLOADS: [(&[i64], &[i64], &[i64]); 4] = [
    (&[0, 1, 2], &[5, 3, 1], &[2, 1, 3]),
    (&[0, 1, 2, 3, 4], &[7, 4, 1, 4, 2], &[3, 1, 4, 2, 1]),
    (&[3, 0, 9, 9, 20], &[2, 6, 1, 3, 4], &[0, 2, -1, 1, 5]),
    (&[0, 0, 0, 0], &[2, 2, 2, 2], &[1, 1, 1, 1]),
];

#[test]
fn test_fcfs_scenario() {
    let schedule = fcfs(&[0, 1, 2], &[5, 3, 1]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 9)])
    );

    let stats: Vec<_> = schedule.completions.iter().map(times).collect();
    assert_eq!(stats, vec![(5, 5, 0, 0), (8, 7, 4, 4), (9, 7, 6, 6)]);
}

#[test]
fn test_fcfs_idles_until_next_arrival() {
    let schedule = fcfs(&[4, 0, 0, 20], &[1, 2, 3, 2]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P2", 0, 2), ("P3", 2, 5), ("P1", 5, 6), ("P4", 20, 22)])
    );
    assert_eq!(schedule.completions[3].response_time, 0);
}

#[test]
fn test_sjf_scenario() {
    let schedule = sjf(&[0, 0, 0], &[6, 2, 8]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P2", 0, 2), ("P1", 2, 8), ("P3", 8, 16)])
    );
}

#[test]
fn test_sjf_ties_follow_input_order_not_arrival() {
    // P3 arrived before P2, but P2 comes first in the input
    let schedule = sjf(&[0, 2, 1], &[3, 2, 2]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P1", 0, 3), ("P2", 3, 5), ("P3", 5, 7)])
    );
}

#[test]
fn test_srtf_scenario() {
    let schedule = srtf(&[0, 1, 2], &[7, 4, 1]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[
            ("P1", 0, 1),
            ("P2", 1, 2),
            ("P3", 2, 3),
            ("P2", 3, 6),
            ("P1", 6, 12)
        ])
    );

    let stats: Vec<_> = schedule.completions.iter().map(times).collect();
    assert_eq!(stats, vec![(12, 12, 5, 0), (6, 5, 1, 0), (3, 1, 0, 0)]);
}

#[test]
fn test_srtf_merges_uninterrupted_run() {
    let schedule = srtf(&[0], &[5]).unwrap();
    assert_eq!(segments(&schedule), expect(&[("P1", 0, 5)]));
}

#[test]
fn test_round_robin_scenario() {
    let schedule = round_robin(&[0, 1, 2], &[5, 3, 1], 2).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[
            ("P1", 0, 2),
            ("P2", 2, 4),
            ("P3", 4, 5),
            ("P1", 5, 7),
            ("P2", 7, 8),
            ("P1", 8, 9)
        ])
    );

    let stats: Vec<_> = schedule.completions.iter().map(times).collect();
    assert_eq!(stats, vec![(9, 9, 4, 0), (8, 7, 4, 1), (5, 3, 2, 2)]);
}

#[test]
fn test_round_robin_keeps_quantum_slices_separate() {
    let schedule = round_robin(&[0], &[5], 2).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P1", 0, 2), ("P1", 2, 4), ("P1", 4, 5)])
    );
}

#[test]
fn test_priority_non_preemptive_scenario() {
    let schedule = priority_non_preemptive(&[0, 0], &[4, 4], &[2, 1]).unwrap();
    assert_eq!(segments(&schedule), expect(&[("P2", 0, 4), ("P1", 4, 8)]));
}

#[test]
fn test_priority_non_preemptive_does_not_interrupt() {
    let schedule = priority_non_preemptive(&[0, 1, 2], &[4, 3, 1], &[3, 1, 2]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P1", 0, 4), ("P2", 4, 7), ("P3", 7, 8)])
    );
}

#[test]
fn test_priority_preemptive_interrupts_on_arrival() {
    let schedule = priority_preemptive(&[0, 1, 2], &[4, 3, 1], &[3, 1, 2]).unwrap();
    assert_eq!(
        segments(&schedule),
        expect(&[("P1", 0, 1), ("P2", 1, 4), ("P3", 4, 5), ("P1", 5, 8)])
    );

    let stats: Vec<_> = schedule.completions.iter().map(times).collect();
    assert_eq!(stats, vec![(8, 8, 4, 0), (4, 3, 0, 0), (5, 3, 2, 2)]);
}

#[test]
fn test_completions_sorted_by_numeric_job() {
    let arrival: Vec<i64> = (0..11).rev().collect();
    let burst = vec![1; 11];
    let schedule = fcfs(&arrival, &burst).unwrap();

    let jobs: Vec<_> = schedule.completions.iter().map(|c| c.job).collect();
    assert_eq!(jobs, (0..11).map(JobId::from_pid).collect::<Vec<_>>());
    assert_eq!(schedule.timeline[0].job, JobId::from_pid(10));
}

#[test]
fn test_empty_workload() {
    for (_, schedule) in run_all(&[], &[], &[], 1) {
        assert!(schedule.completions.is_empty());
        assert!(schedule.timeline.is_empty());
    }
}

#[test]
fn test_conservation() {
    for (arrival, burst, priority) in WORKLOADS {
        for (policy, schedule) in run_all(arrival, burst, priority, 2) {
            for record in &schedule.completions {
                let served: u64 = schedule.segments_of(record.job).map(|s| s.duration()).sum();
                assert_eq!(served, record.burst_time, "{policy} {}", record.job);
            }
            let total: i64 = burst.iter().sum();
            assert_eq!(schedule.summary().busy_time, total as u64, "{policy}");
        }
    }
}

#[test]
fn test_metric_consistency() {
    for (arrival, burst, priority) in WORKLOADS {
        for (policy, schedule) in run_all(arrival, burst, priority, 3) {
            for record in &schedule.completions {
                assert_eq!(record.turnaround_time, record.finish_time - record.arrival_time);
                assert_eq!(record.waiting_time, record.turnaround_time - record.burst_time);

                let first = schedule.segments_of(record.job).next().unwrap();
                let last = schedule.segments_of(record.job).last().unwrap();
                assert_eq!(record.finish_time, last.stop, "{policy} {}", record.job);
                assert_eq!(record.response_time, first.start - record.arrival_time);
            }
        }
    }
}

#[test]
fn test_segments_sorted_and_disjoint() {
    for (arrival, burst, priority) in WORKLOADS {
        for (policy, schedule) in run_all(arrival, burst, priority, 2) {
            for pair in schedule.timeline.windows(2) {
                assert!(pair[0].stop <= pair[1].start, "{policy}: {pair:?}");
            }
            assert!(schedule.timeline.iter().all(|s| s.stop > s.start));
        }
    }
}

#[test]
fn test_preemptive_segments_change_job() {
    for (arrival, burst, priority) in WORKLOADS {
        for (policy, schedule) in run_all(arrival, burst, priority, 2) {
            if !matches!(policy, Policy::Srtf | Policy::PriorityPreemptive) {
                continue;
            }
            for pair in schedule.timeline.windows(2) {
                assert!(
                    pair[0].job != pair[1].job || pair[0].stop != pair[1].start,
                    "{policy}: unmerged {pair:?}"
                );
            }
        }
    }
}

#[test]
fn test_round_robin_quantum_bound() {
    for (arrival, burst, _) in WORKLOADS {
        for quantum in 1..=4 {
            let schedule = round_robin(arrival, burst, quantum).unwrap();
            assert!(schedule.timeline.iter().all(|s| s.duration() <= quantum as u64));
        }
    }
}

#[test]
fn test_determinism() {
    for (arrival, burst, priority) in WORKLOADS {
        let first = run_all(arrival, burst, priority, 2);
        let second = run_all(arrival, burst, priority, 2);
        assert_eq!(first, second);
    }
}

#[test]
fn test_input_errors() {
    assert_eq!(
        fcfs(&[0, 1], &[3]),
        Err(Error::LengthMismatch {
            arrivals: 2,
            bursts: 1
        })
    );
    assert_eq!(sjf(&[0], &[0]), Err(Error::NonPositiveBurst(JobId::from_pid(0), 0)));
    assert_eq!(
        srtf(&[0, -3], &[1, 1]),
        Err(Error::NegativeArrival(JobId::from_pid(1), -3))
    );
    assert_eq!(
        priority_preemptive(&[0, 1], &[1, 1], &[1]),
        Err(Error::PriorityLengthMismatch {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        round_robin(&[0], &[1], 0),
        Err(Error::NonPositiveQuantum(0))
    );

    let err = round_robin(&[0], &[1], -1).unwrap_err();
    assert!(err.is_input_error());
}

#[test]
fn test_clock_overflow_is_an_input_error() {
    let max = i64::MAX;
    assert_eq!(fcfs(&[0, 0, 0, 0], &[max; 4]), Err(Error::HorizonOverflow));
    assert_eq!(
        round_robin(&[max, 0], &[max, 2], 1),
        Err(Error::HorizonOverflow)
    );
    assert!(Error::HorizonOverflow.is_input_error());

    // A workload ending exactly at the top of the clock still simulates
    let schedule = fcfs(&[max], &[max]).unwrap();
    assert_eq!(schedule.completions[0].finish_time, u64::MAX - 1);
}

#[test]
fn test_simulate_from_json() {
    let workload = Workload::from_json(
        r#"{
            "policy": "Round Robin",
            "arrival_time": [0, 1, 2],
            "burst_time": [5, 3, 1],
            "time_quantum": 2,
            "num_processes": 3
        }"#,
    )
    .unwrap();
    let schedule = simulate(&workload).unwrap();
    assert_eq!(schedule, round_robin(&[0, 1, 2], &[5, 3, 1], 2).unwrap());

    let missing = Workload {
        policy: Policy::PriorityNonPreemptive,
        ..Workload::default()
    };
    assert_eq!(simulate(&missing), Err(Error::MissingPriorities));
}

#[test]
fn test_into_parts() {
    let (completions, timeline) = fcfs(&[0, 1, 2], &[5, 3, 1]).unwrap().into_parts();
    assert_eq!(completions.len(), 3);
    assert_eq!(timeline.len(), 3);
}
