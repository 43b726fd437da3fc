use log::{error, warn};
use sched_sim::{Error, Schedule, TimelineSegment, Workload, logger, simulate};
use std::{env, path::PathBuf, process::ExitCode};

const GANTT_WIDTH: u64 = 60;

fn main() -> ExitCode {
    let level = logger::level_from(env::var(logger::LOG_ENV).ok().as_deref());
    if let Err(err) = logger::init(level) {
        eprintln!("failed to install logger: {err}");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let path = args.iter().find(|arg| !arg.starts_with("--")).map(PathBuf::from);

    let result = load_workload(path).and_then(|workload| {
        let schedule = simulate(&workload)?;
        Ok((workload, schedule))
    });

    match result {
        Ok((_, schedule)) if json => match serde_json::to_string_pretty(&schedule) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("failed to serialize schedule: {err}");
                ExitCode::FAILURE
            }
        },
        Ok((workload, schedule)) => {
            println!("{}", workload.policy);
            println!();
            print_table(&schedule);
            println!();
            print_gantt(&schedule.timeline);
            println!();
            print_summary(&schedule);
            ExitCode::SUCCESS
        }
        Err(err) if err.is_input_error() => {
            eprintln!("Input Error: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

// Explicit path, else ./workload.json, else the built-in example
fn load_workload(path: Option<PathBuf>) -> Result<Workload, Error> {
    if let Some(path) = path {
        return Workload::load(&path);
    }

    match env::current_dir() {
        Ok(mut path) => {
            path.push("workload.json");
            match Workload::load(&path) {
                Ok(workload) => Ok(workload),
                Err(Error::IO(_)) => Ok(Workload::default()),
                Err(err) => Err(err),
            }
        }
        Err(err) => {
            warn!("cannot read current directory: {err}");
            Ok(Workload::default())
        }
    }
}

fn print_table(schedule: &Schedule) {
    println!(
        "{:<5} | {:<5} | {:<5} | {:<5} | {:<5} | {:<5} | {:<5}",
        "Job", "AT", "BT", "FT", "TAT", "WT", "RT"
    );
    println!("{}", "-".repeat(60));
    for c in &schedule.completions {
        println!(
            "{:<5} | {:<5} | {:<5} | {:<5} | {:<5} | {:<5} | {:<5}",
            c.job.to_string(),
            c.arrival_time,
            c.burst_time,
            c.finish_time,
            c.turnaround_time,
            c.waiting_time,
            c.response_time
        );
    }
}

fn print_gantt(timeline: &[TimelineSegment]) {
    if let Some((bar, labels)) = render_gantt(timeline) {
        println!("{bar}");
        println!("{labels}");
    }
}

// Bars are scaled to GANTT_WIDTH columns; labels mark each segment start and
// are dropped where they would run into the previous one
fn render_gantt(timeline: &[TimelineSegment]) -> Option<(String, String)> {
    let end = timeline.last()?.stop;
    let column = |t: u64| {
        (u128::from(t) * u128::from(GANTT_WIDTH) / u128::from(end.max(1))) as usize
    };

    let mut bar = String::new();
    let mut labels = String::new();
    for segment in timeline {
        let (start, stop) = (column(segment.start), column(segment.stop));
        // Too narrow to draw at this scale
        if bar.chars().count() > start {
            continue;
        }
        pad_to(&mut bar, start, ' ');
        let width = stop.saturating_sub(start).max(1) - 1;
        bar.push('|');
        bar.push_str(&format!("{:^width$.width$}", segment.job.to_string()));

        push_label(&mut labels, start, segment.start);
    }
    pad_to(&mut bar, column(end), ' ');
    bar.push('|');
    // The end time is always shown, shifted right past a wide last label
    if labels.chars().count() >= column(end) {
        labels.push(' ');
    }
    pad_to(&mut labels, column(end), ' ');
    labels.push_str(&end.to_string());

    Some((bar, labels))
}

fn push_label(labels: &mut String, column: usize, t: u64) {
    if !labels.is_empty() && labels.chars().count() >= column {
        return;
    }
    pad_to(labels, column, ' ');
    labels.push_str(&t.to_string());
}

fn pad_to(line: &mut String, column: usize, fill: char) {
    while line.chars().count() < column {
        line.push(fill);
    }
}

fn print_summary(schedule: &Schedule) {
    let summary = schedule.summary();
    println!("Average turnaround time: {:.2} ticks", summary.average_turnaround_time);
    println!("Average waiting time: {:.2} ticks", summary.average_waiting_time);
    println!("Average response time: {:.2} ticks", summary.average_response_time);
    println!(
        "CPU busy {} of {} ticks",
        summary.busy_time, summary.makespan
    );
}
