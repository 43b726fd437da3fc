pub mod driver;
pub mod entry;
pub mod job;
pub mod metrics;
pub mod report;

pub use driver::Sim;
pub use entry::{
    fcfs, priority_non_preemptive, priority_preemptive, round_robin, simulate, sjf, srtf,
};
pub use job::Job;
pub use metrics::CompletionRecord;
pub use report::{Schedule, Summary};
