pub mod driver;
pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::{SchedCore, Slice};
pub use event::SimEvent;
pub use observer::Observer;
pub use state::{JobId, Pid, Process, ProcessState, SimCtx, Ticks};
pub use timeline::{Timeline, TimelineSegment};
