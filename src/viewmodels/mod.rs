pub mod pipeline;
pub mod scheduler;
pub mod timeline_viewmodel;

pub use pipeline::{resolve, PipelinePosition, PipelineView, StepDetails};
pub use scheduler::{Scheduler, TimeoutScheduler};
pub use timeline_viewmodel::{reveal_delay_ms, SearchTicket, TimelineViewModel};
