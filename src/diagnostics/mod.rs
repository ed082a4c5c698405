//! Diagnostics data model for stage runs: per-step timings, value range
//! statistics gathered before channel packing and the serializable report
//! returned by [`process_file`](crate::pipeline::process_file).

pub mod report;
pub mod timing;
pub mod values;

pub use report::{InputDescriptor, StageReport};
pub use timing::{StageTiming, TimingBreakdown};
pub use values::ValueRange;
