use super::{TimingBreakdown, ValueRange};
use crate::color::ChannelRange;
use crate::pipeline::Stage;
use serde::Serialize;
use std::path::PathBuf;

/// Result of running one stage on one file, written by the stage runner.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub stage: Stage,
    pub input: InputDescriptor,
    pub output: PathBuf,
    pub channel_range: ChannelRange,
    pub values: ValueRange,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl StageReport {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} {}x{} -> {} range=[{:.3}, {:.3}] out_of_range={} total_ms={:.3}",
            self.stage.label(),
            self.input.width,
            self.input.height,
            self.output.display(),
            self.values.min,
            self.values.max,
            self.values.out_of_range,
            self.timings.total_ms
        )
    }
}
