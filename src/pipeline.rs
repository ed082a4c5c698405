//! Stage runner: RGB → gray → filter → RGB, with timings and range checks.
//!
//! A [`Stage`] picks what happens to the gray image: nothing (`Gray`),
//! 3×3 smoothing (`Smooth`), a single Sobel derivative (`GradientX`,
//! `GradientY`) or Sobel gradient magnitude (`Sobel`).
//! [`run_stage`] works on in-memory images; [`process_file`] adds decoding,
//! the empty-image guard and encoding.
use crate::color::{to_gray, to_rgb, ChannelRange};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, StageReport, TimingBreakdown, ValueRange};
use crate::error::{Error, Result};
use crate::filter::{convolve, sobel, KernelKind};
use crate::image::io::{read_rgb_image, write_rgb_image};
use crate::image::{GrayImage, ImageView, RgbImage};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Gray,
    Smooth,
    GradientX,
    GradientY,
    #[default]
    Sobel,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Gray,
        Stage::Smooth,
        Stage::GradientX,
        Stage::GradientY,
        Stage::Sobel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Gray => "gray",
            Stage::Smooth => "smooth",
            Stage::GradientX => "gradient_x",
            Stage::GradientY => "gradient_y",
            Stage::Sobel => "sobel",
        }
    }

    /// File written when no explicit output path is configured.
    pub fn default_output(self) -> &'static str {
        match self {
            Stage::Gray => "test_grayed.png",
            Stage::Smooth => "test_smoothed.png",
            Stage::GradientX => "test_gradient_x.png",
            Stage::GradientY => "test_gradient_y.png",
            Stage::Sobel => "test_sobeled.png",
        }
    }

    /// Kernel of single-pass stages; `None` for `Gray` and `Sobel`.
    pub fn kernel(self) -> Option<KernelKind> {
        match self {
            Stage::Smooth => Some(KernelKind::Smoothing),
            Stage::GradientX => Some(KernelKind::GradientX),
            Stage::GradientY => Some(KernelKind::GradientY),
            Stage::Gray | Stage::Sobel => None,
        }
    }

    /// Run the stage's filter on a gray image.
    pub fn apply(self, gray: &GrayImage) -> Result<GrayImage> {
        match (self, self.kernel()) {
            (Stage::Sobel, _) => sobel(gray),
            (_, Some(kind)) => convolve(gray, &kind.kernel()),
            (_, None) => Ok(gray.clone()),
        }
    }
}

/// In-memory result of [`run_stage`].
#[derive(Clone, Debug)]
pub struct StageOutput {
    /// Filter result before channel packing.
    pub gray: GrayImage,
    /// Packed result ready for encoding.
    pub rgb: RgbImage,
    pub values: ValueRange,
    pub timings: TimingBreakdown,
}

/// Convert to gray, apply `stage` and pack the result back to RGB.
pub fn run_stage(rgb: &RgbImage, stage: Stage, range: ChannelRange) -> Result<StageOutput> {
    if rgb.is_empty() {
        return Err(Error::EmptyImage {
            width: rgb.width(),
            height: rgb.height(),
        });
    }
    let start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let gray = timings.time("to_gray", || to_gray(rgb));
    let filtered = timings.time(stage.label(), || stage.apply(&gray))?;
    let values = ValueRange::of(&filtered);
    if !values.fits_unit_interval() {
        match range {
            ChannelRange::Clamp => debug!(
                "{}: clamping {} samples outside [0, 1] (min={:.3}, max={:.3})",
                stage.label(),
                values.out_of_range,
                values.min,
                values.max
            ),
            ChannelRange::Wrap => warn!(
                "{}: {} samples outside [0, 1] will wrap around (min={:.3}, max={:.3})",
                stage.label(),
                values.out_of_range,
                values.min,
                values.max
            ),
        }
    }
    let packed = timings.time("to_rgb", || to_rgb(&filtered, range));
    timings.total_ms = elapsed_ms(start);

    Ok(StageOutput {
        gray: filtered,
        rgb: packed,
        values,
        timings,
    })
}

/// Read `input`, run `stage` and write the packed result to `output`.
pub fn process_file(
    input: &Path,
    output: &Path,
    stage: Stage,
    range: ChannelRange,
) -> Result<StageReport> {
    let start = Instant::now();
    let rgb = read_rgb_image(input)?;
    let read_ms = elapsed_ms(start);
    debug!(
        "{}: {} is {}x{}",
        stage.label(),
        input.display(),
        rgb.width(),
        rgb.height()
    );

    let StageOutput {
        rgb: packed,
        values,
        timings: stage_timings,
        ..
    } = run_stage(&rgb, stage, range)?;

    let write_start = Instant::now();
    write_rgb_image(&packed, output)?;
    let write_ms = elapsed_ms(write_start);

    let mut timings = TimingBreakdown::with_total(elapsed_ms(start));
    timings.push("read", read_ms);
    timings.stages.extend(stage_timings.stages);
    timings.push("write", write_ms);

    Ok(StageReport {
        stage,
        input: InputDescriptor {
            path: input.to_path_buf(),
            width: rgb.width(),
            height: rgb.height(),
        },
        output: output.to_path_buf(),
        channel_range: range,
        values,
        timings,
    })
}
