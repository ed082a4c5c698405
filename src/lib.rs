#![doc = include_str!("../README.md")]

// Core filters and the grid type they operate on.
pub mod error;
pub mod filter;
pub mod image;

// Conversion, orchestration and tooling around the filters.
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::{to_gray, to_rgb, ChannelRange};
pub use crate::error::{Error, Result};
pub use crate::filter::{combine_magnitude, convolve, smooth, sobel, Kernel};
pub use crate::image::{GrayImage, Grid, RgbImage};
pub use crate::pipeline::{process_file, run_stage, Stage};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use sobel_edges::prelude::*;
///
/// let gray = Grid::from_fn(8, 8, |x, _| if x < 4 { 0.0 } else { 1.0 });
/// let edges = sobel(&gray).unwrap();
/// assert_eq!(edges.dims(), (8, 8));
/// assert!(edges.get(4, 4) > 1.0);
/// ```
pub mod prelude {
    pub use crate::filter::{convolve, smooth, sobel, SMOOTHING_3X3, SOBEL_X_3X3, SOBEL_Y_3X3};
    pub use crate::image::{GrayImage, Grid, ImageView, RgbImage};
    pub use crate::{to_gray, to_rgb, ChannelRange};
}
