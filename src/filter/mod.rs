//! Convolution filters: clamp-to-edge sampling, fixed 3×3 kernels and
//! Sobel gradient magnitude.
//!
//! - `convolve` applies any square, odd-sized kernel to a single-channel
//!   `f64` image and returns an image of the same size.
//! - Borders replicate the nearest edge sample (`clamp_index`).
//! - `sobel` combines the horizontal and vertical responses into
//!   `sqrt(gx^2 + gy^2)`; `smooth` applies the 3×3 averaging kernel.
//!
//! Results are never clamped: gradient magnitudes routinely exceed 1.

pub mod convolve;
pub mod gradient;
pub mod kernel;
pub mod sampler;

pub use convolve::convolve;
pub use gradient::{
    combine_magnitude, smooth, sobel, sobel_gradients, sobel_x, sobel_y, Gradients,
};
pub use kernel::{Kernel, KernelKind, SMOOTHING_3X3, SOBEL_X_3X3, SOBEL_Y_3X3};
pub use sampler::{clamp_index, ClampSampler};
