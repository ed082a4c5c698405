//! Sobel gradients, gradient magnitude and 3×3 smoothing.
//!
//! - `sobel_x` / `sobel_y` convolve with the derivative kernels.
//! - `combine_magnitude` takes the per-pixel Euclidean norm `sqrt(gx^2+gy^2)`.
//! - `sobel` chains both; `sobel_gradients` keeps all three buffers.
//!
//! Nothing here clamps: a unit step yields a magnitude of 4.
use super::convolve::convolve;
use super::kernel::{SMOOTHING_3X3, SOBEL_X_3X3, SOBEL_Y_3X3};
use crate::error::{Error, Result};
use crate::image::{GrayImage, ImageView, ImageViewMut};

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Gradients {
    /// Horizontal derivative (convolution with `SOBEL_X_3X3`)
    pub gx: GrayImage,
    /// Vertical derivative (convolution with `SOBEL_Y_3X3`)
    pub gy: GrayImage,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: GrayImage,
}

/// Per-pixel `sqrt(gx^2 + gy^2)`. Both inputs must have the same size.
pub fn combine_magnitude<A, B>(gx: &A, gy: &B) -> Result<GrayImage>
where
    A: ImageView<Pixel = f64>,
    B: ImageView<Pixel = f64>,
{
    if gx.dims() != gy.dims() {
        return Err(Error::DimensionMismatch {
            expected: gx.dims(),
            actual: gy.dims(),
        });
    }
    let (w, h) = gx.dims();
    let mut mag = GrayImage::new(w, h);
    for (y, (row_x, row_y)) in gx.rows().zip(gy.rows()).enumerate() {
        let out = mag.row_mut(y);
        for ((dst, &dx), &dy) in out.iter_mut().zip(row_x).zip(row_y) {
            *dst = (dx * dx + dy * dy).sqrt();
        }
    }
    Ok(mag)
}

/// Horizontal Sobel response.
pub fn sobel_x<I: ImageView<Pixel = f64>>(gray: &I) -> Result<GrayImage> {
    convolve(gray, &SOBEL_X_3X3)
}

/// Vertical Sobel response.
pub fn sobel_y<I: ImageView<Pixel = f64>>(gray: &I) -> Result<GrayImage> {
    convolve(gray, &SOBEL_Y_3X3)
}

/// Compute Sobel gradients and their magnitude on a single‑channel image.
pub fn sobel_gradients<I: ImageView<Pixel = f64>>(gray: &I) -> Result<Gradients> {
    let gx = sobel_x(gray)?;
    let gy = sobel_y(gray)?;
    let mag = combine_magnitude(&gx, &gy)?;
    Ok(Gradients { gx, gy, mag })
}

/// Sobel gradient magnitude.
pub fn sobel<I: ImageView<Pixel = f64>>(gray: &I) -> Result<GrayImage> {
    sobel_gradients(gray).map(|g| g.mag)
}

/// Apply the 3×3 averaging kernel.
pub fn smooth<I: ImageView<Pixel = f64>>(gray: &I) -> Result<GrayImage> {
    convolve(gray, &SMOOTHING_3X3)
}
