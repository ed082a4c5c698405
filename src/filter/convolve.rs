//! Same-size 2D convolution with clamp-to-edge borders.
//!
//! Weights are applied in correlation order: kernel entry `(kx, ky)`
//! multiplies the sample at `(x + kx - r, y + ky - r)` where `r` is the
//! kernel radius. For every output row the `K` clamped source rows are
//! looked up once; column indices are clamped per tap.
//!
//! Complexity: O(W·H·K²), one output buffer.
use super::kernel::Kernel;
use super::sampler::{clamp_index, ClampSampler};
use crate::error::{Error, Result};
use crate::image::{GrayImage, ImageView, ImageViewMut};
use log::debug;

/// Convolve a single-channel image with a square, odd-sized kernel.
///
/// Fails with `Error::EmptyImage` for a zero-sized image and with
/// `Error::InvalidKernel` for a malformed kernel.
pub fn convolve<I>(image: &I, kernel: &Kernel<'_>) -> Result<GrayImage>
where
    I: ImageView<Pixel = f64>,
{
    let radius = kernel.validate()?;
    let (w, h) = image.dims();
    if image.is_empty() {
        return Err(Error::EmptyImage {
            width: w,
            height: h,
        });
    }
    debug!(
        "convolve {w}x{h} with {k}x{k} kernel",
        k = kernel.width()
    );

    let side = kernel.width();
    let r = radius as isize;
    let sampler = ClampSampler::new(image);
    let mut out = GrayImage::new(w, h);
    let mut src_rows: Vec<&[f64]> = Vec::with_capacity(side);
    for y in 0..h {
        src_rows.clear();
        src_rows.extend((0..side).map(|ky| sampler.row(y as isize + ky as isize - r)));
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (ky, src_row) in src_rows.iter().enumerate() {
                for (kx, &weight) in kernel.row(ky).iter().enumerate() {
                    let sx = clamp_index(x as isize + kx as isize - r, w);
                    sum += weight * src_row[sx];
                }
            }
            *dst_px = sum;
        }
    }
    Ok(out)
}
