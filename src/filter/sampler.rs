//! Clamp-to-edge addressing.
use crate::image::ImageView;

/// Nearest valid index for `v` in `0..extent`: `max(0, min(v, extent - 1))`.
///
/// `extent` must be non-zero.
#[inline]
pub fn clamp_index(v: isize, extent: usize) -> usize {
    debug_assert!(extent > 0, "clamp_index on an empty axis");
    if v <= 0 {
        0
    } else {
        (v as usize).min(extent - 1)
    }
}

/// Hands out image rows at signed row indices, replicating the top and
/// bottom border. Columns are clamped by the caller with [`clamp_index`].
#[derive(Clone, Copy, Debug)]
pub struct ClampSampler<'a, I> {
    image: &'a I,
}

impl<'a, I: ImageView> ClampSampler<'a, I> {
    /// `image` must be at least 1×1.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Row `y` after clamping, for callers that walk a row at a time.
    #[inline]
    pub fn row(&self, y: isize) -> &'a [I::Pixel] {
        self.image.row(clamp_index(y, self.image.height()))
    }
}
