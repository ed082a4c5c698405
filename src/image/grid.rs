//! Owned single-channel grid in row-major layout (stride == width).
//!
//! `Grid<f64>` carries gray intensities through the filters and
//! `Grid<u32>` carries packed `0x00RRGGBB` pixels to and from the codec.
//! Every stage allocates a fresh grid; inputs are only borrowed.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{Error, Result};

/// Real-valued gray intensities, nominally in `[0, 1]`.
pub type GrayImage = Grid<f64>;
/// Packed 24-bit RGB pixels (`0x00RRGGBB`).
pub type RgbImage = Grid<u32>;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Construct a default-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Construct a grid of size `w × h` with every sample set to `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap a row-major buffer, checking that it holds exactly `w × h` samples.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != w * h {
            return Err(Error::LengthMismatch {
                expected: w * h,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for (row, samples) in rows.iter().enumerate() {
            let samples = samples.as_ref();
            if samples.len() != w {
                return Err(Error::RaggedRows {
                    row,
                    expected: w,
                    actual: samples.len(),
                });
            }
            data.extend_from_slice(samples);
        }
        Self::from_vec(w, h, data)
    }

    /// Build a grid by evaluating `f(x, y)` for every position.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the sample at (x, y).
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the sample at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Apply `f` to every sample, producing a new grid of the same size.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Copy the samples out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Copy> ImageView for Grid<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl<T: Copy> ImageViewMut for Grid<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if self.stride == self.w {
            Some(&mut self.data[..self.w * self.h])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let grid = Grid::from_rows(&[[1u32, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(grid.dims(), (3, 2));
        assert_eq!(grid.get(2, 0), 3);
        assert_eq!(grid.get(0, 1), 4);
        assert_eq!(grid.row(1), &[4, 5, 6]);
        assert_eq!(grid.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![0.5]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert!(
            matches!(
                err,
                Error::RaggedRows {
                    row: 1,
                    expected: 2,
                    actual: 1
                }
            ),
            "unexpected error: {err}"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![0.0f64; 3]).is_err());
        let grid = Grid::from_vec(2, 2, vec![0.0f64; 4]).unwrap();
        assert!(grid.is_contiguous());
        assert_eq!(grid.as_slice().map(<[f64]>::len), Some(4));
    }

    #[test]
    fn empty_grid_reports_empty() {
        let grid: GrayImage = Grid::new(0, 4);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 4);
        assert!(Grid::<f64>::from_rows::<Vec<f64>>(&[]).unwrap().is_empty());
    }

    #[test]
    fn map_and_row_mut_do_not_alias() {
        let mut src = Grid::filled(3, 2, 1.0f64);
        let doubled = src.map(|v| v * 2.0);
        src.row_mut(0)[1] = 7.0;
        assert_eq!(src.get(1, 0), 7.0);
        assert!(doubled.data.iter().all(|&v| v == 2.0));
    }
}
