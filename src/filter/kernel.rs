//! Fixed 3×3 kernels and the borrowed kernel type used by `convolve`.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A borrowed 2D kernel in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel<'a> {
    data: &'a [f64],
    width: usize,
    height: usize,
}

impl<'a> Kernel<'a> {
    /// Wrap `data` as a `width × height` kernel. Shape is checked by
    /// [`Kernel::validate`], not here, so malformed kernels can be
    /// represented and rejected by `convolve`.
    pub const fn new(data: &'a [f64], width: usize, height: usize) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn weights(&self) -> &'a [f64] {
        self.data
    }

    /// Weight at column `x`, row `y`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Row `y` of the weights.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [f64] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Check the kernel is square, odd-sized and fully populated; returns
    /// its radius (`side / 2`).
    pub fn validate(&self) -> Result<usize> {
        let ok = self.width == self.height
            && self.width % 2 == 1
            && self.data.len() == self.width * self.height;
        if !ok {
            return Err(Error::InvalidKernel {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            });
        }
        Ok(self.width / 2)
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// 3×3 averaging kernel: centre 0.2, all eight neighbours 0.1.
pub const SMOOTHING_3X3: Kernel<'static> =
    Kernel::new(&[0.1, 0.1, 0.1, 0.1, 0.2, 0.1, 0.1, 0.1, 0.1], 3, 3);
/// Horizontal Sobel derivative.
pub const SOBEL_X_3X3: Kernel<'static> =
    Kernel::new(&[-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0], 3, 3);
/// Vertical Sobel derivative.
pub const SOBEL_Y_3X3: Kernel<'static> =
    Kernel::new(&[-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0], 3, 3);

/// Named lookup of the built-in kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    Smoothing,
    GradientX,
    GradientY,
}

impl KernelKind {
    pub fn kernel(self) -> Kernel<'static> {
        match self {
            KernelKind::Smoothing => SMOOTHING_3X3,
            KernelKind::GradientX => SOBEL_X_3X3,
            KernelKind::GradientY => SOBEL_Y_3X3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_kernels_are_valid_3x3() {
        for kind in [
            KernelKind::Smoothing,
            KernelKind::GradientX,
            KernelKind::GradientY,
        ] {
            assert_eq!(kind.kernel().validate().unwrap(), 1, "{kind:?}");
        }
    }

    #[test]
    fn smoothing_weights_sum_to_one() {
        assert!((SMOOTHING_3X3.sum() - 1.0).abs() < 1e-12);
        assert_eq!(SMOOTHING_3X3.at(1, 1), 0.2);
        assert_eq!(SMOOTHING_3X3.at(0, 2), 0.1);
    }

    #[test]
    fn gradient_kernels_are_transposes() {
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(SOBEL_X_3X3.at(x, y), SOBEL_Y_3X3.at(y, x));
            }
        }
        assert_eq!(SOBEL_X_3X3.sum(), 0.0);
        assert_eq!(SOBEL_X_3X3.row(1), &[-2.0, 0.0, 2.0]);
    }

    #[test]
    fn malformed_kernels_are_rejected() {
        let even = [0.25; 4];
        assert!(matches!(
            Kernel::new(&even, 2, 2).validate(),
            Err(Error::InvalidKernel {
                width: 2,
                height: 2,
                len: 4
            })
        ));
        let rect = [1.0; 3];
        assert!(Kernel::new(&rect, 3, 1).validate().is_err());
        let short = [1.0; 8];
        assert!(Kernel::new(&short, 3, 3).validate().is_err());
        assert!(Kernel::new(&[], 0, 0).validate().is_err());
        assert_eq!(Kernel::new(&[2.0], 1, 1).validate().unwrap(), 0);
    }

    #[test]
    fn kernel_kind_parses_snake_case() {
        let kind: KernelKind = serde_json::from_str("\"gradient_x\"").unwrap();
        assert_eq!(kind, KernelKind::GradientX);
    }
}
