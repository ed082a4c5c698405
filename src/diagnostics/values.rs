use crate::image::{GrayImage, ImageView};
use serde::Serialize;

/// Summary of a gray image's value range ahead of channel packing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    /// Samples below 0 or above 1, which cannot be packed losslessly.
    pub out_of_range: usize,
}

impl ValueRange {
    pub fn of(image: &GrayImage) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut out_of_range = 0;
        for row in image.rows() {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
                if !(0.0..=1.0).contains(&v) {
                    out_of_range += 1;
                }
            }
        }
        Self {
            min,
            max,
            out_of_range,
        }
    }

    pub fn fits_unit_interval(&self) -> bool {
        self.out_of_range == 0
    }
}
