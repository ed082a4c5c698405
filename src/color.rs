//! RGB ↔ gray conversion for packed `0x00RRGGBB` pixels.
//!
//! Gray is the equal-weight mean of the three normalized channels (not a
//! perceptual luma). Going back to RGB scales by 255, truncates and
//! replicates the value into all three channels.
use crate::image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};

/// How gray values outside `[0, 1]` are packed into 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelRange {
    /// Saturate to `[0, 255]` after scaling.
    #[default]
    Clamp,
    /// Keep the low 8 bits of the truncated value, so overflow wraps around.
    Wrap,
}

#[inline]
pub fn red_u8(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xff) as u8
}

#[inline]
pub fn green_u8(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xff) as u8
}

#[inline]
pub fn blue_u8(rgb: u32) -> u8 {
    (rgb & 0xff) as u8
}

/// Red component in `[0, 1]`.
#[inline]
pub fn red(rgb: u32) -> f64 {
    f64::from(red_u8(rgb)) / 255.0
}

/// Green component in `[0, 1]`.
#[inline]
pub fn green(rgb: u32) -> f64 {
    f64::from(green_u8(rgb)) / 255.0
}

/// Blue component in `[0, 1]`.
#[inline]
pub fn blue(rgb: u32) -> f64 {
    f64::from(blue_u8(rgb)) / 255.0
}

/// Mean of the normalized channels.
///
/// Summed as integers and divided once so that a replicated pixel `v`
/// maps to exactly `v / 255`.
#[inline]
pub fn gray(rgb: u32) -> f64 {
    let sum = u32::from(red_u8(rgb)) + u32::from(green_u8(rgb)) + u32::from(blue_u8(rgb));
    f64::from(sum) / (3.0 * 255.0)
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Scale a gray value to one 8-bit channel value.
#[inline]
pub fn gray_to_channel(value: f64, range: ChannelRange) -> u8 {
    let scaled = value * 255.0;
    match range {
        ChannelRange::Clamp => scaled.clamp(0.0, 255.0) as u8,
        // float-to-int `as` maps NaN to 0
        ChannelRange::Wrap => (scaled as i64) as u8,
    }
}

/// Replicate one gray value into all three channels.
#[inline]
pub fn gray_to_rgb(value: f64, range: ChannelRange) -> u32 {
    let c = gray_to_channel(value, range);
    pack_rgb(c, c, c)
}

/// Convert a packed RGB image to gray intensities in `[0, 1]`.
pub fn to_gray(image: &RgbImage) -> GrayImage {
    image.map(gray)
}

/// Convert gray intensities back to packed RGB.
pub fn to_rgb(image: &GrayImage, range: ChannelRange) -> RgbImage {
    image.map(|v| gray_to_rgb(v, range))
}
