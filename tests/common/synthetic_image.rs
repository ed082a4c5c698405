use sobel_edges::color::pack_rgb;
use sobel_edges::{GrayImage, Grid, RgbImage};

/// Vertical step edge: columns `< split_x` are 0.0, the rest 1.0.
pub fn step_gray(width: usize, height: usize, split_x: usize) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    Grid::from_fn(width, height, |x, _| if x < split_x { 0.0 } else { 1.0 })
}

/// High-contrast checkerboard in packed RGB, alternating dark and light cells.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    Grid::from_fn(width, height, |x, y| {
        let sum = x / cell + y / cell;
        if sum & 1 == 0 {
            pack_rgb(32, 32, 32)
        } else {
            pack_rgb(220, 220, 220)
        }
    })
}

/// Uniformly colored RGB image.
pub fn solid_rgb(width: usize, height: usize, r: u8, g: u8, b: u8) -> RgbImage {
    Grid::filled(width, height, pack_rgb(r, g, b))
}
