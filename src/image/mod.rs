pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::{GrayImage, Grid, RgbImage};
pub use self::traits::{ImageView, ImageViewMut, Rows};
