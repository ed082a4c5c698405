//! I/O helpers for packed RGB images and JSON.
//!
//! - `read_rgb_image`: decode a PNG/JPEG/etc. into a packed `RgbImage`.
//! - `write_rgb_image`: encode a packed `RgbImage`, format chosen by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, RgbImage};
use crate::color::{blue_u8, green_u8, pack_rgb, red_u8};
use crate::error::{Error, Result};
use image::{Rgb, RgbImage as RgbBuffer};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and pack every pixel into `0x00RRGGBB`.
///
/// Undecodable input is an error rather than an empty image; a file that
/// decodes to zero pixels yields `Error::EmptyImage`.
pub fn read_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    let data = img
        .pixels()
        .map(|&Rgb([r, g, b])| pack_rgb(r, g, b))
        .collect();
    debug!("read {} ({width}x{height})", path.display());
    RgbImage::from_vec(width, height, data)
}

/// Save a packed RGB image, creating parent directories as needed.
pub fn write_rgb_image(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = RgbBuffer::new(image.width() as u32, image.height() as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([red_u8(px), green_u8(px), blue_u8(px)]),
            );
        }
    }
    out.save(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
