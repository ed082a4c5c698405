//! Error type shared by the filters, color conversion and image I/O.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("invalid kernel: {width}x{height} with {len} weights (expected square, odd-sized)")]
    InvalidKernel {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("image size mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("ragged rows: row {row} has {actual} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by malformed arguments rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyImage { .. }
                | Error::InvalidKernel { .. }
                | Error::DimensionMismatch { .. }
                | Error::RaggedRows { .. }
                | Error::LengthMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
