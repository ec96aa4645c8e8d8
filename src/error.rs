//! Error type shared by the generation engine and the exporters.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    /// A requested grid dimension was zero.
    #[error("invalid grid dimensions {width}x{length}: both sides must be at least 1")]
    InvalidDimension { width: usize, length: usize },

    /// The noise scale was zero, negative or not a finite number.
    #[error("invalid noise scale {0}: must be a finite value greater than 0")]
    InvalidScale(f64),

    /// The grid has no interior cells to smooth.
    #[error("grid {width}x{length} is too small to smooth: need at least 3x3")]
    DimensionMismatch { width: usize, length: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
