//! Error types for edgekit.

use thiserror::Error;

/// Result alias for edgekit operations.
pub type EdgeKitResult<T> = std::result::Result<T, EdgeKitError>;

/// Errors that can occur when building grids or configuring detectors.
///
/// Edge detection itself is total and never returns one of these.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EdgeKitError {
    /// Width and height do not describe a buffer.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer is shorter than the dimensions require.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// A region of interest does not fit inside the source grid.
    #[error(
        "roi at ({row}, {col}) of {height}x{width} out of bounds for {grid_height}x{grid_width} grid"
    )]
    RoiOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        grid_height: usize,
        grid_width: usize,
    },
    /// The amplifier must be a finite value greater than zero.
    #[error("invalid amplifier {value}: must be finite and > 0")]
    InvalidAmplifier { value: f64 },
    /// A template matching detector needs at least one kernel.
    #[error("template matching detector needs at least one kernel")]
    EmptyKernelSet,
    /// The detector name is not one of the built-in presets.
    #[error("unknown detector: {name}")]
    UnknownDetector { name: String },
    /// Decoding or encoding an image file failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
