//! Error types for lutgen-core operations.
//!
//! The [`Error`] enum covers the failure modes of building and reading a
//! decoded image buffer:
//! - Malformed interleaved buffers (length not a multiple of four)
//! - Buffers whose length disagrees with the declared dimensions
//! - Pixel access outside the image
//!
//! # Usage
//!
//! ```rust
//! use lutgen_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Used By
//!
//! - [`crate::image::RgbaImage`] - buffer validation
//! - `lutgen-color` - wraps these errors in `ColorError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// The pixel buffer is structurally invalid.
    ///
    /// Returned when the interleaved RGBA buffer length is not a multiple
    /// of four, so it cannot be split into whole pixels.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What is wrong with the input
        reason: String,
    },

    /// Buffer length disagrees with `width * height * 4`.
    #[error("buffer of {actual} bytes does not match {width}x{height} RGBA image ({expected} bytes)")]
    DimensionMismatch {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Expected buffer length in bytes
        expected: usize,
        /// Actual buffer length in bytes
        actual: usize,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidInput`] error.
    #[inline]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(width: u32, height: u32, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            width,
            height,
            expected,
            actual,
        }
    }
}
