//! Error types for colour analysis and LUT generation.

use lutgen_core::Rgb;
use thiserror::Error;

/// Colour pipeline error.
///
/// Malformed input buffers, encoding failures, and images whose statistics
/// cannot define a transform when the caller asked for them to be rejected.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Input buffer is malformed.
    #[error(transparent)]
    Core(#[from] lutgen_core::Error),

    /// LUT construction or encoding failed.
    #[error("LUT error: {0}")]
    Lut(#[from] lutgen_lut::LutError),

    /// Image has no pixels, so its average is undefined.
    #[error("image has no pixels")]
    EmptyImage,

    /// Every channel has zero range, so channel weights are undefined.
    #[error("image has no colour variation (ranges {ranges})")]
    DegenerateImage {
        /// Per-channel ranges, all zero.
        ranges: Rgb<f64>,
    },
}

impl ColorError {
    /// Returns `true` for errors raised by degenerate image statistics.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::EmptyImage | Self::DegenerateImage { .. })
    }
}

/// Result type for colour operations.
pub type ColorResult<T> = Result<T, ColorError>;
