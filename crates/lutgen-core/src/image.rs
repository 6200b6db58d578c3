//! Decoded RGBA8 image buffer.
//!
//! [`RgbaImage`] is the input boundary of the LUT generator: whatever decodes
//! the photograph hands over an interleaved `R G B A R G B A ...` byte buffer
//! plus its dimensions.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lutgen_core::RgbaImage;
//!
//! let img = RgbaImage::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
//! assert_eq!(img.pixel_count(), 2);
//! assert_eq!(img.get(1, 0).unwrap(), [0, 0, 255, 255]);
//!
//! // A buffer that disagrees with the dimensions is rejected
//! assert!(RgbaImage::new(2, 2, vec![0; 8]).is_err());
//! ```

use crate::{Error, Result};
use rayon::prelude::*;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

/// Owned, validated RGBA8 pixel buffer.
///
/// Zero-sized images (`0x0`, `0xN`) with an empty buffer are valid; the
/// analyzer treats them as a defined boundary case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Creates an image from an interleaved RGBA buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `data.len()` is not a multiple of 4
    /// - [`Error::DimensionMismatch`] if `data.len() != width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        validate(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    ///
    /// ```rust
    /// use lutgen_core::RgbaImage;
    ///
    /// let img = RgbaImage::from_fn(4, 4, |x, y| [(x * 60) as u8, (y * 60) as u8, 0, 255]);
    /// assert_eq!(img.get(3, 2).unwrap(), [180, 120, 0, 255]);
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the image.
    pub fn get(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let p = &self.data[idx..idx + CHANNELS];
        Ok([p[0], p[1], p[2], p[3]])
    }

    /// Parallel iterator over pixels as 4-byte slices.
    pub fn par_pixels(&self) -> rayon::slice::ChunksExact<'_, u8> {
        self.data.par_chunks_exact(CHANNELS)
    }
}

/// Checks an interleaved RGBA buffer against declared dimensions.
///
/// # Errors
///
/// Same as [`RgbaImage::new`].
pub fn validate(width: u32, height: u32, data: &[u8]) -> Result<()> {
    if data.len() % CHANNELS != 0 {
        return Err(Error::invalid_input(format!(
            "buffer length {} is not a multiple of {}",
            data.len(),
            CHANNELS
        )));
    }
    let too_large = || Error::invalid_input(format!("{}x{} image is too large", width, height));
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(too_large)?;
    if expected != data.len() {
        return Err(Error::dimension_mismatch(width, height, expected, data.len()));
    }
    Ok(())
}
