//! Image colour statistics.
//!
//! [`analyze`] makes one pass over a decoded RGBA8 image and summarizes
//! each of the red, green and blue channels:
//!
//! ```text
//! average = sum / (width * height)          [0, 255] scale
//! range   = max - min
//! weight  = range / (range_r + range_g + range_b)
//! ```
//!
//! Alpha is read but never used.
//!
//! # Degenerate images
//!
//! Nothing is guarded here. An empty image yields NaN averages (and, since
//! min/max keep their initial `255`/`0`, ranges of `-255` and weights of
//! `1/3`). A flat image yields zero ranges and NaN weights. Callers decide
//! what to do with that through [`ColorTransform::check`].
//!
//! # Example
//!
//! ```rust
//! use lutgen_core::RgbaImage;
//! use lutgen_color::analyze;
//!
//! let img = RgbaImage::new(2, 1, vec![0, 0, 0, 255, 255, 128, 64, 255]).unwrap();
//! let stats = analyze(&img);
//! assert_eq!(stats.average.r, 127.5);
//! assert_eq!(stats.max.g, 128);
//! ```

use crate::{ColorError, ColorResult};
use lutgen_core::{CHANNELS, Rgb, RgbaImage};
use rayon::prelude::*;
use serde::Serialize;

/// Per-channel statistics of one image.
///
/// Immutable snapshot computed once per generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorTransform {
    /// Number of pixels the statistics were computed over.
    pub pixel_count: usize,
    /// Per-channel arithmetic mean, `[0, 255]` scale.
    pub average: Rgb<f64>,
    /// Per-channel minimum.
    pub min: Rgb<u8>,
    /// Per-channel maximum.
    pub max: Rgb<u8>,
    /// Per-channel `max - min`.
    pub ranges: Rgb<f64>,
    /// Per-channel share of the summed ranges.
    pub weights: Rgb<f64>,
}

impl ColorTransform {
    /// Builds statistics from accumulated sums and extremes.
    ///
    /// `pixel_count` is the declared `width * height`.
    pub fn from_parts(pixel_count: usize, sum: Rgb<u64>, min: Rgb<u8>, max: Rgb<u8>) -> Self {
        let count = pixel_count as f64;
        let average = sum.map(|s| s as f64 / count);
        let ranges = max.to_f64().zip_with(min.to_f64(), |hi, lo| hi - lo);
        let total = ranges.r + ranges.g + ranges.b;
        let weights = ranges.map(|r| r / total);

        Self {
            pixel_count,
            average,
            min,
            max,
            ranges,
            weights,
        }
    }

    /// Average colour on the normalized `[0, 1]` scale.
    #[inline]
    pub fn average_normalized(&self) -> Rgb<f64> {
        self.average.map(|a| a / 255.0)
    }

    /// Returns `true` if any average or weight is NaN.
    ///
    /// Such statistics turn every sampled LUT value on the affected
    /// channels into NaN.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.average.has_nan() || self.weights.has_nan()
    }

    /// Rejects statistics that cannot define a finite transform.
    ///
    /// # Errors
    ///
    /// - [`ColorError::EmptyImage`] for zero-pixel images
    /// - [`ColorError::DegenerateImage`] when all three ranges are zero
    pub fn check(&self) -> ColorResult<()> {
        if self.pixel_count == 0 {
            return Err(ColorError::EmptyImage);
        }
        if self.ranges.r == 0.0 && self.ranges.g == 0.0 && self.ranges.b == 0.0 {
            return Err(ColorError::DegenerateImage {
                ranges: self.ranges,
            });
        }
        Ok(())
    }
}

/// Running sums and extremes for the three colour channels.
#[derive(Debug, Clone, Copy)]
struct Accum {
    sum: [u64; 3],
    min: [u8; 3],
    max: [u8; 3],
}

impl Accum {
    fn new() -> Self {
        Self {
            sum: [0; 3],
            min: [u8::MAX; 3],
            max: [0; 3],
        }
    }

    #[inline]
    fn push(mut self, px: &[u8]) -> Self {
        for c in 0..3 {
            let v = px[c];
            self.sum[c] += u64::from(v);
            self.min[c] = self.min[c].min(v);
            self.max[c] = self.max[c].max(v);
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for c in 0..3 {
            self.sum[c] += other.sum[c];
            self.min[c] = self.min[c].min(other.min[c]);
            self.max[c] = self.max[c].max(other.max[c]);
        }
        self
    }
}

/// Computes colour statistics for an image.
///
/// Sums are exact integers and min/max are order independent, so the
/// parallel reduction is bit-reproducible.
pub fn analyze(image: &RgbaImage) -> ColorTransform {
    let acc = image
        .par_pixels()
        .fold(Accum::new, Accum::push)
        .reduce(Accum::new, Accum::merge);
    finish(image.pixel_count(), acc)
}

/// Computes colour statistics for a raw interleaved RGBA buffer.
///
/// # Errors
///
/// Returns [`ColorError::Core`] if the buffer length is not a multiple of
/// four or disagrees with `width * height * 4`.
pub fn analyze_raw(data: &[u8], width: u32, height: u32) -> ColorResult<ColorTransform> {
    lutgen_core::image::validate(width, height, data)?;
    let acc = data
        .par_chunks_exact(CHANNELS)
        .fold(Accum::new, Accum::push)
        .reduce(Accum::new, Accum::merge);
    Ok(finish(width as usize * height as usize, acc))
}

fn finish(pixel_count: usize, acc: Accum) -> ColorTransform {
    let stats = ColorTransform::from_parts(
        pixel_count,
        Rgb::from_array(acc.sum),
        Rgb::from_array(acc.min),
        Rgb::from_array(acc.max),
    );
    tracing::debug!(
        pixels = pixel_count,
        average = %stats.average,
        ranges = %stats.ranges,
        weights = %stats.weights,
        "analyzed image colours"
    );
    stats
}
