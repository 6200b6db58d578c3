//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of colour values
//! sampled on a regular grid. Grid coordinate `i` along any axis stands for
//! the normalized input `i / (size - 1)`.

use crate::{LutError, LutResult};
use rayon::prelude::*;

/// Largest accepted number of samples per axis.
pub const MAX_SIZE: usize = 256;

/// A 3-dimensional lookup table.
///
/// # Structure
///
/// - `size^3` entries, each containing RGB output values
/// - Stored red-fastest: `idx = r + g * size + b * size^2`
///
/// # Example
///
/// ```rust
/// use lutgen_lut::Lut3D;
///
/// let lut = Lut3D::from_fn(17, |[r, g, b]| [r * 0.5, g, b]);
/// assert_eq!(lut.get(16, 0, 0), [0.5, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// LUT data, red-fastest.
    pub data: Vec<[f64; 3]>,
    /// Samples per axis.
    pub size: usize,
    /// Input domain minimum (per channel)
    pub domain_min: [f64; 3],
    /// Input domain maximum (per channel)
    pub domain_max: [f64; 3],
}

impl Lut3D {
    /// Creates an identity (pass-through) 3D LUT.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `2..=MAX_SIZE`.
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, |rgb| rgb)
    }

    /// Samples `f` at every grid point.
    ///
    /// Grid points are evaluated in parallel; each one is independent, so
    /// the result does not depend on scheduling.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `2..=MAX_SIZE`.
    pub fn from_fn<F>(size: usize, f: F) -> Self
    where
        F: Fn([f64; 3]) -> [f64; 3] + Sync,
    {
        assert!(
            (2..=MAX_SIZE).contains(&size),
            "3D LUT needs 2..={} samples per axis, got {}",
            MAX_SIZE, size
        );
        let total = size * size * size;
        let data = (0..total)
            .into_par_iter()
            .map(|i| {
                let r = i % size;
                let g = (i / size) % size;
                let b = i / (size * size);
                f([
                    grid_coord(r, size),
                    grid_coord(g, size),
                    grid_coord(b, size),
                ])
            })
            .collect();

        Self {
            data,
            size,
            domain_min: [0.0, 0.0, 0.0],
            domain_max: [1.0, 1.0, 1.0],
        }
    }

    /// Creates a 3D LUT from raw data.
    ///
    /// Data must be red-fastest with exactly `size^3` entries.
    pub fn from_data(data: Vec<[f64; 3]>, size: usize) -> LutResult<Self> {
        let expected = checked_entry_count(size)?;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            domain_min: [0.0, 0.0, 0.0],
            domain_max: [1.0, 1.0, 1.0],
        })
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: [f64; 3], max: [f64; 3]) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Returns `true` if the domain is the default `[0, 1]` cube.
    #[inline]
    pub fn has_default_domain(&self) -> bool {
        self.domain_min == [0.0, 0.0, 0.0] && self.domain_max == [1.0, 1.0, 1.0]
    }

    /// Returns the total number of entries in the LUT.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the index for a given (r, g, b) grid position.
    #[inline]
    pub fn index(&self, r: usize, g: usize, b: usize) -> usize {
        b * self.size * self.size + g * self.size + r
    }

    /// Gets the value at grid position (r, g, b).
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> [f64; 3] {
        self.data[self.index(r, g, b)]
    }

    /// Per-channel minimum and maximum output value, skipping NaN.
    ///
    /// Channels that are NaN everywhere report `(inf, -inf)`.
    pub fn output_range(&self) -> ([f64; 3], [f64; 3]) {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for rgb in &self.data {
            for c in 0..3 {
                min[c] = min[c].min(rgb[c]);
                max[c] = max[c].max(rgb[c]);
            }
        }
        (min, max)
    }

    /// Number of entries with at least one NaN channel.
    pub fn nan_count(&self) -> usize {
        self.data
            .iter()
            .filter(|rgb| rgb.iter().any(|v| v.is_nan()))
            .count()
    }
}

/// Number of entries in a `size^3` grid.
///
/// # Errors
///
/// Returns [`LutError::InvalidSize`] if `size` is outside `2..=MAX_SIZE`.
pub fn checked_entry_count(size: usize) -> LutResult<usize> {
    if !(2..=MAX_SIZE).contains(&size) {
        return Err(LutError::InvalidSize(format!(
            "{} samples per axis, expected 2..={}",
            size, MAX_SIZE
        )));
    }
    match size.checked_mul(size).and_then(|n| n.checked_mul(size)) {
        Some(count) => Ok(count),
        None => Err(LutError::InvalidSize(format!("{}^3 entries overflow", size))),
    }
}

/// Normalized input value of grid coordinate `i`.
#[inline]
pub fn grid_coord(i: usize, size: usize) -> f64 {
    i as f64 / (size - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_corners() {
        let lut = Lut3D::identity(33);
        assert_eq!(lut.get(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(lut.get(32, 32, 32), [1.0, 1.0, 1.0]);
        assert_eq!(lut.get(32, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(lut.get(0, 0, 32), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_red_fastest_layout() {
        let lut = Lut3D::identity(4);
        // Second entry is one red step
        assert_relative_eq!(lut.data[1][0], 1.0 / 3.0);
        assert_eq!(lut.data[1][1], 0.0);
        // Entry `size` is one green step
        assert_relative_eq!(lut.data[4][1], 1.0 / 3.0);
        // Entry `size^2` is one blue step
        assert_relative_eq!(lut.data[16][2], 1.0 / 3.0);
    }

    #[test]
    fn test_from_data() {
        let data: Vec<[f64; 3]> = (0..8).map(|_| [0.5, 0.5, 0.5]).collect();
        let lut = Lut3D::from_data(data, 2).unwrap();
        assert_eq!(lut.entry_count(), 8);
        assert_eq!(lut.get(1, 1, 1), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_from_data_wrong_len() {
        let data = vec![[0.0; 3]; 7];
        assert!(matches!(
            Lut3D::from_data(data, 2),
            Err(LutError::InvalidSize(_))
        ));
        assert!(Lut3D::from_data(vec![[0.0; 3]], 1).is_err());
    }

    #[test]
    fn test_entry_count_bounds() {
        assert_eq!(checked_entry_count(32).unwrap(), 32_768);
        assert_eq!(checked_entry_count(MAX_SIZE).unwrap(), 256 * 256 * 256);
        for size in [0, 1, MAX_SIZE + 1, 4_194_304, usize::MAX] {
            assert!(matches!(
                checked_entry_count(size),
                Err(LutError::InvalidSize(_))
            ));
        }
        // 4194304^3 wraps to 0 in 64-bit arithmetic
        assert!(Lut3D::from_data(Vec::new(), 4_194_304).is_err());
    }

    #[test]
    fn test_output_range_and_nan() {
        let mut lut = Lut3D::identity(2);
        lut.data[3] = [f64::NAN, 0.25, 0.25];
        let (min, max) = lut.output_range();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 1.0]);
        assert_eq!(lut.nan_count(), 1);
    }
}
