//! Image-adaptive per-channel tone transform.
//!
//! For each channel `c` independently:
//!
//! ```text
//! out[c] = clamp(in[c] ^ (1 + weight[c]) * (average[c] / 255), 0, 1)
//! ```
//!
//! The channel with the widest range in the source image gets the largest
//! exponent and so the strongest shadow/midtone compression, and the source
//! average on that channel sets the overall cast. This is a tone mapping
//! driven by image statistics, not a colorimetric model.
//!
//! NaN statistics propagate: a NaN weight or average makes every output on
//! that channel NaN, including at `in = 0` and `in = 1`.

use crate::ColorTransform;
use lutgen_core::Rgb;
use lutgen_lut::Lut3D;

/// Samples per axis of generated LUTs.
pub const LUT_SIZE: usize = 32;

/// Maps one normalized input colour through the transform.
///
/// ```rust
/// use lutgen_core::Rgb;
/// use lutgen_color::{ColorTransform, transform};
///
/// let stats = ColorTransform::from_parts(
///     4,
///     Rgb::splat(447),
///     Rgb::splat(0),
///     Rgb::splat(255),
/// );
/// let out = transform(Rgb::splat(1.0), &stats);
/// assert!((out.r - 111.75 / 255.0).abs() < 1e-12);
/// ```
pub fn transform(input: Rgb<f64>, stats: &ColorTransform) -> Rgb<f64> {
    let exponent = stats.weights.map(|w| 1.0 + w);
    let scale = stats.average_normalized();
    input
        .zip_with(exponent, pow)
        .zip_with(scale, |v, s| v * s)
        .clamp01()
}

/// `powf` that returns NaN for a NaN exponent.
///
/// IEEE `pow(1, NaN)` is 1, which would leak finite values out of a
/// degenerate transform.
#[inline]
fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

/// Samples the transform over a `size^3` grid.
pub fn bake(stats: &ColorTransform, size: usize) -> Lut3D {
    Lut3D::from_fn(size, |rgb| transform(Rgb::from(rgb), stats).to_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_stats() -> ColorTransform {
        // 2x2 image (0, 255, 128, 64) on every channel
        ColorTransform::from_parts(4, Rgb::splat(447), Rgb::splat(0), Rgb::splat(255))
    }

    #[test]
    fn test_white_maps_to_average() {
        let out = transform(Rgb::splat(1.0), &scenario_stats());
        assert_relative_eq!(out.r, 0.438_235_294_117_647, epsilon = 1e-12);
        assert_relative_eq!(out.g, out.r);
        assert_relative_eq!(out.b, out.r);
    }

    #[test]
    fn test_black_stays_black() {
        let out = transform(Rgb::splat(0.0), &scenario_stats());
        assert_eq!(out, Rgb::splat(0.0));
    }

    #[test]
    fn test_midtone_power() {
        let stats = scenario_stats();
        let out = transform(Rgb::new(0.5, 0.25, 0.75), &stats);
        let scale = 111.75 / 255.0;
        let e = 1.0 + 1.0 / 3.0;
        assert_relative_eq!(out.r, 0.5f64.powf(e) * scale, epsilon = 1e-12);
        assert_relative_eq!(out.g, 0.25f64.powf(e) * scale, epsilon = 1e-12);
        assert_relative_eq!(out.b, 0.75f64.powf(e) * scale, epsilon = 1e-12);
    }

    #[test]
    fn test_output_clamped() {
        // Averages above 255 cannot come from 8-bit pixels, but clamp anyway
        let stats = ColorTransform::from_parts(
            1,
            Rgb::new(510, 0, 255),
            Rgb::splat(0),
            Rgb::new(255, 10, 5),
        );
        for v in [0.0, 0.3, 0.9, 1.0] {
            let out = transform(Rgb::splat(v), &stats);
            for c in out.to_array() {
                assert!((0.0..=1.0).contains(&c), "{} out of range", c);
            }
        }
        assert_eq!(transform(Rgb::splat(1.0), &stats).r, 1.0);
    }

    #[test]
    fn test_nan_weights_poison_every_sample() {
        let flat = ColorTransform::from_parts(
            9,
            Rgb::new(360, 810, 1800),
            Rgb::new(40, 90, 200),
            Rgb::new(40, 90, 200),
        );
        for v in [0.0, 0.5, 1.0] {
            let out = transform(Rgb::splat(v), &flat);
            assert!(out.r.is_nan() && out.g.is_nan() && out.b.is_nan());
        }
    }

    #[test]
    fn test_bake_matches_transform() {
        let stats = scenario_stats();
        let lut = bake(&stats, LUT_SIZE);
        assert_eq!(lut.size, 32);
        assert_eq!(lut.entry_count(), 32_768);

        let expected = transform(Rgb::new(3.0 / 31.0, 17.0 / 31.0, 1.0), &stats);
        assert_eq!(lut.get(3, 17, 31), expected.to_array());
        assert_eq!(lut.get(31, 31, 31), transform(Rgb::splat(1.0), &stats).to_array());
    }
}
