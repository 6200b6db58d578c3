//! RGB value types.
//!
//! Two scales flow through the LUT generator and must never be mixed:
//!
//! - `Rgb<u8>` - 8-bit channel values in `[0, 255]`, read from decoded pixels
//! - `Rgb<f64>` - floating-point values; normalized `[0, 1]` for transform
//!   input/output and grid sampling, `[0, 255]` for image statistics
//!
//! ```
//! use lutgen_core::{Channel, Rgb};
//!
//! let px: Rgb<u8> = Rgb::new(255, 128, 0);
//! let wide = px.to_f64();
//! assert_eq!(wide[Channel::Green], 128.0);
//! ```

use std::fmt;
use std::ops::Index;

/// A colour channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    /// All channels in R, G, B order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.pad(name)
    }
}

/// Three channel values `r, g, b`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb<T> {
    /// Red channel value.
    pub r: T,
    /// Green channel value.
    pub g: T,
    /// Blue channel value.
    pub b: T,
}

impl<T: Copy> Rgb<T> {
    /// Create a new RGB value.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Create a value with the same number in every channel.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Get RGB values as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from an array.
    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Apply a function to each channel.
    #[inline]
    pub fn map<U: Copy, F: Fn(T) -> U>(self, f: F) -> Rgb<U> {
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }

    /// Combine two values channel by channel.
    #[inline]
    pub fn zip_with<U: Copy, V: Copy, F: Fn(T, U) -> V>(self, other: Rgb<U>, f: F) -> Rgb<V> {
        Rgb::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }
}

impl Rgb<u8> {
    /// Widen to `f64` without rescaling (stays on the `[0, 255]` scale).
    #[inline]
    pub fn to_f64(self) -> Rgb<f64> {
        self.map(f64::from)
    }
}

impl Rgb<f64> {
    /// Clamp every channel to `[0, 1]`.
    ///
    /// NaN channels stay NaN.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|v| v.clamp(0.0, 1.0))
    }

    /// Sum of the three channels.
    #[inline]
    pub fn sum(self) -> f64 {
        self.r + self.g + self.b
    }

    /// Returns `true` if any channel is NaN.
    #[inline]
    pub fn has_nan(self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }
}

impl<T> Index<Channel> for Rgb<T> {
    type Output = T;

    #[inline]
    fn index(&self, channel: Channel) -> &T {
        match channel {
            Channel::Red => &self.r,
            Channel::Green => &self.g,
            Channel::Blue => &self.b,
        }
    }
}

impl<T: Copy> From<[T; 3]> for Rgb<T> {
    fn from(arr: [T; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl<T: fmt::Display> fmt::Display for Rgb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_channel_index() {
        let rgb = Rgb::new(1u8, 2, 3);
        assert_eq!(rgb[Channel::Red], 1);
        assert_eq!(rgb[Channel::Green], 2);
        assert_eq!(rgb[Channel::Blue], 3);
        let picked: Vec<u8> = Channel::ALL.iter().map(|&ch| rgb[ch]).collect();
        assert_eq!(picked, rgb.to_array());
        assert_eq!(Channel::Green.to_string(), "green");
        assert_eq!(format!("{:<6}|", Channel::Red), "red   |");
    }

    #[test]
    fn test_to_f64_keeps_scale() {
        let rgb = Rgb::new(0u8, 51, 255).to_f64();
        assert_eq!(rgb, Rgb::new(0.0, 51.0, 255.0));
    }

    #[test]
    fn test_clamp_keeps_nan() {
        let rgb = Rgb::new(-0.5, 1.5, f64::NAN).clamp01();
        assert_eq!(rgb.r, 0.0);
        assert_eq!(rgb.g, 1.0);
        assert!(rgb.b.is_nan());
        assert!(rgb.has_nan());
    }

    #[test]
    fn test_zip_with() {
        let a = Rgb::new(10.0, 20.0, 30.0);
        let b = Rgb::new(1.0, 2.0, 3.0);
        let c = a.zip_with(b, |x, y| x - y);
        assert_eq!(c, Rgb::new(9.0, 18.0, 27.0));
        assert_relative_eq!(c.sum(), 54.0);
    }
}
