//! Fixed-point decimal rendering for LUT values.
//!
//! Values follow ECMAScript `Number.prototype.toFixed` rules: correctly
//! rounded, exact ties away from zero, `NaN` for NaN, no negative zero.
//! Rust's `{:.N}` rounds exact ties to even, so ties are handled here.
//!
//! ```rust
//! use lutgen_lut::fixed::Fixed;
//!
//! assert_eq!(Fixed::new(0.4382352941, 6).to_string(), "0.438235");
//! assert_eq!(Fixed::new(100.125, 2).to_string(), "100.13");
//! assert_eq!(Fixed::new(f64::NAN, 6).to_string(), "NaN");
//! ```

use std::fmt;

/// Decimal places used for LUT output values.
pub const VALUE_DIGITS: u32 = 6;

/// Largest precision handled exactly; `5^digits * 2^53` must fit in `u128`.
const MAX_EXACT_DIGITS: u32 = 20;

/// Display adapter rendering `value` with `digits` decimals.
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    value: f64,
    digits: u32,
}

impl Fixed {
    /// Wraps a value for fixed-point display.
    #[inline]
    pub fn new(value: f64, digits: u32) -> Self {
        Self { value, digits }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        // No "-0.000000"
        let v = if v == 0.0 { 0.0 } else { v };
        let digits = self.digits as usize;

        if self.digits <= MAX_EXACT_DIGITS {
            if let Some(scaled) = tie_rounded_up(v.abs(), self.digits) {
                let sign = if v < 0.0 { "-" } else { "" };
                let pow = 10u128.pow(self.digits);
                let (int_part, frac_part) = (scaled / pow, scaled % pow);
                return if digits == 0 {
                    write!(f, "{}{}", sign, int_part)
                } else {
                    write!(f, "{}{}.{:0width$}", sign, int_part, frac_part, width = digits)
                };
            }
        }
        write!(f, "{:.*}", digits, v)
    }
}

/// Renders `value` with `digits` decimals.
#[inline]
pub fn to_fixed(value: f64, digits: u32) -> String {
    Fixed::new(value, digits).to_string()
}

/// If `v * 10^digits` lies exactly halfway between two integers, returns the
/// upper one; otherwise `None`.
fn tie_rounded_up(v: f64, digits: u32) -> Option<u128> {
    let bits = v.to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1u64 << 52) - 1);
    // v = mantissa * 2^e
    let (mantissa, e) = if exp == 0 {
        (frac, -1074)
    } else {
        (frac | (1u64 << 52), exp - 1075)
    };

    // v * 10^d = mantissa * 5^d * 2^(e + d)
    let scaled = u128::from(mantissa) * 5u128.pow(digits);
    let shift = -(e + digits as i32);
    if !(1..=127).contains(&shift) {
        return None;
    }
    let shift = shift as u32;
    let mask = (1u128 << shift) - 1;
    if scaled & mask == 1u128 << (shift - 1) {
        Some((scaled >> shift) + 1)
    } else {
        None
    }
}
