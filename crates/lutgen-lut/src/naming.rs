//! Output file naming.

use crate::LutFormat;

/// Base name used when the caller does not supply one.
pub const DEFAULT_BASE_NAME: &str = "generated_lut";

/// Makes a user-chosen name safe to use as a file stem.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, then the result is
/// lowercased. Replacement is per Unicode scalar value.
///
/// ```rust
/// use lutgen_lut::naming::sanitize_name;
///
/// assert_eq!(sanitize_name("My LUT!! v2"), "my_lut___v2");
/// ```
pub fn sanitize_name(base: &str) -> String {
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// File name for `base` encoded as `format`: `<sanitized>.<ext>`.
pub fn file_name(base: &str, format: LutFormat) -> String {
    format!("{}.{}", sanitize_name(base), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_examples() {
        assert_eq!(sanitize_name("My LUT!! v2"), "my_lut___v2");
        assert_eq!(sanitize_name("already_fine-01"), "already_fine-01");
        assert_eq!(sanitize_name("a.b/c\\d"), "a_b_c_d");
        assert_eq!(sanitize_name("Été"), "_t_");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn file_names() {
        assert_eq!(file_name("My LUT!! v2", LutFormat::Cube), "my_lut___v2.cube");
        assert_eq!(
            file_name(DEFAULT_BASE_NAME, LutFormat::Xmp),
            "generated_lut.xmp"
        );
    }
}
