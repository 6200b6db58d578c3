//! One-shot LUT generation.
//!
//! A [`LutRequest`] carries everything a generation needs: the decoded
//! image, the output format, the user's base name and what to do with
//! degenerate images. [`generate`] runs analyze -> bake -> encode and
//! returns the file content with its sanitized file name.
//!
//! ```rust
//! use lutgen_core::RgbaImage;
//! use lutgen_color::{LutRequest, generate};
//! use lutgen_lut::LutFormat;
//!
//! let img = RgbaImage::from_fn(8, 8, |x, y| [(x * 32) as u8, (y * 32) as u8, 128, 255]);
//! let out = generate(&LutRequest::new(img, LutFormat::Cube).with_base_name("My Look")).unwrap();
//! assert_eq!(out.filename, "my_look.cube");
//! assert!(out.content.contains("LUT_3D_SIZE 32"));
//! ```
//!
//! Requests share no state, so independent requests can run in parallel.

use crate::{ColorResult, ColorTransform, LUT_SIZE, analyze, bake};
use lutgen_core::RgbaImage;
use lutgen_lut::cube::{self, CubeHeader};
use lutgen_lut::fixed::Fixed;
use lutgen_lut::naming::{self, DEFAULT_BASE_NAME};
use lutgen_lut::{LutFormat, xmp};

/// Title written into generated .cube files.
pub const CUBE_TITLE: &str = "Generated LUT";

/// What to do when image statistics contain NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Encode NaN samples as the text `NaN`.
    #[default]
    Propagate,
    /// Fail with [`ColorError::EmptyImage`](crate::ColorError::EmptyImage)
    /// or [`ColorError::DegenerateImage`](crate::ColorError::DegenerateImage)
    /// before sampling.
    Reject,
}

/// Input of one generation.
#[derive(Debug, Clone)]
pub struct LutRequest {
    /// Decoded source image.
    pub image: RgbaImage,
    /// Output encoding.
    pub format: LutFormat,
    /// Unsanitized base file name.
    pub base_name: String,
    /// Degenerate-image handling.
    pub policy: DegeneratePolicy,
}

impl LutRequest {
    /// Request with the default base name and [`DegeneratePolicy::Propagate`].
    pub fn new(image: RgbaImage, format: LutFormat) -> Self {
        Self {
            image,
            format,
            base_name: DEFAULT_BASE_NAME.to_string(),
            policy: DegeneratePolicy::default(),
        }
    }

    /// Sets the base file name.
    pub fn with_base_name(mut self, name: impl Into<String>) -> Self {
        self.base_name = name.into();
        self
    }

    /// Sets the degenerate-image policy.
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sanitized output file name.
    pub fn filename(&self) -> String {
        naming::file_name(&self.base_name, self.format)
    }
}

/// Result of one generation.
#[derive(Debug, Clone)]
pub struct LutOutput {
    /// Encoded LUT text.
    pub content: String,
    /// `<sanitized-base-name>.<cube|xmp>`.
    pub filename: String,
    /// Statistics the LUT was derived from.
    pub stats: ColorTransform,
}

/// Runs the full pipeline for one request.
///
/// # Errors
///
/// With [`DegeneratePolicy::Reject`], fails on empty or flat images.
/// Encoding errors are passed through.
pub fn generate(request: &LutRequest) -> ColorResult<LutOutput> {
    let stats = analyze(&request.image);

    match request.policy {
        DegeneratePolicy::Reject => stats.check()?,
        DegeneratePolicy::Propagate if stats.is_degenerate() => {
            tracing::warn!(
                pixels = stats.pixel_count,
                weights = %stats.weights,
                "degenerate image statistics, LUT values will be NaN"
            );
        }
        DegeneratePolicy::Propagate => {}
    }

    let content = encode(&stats, request.format)?;
    let filename = request.filename();
    tracing::info!(
        format = %request.format,
        filename = %filename,
        bytes = content.len(),
        "generated LUT"
    );

    Ok(LutOutput {
        content,
        filename,
        stats,
    })
}

/// Bakes the transform for `stats` and encodes it as `format`.
pub fn encode(stats: &ColorTransform, format: LutFormat) -> ColorResult<String> {
    let lut = bake(stats, LUT_SIZE);
    let text = match format {
        LutFormat::Cube => cube::to_string_3d(&lut, &cube_header(stats))?,
        LutFormat::Xmp => xmp::to_string_look_table(&lut)?,
    };
    Ok(text)
}

/// Header of generated .cube files.
pub fn cube_header(stats: &ColorTransform) -> CubeHeader {
    let avg = stats.average;
    CubeHeader::titled(CUBE_TITLE)
        .with_comment("Generated from image analysis")
        .with_comment(format!(
            "Average RGB: {}, {}, {}",
            Fixed::new(avg.r, 2),
            Fixed::new(avg.g, 2),
            Fixed::new(avg.b, 2)
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;

    fn scenario_image() -> RgbaImage {
        RgbaImage::new(
            2,
            2,
            vec![0, 0, 0, 255, 255, 255, 255, 255, 128, 128, 128, 255, 64, 64, 64, 255],
        )
        .unwrap()
    }

    #[test]
    fn test_cube_header_lines() {
        let out = generate(&LutRequest::new(scenario_image(), LutFormat::Cube)).unwrap();
        let head: Vec<&str> = out.content.lines().take(5).collect();
        assert_eq!(
            head,
            vec![
                "TITLE \"Generated LUT\"",
                "# Generated from image analysis",
                "# Average RGB: 111.75, 111.75, 111.75",
                "LUT_3D_SIZE 32",
                "",
            ]
        );
        assert_eq!(out.filename, "generated_lut.cube");
        assert_eq!(out.content.lines().count(), 5 + 32_768);
        assert_eq!(out.content.lines().last(), Some("0.438235 0.438235 0.438235"));
    }

    #[test]
    fn test_xmp_output() {
        let req = LutRequest::new(scenario_image(), LutFormat::Xmp)
            .with_base_name("My LUT!! v2");
        let out = generate(&req).unwrap();
        assert_eq!(out.filename, "my_lut___v2.xmp");
        assert_eq!(out.content.matches("</rdf:li>").count(), 32_768 + 1);
        assert!(out.content.contains("<rdf:li>0.438235, 0.438235, 0.438235</rdf:li>"));
    }

    #[test]
    fn test_flat_image_propagates_nan() {
        let img = RgbaImage::from_fn(4, 4, |_, _| [12, 34, 56, 255]);
        let out = generate(&LutRequest::new(img.clone(), LutFormat::Cube)).unwrap();
        assert!(out.stats.is_degenerate());
        assert!(out.content.lines().skip(5).all(|l| l == "NaN NaN NaN"));

        let out = generate(&LutRequest::new(img, LutFormat::Xmp)).unwrap();
        assert_eq!(out.content.matches("<rdf:li>NaN, NaN, NaN</rdf:li>").count(), 32_768);
    }

    #[test]
    fn test_reject_policy() {
        let flat = RgbaImage::from_fn(4, 4, |_, _| [12, 34, 56, 255]);
        let req = LutRequest::new(flat, LutFormat::Cube)
            .with_policy(DegeneratePolicy::Reject);
        let err = generate(&req).unwrap_err();
        assert!(matches!(err, ColorError::DegenerateImage { .. }));

        let empty = RgbaImage::new(0, 0, Vec::new()).unwrap();
        let req = LutRequest::new(empty, LutFormat::Xmp)
            .with_policy(DegeneratePolicy::Reject);
        let err = generate(&req).unwrap_err();
        assert!(matches!(err, ColorError::EmptyImage));
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_empty_image_propagates_nan() {
        let empty = RgbaImage::new(0, 0, Vec::new()).unwrap();
        let out = generate(&LutRequest::new(empty, LutFormat::Cube)).unwrap();
        assert!(out.content.contains("# Average RGB: NaN, NaN, NaN\n"));
        assert!(out.content.lines().skip(5).all(|l| l == "NaN NaN NaN"));
    }
}
