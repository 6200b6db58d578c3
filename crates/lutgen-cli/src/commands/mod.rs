//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod stats;

use anyhow::{Context, Result};
use lutgen_core::RgbaImage;
use std::path::Path;

/// Load image from path as RGBA8
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decoded = image::ImageReader::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read: {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode: {}", path.display()))?
        .into_rgba8();

    let (width, height) = decoded.dimensions();
    tracing::debug!(path = %path.display(), width, height, "decoded image");
    RgbaImage::new(width, height, decoded.into_raw())
        .with_context(|| format!("Invalid pixel buffer: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_png_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        let img = image::RgbImage::from_fn(3, 2, |x, y| {
            image::Rgb([x as u8 * 100, y as u8 * 50, 7])
        });
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
        assert_eq!(loaded.get(2, 1).unwrap(), [200, 50, 7, 255]);
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_image(Path::new("/nonexistent/lutgen.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
