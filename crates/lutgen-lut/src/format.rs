//! Output format selector.

use crate::LutError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Textual LUT encodings the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LutFormat {
    /// Adobe/Resolve `.cube`.
    #[default]
    Cube,
    /// Camera Raw XMP with a `crs:LookTable`.
    Xmp,
}

impl LutFormat {
    /// All supported formats.
    pub const ALL: [LutFormat; 2] = [LutFormat::Cube, LutFormat::Xmp];

    /// File extension without the dot.
    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            LutFormat::Cube => "cube",
            LutFormat::Xmp => "xmp",
        }
    }

    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LutError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        ext.parse()
    }
}

impl FromStr for LutFormat {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cube" => Ok(LutFormat::Cube),
            "xmp" => Ok(LutFormat::Xmp),
            other => Err(LutError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for LutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
