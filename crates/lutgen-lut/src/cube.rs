//! Adobe/Resolve .cube LUT format support.
//!
//! The .cube format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many other tools.
//!
//! # Format
//!
//! ```text
//! TITLE "LUT Name"
//! # Comment
//! LUT_3D_SIZE 32
//!
//! 0.000000 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! Data rows run red-fastest: blue is the outer loop, green the middle,
//! red the inner.
//!
//! # Example
//!
//! ```rust
//! use lutgen_lut::{Lut3D, cube::{self, CubeHeader}};
//!
//! let lut = Lut3D::identity(2);
//! let text = cube::to_string_3d(&lut, &CubeHeader::titled("Identity")).unwrap();
//! assert!(text.starts_with("TITLE \"Identity\"\nLUT_3D_SIZE 2\n\n"));
//! ```

use crate::fixed::{Fixed, VALUE_DIGITS};
use crate::{Lut3D, LutError, LutResult, checked_entry_count};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Header lines written ahead of the data block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubeHeader {
    /// `TITLE "..."` line, written first when present.
    pub title: Option<String>,
    /// Comment lines, written after the title with a `# ` prefix.
    pub comments: Vec<String>,
}

impl CubeHeader {
    /// Header with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            comments: Vec::new(),
        }
    }

    /// Appends a comment line.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }
}

/// Reads a 3D LUT from a .cube file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    parse_3d(reader)
}

/// Parses a 3D LUT from a reader.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    parse_3d_with_header(reader).map(|(lut, _)| lut)
}

/// Parses a 3D LUT and the title/comment lines preceding its data.
pub fn parse_3d_with_header<R: BufRead>(reader: R) -> LutResult<(Lut3D, CubeHeader)> {
    let mut header = CubeHeader::default();
    let mut size: Option<usize> = None;
    let mut domain_min = [0.0_f64; 3];
    let mut domain_max = [1.0_f64; 3];
    let mut data: Vec<[f64; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if data.is_empty() {
                header.comments.push(comment.trim().to_string());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            header.title = Some(rest.trim().trim_matches('"').to_string());
        } else if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
        } else if line.starts_with("DOMAIN_MIN") {
            domain_min = parse_domain(line)?;
        } else if line.starts_with("DOMAIN_MAX") {
            domain_max = parse_domain(line)?;
        } else {
            data.push(parse_rgb(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;
    let expected = checked_entry_count(size)?;

    if data.len() != expected {
        return Err(LutError::ParseError(format!(
            "expected {} values, found {}",
            expected,
            data.len()
        )));
    }

    // File order is red-fastest, same as memory order
    let lut = Lut3D::from_data(data, size)?.with_domain(domain_min, domain_max);
    Ok((lut, header))
}

/// Writes a 3D LUT to a .cube file.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D, header: &CubeHeader) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_3d_to(&mut writer, lut, header)?;
    writer.flush()?;
    Ok(())
}

/// Encodes a 3D LUT as .cube text.
pub fn to_string_3d(lut: &Lut3D, header: &CubeHeader) -> LutResult<String> {
    let mut buf = Vec::with_capacity(64 + lut.entry_count() * 27);
    write_3d_to(&mut buf, lut, header)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes a 3D LUT as .cube text to any writer.
///
/// Values are written with 6 decimal places; NaN renders as `NaN`.
pub fn write_3d_to<W: Write>(writer: &mut W, lut: &Lut3D, header: &CubeHeader) -> LutResult<()> {
    if let Some(title) = &header.title {
        writeln!(writer, "TITLE \"{}\"", title)?;
    }
    for comment in &header.comments {
        writeln!(writer, "# {}", comment)?;
    }
    writeln!(writer, "LUT_3D_SIZE {}", lut.size)?;

    if !lut.has_default_domain() {
        let (min, max) = (lut.domain_min, lut.domain_max);
        writeln!(writer, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2])?;
        writeln!(writer, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2])?;
    }
    writeln!(writer)?;

    // R fastest, then G, then B (file format requirement)
    let size = lut.size;
    for b_idx in 0..size {
        for g_idx in 0..size {
            for r_idx in 0..size {
                let rgb = lut.get(r_idx, g_idx, b_idx);
                writeln!(
                    writer,
                    "{} {} {}",
                    Fixed::new(rgb[0], VALUE_DIGITS),
                    Fixed::new(rgb[1], VALUE_DIGITS),
                    Fixed::new(rgb[2], VALUE_DIGITS)
                )?;
            }
        }
    }

    tracing::trace!(size, entries = lut.entry_count(), "wrote .cube data");
    Ok(())
}

// Helper functions

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::ParseError("invalid size line".into()));
    }
    parts[1]
        .parse()
        .map_err(|_| LutError::ParseError("invalid size value".into()))
}

fn parse_domain(line: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(LutError::ParseError("invalid domain line".into()));
    }
    Ok([
        parts[1].parse().map_err(|_| LutError::ParseError("invalid domain R".into()))?,
        parts[2].parse().map_err(|_| LutError::ParseError("invalid domain G".into()))?,
        parts[3].parse().map_err(|_| LutError::ParseError("invalid domain B".into()))?,
    ])
}

fn parse_rgb(line: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(LutError::ParseError(format!("invalid RGB line: {}", line)));
    }
    Ok([
        parts[0].parse().map_err(|_| LutError::ParseError("invalid R value".into()))?,
        parts[1].parse().map_err(|_| LutError::ParseError("invalid G value".into()))?,
        parts[2].parse().map_err(|_| LutError::ParseError("invalid B value".into()))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_3d_cube() {
        let cube = r#"
TITLE "Test Grade"
# first comment
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;
        let (lut, header) = parse_3d_with_header(Cursor::new(cube)).expect("parse failed");

        assert_eq!(lut.size, 2);
        assert_eq!(lut.get(1, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(lut.get(0, 0, 1), [0.0, 0.0, 1.0]);
        assert_eq!(header.title.as_deref(), Some("Test Grade"));
        assert_eq!(header.comments, vec!["first comment".to_string()]);
    }

    #[test]
    fn parse_rejects_1d() {
        let cube = "LUT_1D_SIZE 2\n0 0 0\n1 1 1\n";
        assert!(matches!(
            parse_3d(Cursor::new(cube)),
            Err(LutError::ParseError(_))
        ));
    }

    #[test]
    fn parse_rejects_short_data() {
        let cube = "LUT_3D_SIZE 2\n0 0 0\n1 1 1\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn parse_rejects_oversized_grid() {
        // Would overflow size^3
        let cube = "LUT_3D_SIZE 3000000\n0 0 0\n";
        assert!(matches!(
            parse_3d(Cursor::new(cube)),
            Err(LutError::InvalidSize(_))
        ));
        // Wraps to 0 entries in 64-bit arithmetic
        let cube = "LUT_3D_SIZE 4194304\n";
        assert!(matches!(
            parse_3d(Cursor::new(cube)),
            Err(LutError::InvalidSize(_))
        ));
        let cube = "LUT_3D_SIZE 257\n0 0 0\n";
        assert!(parse_3d(Cursor::new(cube)).is_err());
    }

    #[test]
    fn write_layout() {
        let lut = Lut3D::identity(2);
        let header = CubeHeader::titled("Generated LUT").with_comment("hello");
        let text = to_string_3d(&lut, &header).unwrap();

        let expected = "TITLE \"Generated LUT\"\n\
                        # hello\n\
                        LUT_3D_SIZE 2\n\
                        \n\
                        0.000000 0.000000 0.000000\n\
                        1.000000 0.000000 0.000000\n\
                        0.000000 1.000000 0.000000\n\
                        1.000000 1.000000 0.000000\n\
                        0.000000 0.000000 1.000000\n\
                        1.000000 0.000000 1.000000\n\
                        0.000000 1.000000 1.000000\n\
                        1.000000 1.000000 1.000000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn write_nan_as_text() {
        let lut = Lut3D::from_fn(2, |_| [f64::NAN, 0.5, 0.25]);
        let text = to_string_3d(&lut, &CubeHeader::default()).unwrap();
        assert!(text.lines().skip(2).all(|l| l == "NaN 0.500000 0.250000"));
    }

    #[test]
    fn roundtrip_3d() {
        let lut = Lut3D::identity(4);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.cube");

        write_3d(&path, &lut, &CubeHeader::titled("rt")).expect("write failed");
        let loaded = read_3d(&path).expect("read failed");

        assert_eq!(loaded.size, 4);
        for (a, b) in lut.data.iter().zip(&loaded.data) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-6);
            }
        }
    }
}
