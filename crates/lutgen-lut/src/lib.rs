//! # lutgen-lut
//!
//! 3D Look-Up Table grid and its text encodings.
//!
//! # Types
//!
//! - [`Lut3D`] - regular RGB cube, stored red-fastest
//! - [`LutFormat`] - `.cube` or `.xmp` output selector
//!
//! # Supported Formats
//!
//! - `.cube` - Adobe/Resolve LUT format ([`cube`] module)
//! - `.xmp` - Camera Raw `crs:LookTable` sidecar ([`xmp`] module)
//!
//! Both encoders walk the same grid with their own ordering: `.cube` rows
//! run red-fastest, XMP items run red-slowest.
//!
//! # Usage
//!
//! ```rust
//! use lutgen_lut::{Lut3D, cube::CubeHeader};
//!
//! let lut = Lut3D::from_fn(2, |[r, g, b]| [r, g * 0.5, b]);
//! let cube_text = lutgen_lut::cube::to_string_3d(&lut, &CubeHeader::titled("Half green")).unwrap();
//! let xmp_text = lutgen_lut::xmp::to_string_look_table(&lut).unwrap();
//! assert!(cube_text.contains("LUT_3D_SIZE 2"));
//! assert!(xmp_text.contains("<crs:LookTable>"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`quick-xml`] - XMP parsing
//! - [`rayon`] - Parallel grid sampling
//!
//! # Used By
//!
//! - `lutgen-color` - bakes image-derived transforms into a grid
//! - `lutgen-cli` - `inspect` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cube;
mod error;
pub mod fixed;
mod format;
mod lut3d;
pub mod naming;
pub mod xmp;

pub use error::{LutError, LutResult};
pub use format::LutFormat;
pub use lut3d::{Lut3D, MAX_SIZE, checked_entry_count, grid_coord};
pub use naming::{file_name, sanitize_name};

use std::path::Path;

/// Reads a `.cube` or `.xmp` LUT, choosing the decoder by extension.
pub fn read_any<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let path = path.as_ref();
    match LutFormat::from_path(path)? {
        LutFormat::Cube => cube::read_3d(path),
        LutFormat::Xmp => xmp::read_look_table(path),
    }
}
