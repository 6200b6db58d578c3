//! # lutgen-color
//!
//! Image colour analysis and the image-adaptive LUT transform.
//!
//! # Pipeline
//!
//! ```text
//! RGBA8 image -> analyze -> ColorTransform -> bake (32^3) -> .cube / .xmp
//! ```
//!
//! - [`analyze`] - per-channel average, min, max, range and weight
//! - [`transform`] - maps one normalized colour through the statistics
//! - [`bake`] - samples [`transform`] over a regular grid
//! - [`generate`] - the whole pipeline for one [`LutRequest`]
//!
//! # Example
//!
//! ```rust
//! use lutgen_core::RgbaImage;
//! use lutgen_color::{analyze, bake, LUT_SIZE};
//!
//! let img = RgbaImage::from_fn(4, 4, |x, y| [(x * 60) as u8, (y * 60) as u8, 100, 255]);
//! let stats = analyze(&img);
//! let lut = bake(&stats, LUT_SIZE);
//! assert_eq!(lut.entry_count(), 32 * 32 * 32);
//! ```
//!
//! # Dependencies
//!
//! - [`lutgen-core`] - image and pixel types
//! - [`lutgen-lut`] - grid storage and encoders
//! - [`rayon`] - parallel statistics reduction
//! - [`serde`] - serializable statistics
//!
//! # Used By
//!
//! - `lutgen-cli` - `generate` and `stats` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod pipeline;
pub mod stats;
pub mod transform;

pub use error::{ColorError, ColorResult};
pub use pipeline::{DegeneratePolicy, LutOutput, LutRequest, encode, generate};
pub use stats::{ColorTransform, analyze, analyze_raw};
pub use transform::{LUT_SIZE, bake, transform};
