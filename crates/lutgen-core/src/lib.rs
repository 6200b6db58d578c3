//! # lutgen-core
//!
//! Core types shared by the lutgen crates.
//!
//! - [`Rgb`], [`Channel`] - three-channel values on the 8-bit or float scale
//! - [`RgbaImage`] - validated, decoded RGBA8 pixel buffer
//! - [`Error`] - buffer validation and access errors
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. `lutgen-lut` is independent
//! of it; everything that touches pixels builds on it:
//!
//! ```text
//! lutgen-core (this crate)      lutgen-lut
//!    ^                             ^
//!    |                             |
//!    +-- lutgen-color (image statistics, transform, pipeline)
//!    +-- lutgen-cli (the `lutgen` binary)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Rgb`] and [`Channel`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::{CHANNELS, RgbaImage};
pub use pixel::{Channel, Rgb};
