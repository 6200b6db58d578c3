//! Integration tests for lutgen crates.
//!
//! End-to-end checks from an encoded image file to the text of the
//! generated LUTs, across lutgen-core, lutgen-color and lutgen-lut.
