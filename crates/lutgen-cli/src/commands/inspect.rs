//! LUT inspection command.

use crate::InspectArgs;
use anyhow::{Context, Result};
use lutgen_lut::cube::{self, CubeHeader};
use lutgen_lut::fixed::{Fixed, VALUE_DIGITS};
use lutgen_lut::{Lut3D, LutFormat, xmp};
use std::path::Path;

/// Reads each LUT and prints its size and value range.
pub fn run(args: InspectArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let (lut, header) = read(path)?;
        print_summary(path, &lut, header.as_ref(), verbose);

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<(Lut3D, Option<CubeHeader>)> {
    let format = LutFormat::from_path(path)
        .with_context(|| format!("Unsupported LUT file: {}", path.display()))?;
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;
    let reader = std::io::BufReader::new(file);

    let parsed = match format {
        LutFormat::Cube => cube::parse_3d_with_header(reader).map(|(lut, h)| (lut, Some(h))),
        LutFormat::Xmp => xmp::parse_look_table(reader).map(|lut| (lut, None)),
    };
    parsed.with_context(|| format!("Failed to parse: {}", path.display()))
}

fn print_summary(path: &Path, lut: &Lut3D, header: Option<&CubeHeader>, verbose: u8) {
    let (min, max) = lut.output_range();
    let triple = |v: [f64; 3]| {
        format!(
            "{} {} {}",
            Fixed::new(v[0], VALUE_DIGITS),
            Fixed::new(v[1], VALUE_DIGITS),
            Fixed::new(v[2], VALUE_DIGITS)
        )
    };

    println!("{}", path.display());
    if let Some(title) = header.and_then(|h| h.title.as_deref()) {
        println!("  Title:      {}", title);
    }
    println!("  Size:       {}", lut.size);
    println!("  Entries:    {}", lut.entry_count());
    println!("  Min:        {}", triple(min));
    println!("  Max:        {}", triple(max));
    println!("  NaN:        {}", lut.nan_count());

    if verbose > 0 {
        if let Some(h) = header {
            for comment in &h.comments {
                println!("  # {}", comment);
            }
        }
        let last = lut.size - 1;
        println!("  Black:      {}", triple(lut.get(0, 0, 0)));
        println!("  White:      {}", triple(lut.get(last, last, last)));
    }
}
