//! Image statistics command.
//!
//! Shows the per-channel numbers a generated LUT would be derived from.

use crate::StatsArgs;
use anyhow::{Context, Result};
use lutgen_color::{ColorTransform, analyze};
use lutgen_core::Channel;
use lutgen_lut::fixed::Fixed;
use std::path::Path;

/// Runs the stats command.
pub fn run(args: StatsArgs, verbose: u8) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let stats = analyze(&image);

    if args.json {
        println!("{}", to_json(&args.input, &stats)?);
    } else {
        print_text(&args.input, image.width(), image.height(), &stats, verbose);
    }
    Ok(())
}

/// JSON report. NaN statistics serialize as `null`.
fn to_json(path: &Path, stats: &ColorTransform) -> Result<String> {
    let report = serde_json::json!({
        "file": path.display().to_string(),
        "degenerate": stats.is_degenerate(),
        "stats": stats,
    });
    serde_json::to_string_pretty(&report).context("Failed to serialize stats")
}

fn print_text(path: &Path, width: u32, height: u32, stats: &ColorTransform, verbose: u8) {
    println!("{}", path.display());
    println!("  Resolution: {}x{}", width, height);
    println!("  Pixels:     {}", stats.pixel_count);
    println!();
    println!("  Channel  Average  Min  Max  Range  Weight");

    let scale = stats.average_normalized();
    for ch in Channel::ALL {
        print!(
            "  {:<7}  {:>7}  {:>3}  {:>3}  {:>5}  {:>6}",
            ch,
            Fixed::new(stats.average[ch], 2).to_string(),
            stats.min[ch],
            stats.max[ch],
            Fixed::new(stats.ranges[ch], 0).to_string(),
            Fixed::new(stats.weights[ch], 4).to_string()
        );
        if verbose > 0 {
            // Exponent and output scale of the derived transform
            print!(
                "  pow {}  x {}",
                Fixed::new(1.0 + stats.weights[ch], 4),
                Fixed::new(scale[ch], 4)
            );
        }
        println!();
    }

    if stats.is_degenerate() {
        println!();
        println!("  Warning: degenerate statistics, generated LUT values will be NaN");
    }
}
