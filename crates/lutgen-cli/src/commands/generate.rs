//! LUT generation command.

use crate::GenerateArgs;
use anyhow::{Context, Result};
use lutgen_color::{DegeneratePolicy, LutRequest, generate};
use lutgen_lut::LutFormat;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Generates one LUT file per requested format and prints each written path.
pub fn run(args: GenerateArgs, verbose: u8) -> Result<()> {
    let written = write_luts(args, verbose)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn write_luts(args: GenerateArgs, verbose: u8) -> Result<Vec<PathBuf>> {
    let image = super::load_image(&args.input)?;

    if verbose > 0 {
        println!(
            "Analyzing {} ({}x{})",
            args.input.display(),
            image.width(),
            image.height()
        );
    }

    let formats = requested_formats(&args.formats);
    let policy = if args.strict {
        DegeneratePolicy::Reject
    } else {
        DegeneratePolicy::Propagate
    };

    let mut request = LutRequest::new(image, formats[0]).with_policy(policy);
    if let Some(name) = args.name {
        request = request.with_base_name(name);
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create: {}", args.output.display()))?;

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        request.format = format;
        let output = generate(&request).with_context(|| {
            format!(
                "Failed to generate {} LUT from {}",
                format,
                args.input.display()
            )
        })?;

        let path = args.output.join(&output.filename);
        fs::write(&path, output.content.as_bytes())
            .with_context(|| format!("Failed to save: {}", path.display()))?;
        info!(path = %path.display(), "wrote LUT");
        written.push(path);
    }

    Ok(written)
}

/// Requested formats in order, without repeats; both when none were given.
fn requested_formats(formats: &[LutFormat]) -> Vec<LutFormat> {
    if formats.is_empty() {
        return LutFormat::ALL.to_vec();
    }
    let mut out = Vec::with_capacity(formats.len());
    for &f in formats {
        if !out.contains(&f) {
            out.push(f);
        }
    }
    out
}
