//! lutgen - image-adaptive 3D LUT generator
//!
//! Analyzes a reference image and writes a 32^3 LUT as Adobe/Resolve .cube
//! and/or Camera Raw .xmp.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use lutgen_lut::LutFormat;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lutgen")]
#[command(author, version, about = "Generate image-adaptive 3D LUTs")]
#[command(long_about = "
Derives a colour grade from the statistics of a reference image and bakes
it into a 32x32x32 LUT.

Examples:
  lutgen generate photo.jpg                   # generated_lut.cube + .xmp
  lutgen generate photo.jpg -f cube -n \"Warm Look\" -o luts/
  lutgen stats photo.jpg --json               # Show image statistics
  lutgen inspect luts/warm_look.cube          # Summarize a LUT file
  lutgen -vv generate photo.png --strict      # Debug logging, reject flat images
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate LUT files from an image
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Print colour statistics of an image
    #[command(visible_alias = "s")]
    Stats(StatsArgs),

    /// Summarize existing .cube / .xmp LUT files
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Reference image
    input: PathBuf,

    /// Output format: cube, xmp (repeatable, default: both)
    #[arg(short, long = "format", value_name = "FORMAT")]
    formats: Vec<LutFormat>,

    /// Base file name (sanitized)
    #[arg(short, long)]
    name: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Fail on empty or flat images instead of writing NaN values
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Input image
    input: PathBuf,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InspectArgs {
    /// LUT file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Stats(args) => commands::stats::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the level derived from `-v`. The returned guard
/// flushes the file writer on drop and must live until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
