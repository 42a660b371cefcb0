//! swatch - palette extraction and color math CLI
//!
//! Pulls dominant colors out of images, decodes and renders palette strips,
//! and answers small color questions (parsing, nearest named color,
//! harmonies).

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Palette extraction and color math")]
#[command(long_about = "
Extract palettes from images and work with palette colors.

All printed colors are linear RGBA unless shown as hex, which is sRGB encoded.

Examples:
  swatch extract photo.png                       # 5 dominant colors
  swatch extract 'shots/*.png' -n 8 --counts     # several files in parallel
  swatch extract photo.png --config preset.yaml --json
  swatch strip palette.png                       # read a 50px swatch strip
  swatch export -c '#C8102E' -c 'rgb(0,94,184)' -o strip.png
  swatch parse 'rgba(255, 128, 0, 0.5)'
  swatch nearest '#D01010' --table pantone.json
  swatch harmony '#3A7FC2' -m analogous -o harmony.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract dominant colors from images
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// Read the colors of a palette strip image
    Strip(StripArgs),

    /// Render colors into a palette strip image
    #[command(visible_alias = "e")]
    Export(ExportArgs),

    /// Parse a color string
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Find the closest named color in a table
    #[command(visible_alias = "n")]
    Nearest(NearestArgs),

    /// Generate a five-color harmony from a base color
    Harmony(HarmonyArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Input image(s) or glob patterns
    #[arg(required = true)]
    input: Vec<String>,

    /// YAML preset with extraction options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum colors to return (1-100)
    #[arg(short = 'n', long)]
    max_colors: Option<usize>,

    /// Distinct-color threshold (0 disables)
    #[arg(short, long)]
    distinct: Option<f64>,

    /// Noise floor divisor (0 disables)
    #[arg(long)]
    pixel_threshold: Option<u32>,

    /// Ignore pixels with alpha below this
    #[arg(long)]
    alpha_floor: Option<f64>,

    /// Analyze every pixel instead of a 45x45 grid
    #[arg(short, long)]
    all_pixels: bool,

    /// White point for Lab output: D50, D55, D65
    #[arg(short, long)]
    white_point: Option<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,

    /// Show sample counts
    #[arg(long)]
    counts: bool,

    /// Show Lab values
    #[arg(long)]
    lab: bool,
}

#[derive(Args)]
struct StripArgs {
    /// Palette strip image
    input: PathBuf,

    /// Swatch width in pixels
    #[arg(short = 'w', long, default_value = "50")]
    swatch_width: u32,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ExportArgs {
    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Color strings (repeatable)
    #[arg(short, long = "color")]
    colors: Vec<String>,

    /// JSON palette file ({"name": ..., "colors": [...]} or a bare list)
    #[arg(short, long, conflicts_with = "colors")]
    palette: Option<PathBuf>,

    /// Swatch width in pixels
    #[arg(short = 'w', long, default_value = "50")]
    swatch_width: u32,

    /// Swatch height in pixels
    #[arg(short = 'H', long, default_value = "50")]
    swatch_height: u32,

    /// Sort colors by an HSV component
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    reverse: bool,

    /// Put colors in random order
    #[arg(long, conflicts_with = "sort")]
    shuffle: bool,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Hue shift (wraps)
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    shift_h: f64,

    /// Saturation shift
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    shift_s: f64,

    /// Value shift
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    shift_v: f64,
}

/// HSV component used for sorting.
#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    Hue,
    Saturation,
    Value,
}

#[derive(Args)]
struct ParseArgs {
    /// Color string: hex, rgb(), rgba() or "r, g, b"
    color: String,

    /// White point for Lab output: D50, D55, D65
    #[arg(short, long, default_value = "D55")]
    white_point: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NearestArgs {
    /// Color string
    color: String,

    /// JSON table of name -> hex
    #[arg(short, long)]
    table: PathBuf,

    /// White point for Lab matching: D50, D55, D65
    #[arg(short, long, default_value = "D55")]
    white_point: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct HarmonyArgs {
    /// Base color string
    color: String,

    /// Method: monochromatic, analogous, complementary
    #[arg(short, long, default_value = "complementary")]
    method: String,

    /// Hue step for analogous harmonies
    #[arg(long)]
    offset: Option<f64>,

    /// Also render the harmony as a strip image
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. The returned guard flushes the log file and
/// must live until exit.
fn init_logging(
    verbose: u8,
    log_file: Option<&PathBuf>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "swatch={level},swatch_extract={level},swatch_io={level}"
        ))
    });

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file: {}", path.display()))?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_ref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Extract(args) => commands::extract::run(args, cli.verbose),
        Commands::Strip(args) => commands::strip::run(args, cli.verbose),
        Commands::Export(args) => commands::export::run(args, cli.verbose),
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Nearest(args) => commands::nearest::run(args),
        Commands::Harmony(args) => commands::harmony::run(args, cli.verbose),
    }
}
