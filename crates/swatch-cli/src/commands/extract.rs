//! Dominant-color extraction over one or more images.

use crate::ExtractArgs;
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use swatch_extract::{extract_report, ExtractOptions, ExtractionReport};
use tracing::{debug, error, info, trace};

use super::{color_line, lab_text, ColorEntry};

#[derive(Serialize)]
struct FileResult {
    path: PathBuf,
    samples: usize,
    colors: Vec<JsonColor>,
}

#[derive(Serialize)]
struct JsonColor {
    #[serde(flatten)]
    color: ColorEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

pub fn run(args: ExtractArgs, verbose: u8) -> Result<()> {
    trace!(inputs = args.input.len(), "extract::run");
    let options = build_options(&args)?;
    debug!(?options, "Extraction options");

    let files = expand_inputs(&args.input)?;
    info!(files = files.len(), "Extracting palettes");

    let results: Vec<(PathBuf, Result<ExtractionReport>)> = files
        .into_par_iter()
        .map(|path| {
            let report = process_file(&path, &options);
            (path, report)
        })
        .collect();

    let mut json = Vec::new();
    let mut failed = 0;
    for (path, result) in results {
        let report = match result {
            Ok(r) => r,
            Err(e) => {
                error!(path = %path.display(), "{:#}", e);
                eprintln!("{}: {:#}", path.display(), e);
                failed += 1;
                continue;
            }
        };
        if args.json {
            json.push(to_json(path, &report, &args));
        } else {
            print_text(&path, &report, &args, verbose);
        }
    }

    if args.json {
        super::print_json(&json)?;
    }
    if failed > 0 {
        bail!("{} file(s) failed", failed);
    }
    Ok(())
}

/// Preset file first, then flags on top.
fn build_options(args: &ExtractArgs) -> Result<ExtractOptions> {
    let mut options = match &args.config {
        Some(path) => load_preset(path)?,
        None => ExtractOptions::default(),
    };
    if let Some(n) = args.max_colors {
        options.max_colors = n;
    }
    if let Some(d) = args.distinct {
        options.distinct_threshold = d;
    }
    if let Some(t) = args.pixel_threshold {
        options.pixel_count_threshold = t;
    }
    if let Some(a) = args.alpha_floor {
        options.alpha_floor = a;
    }
    if args.all_pixels {
        options.analyze_all_pixels = true;
    }
    if let Some(wp) = &args.white_point {
        options.white_point = super::parse_white_point(wp)?;
    }
    options.validate().context("Invalid extraction options")?;
    Ok(options)
}

fn load_preset(path: &Path) -> Result<ExtractOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Plain paths pass through; anything with glob characters is expanded.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.contains(['*', '?', '[']) {
            files.push(PathBuf::from(input));
            continue;
        }
        let matches: Vec<PathBuf> = glob::glob(input)
            .with_context(|| format!("Invalid pattern: {}", input))?
            .filter_map(|r| r.ok())
            .collect();
        if matches.is_empty() {
            bail!("No files match pattern: {}", input);
        }
        files.extend(matches);
    }
    Ok(files)
}

fn process_file(path: &Path, options: &ExtractOptions) -> Result<ExtractionReport> {
    let image = super::load_image(path)?;
    let report = extract_report(&image, options)
        .with_context(|| format!("Extraction failed: {}", path.display()))?;
    debug!(path = %path.display(), colors = report.colors.len(), "Processed");
    Ok(report)
}

fn to_json(path: PathBuf, report: &ExtractionReport, args: &ExtractArgs) -> FileResult {
    let wp = args.lab.then_some(report.white_point);
    FileResult {
        path,
        samples: report.samples_kept,
        colors: report
            .colors
            .iter()
            .map(|c| JsonColor {
                color: ColorEntry::new(&c.color, wp),
                count: args.counts.then_some(c.count),
            })
            .collect(),
    }
}

fn print_text(path: &Path, report: &ExtractionReport, args: &ExtractArgs, verbose: u8) {
    println!("{}", path.display());
    if verbose > 0 {
        println!(
            "  Samples: {} visited, {} kept, {} unique",
            report.samples_visited, report.samples_kept, report.unique_colors
        );
    }
    if report.colors.is_empty() {
        println!("  (no colors)");
    }
    for (i, c) in report.colors.iter().enumerate() {
        let mut line = format!("  {:>2}. {}", i + 1, color_line(&c.color));
        if args.counts {
            line.push_str(&format!("  x{}", c.count));
        }
        if args.lab {
            line.push_str(&format!("  [{}]", lab_text(&c.lab)));
        }
        println!("{}", line);
    }
}
