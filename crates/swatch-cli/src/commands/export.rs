//! Palette strip rendering.
//!
//! Colors come from `--color` strings or a JSON palette file, go through the
//! optional HSV shift and sort or shuffle, and are written as a strip image.

use crate::{ExportArgs, SortKey};
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::path::Path;
use swatch_color::{shuffle, sort_by_hsv, HsvChannel, HsvOffset};
use swatch_core::{NamedPalette, Palette};
use swatch_extract::render_strip;
use tracing::{debug, info, trace};

/// Palette file: a named palette or a bare color list.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Named(NamedPalette),
    Bare(Palette),
}

pub fn run(args: ExportArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), "export::run");
    let mut palette = match &args.palette {
        Some(path) => load_palette(path)?,
        None => {
            let mut palette = Palette::new();
            for s in &args.colors {
                palette.push(super::parse_color(s)?);
            }
            palette
        }
    };
    if palette.is_empty() {
        bail!("No colors given (use --color or --palette)");
    }

    let offset = HsvOffset::new(args.shift_h, args.shift_s, args.shift_v);
    if offset != HsvOffset::default() {
        debug!(?offset, "Shifting palette");
        palette = offset.adjust(&palette);
    }
    if let Some(key) = args.sort {
        let channel = match key {
            SortKey::Hue => HsvChannel::Hue,
            SortKey::Saturation => HsvChannel::Saturation,
            SortKey::Value => HsvChannel::Value,
        };
        palette = sort_by_hsv(&palette, channel, args.reverse);
    }
    if args.shuffle {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(seed = ?args.seed, "Shuffling palette");
        palette = shuffle(&palette, &mut rng);
    }

    let strip = render_strip(&palette, args.swatch_width, args.swatch_height)
        .context("Cannot render strip")?;
    super::save_image(&args.output, &strip)?;
    info!(output = %args.output.display(), colors = palette.len(), "Exported strip");

    if verbose > 0 {
        println!("Wrote {} ({}x{})", args.output.display(), strip.width(), strip.height());
        super::print_palette(&palette);
    }
    Ok(())
}

fn load_palette(path: &Path) -> Result<Palette> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette: {}", path.display()))?;
    let file: PaletteFile = serde_json::from_str(&text)
        .with_context(|| format!("Invalid palette file: {}", path.display()))?;
    Ok(match file {
        PaletteFile::Named(named) => {
            debug!(name = %named.name, "Loaded named palette");
            named.colors
        }
        PaletteFile::Bare(palette) => palette,
    })
}
