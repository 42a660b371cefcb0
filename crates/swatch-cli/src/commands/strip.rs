//! Palette strip decoding.

use crate::StripArgs;
use anyhow::{Context, Result};
use swatch_core::NamedPalette;
use swatch_extract::extract_from_strip;
use tracing::{info, trace};

pub fn run(args: StripArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), swatch_width = args.swatch_width, "strip::run");
    let image = super::load_image(&args.input)?;
    let palette = extract_from_strip(&image, args.swatch_width)
        .with_context(|| format!("Cannot decode strip: {}", args.input.display()))?;
    info!(colors = palette.len(), "Decoded strip");

    if args.json {
        let name = args
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        return super::print_json(&NamedPalette::new(name, palette));
    }

    println!("{}", args.input.display());
    if verbose > 0 {
        println!(
            "  {}x{}, {} swatches of {} px",
            image.width(),
            image.height(),
            palette.len(),
            args.swatch_width
        );
    }
    super::print_palette(&palette);
    Ok(())
}
