//! Harmony generation.

use crate::HarmonyArgs;
use anyhow::{Context, Result};
use swatch_color::Harmony;
use swatch_core::NamedPalette;
use swatch_extract::{render_strip, SWATCH_HEIGHT, SWATCH_WIDTH};
use tracing::{info, trace};

pub fn run(args: HarmonyArgs, verbose: u8) -> Result<()> {
    trace!(method = %args.method, "harmony::run");
    let base = super::parse_color(&args.color)?;
    let mut harmony: Harmony = args
        .method
        .parse()
        .with_context(|| format!("Unknown harmony: {}", args.method))?;
    if let (Harmony::Analogous { offset }, Some(step)) = (&mut harmony, args.offset) {
        *offset = step;
    }
    let palette = harmony.generate(base);

    if let Some(output) = &args.output {
        let strip = render_strip(&palette, SWATCH_WIDTH, SWATCH_HEIGHT)
            .context("Cannot render strip")?;
        super::save_image(output, &strip)?;
        info!(output = %output.display(), "Wrote harmony strip");
    }

    if args.json {
        let name = format!("{} {}", args.method.to_lowercase(), args.color);
        return super::print_json(&NamedPalette::new(name, palette));
    }
    if verbose > 0 {
        println!("{:?} from {}", harmony, super::color_line(&base));
    }
    super::print_palette(&palette);
    Ok(())
}
