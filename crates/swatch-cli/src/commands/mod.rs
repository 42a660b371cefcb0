//! CLI command implementations

pub mod export;
pub mod extract;
pub mod harmony;
pub mod nearest;
pub mod parse;
pub mod strip;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use swatch_color::{rgb_to_lab, to_hex, Lab, WhitePoint};
use swatch_core::{Palette, PixelBuffer, Rgba};

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    swatch_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    swatch_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parse a color argument
pub fn parse_color(s: &str) -> Result<Rgba> {
    swatch_color::parse_color(s).with_context(|| format!("Cannot parse color: {}", s))
}

/// Parse a white point argument
pub fn parse_white_point(s: &str) -> Result<WhitePoint> {
    s.parse::<WhitePoint>()
        .with_context(|| format!("Invalid white point: {} (use D50, D55 or D65)", s))
}

/// One color as printed in JSON output.
#[derive(Serialize)]
pub struct ColorEntry {
    pub hex: String,
    pub rgba: [f64; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab: Option<Lab>,
}

impl ColorEntry {
    pub fn new(color: &Rgba, white_point: Option<WhitePoint>) -> Self {
        Self {
            hex: to_hex(color),
            rgba: color.to_array(),
            lab: white_point.map(|wp| rgb_to_lab(color.rgb(), wp)),
        }
    }
}

/// Format one color for text output: hex, then linear RGBA.
pub fn color_line(color: &Rgba) -> String {
    format!("{}  {}", to_hex(color), color)
}

/// Format a Lab value for text output.
pub fn lab_text(lab: &Lab) -> String {
    format!("L {:.2}  a {:.2}  b {:.2}", lab.l, lab.a, lab.b)
}

/// Print a palette one color per line.
pub fn print_palette(palette: &Palette) {
    for (i, color) in palette.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, color_line(color));
    }
}

/// Serialize to pretty JSON and print.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}
