//! Color string inspection.

use crate::ParseArgs;
use anyhow::Result;
use serde::Serialize;
use swatch_color::{ColorFormat, Hsv};

use super::ColorEntry;

#[derive(Serialize)]
struct Parsed {
    input: String,
    format: String,
    #[serde(flatten)]
    color: ColorEntry,
    hsv: [f64; 3],
}

pub fn run(args: ParseArgs) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let white_point = super::parse_white_point(&args.white_point)?;
    let format = ColorFormat::detect(args.color.trim())
        .map(|f| format!("{:?}", f))
        .unwrap_or_default();
    let hsv = Hsv::from_rgba(color);
    let entry = ColorEntry::new(&color, Some(white_point));

    if args.json {
        return super::print_json(&Parsed {
            input: args.color,
            format,
            color: entry,
            hsv: [hsv.h, hsv.s, hsv.v],
        });
    }

    println!("Input:   {} ({})", args.color, format);
    println!("Linear:  {}", color);
    println!("Hex:     {}", entry.hex);
    println!("HSV:     {:.4}, {:.4}, {:.4}", hsv.h, hsv.s, hsv.v);
    if let Some(lab) = &entry.lab {
        println!("Lab:     {} ({})", super::lab_text(lab), white_point);
    }
    Ok(())
}
