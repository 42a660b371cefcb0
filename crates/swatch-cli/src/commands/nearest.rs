//! Nearest named color lookup.

use crate::NearestArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use swatch_color::{to_hex, ColorTable};
use tracing::{debug, trace};

#[derive(Serialize)]
struct Match<'a> {
    query: String,
    name: &'a str,
    hex: String,
    delta_e: f64,
}

pub fn run(args: NearestArgs) -> Result<()> {
    trace!(table = %args.table.display(), "nearest::run");
    let color = super::parse_color(&args.color)?;
    let white_point = super::parse_white_point(&args.white_point)?;
    let text = std::fs::read_to_string(&args.table)
        .with_context(|| format!("Failed to read table: {}", args.table.display()))?;
    let table = ColorTable::from_json(&text, white_point)
        .with_context(|| format!("Invalid color table: {}", args.table.display()))?;
    debug!(entries = table.len(), %white_point, "Loaded color table");

    let (hit, dist) = table.nearest(&color);
    if args.json {
        return super::print_json(&Match {
            query: args.color,
            name: &hit.name,
            hex: to_hex(&hit.color),
            delta_e: dist,
        });
    }
    println!("{}  {}  (dE {:.2})", hit.name, to_hex(&hit.color), dist);
    Ok(())
}
