//! Named-color lookup in Lab space.
//!
//! A [`ColorTable`] maps names (e.g. Pantone codes) to colors and answers
//! "which named color is perceptually closest" by CIE76 distance. Entries
//! keep their file order; when two entries are equally close the earlier
//! one wins.
//!
//! # Table Format
//!
//! A JSON object of name to hex string:
//!
//! ```json
//! { "PANTONE 186 C": "#C8102E", "PANTONE 300 C": "#005EB8" }
//! ```

use crate::lab::{rgb_to_lab, Lab};
use crate::parse::hex_to_rgba;
use crate::{ColorError, ColorResult};
use serde_json::{Map, Value};
use swatch_core::Rgba;
use swatch_primaries::WhitePoint;

/// A named color with its precomputed Lab value.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColor {
    /// Display name
    pub name: String,
    /// Linear color
    pub color: Rgba,
    /// Lab under the table's white point
    pub lab: Lab,
}

/// Ordered set of named colors.
#[derive(Debug, Clone)]
pub struct ColorTable {
    entries: Vec<NamedColor>,
    white_point: WhitePoint,
}

impl ColorTable {
    /// Builds a table from `(name, linear color)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyTable`] if `entries` is empty.
    pub fn new<I, S>(entries: I, white_point: WhitePoint) -> ColorResult<Self>
    where
        I: IntoIterator<Item = (S, Rgba)>,
        S: Into<String>,
    {
        let entries: Vec<NamedColor> = entries
            .into_iter()
            .map(|(name, color)| NamedColor {
                name: name.into(),
                color,
                lab: rgb_to_lab(color.rgb(), white_point),
            })
            .collect();
        if entries.is_empty() {
            return Err(ColorError::EmptyTable);
        }
        Ok(Self {
            entries,
            white_point,
        })
    }

    /// Parses a JSON object of name to hex string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_color::ColorTable;
    /// use swatch_primaries::WhitePoint;
    ///
    /// let json = r##"{ "black": "#000000", "white": "#FFFFFF" }"##;
    /// let table = ColorTable::from_json(json, WhitePoint::D55).unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_json(json: &str, white_point: WhitePoint) -> ColorResult<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)?;
        let entries = map
            .into_iter()
            .map(|(name, value)| {
                let color = value
                    .as_str()
                    .and_then(|hex| hex_to_rgba(hex, 1.0).ok())
                    .ok_or_else(|| ColorError::TableEntry {
                        name: name.clone(),
                        value: value.to_string(),
                    })?;
                Ok((name, color))
            })
            .collect::<ColorResult<Vec<_>>>()?;
        Self::new(entries, white_point)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// White point the Lab values were computed under.
    pub fn white_point(&self) -> WhitePoint {
        self.white_point
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Closest entry to a linear color, with its CIE76 distance.
    pub fn nearest(&self, color: &Rgba) -> (&NamedColor, f64) {
        let target = rgb_to_lab(color.rgb(), self.white_point);
        let mut best = &self.entries[0];
        let mut best_dist = best.lab.delta_e(&target);
        for entry in &self.entries[1..] {
            let dist = entry.lab.delta_e(&target);
            if dist < best_dist {
                best = entry;
                best_dist = dist;
            }
        }
        (best, best_dist)
    }
}
