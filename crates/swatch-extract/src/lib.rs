//! # swatch-extract
//!
//! Palette extraction from pixel buffers.
//!
//! Two modes:
//!
//! - **Strip decode** - [`extract_from_strip`] reads one color per swatch
//!   from a palette strip image; [`render_strip`] is its inverse
//! - **Frequency sampling** - [`extract_from_image`] finds the dominant,
//!   mutually distinct colors of any image
//!
//! Buffers are expected sRGB encoded. Every returned color is linear and
//! rounded to 4 decimal places.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::{Palette, Rgba};
//! use swatch_extract::{extract_from_image, extract_from_strip, render_strip, ExtractOptions};
//!
//! let palette: Palette = vec![Rgba::opaque(0.8, 0.1, 0.1), Rgba::opaque(0.1, 0.1, 0.8)].into();
//! let strip = render_strip(&palette, 50, 50).unwrap();
//!
//! let decoded = extract_from_strip(&strip, 50).unwrap();
//! assert_eq!(decoded.len(), 2);
//!
//! let dominant = extract_from_image(&strip, &ExtractOptions::default()).unwrap();
//! assert_eq!(dominant.len(), 2);
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - Buffers, palettes, errors
//! - [`swatch-transfer`] - sRGB decode/encode
//! - [`swatch-color`] - Lab values in [`ExtractionReport`]
//!
//! # Used By
//!
//! - `swatch-cli` - `extract`, `strip` and `export` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod frequency;
pub mod options;
pub mod sampler;
pub mod strip;

pub use frequency::{extract_from_image, extract_report, ColorCount, ExtractionReport};
pub use options::{ExtractOptions, MAX_COLORS_LIMIT};
pub use sampler::{PixelSampler, GRID_STEPS};
pub use strip::{extract_from_strip, render_strip, SWATCH_HEIGHT, SWATCH_WIDTH};
