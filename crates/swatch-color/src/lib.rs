//! # swatch-color
//!
//! Color math for palette work.
//!
//! This crate gathers the per-color operations used by extraction and by
//! the CLI:
//!
//! - **HSV** - [`rgb_to_hsv`], [`hsv_to_rgb`] with hue in [0, 1)
//! - **CIE Lab** - [`rgb_to_lab`] under a selectable [`WhitePoint`], CIE76 [`delta_e`]
//! - **Color strings** - [`parse_color`] for hex, `rgb()`/`rgba()` and bare components
//! - **Named colors** - [`ColorTable`] nearest-name lookup in Lab space
//! - **Harmonies** - [`Harmony`] palettes, [`HsvOffset`] adjustment, [`sort_by_hsv`]
//!
//! # Architecture
//!
//! ```text
//!                 swatch-color
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!   swatch-transfer        swatch-primaries
//!          |                       |
//!          +-----------+-----------+
//!                      |
//!                 swatch-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::{parse_color, to_hex, rgb_to_lab, Harmony, WhitePoint};
//!
//! // Strings decode to linear light
//! let base = parse_color("#3A7FC2").unwrap();
//! assert_eq!(to_hex(&base), "#3A7FC2");
//!
//! let lab = rgb_to_lab(base.rgb(), WhitePoint::D65);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//!
//! let scheme = Harmony::Complementary.generate(base);
//! assert_eq!(scheme.len(), 5);
//! ```
//!
//! # Color Values
//!
//! Every [`Rgba`](swatch_core::Rgba) handled here is linear unless a function
//! name says otherwise (`srgb_to_lab`, `to_hex`). HSV works directly on the
//! components it is given.
//!
//! # Dependencies
//!
//! - [`swatch-core`] - `Rgba`, `Palette`, core errors
//! - [`swatch-transfer`] - sRGB decode/encode
//! - [`swatch-primaries`] - White points and the RGB to XYZ matrix
//!
//! # Used By
//!
//! - `swatch-extract` - Lab reporting of extracted colors
//! - `swatch-cli` - `parse`, `nearest` and `harmony` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod harmony;
pub mod hsv;
pub mod lab;
pub mod parse;
pub mod table;

pub use error::{ColorError, ColorResult};
pub use harmony::{shuffle, sort_by_hsv, Harmony, HsvOffset, DEFAULT_ANALOGOUS_OFFSET, HARMONY_SIZE};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv, HsvChannel};
pub use lab::{delta_e, rgb_to_lab, srgb_to_lab, Lab};
pub use parse::{hex_to_rgba, parse_color, to_hex, ColorFormat};
pub use table::{ColorTable, NamedColor};

// Re-export dependencies for convenience
pub use swatch_primaries as primaries;
pub use swatch_primaries::WhitePoint;
pub use swatch_transfer as transfer;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        parse_color, rgb_to_hsv, rgb_to_lab, hsv_to_rgb, to_hex, ColorError, ColorTable, Harmony,
        Hsv, HsvChannel, HsvOffset, Lab, WhitePoint,
    };
}
