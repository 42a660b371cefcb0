//! # swatch-core
//!
//! Core types for palette extraction and color math.
//!
//! This crate provides the foundational types used throughout swatch:
//!
//! - [`Rgba`] - Color value with `f64` components
//! - [`Palette`], [`NamedPalette`] - Ordered color lists
//! - [`PixelBuffer`] - Validated raw pixel samples with width, height and channels
//! - [`Error`] - Validation failures shared by all crates
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other swatch crates depend
//! on `swatch-core`:
//!
//! ```text
//! swatch-core (this crate)
//!    ^
//!    |
//!    +-- swatch-transfer (sRGB transfer functions)
//!    +-- swatch-primaries (white points, RGB to XYZ)
//!    +-- swatch-color (HSV, Lab, parsing, harmonies)
//!    +-- swatch-extract (palette extraction)
//!    +-- swatch-io (PNG I/O)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod palette;
pub mod pixel;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use palette::{NamedPalette, Palette};
pub use pixel::{round_to, Rgba, COLOR_PRECISION};

/// Prelude module for convenient imports.
///
/// ```
/// use swatch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::palette::{NamedPalette, Palette};
    pub use crate::pixel::{round_to, Rgba, COLOR_PRECISION};
}
