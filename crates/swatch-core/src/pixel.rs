//! The color value type.
//!
//! [`Rgba`] is an ordered 4-tuple of `f64` components. The same type carries
//! both *encoded* (display, sRGB) and *linear* colors; which one a value holds
//! is a property of where it came from, not of the type.
//!
//! # Precision
//!
//! Extraction rounds every component to [`COLOR_PRECISION`] decimal places so
//! that sampled colors can be compared and counted by exact equality.
//!
//! # Used By
//!
//! - [`crate::palette::Palette`] - ordered color lists
//! - `swatch-color` - conversions and parsing
//! - `swatch-extract` - sampled colors

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Decimal places kept by extracted colors.
pub const COLOR_PRECISION: u32 = 4;

/// Rounds `value` to `precision` decimal places.
///
/// # Example
///
/// ```
/// use swatch_core::round_to;
/// assert_eq!(round_to(0.123456, 4), 0.1235);
/// ```
#[inline]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    // Keep -0.0 out of exact-equality keys
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// RGBA color with `f64` components.
///
/// Values are conventionally in [0, 1] but never clamped.
///
/// # Example
///
/// ```
/// use swatch_core::Rgba;
///
/// let c = Rgba::new(1.0, 0.5, 0.25, 1.0);
/// assert_eq!(c.rgb(), [1.0, 0.5, 0.25]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from four components.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from an RGB triplet and alpha.
    #[inline]
    pub const fn from_rgb(rgb: [f64; 3], a: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// RGB components.
    #[inline]
    pub const fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// All four components.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Applies `f` to r, g and b; alpha passes through unmodified.
    #[inline]
    pub fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Rounds all four components to `precision` decimal places.
    #[inline]
    pub fn rounded(self, precision: u32) -> Self {
        Self::new(
            round_to(self.r, precision),
            round_to(self.g, precision),
            round_to(self.b, precision),
            round_to(self.a, precision),
        )
    }

    /// Largest absolute per-channel difference over r, g and b.
    #[inline]
    pub fn max_rgb_diff(&self, other: &Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Lexicographic total order over (r, g, b, a).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.r
            .total_cmp(&other.r)
            .then(self.g.total_cmp(&other.g))
            .then(self.b.total_cmp(&other.b))
            .then(self.a.total_cmp(&other.a))
    }

    /// Bit-exact key for hashing rounded colors.
    #[inline]
    pub fn key(&self) -> [u64; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4}, {:.4})",
            self.r, self.g, self.b, self.a
        )
    }
}
