//! # swatch-primaries
//!
//! Reference white points and the RGB-to-XYZ matrix used for Lab conversion.
//!
//! # White Points
//!
//! Lab values are relative to a reference illuminant. The supported set is
//! closed:
//!
//! | White point | X | Y | Z |
//! |-------------|---|---|---|
//! | D50 | 0.9642 | 1.0000 | 0.8251 |
//! | D55 | 0.9568 | 1.0000 | 0.9214 |
//! | D65 | 0.9504 | 1.0000 | 1.0888 |
//!
//! # Usage
//!
//! ```rust
//! use swatch_primaries::{WhitePoint, RGB_TO_XYZ};
//! use glam::DVec3;
//!
//! let wp: WhitePoint = "d65".parse().unwrap();
//! assert_eq!(wp, WhitePoint::D65);
//!
//! // Linear white maps close to the D65 white point
//! let xyz = RGB_TO_XYZ * DVec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - Error types
//! - [`glam`] - Matrix math
//!
//! # Used By
//!
//! - `swatch-color` - Lab conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use swatch_core::{Error, Result};

/// Reference illuminant for Lab normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WhitePoint {
    /// Horizon light, ~5000K (print)
    D50,
    /// Mid-morning daylight, ~5500K
    #[default]
    D55,
    /// Noon daylight, ~6500K (sRGB displays)
    D65,
}

impl WhitePoint {
    /// All supported white points.
    pub const ALL: [WhitePoint; 3] = [WhitePoint::D50, WhitePoint::D55, WhitePoint::D65];

    /// Reference XYZ triple (Y = 1).
    pub const fn xyz(self) -> DVec3 {
        match self {
            WhitePoint::D50 => DVec3::new(0.9642, 1.0000, 0.8251),
            WhitePoint::D55 => DVec3::new(0.9568, 1.0000, 0.9214),
            WhitePoint::D65 => DVec3::new(0.9504, 1.0000, 1.0888),
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            WhitePoint::D50 => "D50",
            WhitePoint::D55 => "D55",
            WhitePoint::D65 => "D65",
        }
    }

    /// Looks up a white point by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownWhitePoint`] for names outside D50, D55, D65.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|wp| wp.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::unknown_white_point(name))
    }
}

impl FromStr for WhitePoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Linear RGB to XYZ matrix (BT.709 primaries).
///
/// Stored column-wise as glam expects; row-wise it reads:
///
/// ```text
/// | 0.4124 0.3576 0.1805 |
/// | 0.2126 0.7152 0.0722 |
/// | 0.0193 0.1192 0.9505 |
/// ```
pub const RGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// Converts a linear RGB triplet to XYZ.
#[inline]
pub fn rgb_to_xyz(rgb: [f64; 3]) -> DVec3 {
    RGB_TO_XYZ * DVec3::from_array(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(WhitePoint::from_name("D50").unwrap(), WhitePoint::D50);
        assert_eq!(WhitePoint::from_name("d55").unwrap(), WhitePoint::D55);
        assert_eq!(" D65 ".parse::<WhitePoint>().unwrap(), WhitePoint::D65);
    }

    #[test]
    fn test_unknown_white_point() {
        for name in ["D60", "D93", "", "A"] {
            let err = WhitePoint::from_name(name).unwrap_err();
            assert_eq!(err, Error::unknown_white_point(name));
        }
    }

    #[test]
    fn test_default_is_d55() {
        assert_eq!(WhitePoint::default(), WhitePoint::D55);
    }

    #[test]
    fn test_white_y_is_one() {
        for wp in WhitePoint::ALL {
            assert_eq!(wp.xyz().y, 1.0);
        }
    }

    #[test]
    fn test_matrix_rows() {
        let red = rgb_to_xyz([1.0, 0.0, 0.0]);
        assert_eq!(red, DVec3::new(0.4124, 0.2126, 0.0193));

        let white = rgb_to_xyz([1.0, 1.0, 1.0]);
        assert!((white.x - 0.9505).abs() < 1e-9);
        assert!((white.y - 1.0).abs() < 1e-9);
        assert!((white.z - 1.089).abs() < 1e-9);
    }

    #[test]
    fn test_display_roundtrip() {
        for wp in WhitePoint::ALL {
            assert_eq!(wp.to_string().parse::<WhitePoint>().unwrap(), wp);
        }
    }
}
