//! Frequency sampling options.
//!
//! [`ExtractOptions`] deserializes with every field optional, so a preset
//! file only needs the fields it changes:
//!
//! ```yaml
//! max_colors: 8
//! distinct_threshold: 0.1
//! white_point: D65
//! ```

use serde::{Deserialize, Serialize};
use swatch_core::{Error, Result};
use swatch_primaries::WhitePoint;

/// Largest accepted `max_colors`.
pub const MAX_COLORS_LIMIT: usize = 100;

/// Options for [`extract_from_image`](crate::extract_from_image).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Upper bound on returned colors, 1..=100.
    pub max_colors: usize,
    /// Two colors are similar when no r/g/b channel differs by more than
    /// this. Zero disables the distinct-color filter.
    pub distinct_threshold: f64,
    /// Colors seen no more than `highest_count / pixel_count_threshold`
    /// times are dropped. Zero disables the noise floor.
    pub pixel_count_threshold: u32,
    /// Samples with alpha below this are discarded.
    pub alpha_floor: f64,
    /// Visit every pixel instead of the 45x45 grid.
    pub analyze_all_pixels: bool,
    /// Illuminant for Lab values in the report.
    pub white_point: WhitePoint,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_colors: 5,
            distinct_threshold: 0.05,
            pixel_count_threshold: 800,
            alpha_floor: 1.0,
            analyze_all_pixels: false,
            white_point: WhitePoint::D55,
        }
    }
}

impl ExtractOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `max_colors`.
    pub fn with_max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Sets `distinct_threshold`.
    pub fn with_distinct_threshold(mut self, threshold: f64) -> Self {
        self.distinct_threshold = threshold;
        self
    }

    /// Sets `pixel_count_threshold`.
    pub fn with_pixel_count_threshold(mut self, threshold: u32) -> Self {
        self.pixel_count_threshold = threshold;
        self
    }

    /// Sets `alpha_floor`.
    pub fn with_alpha_floor(mut self, alpha_floor: f64) -> Self {
        self.alpha_floor = alpha_floor;
        self
    }

    /// Sets `analyze_all_pixels`.
    pub fn with_all_pixels(mut self, all: bool) -> Self {
        self.analyze_all_pixels = all;
        self
    }

    /// Sets `white_point`.
    pub fn with_white_point(mut self, white_point: WhitePoint) -> Self {
        self.white_point = white_point;
        self
    }

    /// Checks option ranges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] naming the first field out of range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_COLORS_LIMIT).contains(&self.max_colors) {
            return Err(Error::invalid_parameter(
                "max_colors",
                format!("{} not in 1..={}", self.max_colors, MAX_COLORS_LIMIT),
            ));
        }
        if !self.distinct_threshold.is_finite() || self.distinct_threshold < 0.0 {
            return Err(Error::invalid_parameter(
                "distinct_threshold",
                format!("{} must be a finite value >= 0", self.distinct_threshold),
            ));
        }
        if !self.alpha_floor.is_finite() {
            return Err(Error::invalid_parameter(
                "alpha_floor",
                format!("{} is not finite", self.alpha_floor),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.max_colors, 5);
        assert_eq!(opts.pixel_count_threshold, 800);
        assert_eq!(opts.white_point, WhitePoint::D55);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_max_colors_range() {
        for bad in [0, 101] {
            let err = ExtractOptions::new().with_max_colors(bad).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "max_colors", .. }));
        }
        assert!(ExtractOptions::new().with_max_colors(100).validate().is_ok());
    }

    #[test]
    fn test_negative_threshold() {
        let err = ExtractOptions::new()
            .with_distinct_threshold(-0.1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "distinct_threshold", .. }));
    }

    #[test]
    fn test_partial_yaml() {
        let opts: ExtractOptions =
            serde_yaml::from_str("max_colors: 8\nwhite_point: D65\n").unwrap();
        assert_eq!(opts.max_colors, 8);
        assert_eq!(opts.white_point, WhitePoint::D65);
        assert_eq!(opts.distinct_threshold, 0.05);
        assert!(!opts.analyze_all_pixels);
    }
}
