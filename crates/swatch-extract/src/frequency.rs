//! Frequency sampling (dominant colors of an image).
//!
//! # Algorithm
//!
//! 1. Visit the 45x45 grid or every pixel ([`PixelSampler`])
//! 2. Decode r/g/b to linear, round all four channels to 4 places
//! 3. Drop samples whose alpha is below `alpha_floor`
//! 4. Count identical colors, order by count (ties: larger color first)
//! 5. Drop colors at or under `highest_count / pixel_count_threshold`
//! 6. Greedily keep colors unlike every color kept before them
//! 7. Truncate to `max_colors`

use crate::options::ExtractOptions;
use crate::sampler::{decode_sample, PixelSampler};
use serde::Serialize;
use std::collections::HashMap;
use swatch_color::{rgb_to_lab, Lab};
use swatch_core::{Palette, PixelBuffer, Result, Rgba};
use swatch_primaries::WhitePoint;
use tracing::{debug, trace};

/// A kept color and how many samples had it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorCount {
    /// Linear color, rounded to 4 places
    pub color: Rgba,
    /// Number of samples
    pub count: usize,
    /// Lab under the options' white point
    pub lab: Lab,
}

/// Detailed result of [`extract_report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// Samples visited, before the alpha filter.
    pub samples_visited: usize,
    /// Samples that passed the alpha filter.
    pub samples_kept: usize,
    /// Distinct rounded colors among kept samples.
    pub unique_colors: usize,
    /// Illuminant used for `lab`.
    pub white_point: WhitePoint,
    /// Result colors in rank order.
    pub colors: Vec<ColorCount>,
}

impl ExtractionReport {
    /// Result colors as a palette.
    pub fn palette(&self) -> Palette {
        self.colors.iter().map(|c| c.color).collect()
    }
}

/// Dominant colors of `buffer`, most frequent first.
///
/// # Errors
///
/// [`swatch_core::Error::InvalidParameter`] when `options` fail validation.
///
/// # Example
///
/// ```rust
/// use swatch_core::{PixelBuffer, Rgba};
/// use swatch_extract::{extract_from_image, ExtractOptions};
///
/// let buf = PixelBuffer::filled(64, 64, Rgba::WHITE).unwrap();
/// let palette = extract_from_image(&buf, &ExtractOptions::default()).unwrap();
/// assert_eq!(palette.colors(), &[Rgba::WHITE]);
/// ```
pub fn extract_from_image(buffer: &PixelBuffer, options: &ExtractOptions) -> Result<Palette> {
    Ok(extract_report(buffer, options)?.palette())
}

/// Like [`extract_from_image`], keeping sample counts and Lab values.
pub fn extract_report(buffer: &PixelBuffer, options: &ExtractOptions) -> Result<ExtractionReport> {
    options.validate()?;
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        all = options.analyze_all_pixels,
        "extract_report"
    );

    let mut histogram: HashMap<[u64; 4], (Rgba, usize)> = HashMap::new();
    let mut visited = 0usize;
    let mut kept = 0usize;
    for (x, y) in PixelSampler::for_buffer(buffer, options.analyze_all_pixels) {
        visited += 1;
        let color = decode_sample(buffer.color(x, y));
        // NaN alpha never passes
        if !(color.a >= options.alpha_floor) {
            continue;
        }
        kept += 1;
        histogram.entry(color.key()).or_insert((color, 0)).1 += 1;
    }

    let unique_colors = histogram.len();
    let mut ranked: Vec<(Rgba, usize)> = histogram.into_values().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.total_cmp(&a.0)));

    let ranked = apply_noise_floor(ranked, options.pixel_count_threshold);
    let mut selected = if options.distinct_threshold > 0.0 {
        distinct_colors(&ranked, options.max_colors, options.distinct_threshold)
    } else {
        ranked
    };
    selected.truncate(options.max_colors);

    debug!(
        visited,
        kept,
        unique = unique_colors,
        result = selected.len(),
        "Extracted palette"
    );

    let white_point = options.white_point;
    Ok(ExtractionReport {
        samples_visited: visited,
        samples_kept: kept,
        unique_colors,
        white_point,
        colors: selected
            .into_iter()
            .map(|(color, count)| ColorCount {
                color,
                count,
                lab: rgb_to_lab(color.rgb(), white_point),
            })
            .collect(),
    })
}

/// Drops colors seen no more than `highest / divisor` times.
///
/// `ranked` must be sorted by descending count. A zero divisor keeps all.
pub fn apply_noise_floor(ranked: Vec<(Rgba, usize)>, divisor: u32) -> Vec<(Rgba, usize)> {
    let Some(&(_, highest)) = ranked.first() else {
        return ranked;
    };
    if divisor == 0 {
        return ranked;
    }
    let floor = highest / divisor as usize;
    trace!(highest, floor, "noise floor");
    ranked.into_iter().filter(|&(_, n)| n > floor).collect()
}

/// Greedy first-wins suppression of similar colors.
///
/// Walks `ranked` in order and keeps a color only when every color kept so
/// far differs from it by more than `max_diff` in some r/g/b channel. Stops
/// once `limit` colors are kept.
pub fn distinct_colors(ranked: &[(Rgba, usize)], limit: usize, max_diff: f64) -> Vec<(Rgba, usize)> {
    let mut kept: Vec<(Rgba, usize)> = Vec::with_capacity(limit);
    for &(color, count) in ranked {
        if kept.len() == limit {
            break;
        }
        if kept.iter().all(|(k, _)| k.max_rgb_diff(&color) > max_diff) {
            kept.push((color, count));
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(v: f64) -> Rgba {
        Rgba::opaque(v, v, v)
    }

    #[test]
    fn test_noise_floor() {
        let ranked = vec![(c(0.9), 1600), (c(0.5), 3), (c(0.1), 2)];
        // floor = 1600 / 800 = 2
        let out = apply_noise_floor(ranked.clone(), 800);
        assert_eq!(out, vec![(c(0.9), 1600), (c(0.5), 3)]);
        assert_eq!(apply_noise_floor(ranked.clone(), 0), ranked);
        assert!(apply_noise_floor(Vec::new(), 800).is_empty());
    }

    #[test]
    fn test_distinct_first_wins() {
        let ranked = vec![(c(0.50), 10), (c(0.53), 9), (c(0.70), 8)];
        let out = distinct_colors(&ranked, 5, 0.05);
        assert_eq!(out, vec![(c(0.50), 10), (c(0.70), 8)]);
    }

    #[test]
    fn test_distinct_boundary_is_similar() {
        let ranked = vec![(c(0.5), 2), (c(0.5 + 0.25), 1)];
        assert_eq!(distinct_colors(&ranked, 5, 0.25).len(), 1);
    }

    #[test]
    fn test_distinct_limit() {
        let ranked: Vec<_> = (0..10).map(|i| (c(i as f64 / 10.0), 10 - i)).collect();
        assert_eq!(distinct_colors(&ranked, 3, 0.05).len(), 3);
    }

    #[test]
    fn test_ties_prefer_larger_color() {
        let data: Vec<f64> = [0.2, 0.2, 0.2, 0.8, 0.8, 0.8].to_vec();
        let buf = PixelBuffer::new(2, 1, 3, data).unwrap();
        let opts = ExtractOptions::new()
            .with_all_pixels(true)
            .with_distinct_threshold(0.0)
            .with_pixel_count_threshold(0);
        let report = extract_report(&buf, &opts).unwrap();
        assert_eq!(report.samples_visited, 2);
        assert!(report.colors[0].color.r > report.colors[1].color.r);
    }

    #[test]
    fn test_report_counts_and_lab() {
        let buf = PixelBuffer::filled(4, 4, Rgba::WHITE).unwrap();
        let opts = ExtractOptions::new().with_all_pixels(true);
        let report = extract_report(&buf, &opts).unwrap();
        assert_eq!(report.samples_kept, 16);
        assert_eq!(report.unique_colors, 1);
        assert_eq!(report.colors[0].count, 16);
        assert!((report.colors[0].lab.l - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_transparent_image_is_empty() {
        let buf = PixelBuffer::filled(8, 8, Rgba::new(1.0, 0.0, 0.0, 0.5)).unwrap();
        let palette = extract_from_image(&buf, &ExtractOptions::default()).unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_nan_alpha_discarded() {
        let data = vec![1.0, 1.0, 1.0, f64::NAN, 0.0, 0.0, 0.0, 1.0];
        let buf = PixelBuffer::new(2, 1, 4, data).unwrap();
        let opts = ExtractOptions::new().with_all_pixels(true);
        let report = extract_report(&buf, &opts).unwrap();
        assert_eq!(report.samples_visited, 2);
        assert_eq!(report.samples_kept, 1);
        assert_eq!(report.colors.len(), 1);
        assert_eq!(report.colors[0].color, Rgba::BLACK);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let buf = PixelBuffer::filled(2, 2, Rgba::WHITE).unwrap();
        let opts = ExtractOptions::new().with_max_colors(0);
        assert!(extract_from_image(&buf, &opts).is_err());
    }
}
