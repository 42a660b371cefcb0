//! Palette generation and adjustment in HSV space.
//!
//! [`Harmony`] derives a five-color palette from one base color.
//! [`HsvOffset`] shifts every color of a palette by the same HSV delta,
//! [`sort_by_hsv`] reorders a palette by one HSV component and [`shuffle`]
//! puts it in random order.
//!
//! All results are opaque. Saturation and value are clamped to [0, 1]
//! before converting back to RGB; hue wraps.

use crate::hsv::{Hsv, HsvChannel};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use swatch_core::{Error, Palette, Rgba};

/// Number of colors a harmony produces.
pub const HARMONY_SIZE: usize = 5;

/// Default hue step between analogous colors.
pub const DEFAULT_ANALOGOUS_OFFSET: f64 = 0.05;

/// Color harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "method")]
pub enum Harmony {
    /// Base hue at varied saturation and value.
    Monochromatic,
    /// Five hues `offset` apart, centered on the base hue.
    Analogous {
        /// Hue step in [0, 1) units
        offset: f64,
    },
    /// Base hue and its opposite.
    Complementary,
}

impl Harmony {
    /// Generates [`HARMONY_SIZE`] colors from `base`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_color::Harmony;
    /// use swatch_core::Rgba;
    ///
    /// let palette = Harmony::Complementary.generate(Rgba::opaque(0.8, 0.2, 0.1));
    /// assert_eq!(palette.len(), 5);
    /// ```
    pub fn generate(&self, base: Rgba) -> Palette {
        let Hsv { h, s, v } = Hsv::from_rgba(base);
        let hsv = match *self {
            Harmony::Monochromatic => {
                let ov = if v < 0.7 { v + 0.3 } else { v - 0.5 };
                let ov2 = if v > 0.4 { v - 0.4 } else { v + 0.6 };
                let os = if s > 0.4 { s - 0.3 } else { s + 0.3 };
                [
                    (h, s, ov.max(0.3)),
                    (h, os.max(0.3), v.max(0.2)),
                    (h, s, v),
                    (h, os.max(0.3), ov.max(0.3)),
                    (h, s, ov2),
                ]
            }
            Harmony::Analogous { offset } => {
                let at = |i: f64| (wrap_hue(h + offset * i), s, v);
                [at(-2.0), at(-1.0), at(0.0), at(1.0), at(2.0)]
            }
            Harmony::Complementary => {
                let ov = if v < 0.5 { v + 0.3 } else { v - 0.3 };
                let oh = wrap_hue(h + 0.5);
                [
                    (h, (s + 0.1).max(0.1), ov),
                    (h, (s - 0.1).max(0.0), (v + 0.3).min(1.0)),
                    (h, s, v),
                    (oh, s.max(0.2), ov),
                    (oh, s, v),
                ]
            }
        };
        hsv.into_iter().map(|(h, s, v)| hsv_color(h, s, v)).collect()
    }
}

impl FromStr for Harmony {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "monochromatic" | "mono" => Ok(Harmony::Monochromatic),
            "analogous" => Ok(Harmony::Analogous {
                offset: DEFAULT_ANALOGOUS_OFFSET,
            }),
            "complementary" | "complement" => Ok(Harmony::Complementary),
            other => Err(Error::invalid_parameter(
                "harmony",
                format!("unknown method {other:?} (monochromatic, analogous, complementary)"),
            )),
        }
    }
}

/// Uniform HSV shift applied to every color of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvOffset {
    /// Hue delta, wraps
    pub h: f64,
    /// Saturation delta, clamped
    pub s: f64,
    /// Value delta, clamped
    pub v: f64,
}

impl HsvOffset {
    /// Creates an offset.
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Shifts one color. Achromatic colors stay achromatic.
    pub fn apply(&self, color: Rgba) -> Rgba {
        let hsv = Hsv::from_rgba(color);
        let s = if hsv.s == 0.0 { 0.0 } else { hsv.s + self.s };
        hsv_color(wrap_hue(hsv.h + self.h), s, hsv.v + self.v)
    }

    /// Shifts every color of `palette`, keeping order.
    pub fn adjust(&self, palette: &Palette) -> Palette {
        palette.iter().map(|&c| self.apply(c)).collect()
    }
}

/// Reorders `palette` by one HSV component, ascending unless `reverse`.
///
/// Colors with equal keys keep their relative order.
pub fn sort_by_hsv(palette: &Palette, channel: HsvChannel, reverse: bool) -> Palette {
    let mut keyed: Vec<(f64, Rgba)> = palette
        .iter()
        .map(|&c| (Hsv::from_rgba(c).get(channel), c))
        .collect();
    if reverse {
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Returns `palette` in random order. Colors are kept as they are.
pub fn shuffle<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> Palette {
    let mut colors = palette.clone().into_vec();
    colors.shuffle(rng);
    colors.into()
}

#[inline]
fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(1.0)
}

#[inline]
fn hsv_color(h: f64, s: f64, v: f64) -> Rgba {
    Hsv::new(h, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0)).to_rgba()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hsv_of(p: &Palette) -> Vec<Hsv> {
        p.iter().map(|&c| Hsv::from_rgba(c)).collect()
    }

    #[test]
    fn test_monochromatic_keeps_hue() {
        let base = Hsv::new(0.6, 0.5, 0.5).to_rgba();
        let out = hsv_of(&Harmony::Monochromatic.generate(base));
        assert_eq!(out.len(), HARMONY_SIZE);
        for hsv in &out {
            assert_abs_diff_eq!(hsv.h, 0.6, epsilon = 1e-9);
        }
        // ov = 0.8, ov2 = 0.1, os = 0.2
        assert_abs_diff_eq!(out[0].v, 0.8, epsilon = 1e-9);
        assert_abs_diff_eq!(out[1].s, 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(out[2].s, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(out[4].v, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_analogous_spacing() {
        let base = Hsv::new(0.02, 0.8, 0.9).to_rgba();
        let out = hsv_of(&Harmony::Analogous { offset: 0.1 }.generate(base));
        let hues: Vec<f64> = out.iter().map(|c| c.h).collect();
        let expected = [0.82, 0.92, 0.02, 0.12, 0.22];
        for (got, want) in hues.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_complementary_opposite_hue() {
        let base = Hsv::new(0.1, 0.6, 0.4).to_rgba();
        let out = hsv_of(&Harmony::Complementary.generate(base));
        assert_abs_diff_eq!(out[2].h, 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(out[3].h, 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(out[4].h, 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(out[0].v, 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("Mono".parse::<Harmony>().unwrap(), Harmony::Monochromatic);
        assert!(matches!(
            "analogous".parse::<Harmony>().unwrap(),
            Harmony::Analogous { .. }
        ));
        assert!("triadic".parse::<Harmony>().is_err());
    }

    #[test]
    fn test_offset_wraps_and_clamps() {
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let shifted = HsvOffset::new(-0.25, 0.5, 0.5).apply(red);
        let hsv = Hsv::from_rgba(shifted);
        assert_abs_diff_eq!(hsv.h, 0.75, epsilon = 1e-9);
        assert_abs_diff_eq!(hsv.s, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hsv.v, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_keeps_gray_gray() {
        let gray = Rgba::opaque(0.5, 0.5, 0.5);
        let out = HsvOffset::new(0.3, 0.4, 0.1).apply(gray);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert_abs_diff_eq!(out.r, 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_adjust_sets_alpha() {
        let p = Palette::from(vec![Rgba::new(0.2, 0.4, 0.6, 0.3)]);
        let out = HsvOffset::default().adjust(&p);
        assert_eq!(out[0].a, 1.0);
        assert_abs_diff_eq!(out[0].b, 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_sort_by_value() {
        let dark = Rgba::opaque(0.1, 0.1, 0.1);
        let mid = Rgba::opaque(0.5, 0.2, 0.2);
        let light = Rgba::opaque(0.9, 0.9, 0.9);
        let p = Palette::from(vec![mid, light, dark]);
        let asc = sort_by_hsv(&p, HsvChannel::Value, false);
        assert_eq!(asc.colors(), &[dark, mid, light]);
        let desc = sort_by_hsv(&p, HsvChannel::Value, true);
        assert_eq!(desc.colors(), &[light, mid, dark]);
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let p: Palette = (0..16)
            .map(|i| Rgba::new(i as f64 / 16.0, 0.5, 0.25, 0.5))
            .collect();
        let a = shuffle(&p, &mut StdRng::seed_from_u64(7));
        let b = shuffle(&p, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), p.len());
        assert_ne!(a.colors(), p.colors());

        let mut sorted = a.into_vec();
        sorted.sort_by(|x, y| x.r.total_cmp(&y.r));
        assert_eq!(sorted.as_slice(), p.colors());
    }

    #[test]
    fn test_shuffle_empty() {
        let out = shuffle(&Palette::new(), &mut StdRng::seed_from_u64(1));
        assert!(out.is_empty());
    }
}
