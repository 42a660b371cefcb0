//! RGB <-> HSV conversion.
//!
//! Hue is normalized to [0, 1), not degrees. Achromatic colors
//! (`r == g == b`) have hue and saturation 0.

use swatch_core::Rgba;

/// Converts RGB to `(h, s, v)`.
///
/// # Example
///
/// ```rust
/// use swatch_color::rgb_to_hsv;
///
/// assert_eq!(rgb_to_hsv(1.0, 1.0, 1.0), (0.0, 0.0, 1.0));
/// assert_eq!(rgb_to_hsv(1.0, 0.0, 0.0), (0.0, 1.0, 1.0));
/// ```
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if minc == maxc {
        return (0.0, 0.0, v);
    }
    let range = maxc - minc;
    let s = range / maxc;
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Converts `(h, s, v)` to RGB.
///
/// Hue wraps: the sector is `floor(h * 6) mod 6`.
///
/// # Example
///
/// ```rust
/// use swatch_color::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), (0.5, 0.5, 0.5));
/// let (r, g, b) = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
/// assert!(r.abs() < 1e-12 && (g - 1.0).abs() < 1e-12 && b.abs() < 1e-12);
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSV representation of a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in [0, 1)
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

impl Hsv {
    /// Creates an HSV triple.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// HSV of a color's RGB components; alpha is dropped.
    pub fn from_rgba(color: Rgba) -> Self {
        let (h, s, v) = rgb_to_hsv(color.r, color.g, color.b);
        Self { h, s, v }
    }

    /// Opaque color with these HSV components.
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        Rgba::opaque(r, g, b)
    }

    /// Component by channel.
    pub fn get(&self, channel: HsvChannel) -> f64 {
        match channel {
            HsvChannel::Hue => self.h,
            HsvChannel::Saturation => self.s,
            HsvChannel::Value => self.v,
        }
    }
}

/// One HSV component, used as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsvChannel {
    /// Hue
    Hue,
    /// Saturation
    Saturation,
    /// Value
    Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS && (a.2 - b.2).abs() < EPS
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hsv(1.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsv(0.3, 0.3, 0.3), (0.0, 0.0, 0.3));
    }

    #[test]
    fn test_primaries() {
        assert!(close(rgb_to_hsv(1.0, 0.0, 0.0), (0.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(0.0, 1.0, 0.0), (1.0 / 3.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(0.0, 0.0, 1.0), (2.0 / 3.0, 1.0, 1.0)));
    }

    #[test]
    fn test_magenta_hue_wraps_positive() {
        // bc - gc is negative for magenta-ish reds
        let (h, _, _) = rgb_to_hsv(1.0, 0.0, 0.5);
        assert!((0.0..1.0).contains(&h));
        assert!((h - 11.0 / 12.0).abs() < EPS);
    }

    #[test]
    fn test_every_sector() {
        let expected = [
            (0.0 / 6.0 + 0.05, (1.0, 0.3, 0.0)),
            (1.0 / 6.0 + 0.05, (0.7, 1.0, 0.0)),
            (2.0 / 6.0 + 0.05, (0.0, 1.0, 0.3)),
            (3.0 / 6.0 + 0.05, (0.0, 0.7, 1.0)),
            (4.0 / 6.0 + 0.05, (0.3, 0.0, 1.0)),
            (5.0 / 6.0 + 0.05, (1.0, 0.0, 0.7)),
        ];
        for (h, rgb) in expected {
            let got = hsv_to_rgb(h, 1.0, 1.0);
            assert!(
                (got.0 - rgb.0).abs() < 1e-9 && (got.1 - rgb.1).abs() < 1e-9 && (got.2 - rgb.2).abs() < 1e-9,
                "h={h}: {got:?} != {rgb:?}"
            );
        }
    }

    #[test]
    fn test_hue_one_wraps_to_red() {
        assert!(close(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(0.7, 0.0, 0.4), (0.4, 0.4, 0.4));
    }

    #[test]
    fn test_hsv_struct() {
        let hsv = Hsv::from_rgba(Rgba::new(0.0, 0.0, 1.0, 0.5));
        assert_eq!(hsv.get(HsvChannel::Saturation), 1.0);
        assert_eq!(hsv.to_rgba().a, 1.0);
    }
}
