//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve for the rest. The exponent is exposed so
//! callers can decode with a non-standard gamma; [`DEFAULT_GAMMA`] is the
//! IEC value.
//!
//! # Breakpoints
//!
//! The decode threshold `0.04045` lives in the encoded domain and the encode
//! threshold `0.0031308` in the linear domain. They describe the same point
//! (`0.04045 / 12.92 ~= 0.0031308`), so the two directions are inverses.
//!
//! # Range
//!
//! - Negative inputs map to 0 in both directions
//! - Values above 1 pass through the power segment unclamped
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use swatch_core::Rgba;

/// Standard sRGB exponent.
pub const DEFAULT_GAMMA: f64 = 2.4;

/// Encoded-domain breakpoint between the linear and power segments.
pub const DECODE_BREAK: f64 = 0.04045;

/// Linear-domain breakpoint between the linear and power segments.
pub const ENCODE_BREAK: f64 = 0.0031308;

/// Slope of the linear segment.
const LINEAR_SLOPE: f64 = 12.92;

/// sRGB EOTF: decodes an sRGB encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if V < 0:        L = 0
/// if V < 0.04045:  L = V / 12.92
/// else:            L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    eotf_gamma(v, DEFAULT_GAMMA)
}

/// sRGB EOTF with a custom exponent for the power segment.
#[inline]
pub fn eotf_gamma(v: f64, gamma: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v < DECODE_BREAK {
        v / LINEAR_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(gamma)
    }
}

/// sRGB OETF: encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L < 0:          V = 0
/// if L < 0.0031308:  V = L * 12.92
/// else:              V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.001);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    oetf_gamma(l, DEFAULT_GAMMA)
}

/// sRGB OETF with a custom exponent for the power segment.
#[inline]
pub fn oetf_gamma(l: f64, gamma: f64) -> f64 {
    if l < ENCODE_BREAK {
        if l < 0.0 { 0.0 } else { l * LINEAR_SLOPE }
    } else {
        1.055 * l.powf(1.0 / gamma) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

/// Decodes r, g and b of an encoded color; alpha is untouched.
#[inline]
pub fn eotf_rgba(color: Rgba) -> Rgba {
    color.map_rgb(eotf)
}

/// Encodes r, g and b of a linear color; alpha is untouched.
#[inline]
pub fn oetf_rgba(color: Rgba) -> Rgba {
    color.map_rgb(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=10_000 {
            let v = i as f64 / 10_000.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-6, "v={}, back={}", v, back);
            let back = eotf(oetf(v));
            assert!((v - back).abs() < 1e-6, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_clamps() {
        assert_eq!(eotf(-0.5), 0.0);
        assert_eq!(oetf(-0.5), 0.0);
    }

    #[test]
    fn test_no_upper_clamp() {
        assert!(eotf(1.5) > 1.0);
        assert!(oetf(2.0) > 1.0);
    }

    #[test]
    fn test_linear_segment() {
        assert!((eotf(0.04) - 0.04 / 12.92).abs() < 1e-15);
        assert!((oetf(0.003) - 0.003 * 12.92).abs() < 1e-15);
    }

    #[test]
    fn test_breakpoints_agree() {
        // Both segments meet near the breakpoint
        let below = DECODE_BREAK / LINEAR_SLOPE;
        let above = ((DECODE_BREAK + 0.055) / 1.055).powf(DEFAULT_GAMMA);
        assert!((below - above).abs() < 1e-7);
        assert!((below - ENCODE_BREAK).abs() < 1e-7);
    }

    #[test]
    fn test_custom_gamma() {
        let v = 0.5;
        assert!(eotf_gamma(v, 2.2) > eotf_gamma(v, 2.4));
        assert!((oetf_gamma(eotf_gamma(v, 2.2), 2.2) - v).abs() < 1e-9);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let c = eotf_rgba(Rgba::new(1.0, 0.5, 0.0, 0.25));
        assert_eq!(c.a, 0.25);
        assert!((c.g - 0.214).abs() < 0.001);
    }
}
