//! RGB -> CIE Lab conversion.
//!
//! Linear RGB goes through the BT.709 matrix to XYZ, is normalized by the
//! chosen white point, then through the classic CIE nonlinearity:
//!
//! ```text
//! f(t) = t^(1/3)              if t > 0.008856
//!      = 7.787 * t + 16/116   otherwise
//!
//! L = 116 * f(Y/Yn) - 16
//! a = 500 * (f(X/Xn) - f(Y/Yn))
//! b = 200 * (f(Y/Yn) - f(Z/Zn))
//! ```

use serde::{Deserialize, Serialize};
use swatch_primaries::{rgb_to_xyz, WhitePoint};
use swatch_transfer::srgb;

const EPSILON: f64 = 0.008856;
const KAPPA_SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// CIE Lab color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0..100
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Creates a Lab triple.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference (Euclidean distance).
    #[inline]
    pub fn delta_e(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Components as `[L, a, b]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

/// Converts linear RGB to Lab under `white_point`.
///
/// # Example
///
/// ```rust
/// use swatch_color::rgb_to_lab;
/// use swatch_primaries::WhitePoint;
///
/// let lab = rgb_to_lab([0.0, 0.0, 0.0], WhitePoint::D65);
/// assert!(lab.l.abs() < 1e-9);
/// ```
pub fn rgb_to_lab(rgb: [f64; 3], white_point: WhitePoint) -> Lab {
    let xyz = rgb_to_xyz(rgb) / white_point.xyz();
    let fx = lab_f(xyz.x);
    let fy = lab_f(xyz.y);
    let fz = lab_f(xyz.z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts sRGB encoded RGB to Lab, decoding each channel first.
pub fn srgb_to_lab(rgb: [f64; 3], white_point: WhitePoint) -> Lab {
    rgb_to_lab(srgb::eotf_rgb(rgb), white_point)
}

/// CIE76 distance between two linear RGB colors under `white_point`.
pub fn delta_e(a: [f64; 3], b: [f64; 3], white_point: WhitePoint) -> f64 {
    rgb_to_lab(a, white_point).delta_e(&rgb_to_lab(b, white_point))
}
