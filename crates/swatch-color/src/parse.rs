//! Color string parsing.
//!
//! Recognized formats, tried in this order:
//!
//! | Format | Example |
//! |--------|---------|
//! | [`ColorFormat::Hex`] | `#FF8000`, `ff8000` |
//! | [`ColorFormat::Rgb`] | `rgb(255, 128, 0)`, `RGBA(255,128,0,0.5)` |
//! | [`ColorFormat::RgbPure`] | `255, 128, 0` |
//!
//! Components are 0..255 sRGB values; the parsed color is decoded to linear
//! light. Alpha is optional (`0`, `1` or `0.x`/`0.xx`) and is never decoded.

use crate::{ColorError, ColorResult};
use lazy_static::lazy_static;
use regex::Regex;
use swatch_core::Rgba;
use swatch_transfer::srgb;

const COMPONENT: &str = r"(2[0-4][0-9]|25[0-5]|[01]?[0-9][0-9]?)";
const ALPHA: &str = r"(0\.[0-9]{1,2}|1|0)";

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#?[a-fA-F0-9]{6}$").unwrap();
    static ref RGB_RE: Regex = Regex::new(&format!(
        r"^[rR][gG][bB][aA]?\((\s*{COMPONENT},){{2}}\s*{COMPONENT},?\s*{ALPHA}?\)$"
    ))
    .unwrap();
    static ref RGB_PURE_RE: Regex = Regex::new(&format!(
        r"^(\s*{COMPONENT},){{2}}\s*{COMPONENT},?\s*{ALPHA}?$"
    ))
    .unwrap();
}

/// Syntax a color string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// Six hex digits with optional `#`
    Hex,
    /// `rgb(...)` or `rgba(...)`
    Rgb,
    /// Bare comma-separated components
    RgbPure,
}

impl ColorFormat {
    /// Detects the format of `input`, or `None` if nothing matches.
    pub fn detect(input: &str) -> Option<Self> {
        if HEX_RE.is_match(input) {
            Some(Self::Hex)
        } else if RGB_RE.is_match(input) {
            Some(Self::Rgb)
        } else if RGB_PURE_RE.is_match(input) {
            Some(Self::RgbPure)
        } else {
            None
        }
    }
}

/// Parses a color string into a linear color.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorString`] when no format matches.
///
/// # Example
///
/// ```rust
/// use swatch_color::parse_color;
///
/// let c = parse_color("#FFFFFF").unwrap();
/// assert_eq!(c.rgb(), [1.0, 1.0, 1.0]);
///
/// let c = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
/// assert_eq!(c.a, 0.5);
/// ```
pub fn parse_color(input: &str) -> ColorResult<Rgba> {
    let s = input.trim();
    match ColorFormat::detect(s) {
        Some(ColorFormat::Hex) => hex_to_rgba(s, 1.0),
        Some(ColorFormat::Rgb) => {
            let open = s.find('(').ok_or_else(|| invalid(input))?;
            let inner = s[open + 1..].trim_end_matches(')');
            components_to_rgba(inner).ok_or_else(|| invalid(input))
        }
        Some(ColorFormat::RgbPure) => components_to_rgba(s).ok_or_else(|| invalid(input)),
        None => Err(invalid(input)),
    }
}

/// Converts a 6-digit hex string (optional `#`) to a linear color.
///
/// # Example
///
/// ```rust
/// use swatch_color::hex_to_rgba;
///
/// let c = hex_to_rgba("#000000", 1.0).unwrap();
/// assert_eq!(c, swatch_core::Rgba::BLACK);
/// ```
pub fn hex_to_rgba(hex: &str, alpha: f64) -> ColorResult<Rgba> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(hex));
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid(hex))?;
    let r = (value >> 16) & 0xff;
    let g = (value >> 8) & 0xff;
    let b = value & 0xff;
    Ok(Rgba::new(
        srgb::eotf(r as f64 / 255.0),
        srgb::eotf(g as f64 / 255.0),
        srgb::eotf(b as f64 / 255.0),
        alpha,
    ))
}

/// Formats a linear color as `#RRGGBB`, encoding and clamping r, g and b.
///
/// # Example
///
/// ```rust
/// use swatch_color::{hex_to_rgba, to_hex};
///
/// let c = hex_to_rgba("#3A7FC2", 1.0).unwrap();
/// assert_eq!(to_hex(&c), "#3A7FC2");
/// ```
pub fn to_hex(color: &Rgba) -> String {
    let [r, g, b] = srgb::oetf_rgb(color.rgb()).map(to_byte);
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn components_to_rgba(list: &str) -> Option<Rgba> {
    let values: Vec<f64> = list
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let decode = |v: f64| srgb::eotf(v / 255.0);
    match values[..] {
        [r, g, b] => Some(Rgba::opaque(decode(r), decode(g), decode(b))),
        [r, g, b, a] => Some(Rgba::new(decode(r), decode(g), decode(b), a)),
        _ => None,
    }
}

fn invalid(input: &str) -> ColorError {
    ColorError::InvalidColorString(input.to_string())
}
