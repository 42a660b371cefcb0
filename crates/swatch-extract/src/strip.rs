//! Palette strips: a row of equal-width swatches.
//!
//! [`extract_from_strip`] reads one color per swatch from the first row;
//! [`render_strip`] draws a palette back out. Strip pixels are sRGB
//! encoded, palette colors are linear.

use swatch_core::{Error, Palette, PixelBuffer, Result, Rgba, COLOR_PRECISION};
use swatch_transfer::{decode_rgba, encode_rgba};
use tracing::{debug, trace};

/// Default swatch width in pixels.
pub const SWATCH_WIDTH: u32 = 50;

/// Default swatch height in pixels.
pub const SWATCH_HEIGHT: u32 = 50;

/// Reads a palette from a strip image, left to right.
///
/// Swatch `i` is sampled at `x = swatch_width / 2 + i * swatch_width` on the
/// first row. Trailing pixels narrower than a swatch are ignored.
///
/// # Errors
///
/// [`Error::EmptyInput`] if `swatch_width` is zero or the image is narrower
/// than one swatch.
///
/// # Example
///
/// ```rust
/// use swatch_core::{PixelBuffer, Rgba};
/// use swatch_extract::extract_from_strip;
///
/// let strip = PixelBuffer::filled(100, 10, Rgba::BLACK).unwrap();
/// let palette = extract_from_strip(&strip, 50).unwrap();
/// assert_eq!(palette.colors(), &[Rgba::BLACK, Rgba::BLACK]);
/// ```
pub fn extract_from_strip(buffer: &PixelBuffer, swatch_width: u32) -> Result<Palette> {
    if swatch_width == 0 {
        return Err(Error::empty_input("swatch width is zero"));
    }
    let count = buffer.width() / swatch_width;
    if count == 0 {
        return Err(Error::empty_input(format!(
            "strip is {} px wide, narrower than one {} px swatch",
            buffer.width(),
            swatch_width
        )));
    }
    trace!(width = buffer.width(), swatch_width, count, "extract_from_strip");

    let palette: Palette = (0..count)
        .map(|i| {
            let x = swatch_width / 2 + i * swatch_width;
            decode_rgba(buffer.color(x, 0)).rounded(COLOR_PRECISION)
        })
        .collect();
    debug!(colors = palette.len(), "Decoded strip");
    Ok(palette)
}

/// Draws `palette` as a 4-channel strip, one swatch per color.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for an empty palette or a zero swatch size
/// - [`Error::InvalidParameter`] when the strip size overflows
pub fn render_strip(palette: &Palette, swatch_width: u32, swatch_height: u32) -> Result<PixelBuffer> {
    if palette.is_empty() {
        return Err(Error::empty_input("palette has no colors"));
    }
    if swatch_width == 0 || swatch_height == 0 {
        return Err(Error::empty_input(format!(
            "swatch size {}x{}",
            swatch_width, swatch_height
        )));
    }
    let width = u32::try_from(palette.len())
        .ok()
        .and_then(|n| n.checked_mul(swatch_width))
        .ok_or_else(|| {
            Error::invalid_parameter(
                "swatch_width",
                format!("{} swatches of {} px overflow the strip width", palette.len(), swatch_width),
            )
        })?;
    (width as usize)
        .checked_mul(4)
        .and_then(|n| n.checked_mul(swatch_height as usize))
        .ok_or_else(|| {
            Error::invalid_parameter(
                "swatch_height",
                format!("{}x{} strip is too large", width, swatch_height),
            )
        })?;
    let encoded: Vec<Rgba> = palette.iter().map(|&c| encode_rgba(c)).collect();

    let mut row = Vec::with_capacity(width as usize * 4);
    for color in &encoded {
        for _ in 0..swatch_width {
            row.extend_from_slice(&color.to_array());
        }
    }
    let data = row.repeat(swatch_height as usize);
    debug!(width, height = swatch_height, colors = palette.len(), "Rendered strip");
    PixelBuffer::new(width, swatch_height, 4, data)
}
