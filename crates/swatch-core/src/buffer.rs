//! Raw pixel buffer handed to the extractor.
//!
//! # Memory Layout
//!
//! Samples are stored in **row-major** order, top-to-bottom, with channels
//! interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Only 3 (RGB) and 4 (RGBA) channels are accepted.
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::PixelBuffer;
//!
//! let data = vec![0.5; 4 * 2 * 3];
//! let buf = PixelBuffer::new(4, 2, 3, data).unwrap();
//! assert_eq!(buf.pixel(3, 1), &[0.5, 0.5, 0.5]);
//! ```

use crate::{Error, Result, Rgba};
use std::sync::Arc;

/// Immutable interleaved pixel samples with their shape.
///
/// The sample vector is kept in an [`Arc`], so clones are cheap and share
/// the data.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    data: Arc<Vec<f64>>,
    width: u32,
    height: u32,
    channels: u8,
}

impl PixelBuffer {
    /// Creates a buffer from floating-point samples.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if `channels` is not 3 or 4
    /// - [`Error::MalformedBuffer`] if `data.len() != width * height * channels`
    /// - [`Error::EmptyInput`] if the buffer holds no samples
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<f64>) -> Result<Self> {
        if !matches!(channels, 3 | 4) {
            return Err(Error::unsupported_format(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::malformed_buffer(expected, data.len()));
        }
        if data.is_empty() {
            return Err(Error::empty_input(format!(
                "pixel buffer {}x{} has no samples",
                width, height
            )));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
            channels,
        })
    }

    /// Creates a buffer from 8-bit samples, normalized to [0, 1].
    pub fn from_u8(width: u32, height: u32, channels: u8, data: &[u8]) -> Result<Self> {
        let samples = data.iter().map(|&v| v as f64 / u8::MAX as f64).collect();
        Self::new(width, height, channels, samples)
    }

    /// Creates a buffer from 16-bit samples, normalized to [0, 1].
    pub fn from_u16(width: u32, height: u32, channels: u8, data: &[u16]) -> Result<Self> {
        let samples = data.iter().map(|&v| v as f64 / u16::MAX as f64).collect();
        Self::new(width, height, channels, samples)
    }

    /// Creates a buffer filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let count = width as usize * height as usize;
        let data = color.to_array().repeat(count);
        Self::new(width, height, 4, data)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel (3 or 4).
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// `true` when the buffer carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// All samples.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Channel samples of pixel `index` in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= pixel_count()`.
    #[inline]
    pub fn pixel_at(&self, index: usize) -> &[f64] {
        let c = self.channels as usize;
        let start = index * c;
        &self.data[start..start + c]
    }

    /// Channel samples at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[f64] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixel_at(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at `(x, y)` as a color; alpha is 1.0 for RGB buffers.
    #[inline]
    pub fn color(&self, x: u32, y: u32) -> Rgba {
        let px = self.pixel(x, y);
        Rgba::new(px[0], px[1], px[2], if self.has_alpha() { px[3] } else { 1.0 })
    }

    /// Iterates pixels row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.channels as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_channels() {
        for channels in [0u8, 1, 2, 5] {
            let err = PixelBuffer::new(2, 2, channels, vec![0.0; 4 * channels as usize]).unwrap_err();
            assert_eq!(err, Error::unsupported_format(channels));
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = PixelBuffer::new(10, 10, 4, vec![0.0; 399]).unwrap_err();
        assert_eq!(err, Error::malformed_buffer(400, 399));

        let err = PixelBuffer::new(10, 10, 3, vec![0.0; 400]).unwrap_err();
        assert_eq!(err, Error::malformed_buffer(300, 400));
    }

    #[test]
    fn test_rejects_empty() {
        let err = PixelBuffer::new(0, 10, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn test_pixel_access() {
        let data: Vec<f64> = (0..2 * 2 * 3).map(|v| v as f64).collect();
        let buf = PixelBuffer::new(2, 2, 3, data).unwrap();
        assert_eq!(buf.pixel(0, 0), &[0.0, 1.0, 2.0]);
        assert_eq!(buf.pixel(1, 1), &[9.0, 10.0, 11.0]);
        assert_eq!(buf.color(1, 0), Rgba::new(3.0, 4.0, 5.0, 1.0));
        assert_eq!(buf.pixels().count(), 4);
    }

    #[test]
    fn test_from_u8_normalizes() {
        let buf = PixelBuffer::from_u8(1, 1, 4, &[255, 0, 51, 255]).unwrap();
        assert_eq!(buf.color(0, 0), Rgba::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_filled() {
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let buf = PixelBuffer::filled(3, 2, red).unwrap();
        assert_eq!(buf.channels(), 4);
        assert!(buf.pixels().all(|px| px == [1.0, 0.0, 0.0, 1.0]));
    }
}
