//! Pixel selection for frequency sampling.
//!
//! Either every pixel in row-major order, or a fixed 45x45 grid of cell
//! centers. The grid always yields 2025 positions regardless of image size;
//! on images narrower than 45 pixels neighbouring cells share a column.

use swatch_core::{PixelBuffer, Rgba, COLOR_PRECISION};
use swatch_transfer::decode_rgba;

/// Grid cells per axis.
pub const GRID_STEPS: u32 = 45;

/// Iterator over sample positions `(x, y)`.
#[derive(Debug, Clone)]
pub struct PixelSampler {
    width: u32,
    height: u32,
    all: bool,
    index: u64,
    total: u64,
}

impl PixelSampler {
    /// Positions over a `width x height` image.
    pub fn new(width: u32, height: u32, all: bool) -> Self {
        let total = if all {
            width as u64 * height as u64
        } else if width == 0 || height == 0 {
            0
        } else {
            GRID_STEPS as u64 * GRID_STEPS as u64
        };
        Self {
            width,
            height,
            all,
            index: 0,
            total,
        }
    }

    /// Positions over `buffer`.
    pub fn for_buffer(buffer: &PixelBuffer, all: bool) -> Self {
        Self::new(buffer.width(), buffer.height(), all)
    }
}

impl Iterator for PixelSampler {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.index >= self.total {
            return None;
        }
        let i = self.index;
        self.index += 1;
        if self.all {
            let w = self.width as u64;
            return Some(((i % w) as u32, (i / w) as u32));
        }
        let steps = GRID_STEPS as u64;
        let (gx, gy) = ((i % steps) as f64, (i / steps) as f64);
        let sx = self.width as f64 / GRID_STEPS as f64;
        let sy = self.height as f64 / GRID_STEPS as f64;
        let x = (gx * sx + sx / 2.0) as u32;
        let y = (gy * sy + sy / 2.0) as u32;
        Some((x.min(self.width - 1), y.min(self.height - 1)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for PixelSampler {}

/// Decodes an encoded pixel and rounds it to the working precision.
#[inline]
pub fn decode_sample(color: Rgba) -> Rgba {
    decode_rgba(color).rounded(COLOR_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_count_is_fixed() {
        for (w, h) in [(1, 1), (10, 3), (45, 45), (1000, 700)] {
            let positions: Vec<_> = PixelSampler::new(w, h, false).collect();
            assert_eq!(positions.len(), 2025);
            assert!(positions.iter().all(|&(x, y)| x < w && y < h));
        }
    }

    #[test]
    fn test_grid_centers() {
        let mut it = PixelSampler::new(90, 450, false);
        assert_eq!(it.next(), Some((1, 5)));
        assert_eq!(it.next(), Some((3, 5)));
        let last = PixelSampler::new(90, 450, false).last();
        assert_eq!(last, Some((89, 445)));
    }

    #[test]
    fn test_all_pixels_row_major() {
        let positions: Vec<_> = PixelSampler::new(3, 2, true).collect();
        assert_eq!(positions, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_decode_sample() {
        let c = decode_sample(Rgba::new(1.0, 0.5, 0.0, 0.33333));
        assert_eq!(c, Rgba::new(1.0, 0.214, 0.0, 0.3333));
    }
}
