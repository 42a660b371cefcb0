//! PNG format support.
//!
//! Reading accepts 8- and 16-bit RGB, RGBA, gray and gray-alpha images
//! (palette and sub-byte images are expanded to 8 bit by the decoder). Gray
//! is widened to RGB. Samples are normalized to [0, 1] and left encoded:
//! no transfer function is applied.
//!
//! Writing always produces 8-bit RGB or RGBA with an sRGB chunk.
//!
//! # Example
//!
//! ```rust,ignore
//! use swatch_io::png;
//!
//! let strip = png::read("palette.png")?;
//! png::write("copy.png", &strip)?;
//! ```

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use swatch_core::PixelBuffer;
use tracing::{debug, trace};

/// Reads a PNG file into a pixel buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];
    let (width, height) = (info.width, info.height);
    trace!(width, height, color = ?info.color_type, depth = ?info.bit_depth, "png::read");

    let buffer = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            PixelBuffer::from_u8(width, height, 3, bytes)?
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            PixelBuffer::from_u8(width, height, 4, bytes)?
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            PixelBuffer::from_u8(width, height, 3, &gray_to_rgb(bytes))?
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            PixelBuffer::from_u8(width, height, 4, &gray_alpha_to_rgba(bytes))?
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            PixelBuffer::from_u16(width, height, 3, &bytes_to_u16(bytes))?
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            PixelBuffer::from_u16(width, height, 4, &bytes_to_u16(bytes))?
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            PixelBuffer::from_u16(width, height, 3, &gray_to_rgb(&bytes_to_u16(bytes)))?
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            PixelBuffer::from_u16(width, height, 4, &gray_alpha_to_rgba(&bytes_to_u16(bytes)))?
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };
    debug!(path = %path.display(), width, height, channels = buffer.channels(), "Read PNG");
    Ok(buffer)
}

/// Writes a pixel buffer as an 8-bit PNG.
///
/// Samples are clamped to [0, 1] and rounded to 0..255.
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    let color_type = match buffer.channels() {
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    };
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), buffer.width(), buffer.height());
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    let bytes: Vec<u8> = buffer.data().iter().map(|&v| to_u8(v)).collect();
    writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    debug!(path = %path.display(), width = buffer.width(), height = buffer.height(), "Wrote PNG");
    Ok(())
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn gray_to_rgb<T: Copy>(gray: &[T]) -> Vec<T> {
    gray.iter().flat_map(|&g| [g, g, g]).collect()
}

fn gray_alpha_to_rgba<T: Copy>(ga: &[T]) -> Vec<T> {
    ga.chunks_exact(2)
        .flat_map(|p| [p[0], p[0], p[0], p[1]])
        .collect()
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}
