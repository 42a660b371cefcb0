//! # swatch-io
//!
//! Image I/O between files and [`PixelBuffer`].
//!
//! Only PNG is supported; palette strips and reference images are almost
//! always PNG. Read samples stay sRGB encoded and normalized to [0, 1],
//! which is what the extractor expects.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use swatch_io::{read, write};
//!
//! let image = read("photo.png")?;
//! write("copy.png", &image)?;
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - `PixelBuffer`
//! - [`png`] - Encoding and decoding
//!
//! # Used By
//!
//! - `swatch-cli` - Loading images and saving strips

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::Format;

use std::path::Path;
use swatch_core::PixelBuffer;

/// Reads an image, detecting the format from magic bytes and extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    match Format::detect(path)? {
        Format::Png => png::read(path),
        Format::Unknown => Err(unsupported(path)),
    }
}

/// Writes an image, choosing the format from the extension.
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Png => png::write(path, buffer),
        Format::Unknown => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}
