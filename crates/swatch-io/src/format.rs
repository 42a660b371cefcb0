//! File format detection.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Image file formats known to swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Portable Network Graphics
    Png,
    /// Anything else
    Unknown,
}

impl Format {
    /// Detects the format of an existing file: magic bytes first, then the
    /// extension.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        if Self::from_magic_bytes(path)? == Format::Png {
            return Ok(Format::Png);
        }
        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("png") => Format::Png,
            _ => Format::Unknown,
        }
    }

    /// Detects format from the first bytes of a file.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut header = [0u8; 8];
        let mut file = File::open(path)?;
        let n = file.read(&mut header)?;
        if n == header.len() && header == PNG_MAGIC {
            Ok(Format::Png)
        } else {
            Ok(Format::Unknown)
        }
    }
}
