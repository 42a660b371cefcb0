//! Errors raised while reading or writing swatch images.
//!
//! Only PNG is handled; any other extension surfaces as
//! [`IoError::UnsupportedFormat`].

use std::io;
use thiserror::Error;

/// Failure to load or save a PNG swatch image.
#[derive(Debug, Error)]
pub enum IoError {
    /// Opening, reading or creating the image file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Path extension is not `.png`; carries the extension.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The png decoder rejected the file.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The png encoder failed, or the buffer has no PNG color type.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// PNG color type and bit depth pair that cannot become float samples.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoded samples do not form a valid pixel buffer.
    #[error(transparent)]
    Core(#[from] swatch_core::Error),
}

/// Result of loading or saving a swatch image.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cause() {
        let err = IoError::UnsupportedFormat("jpg".into());
        assert_eq!(err.to_string(), "unsupported format: jpg");

        let err = IoError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, IoError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
