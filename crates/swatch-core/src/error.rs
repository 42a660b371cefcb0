//! Error types for swatch-core operations.
//!
//! Every failure in the color core is a local validation failure raised
//! synchronously before any sampling begins. Nothing is retried: the
//! computations are deterministic, so a retry cannot change the outcome.
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{Error, Result};
//!
//! fn check_channels(channels: u8) -> Result<()> {
//!     if !matches!(channels, 3 | 4) {
//!         return Err(Error::unsupported_format(channels));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_channels(4).is_ok());
//! assert!(check_channels(2).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - Shape validation
//! - `swatch-primaries` - White point lookup
//! - `swatch-extract` - Extraction parameters

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the color core.
///
/// # Categories
///
/// - **Shape errors**: [`UnsupportedFormat`](Error::UnsupportedFormat),
///   [`MalformedBuffer`](Error::MalformedBuffer), [`EmptyInput`](Error::EmptyInput)
/// - **Lookup errors**: [`UnknownWhitePoint`](Error::UnknownWhitePoint)
/// - **Parameter errors**: [`InvalidParameter`](Error::InvalidParameter)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Channel count is not 3 (RGB) or 4 (RGBA).
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_core::Error;
    ///
    /// let err = Error::unsupported_format(2);
    /// assert!(err.to_string().contains("2"));
    /// ```
    #[error("unsupported pixel format: {channels} channels (expected 3 or 4)")]
    UnsupportedFormat {
        /// Channel count that was supplied
        channels: u8,
    },

    /// Buffer length does not equal `width * height * channels`.
    #[error("malformed buffer: expected {expected} samples, got {got}")]
    MalformedBuffer {
        /// Expected sample count
        expected: usize,
        /// Actual sample count
        got: usize,
    },

    /// Illuminant name outside the supported set.
    #[error("unknown white point: {0} (expected D50, D55 or D65)")]
    UnknownWhitePoint(String),

    /// Nothing to work on: zero-length buffer, zero swatches, empty palette.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// An option is outside its accepted range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(channels: u8) -> Self {
        Self::UnsupportedFormat { channels }
    }

    /// Creates an [`Error::MalformedBuffer`] error.
    #[inline]
    pub fn malformed_buffer(expected: usize, got: usize) -> Self {
        Self::MalformedBuffer { expected, got }
    }

    /// Creates an [`Error::UnknownWhitePoint`] error.
    #[inline]
    pub fn unknown_white_point(name: impl Into<String>) -> Self {
        Self::UnknownWhitePoint(name.into())
    }

    /// Creates an [`Error::EmptyInput`] error.
    #[inline]
    pub fn empty_input(what: impl Into<String>) -> Self {
        Self::EmptyInput(what.into())
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error describes a bad buffer shape.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::MalformedBuffer { .. } | Self::EmptyInput(_)
        )
    }
}
