//! Error types for color operations.
//!
//! Covers string parsing, named-color tables and anything bubbling up from
//! the core validation layer.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// String is not a hex, `rgb()`/`rgba()` or bare component color.
    #[error("invalid color string: {0:?}")]
    InvalidColorString(String),

    /// Named-color table has no entries.
    #[error("color table is empty")]
    EmptyTable,

    /// Named-color table could not be read.
    #[error("invalid color table: {0}")]
    Table(#[from] serde_json::Error),

    /// Entry in a named-color table holds a bad color.
    #[error("invalid color table entry {name:?}: {value:?}")]
    TableEntry {
        /// Entry name
        name: String,
        /// Offending value
        value: String,
    },

    /// Core validation error.
    #[error(transparent)]
    Core(#[from] swatch_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
