//! # swatch-transfer
//!
//! Transfer functions for color encoding and decoding.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage and display. Palette images arrive sRGB encoded; every color
//! sampled from them is decoded with [`srgb_to_linear`] before it is counted
//! or compared.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Gamma**: The exponent in the power segment
//!
//! # Usage
//!
//! ```rust
//! use swatch_transfer::{linear_to_srgb, srgb_to_linear};
//!
//! // Decode sRGB to linear
//! let linear = srgb_to_linear(0.5);
//!
//! // Encode linear to sRGB
//! let encoded = linear_to_srgb(linear);
//! assert!((encoded - 0.5).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - Color type
//!
//! # Used By
//!
//! - `swatch-color` - Lab conversion and string parsing
//! - `swatch-extract` - Sample decoding and strip rendering

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{
    eotf as srgb_to_linear, eotf_gamma as srgb_to_linear_gamma, eotf_rgba as decode_rgba,
    oetf as linear_to_srgb, oetf_gamma as linear_to_srgb_gamma, oetf_rgba as encode_rgba,
    DEFAULT_GAMMA,
};
