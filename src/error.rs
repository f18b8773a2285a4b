//! # Error Types
//!
//! This module defines the error type used throughout the barcode128 library.
//!
//! Failures fall into two families:
//!
//! - **Validation**: bad input text or bad render settings, reported at the
//!   point where the value is supplied.
//! - **Encoding**: a codeword that none of the character sets can represent.
//!
//! Everything else (fonts, images, I/O) belongs to the rendering stage.

use thiserror::Error;

/// Main error type for barcode128 operations
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// Input text contains a character outside 7-bit ASCII
    #[error("Validation error: character {ch:?} at position {position} is not ASCII")]
    NonAscii { ch: char, position: usize },

    /// A render dimension was out of range
    #[error("Validation error: {name} must be {requirement}, got {value}")]
    InvalidDimension {
        name: &'static str,
        requirement: &'static str,
        value: i64,
    },

    /// A codeword is not present in character set A, B or C
    #[error("Encoding error: {codeword:?} cannot be represented in character set A, B or C")]
    Unencodable { codeword: String },

    /// A bit string could not be mapped back to symbols
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Font loading or measuring error
    #[error("Font error: {0}")]
    Font(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BarcodeError {
    /// True for errors caused by rejected input values.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NonAscii { .. } | Self::InvalidDimension { .. } | Self::Font(_)
        )
    }

    /// True when the text was valid ASCII but could not be encoded.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Unencodable { .. })
    }
}
