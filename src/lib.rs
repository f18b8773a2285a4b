//! # barcode128 - Code128 Barcode Encoder
//!
//! barcode128 turns ASCII text into a Code128 symbol stream and, optionally,
//! a raster image. It provides:
//!
//! - **Encoding**: digit-pair segmentation, A/B/C set selection with
//!   explicit switch symbols, and the modulo-103 checksum
//! - **Decoding**: bit string back to symbols and text, for verification
//! - **Rendering**: bars, border, caption and code text as PNG/GIF/JPEG
//!
//! ## Quick Start
//!
//! ```
//! use barcode128::encode;
//!
//! let stream = encode("0123")?;
//!
//! // START-C, "01", "23", checksum, STOP
//! assert_eq!(stream.symbols(), &[105, 1, 23, 49, 106]);
//! assert!(stream.bits().starts_with("11010011100"));
//!
//! # Ok::<(), barcode128::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tables`] | Character sets and bar patterns |
//! | [`segment`] | Text → codewords |
//! | [`select`] | Character set state machine |
//! | [`checksum`] | Weighted modulo-103 sum |
//! | [`encoder`] | Text → symbol stream |
//! | [`decode`] | Bit string → symbols → text |
//! | [`render`] | Symbol stream → image |
//! | [`error`] | Error types |
//!
//! ## Input
//!
//! Only 7-bit ASCII is accepted. Space, tab and form feed are encoded
//! through their `SP`/`HT`/`FF` symbols; other control characters have no
//! literal mapping and make encoding fail.

pub mod checksum;
pub mod decode;
pub mod encoder;
pub mod error;
pub mod render;
pub mod segment;
pub mod select;
pub mod tables;

// Re-exports for convenience
pub use encoder::{EncodedSymbolStream, encode};
pub use error::BarcodeError;
pub use render::{Barcode, OutputFormat, RenderConfig};
pub use tables::CharacterSet;
