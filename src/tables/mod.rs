//! # Code Tables
//!
//! Immutable Code128 lookup data shared by the encoder and decoder.
//!
//! ## Module Structure
//!
//! - [`charset`]: the A, B and C character sets (key ⇄ value)
//! - [`patterns`]: bar/space module patterns (value ⇄ bits)
//!
//! Lookup indexes are built on first use and live for the rest of the
//! process, so the tables can be read from any thread without locking.
//!
//! ```
//! use barcode128::tables::{self, CharacterSet};
//!
//! assert_eq!(tables::value_of(CharacterSet::B, "a"), Some(65));
//! assert!(tables::contains(CharacterSet::C, "42"));
//! assert_eq!(tables::pattern_of(106), Some("1100011101011"));
//! ```

pub mod charset;
pub mod patterns;

pub use charset::{
    CHECKSUM_MODULUS, CharacterSet, START_A, START_B, START_C, STOP, SYMBOL_COUNT, contains,
    key_of, value_of,
};
pub use patterns::{STOP_WIDTH, SYMBOL_WIDTH, pattern_of, symbol_for_pattern, width_of};
