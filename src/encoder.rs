//! # Encoder
//!
//! Turns text into a complete Code128 symbol stream.
//!
//! ## Pipeline
//!
//! ```text
//! text ──▶ segment ──▶ SetSelector ──▶ symbols ──▶ checksum, STOP ──▶ patterns
//!                           │               │
//!                       CodeTables   ChecksumAccumulator
//! ```
//!
//! ## Stream Layout
//!
//! | Position | Content |
//! |----------|---------|
//! | first | START-A/B/C (103/104/105) |
//! | middle | data symbols, each optionally preceded by a set switch |
//! | second to last | checksum (0-102) |
//! | last | STOP (106) |
//!
//! Empty text has no START: the stream is just the checksum `0` and STOP.

use crate::checksum::ChecksumAccumulator;
use crate::error::BarcodeError;
use crate::segment::segment;
use crate::select::SetSelector;
use crate::tables::{self, CharacterSet, STOP};
use serde::Serialize;

/// The encoded form of one input text.
///
/// Built fresh by [`encode`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedSymbolStream {
    text: String,
    symbols: Vec<u8>,
    patterns: Vec<&'static str>,
    bits: String,
    contributions: Vec<u32>,
}

impl EncodedSymbolStream {
    /// The text that was encoded.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Symbol values, START through STOP.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Bit pattern of each symbol, in stream order.
    pub fn patterns(&self) -> &[&'static str] {
        &self.patterns
    }

    /// All patterns concatenated; `'1'` is bar, `'0'` is space.
    pub fn bits(&self) -> &str {
        &self.bits
    }

    /// Checksum symbol value.
    pub fn checksum(&self) -> u8 {
        self.symbols[self.symbols.len() - 2]
    }

    /// Weighted checksum contributions in emission order.
    pub fn checksum_contributions(&self) -> &[u32] {
        &self.contributions
    }

    /// Set opened by the START symbol; `None` for empty text.
    pub fn start_set(&self) -> Option<CharacterSet> {
        CharacterSet::ALL
            .into_iter()
            .find(|set| Some(&set.start_value()) == self.symbols.first())
    }

    /// Total width in modules.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Modules left to right, `true` for bar.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.bytes().map(|b| b == b'1')
    }
}

/// Encode `text` as a Code128 symbol stream.
///
/// ```
/// let stream = barcode128::encode("0123").unwrap();
/// assert_eq!(stream.symbols(), &[105, 1, 23, 49, 106]);
/// ```
pub fn encode(text: &str) -> Result<EncodedSymbolStream, BarcodeError> {
    let codewords = segment(text)?;

    let mut symbols = Vec::with_capacity(codewords.len() * 2 + 3);
    let mut checksum = ChecksumAccumulator::new();
    let mut selector = SetSelector::new();

    if let Some(first) = codewords.first() {
        let start = selector.start(first)?.start_value();
        emit(start, &mut symbols, &mut checksum);
    }

    for codeword in &codewords {
        let selection = selector.select(codeword)?;
        if let Some(switch) = selection.switch {
            emit(switch, &mut symbols, &mut checksum);
        }
        emit(selection.value, &mut symbols, &mut checksum);
    }

    symbols.push(checksum.value());
    symbols.push(STOP);

    let patterns = symbols
        .iter()
        .map(|&value| {
            tables::pattern_of(value).ok_or_else(|| {
                BarcodeError::InvalidPattern(format!("no pattern for symbol value {}", value))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let bits = patterns.concat();

    tracing::debug!(
        chars = text.len(),
        codewords = codewords.len(),
        symbols = symbols.len(),
        checksum = checksum.value(),
        "encoded"
    );

    Ok(EncodedSymbolStream {
        text: text.to_string(),
        symbols,
        patterns,
        bits,
        contributions: checksum.contributions().to_vec(),
    })
}

fn emit(value: u8, symbols: &mut Vec<u8>, checksum: &mut ChecksumAccumulator) {
    symbols.push(value);
    checksum.push(value);
}
