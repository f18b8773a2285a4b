//! # Decoder
//!
//! Inverse of the encoder, used to check rendered output.
//!
//! - [`decode_bits`]: bit string → symbol values
//! - [`verify_checksum`]: recompute the checksum symbol
//! - [`decode_text`]: replay set switches to recover the text

use crate::checksum::checksum_of;
use crate::error::BarcodeError;
use crate::tables::{self, CharacterSet, STOP, SYMBOL_WIDTH};

/// Split a bit string into symbol values.
///
/// Every window is 11 modules except the trailing 13-module STOP.
pub fn decode_bits(bits: &str) -> Result<Vec<u8>, BarcodeError> {
    if let Some(position) = bits.find(|c| c != '0' && c != '1') {
        return Err(BarcodeError::InvalidPattern(format!(
            "unexpected character at offset {}",
            position
        )));
    }

    let mut symbols = Vec::with_capacity(bits.len() / SYMBOL_WIDTH);
    let mut offset = 0;

    loop {
        let rest = &bits[offset..];
        if rest.len() == tables::width_of(STOP) && tables::symbol_for_pattern(rest) == Some(STOP) {
            symbols.push(STOP);
            return Ok(symbols);
        }
        if rest.len() < SYMBOL_WIDTH {
            return Err(BarcodeError::InvalidPattern(format!(
                "missing STOP after {} modules",
                offset
            )));
        }

        let window = &rest[..SYMBOL_WIDTH];
        let value = tables::symbol_for_pattern(window).ok_or_else(|| {
            BarcodeError::InvalidPattern(format!("unknown pattern {} at offset {}", window, offset))
        })?;
        symbols.push(value);
        offset += tables::width_of(value);
    }
}

/// Whether the second-to-last symbol is the checksum of everything before it.
pub fn verify_checksum(symbols: &[u8]) -> bool {
    match symbols {
        [body @ .., checksum, STOP] => checksum_of(body) == *checksum,
        _ => false,
    }
}

/// Recover the text from a complete symbol stream.
pub fn decode_text(symbols: &[u8]) -> Result<String, BarcodeError> {
    let body = match symbols {
        [body @ .., _, STOP] => body,
        _ => {
            return Err(BarcodeError::InvalidPattern(
                "stream does not end with checksum and STOP".to_string(),
            ));
        }
    };
    let Some((&start, data)) = body.split_first() else {
        return Ok(String::new());
    };

    let mut set = CharacterSet::ALL
        .into_iter()
        .find(|set| set.start_value() == start)
        .ok_or_else(|| {
            BarcodeError::InvalidPattern(format!("stream opens with {}, not a START", start))
        })?;

    let mut text = String::new();
    for &value in data {
        let key = tables::key_of(set, value).ok_or_else(|| {
            BarcodeError::InvalidPattern(format!("symbol value {} out of range", value))
        })?;

        if let Some(next) = CharacterSet::ALL.into_iter().find(|s| s.switch_key() == key) {
            set = next;
            continue;
        }

        match key {
            "SP" => text.push(' '),
            "HT" => text.push('\t'),
            "FF" => text.push('\x0C'),
            _ if set == CharacterSet::C && value < 100 => text.push_str(key),
            _ if key.len() == 1 => text.push_str(key),
            _ => {
                return Err(BarcodeError::InvalidPattern(format!(
                    "symbol {} has no text form in set {}",
                    key, set
                )));
            }
        }
    }

    Ok(text)
}
