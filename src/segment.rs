//! # Segmenter
//!
//! Splits text into Code128 codewords.
//!
//! Two adjacent decimal digits fuse into one codeword (a set C candidate);
//! every other character stands alone. A digit in last position is never
//! paired. Space, tab and form feed become the `SP`, `HT` and `FF` table
//! keys; all other characters are looked up literally.

use crate::error::BarcodeError;
use serde::Serialize;

/// What a codeword was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodewordKind {
    /// A single character used as its own key
    Literal,
    /// Space, tab or form feed replaced by its control token
    Token,
    /// Two decimal digits
    DigitPair,
}

/// One unit of input, keyed the way the character set tables are keyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Codeword {
    key: String,
    kind: CodewordKind,
}

impl Codeword {
    fn single(ch: char) -> Self {
        match control_token(ch) {
            Some(token) => Self {
                key: token.to_string(),
                kind: CodewordKind::Token,
            },
            None => Self {
                key: ch.to_string(),
                kind: CodewordKind::Literal,
            },
        }
    }

    fn pair(first: char, second: char) -> Self {
        Self {
            key: [first, second].iter().collect(),
            kind: CodewordKind::DigitPair,
        }
    }

    /// Table key for this codeword.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> CodewordKind {
        self.kind
    }
}

fn control_token(ch: char) -> Option<&'static str> {
    match ch {
        ' ' => Some("SP"),
        '\t' => Some("HT"),
        '\x0C' => Some("FF"),
        _ => None,
    }
}

/// Reject text containing characters at or above U+0080.
pub fn validate(text: &str) -> Result<(), BarcodeError> {
    match text.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
        Some((position, ch)) => Err(BarcodeError::NonAscii { ch, position }),
        None => Ok(()),
    }
}

/// Validate `text` and split it into codewords.
///
/// ```
/// use barcode128::segment::segment;
///
/// let keys: Vec<String> = segment("12a 3")
///     .unwrap()
///     .iter()
///     .map(|cw| cw.key().to_string())
///     .collect();
/// assert_eq!(keys, ["12", "a", "SP", "3"]);
/// ```
pub fn segment(text: &str) -> Result<Vec<Codeword>, BarcodeError> {
    validate(text)?;

    let chars: Vec<char> = text.chars().collect();
    let mut codewords = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars.get(i + 1) {
            Some(&next) if chars[i].is_ascii_digit() && next.is_ascii_digit() => {
                codewords.push(Codeword::pair(chars[i], next));
                i += 2;
            }
            _ => {
                codewords.push(Codeword::single(chars[i]));
                i += 1;
            }
        }
    }

    Ok(codewords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(text: &str) -> Vec<String> {
        segment(text)
            .unwrap()
            .into_iter()
            .map(|cw| cw.key)
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(segment("").unwrap().is_empty());
    }

    #[test]
    fn test_digit_pairs() {
        assert_eq!(keys("0123"), ["01", "23"]);
        assert_eq!(keys("123"), ["12", "3"]);
        assert_eq!(keys("1a23b4"), ["1", "a", "23", "b", "4"]);
    }

    #[test]
    fn test_last_digit_is_single() {
        let codewords = segment("7").unwrap();
        assert_eq!(codewords.len(), 1);
        assert_eq!(codewords[0].kind(), CodewordKind::Literal);
    }

    #[test]
    fn test_whitespace_tokens() {
        assert_eq!(keys("a b"), ["a", "SP", "b"]);
        assert_eq!(keys("\t\x0C"), ["HT", "FF"]);
        assert_eq!(keys(" "), ["SP"]);
        assert_eq!(segment("\t").unwrap()[0].kind(), CodewordKind::Token);
    }

    #[test]
    fn test_other_controls_pass_through() {
        assert_eq!(keys("\n\r"), ["\n", "\r"]);
    }

    #[test]
    fn test_letters_not_mistaken_for_tokens() {
        assert_eq!(keys("SP"), ["S", "P"]);
        assert_eq!(keys("S P"), ["S", "SP", "P"]);
    }

    #[test]
    fn test_non_ascii_rejected() {
        match segment("abé") {
            Err(BarcodeError::NonAscii { ch, position }) => {
                assert_eq!(ch, 'é');
                assert_eq!(position, 2);
            }
            other => panic!("expected NonAscii, got {:?}", other),
        }
        assert!(validate("\x7F").is_ok());
    }
}
