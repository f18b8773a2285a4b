//! # Code128 Character Sets
//!
//! The three Code128 subsets, each stored as a value-indexed array of symbol
//! keys. Index `n` holds the key encoded by symbol value `n`, so every value
//! belongs to exactly one key per set.
//!
//! | Set | Contents |
//! |-----|----------|
//! | A | `SP`, printable ASCII `!`..`_`, control codes `NUL`..`US` |
//! | B | `SP`, printable ASCII `!`..`~`, `DEL` |
//! | C | Digit pairs `00`..`99` |
//!
//! Values 96-106 are function, switch, start and stop codes. The switch
//! codes sit at different values depending on the set they are used from.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Number of symbol values in Code128 (0..=106).
pub const SYMBOL_COUNT: usize = 107;

/// Symbol value of START in set A.
pub const START_A: u8 = 103;
/// Symbol value of START in set B.
pub const START_B: u8 = 104;
/// Symbol value of START in set C.
pub const START_C: u8 = 105;
/// Symbol value of STOP.
pub const STOP: u8 = 106;

/// Divisor of the symbol checksum.
pub const CHECKSUM_MODULUS: u32 = 103;

/// One of the three Code128 character subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CharacterSet {
    A,
    B,
    C,
}

impl CharacterSet {
    /// All sets in start-selection order.
    pub const ALL: [CharacterSet; 3] = [CharacterSet::A, CharacterSet::B, CharacterSet::C];

    /// The set letter.
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }

    /// START symbol value that opens a stream in this set.
    pub fn start_value(self) -> u8 {
        match self {
            Self::A => START_A,
            Self::B => START_B,
            Self::C => START_C,
        }
    }

    /// Key under which other sets store the switch code to this set.
    pub fn switch_key(self) -> &'static str {
        match self {
            Self::A => "CodeA",
            Self::B => "CodeB",
            Self::C => "CodeC",
        }
    }

    /// The two other sets, in alphabetical order.
    pub fn others(self) -> [CharacterSet; 2] {
        match self {
            Self::A => [Self::B, Self::C],
            Self::B => [Self::A, Self::C],
            Self::C => [Self::A, Self::B],
        }
    }

    /// Value-indexed key table for this set.
    pub fn keys(self) -> &'static [&'static str; SYMBOL_COUNT] {
        match self {
            Self::A => &SET_A,
            Self::B => &SET_B,
            Self::C => &SET_C,
        }
    }

    fn index(self) -> &'static HashMap<&'static str, u8> {
        static INDEX: OnceLock<[HashMap<&'static str, u8>; 3]> = OnceLock::new();
        let all = INDEX.get_or_init(|| {
            CharacterSet::ALL.map(|set| {
                set.keys()
                    .iter()
                    .enumerate()
                    .map(|(value, &key)| (key, value as u8))
                    .collect()
            })
        });
        &all[self as usize]
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Look up the symbol value of `key` in `set`.
pub fn value_of(set: CharacterSet, key: &str) -> Option<u8> {
    set.index().get(key).copied()
}

/// Whether `set` can represent `key`.
pub fn contains(set: CharacterSet, key: &str) -> bool {
    set.index().contains_key(key)
}

/// Key encoded by `value` in `set`.
pub fn key_of(set: CharacterSet, value: u8) -> Option<&'static str> {
    set.keys().get(value as usize).copied()
}

#[rustfmt::skip]
static SET_A: [&str; SYMBOL_COUNT] = [
    "SP", "!", "\"", "#", "$", "%", "&", "'", "(", ")",
    "*", "+", ",", "-", ".", "/", "0", "1", "2", "3",
    "4", "5", "6", "7", "8", "9", ":", ";", "<", "=",
    ">", "?", "@", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
    "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[",
    "\\", "]", "^", "_", "NUL", "SOH", "STX", "ETX", "EOT", "ENQ",
    "ACK", "BEL", "BS", "HT", "LF", "VT", "FF", "CR", "SO", "SI",
    "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM",
    "SUB", "ESC", "FS", "GS", "RS", "US", "FNC3", "FNC2", "SHIFT", "CodeC",
    "CodeB", "FNC4", "FNC1", "STARTA", "STARTB", "STARTC", "STOP",
];

#[rustfmt::skip]
static SET_B: [&str; SYMBOL_COUNT] = [
    "SP", "!", "\"", "#", "$", "%", "&", "'", "(", ")",
    "*", "+", ",", "-", ".", "/", "0", "1", "2", "3",
    "4", "5", "6", "7", "8", "9", ":", ";", "<", "=",
    ">", "?", "@", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
    "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[",
    "\\", "]", "^", "_", "`", "a", "b", "c", "d", "e",
    "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w", "x", "y",
    "z", "{", "|", "}", "~", "DEL", "FNC3", "FNC2", "SHIFT", "CodeC",
    "FNC4", "CodeA", "FNC1", "STARTA", "STARTB", "STARTC", "STOP",
];

#[rustfmt::skip]
static SET_C: [&str; SYMBOL_COUNT] = [
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09",
    "10", "11", "12", "13", "14", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39",
    "40", "41", "42", "43", "44", "45", "46", "47", "48", "49",
    "50", "51", "52", "53", "54", "55", "56", "57", "58", "59",
    "60", "61", "62", "63", "64", "65", "66", "67", "68", "69",
    "70", "71", "72", "73", "74", "75", "76", "77", "78", "79",
    "80", "81", "82", "83", "84", "85", "86", "87", "88", "89",
    "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
    "CodeB", "CodeA", "FNC1", "STARTA", "STARTB", "STARTC", "STOP",
];
