//! # Set Selector
//!
//! Tracks the active character set while codewords are emitted.
//!
//! The start set is the first of A, B, C that holds the first codeword.
//! Afterwards the active set is kept as long as it can represent the next
//! codeword; otherwise the remaining two sets are tried alphabetically and a
//! switch symbol, taken from the table of the set being left, is emitted
//! before the codeword.

use crate::error::BarcodeError;
use crate::segment::Codeword;
use crate::tables::{self, CharacterSet};

/// Symbols emitted for one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Set the codeword is encoded in
    pub set: CharacterSet,
    /// Switch symbol to emit first, if the set changed
    pub switch: Option<u8>,
    /// Symbol value of the codeword itself
    pub value: u8,
}

#[derive(Debug, Clone, Default)]
pub struct SetSelector {
    current: Option<CharacterSet>,
}

impl SetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active set, `None` until [`start`](Self::start) has run.
    pub fn current(&self) -> Option<CharacterSet> {
        self.current
    }

    /// Choose the start set for the first codeword.
    pub fn start(&mut self, first: &Codeword) -> Result<CharacterSet, BarcodeError> {
        let set = CharacterSet::ALL
            .into_iter()
            .find(|&set| tables::contains(set, first.key()))
            .ok_or_else(|| unencodable(first))?;
        self.current = Some(set);
        Ok(set)
    }

    /// Choose the set for the next codeword, switching if needed.
    ///
    /// Without a prior [`start`](Self::start) the codeword opens the stream
    /// and no switch is reported.
    pub fn select(&mut self, codeword: &Codeword) -> Result<Selection, BarcodeError> {
        let key = codeword.key();
        let Some(current) = self.current else {
            let set = self.start(codeword)?;
            return Ok(Selection {
                set,
                switch: None,
                value: lookup(set, codeword)?,
            });
        };

        if tables::contains(current, key) {
            return Ok(Selection {
                set: current,
                switch: None,
                value: lookup(current, codeword)?,
            });
        }

        let next = current
            .others()
            .into_iter()
            .find(|&set| tables::contains(set, key))
            .ok_or_else(|| unencodable(codeword))?;
        let switch = tables::value_of(current, next.switch_key())
            .ok_or_else(|| unencodable(codeword))?;
        tracing::trace!(from = %current, to = %next, key, "set switch");

        self.current = Some(next);
        Ok(Selection {
            set: next,
            switch: Some(switch),
            value: lookup(next, codeword)?,
        })
    }
}

fn lookup(set: CharacterSet, codeword: &Codeword) -> Result<u8, BarcodeError> {
    tables::value_of(set, codeword.key()).ok_or_else(|| unencodable(codeword))
}

fn unencodable(codeword: &Codeword) -> BarcodeError {
    BarcodeError::Unencodable {
        codeword: codeword.key().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    fn selections(text: &str) -> Vec<Selection> {
        let mut selector = SetSelector::new();
        segment(text)
            .unwrap()
            .iter()
            .map(|cw| selector.select(cw).unwrap())
            .collect()
    }

    #[test]
    fn test_start_prefers_a() {
        let codewords = segment("A").unwrap();
        let mut selector = SetSelector::new();
        assert_eq!(selector.start(&codewords[0]).unwrap(), CharacterSet::A);
        assert_eq!(selector.current(), Some(CharacterSet::A));
    }

    #[test]
    fn test_start_lowercase_and_digits() {
        let mut selector = SetSelector::new();
        let codewords = segment("a").unwrap();
        assert_eq!(selector.start(&codewords[0]).unwrap(), CharacterSet::B);

        let mut selector = SetSelector::new();
        let codewords = segment("42").unwrap();
        assert_eq!(selector.start(&codewords[0]).unwrap(), CharacterSet::C);
    }

    #[test]
    fn test_stays_in_set() {
        let picks = selections("0123");
        assert!(picks.iter().all(|s| s.set == CharacterSet::C && s.switch.is_none()));
        assert_eq!(picks[0].value, 1);
        assert_eq!(picks[1].value, 23);
    }

    #[test]
    fn test_switch_from_c_prefers_a() {
        // "12" opens in C, "x" needs B, "Y" stays in B
        let picks = selections("12xY");
        assert_eq!(picks[1].set, CharacterSet::B);
        assert_eq!(picks[1].switch, Some(100));
        assert_eq!(picks[2].switch, None);

        // "3" after C can be A or B; A wins
        let picks = selections("123");
        assert_eq!(picks[1].set, CharacterSet::A);
        assert_eq!(picks[1].switch, Some(101));
    }

    #[test]
    fn test_switch_value_from_previous_table() {
        // B -> C uses set B's CodeC
        let picks = selections("a12");
        assert_eq!(picks[1].set, CharacterSet::C);
        assert_eq!(picks[1].switch, Some(99));

        // A -> B uses set A's CodeB
        let picks = selections("Ab");
        assert_eq!(picks[1].switch, Some(100));

        // B -> A uses set B's CodeA
        let picks = selections("a\t");
        assert_eq!(picks[1].set, CharacterSet::A);
        assert_eq!(picks[1].switch, Some(101));
    }

    #[test]
    fn test_unencodable() {
        let codewords = segment("\n").unwrap();
        let mut selector = SetSelector::new();
        let err = selector.select(&codewords[0]).unwrap_err();
        assert!(err.is_encoding());
        assert_eq!(selector.current(), None);
    }
}
