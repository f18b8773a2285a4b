//! # Checksum Accumulator
//!
//! Running weighted modulo-103 sum over emitted symbols.
//!
//! The first contribution (the START symbol) counts once. Every later
//! symbol is multiplied by the number of contributions already held, giving
//! the weight sequence 1, 1, 2, 3, 4, ... in emission order. Set switch
//! symbols are contributions like any other.

use crate::tables::CHECKSUM_MODULUS;

/// Weighted contributions for one encode call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumAccumulator {
    contributions: Vec<u32>,
    sum: u64,
}

impl ChecksumAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next emitted symbol value.
    pub fn push(&mut self, value: u8) {
        let weight = (self.contributions.len() as u32).max(1);
        let weighted = value as u32 * weight;
        self.contributions.push(weighted);
        self.sum += u64::from(weighted);
    }

    /// Weighted contributions in emission order.
    pub fn contributions(&self) -> &[u32] {
        &self.contributions
    }

    /// Sum of all weighted contributions.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Checksum symbol value, `sum mod 103`.
    pub fn value(&self) -> u8 {
        (self.sum % u64::from(CHECKSUM_MODULUS)) as u8
    }
}

/// Checksum over a complete symbol sequence, START included.
pub fn checksum_of(symbols: &[u8]) -> u8 {
    let mut acc = ChecksumAccumulator::new();
    for &value in symbols {
        acc.push(value);
    }
    acc.value()
}
