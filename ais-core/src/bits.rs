//! Fixed-capacity bit vector with MSB-first integer extraction.
//!
//! Bit 0 is the most significant bit of the first armored character, so
//! reading `[from, to)` yields the value exactly as the AIS bit tables
//! number it.

use crate::types::{AisError, Result};

const WORD_BITS: usize = 64;

/// Ordered, fixed-length sequence of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
}

impl BitVector {
    /// Create a vector of `len` cleared bits.
    pub fn new(len: usize) -> Self {
        BitVector {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Capacity in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words[index / WORD_BITS] |= mask(index);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.words[index / WORD_BITS] & mask(index) != 0)
    }

    /// Read bits `[from, to)` as an unsigned big-endian integer.
    pub fn get_unsigned(&self, from: usize, to: usize) -> Result<u64> {
        self.check_range(from, to)?;
        if to - from > WORD_BITS {
            return Err(AisError::MalformedPayload(format!(
                "cannot read {} bits into a 64-bit integer",
                to - from
            )));
        }
        let mut value = 0u64;
        for i in from..to {
            value = (value << 1) | u64::from(self.words[i / WORD_BITS] & mask(i) != 0);
        }
        Ok(value)
    }

    /// Read bits `[from, to)` as a two's complement integer of `to - from` bits.
    pub fn get_signed(&self, from: usize, to: usize) -> Result<i64> {
        let raw = self.get_unsigned(from, to)?;
        Ok(to_signed(raw, to - from))
    }

    /// Copy bits `[from, to)` into a new vector.
    pub fn slice(&self, from: usize, to: usize) -> Result<BitVector> {
        self.check_range(from, to)?;
        let mut out = BitVector::new(to - from);
        for i in from..to {
            if self.words[i / WORD_BITS] & mask(i) != 0 {
                out.words[(i - from) / WORD_BITS] |= mask(i - from);
            }
        }
        Ok(out)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(AisError::MalformedPayload(format!(
                "bit index {index} out of range (length {})",
                self.len
            )));
        }
        Ok(())
    }

    fn check_range(&self, from: usize, to: usize) -> Result<()> {
        if from > to || to > self.len {
            return Err(AisError::MalformedPayload(format!(
                "bit range {from}..{to} out of range (length {})",
                self.len
            )));
        }
        Ok(())
    }
}

/// Interpret the low `width` bits of `raw` as two's complement.
pub fn to_signed(raw: u64, width: usize) -> i64 {
    if width == 0 || width >= WORD_BITS {
        return raw as i64;
    }
    if raw >= 1 << (width - 1) {
        raw as i64 - (1i64 << width)
    } else {
        raw as i64
    }
}

fn mask(index: usize) -> u64 {
    1 << (WORD_BITS - 1 - index % WORD_BITS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
