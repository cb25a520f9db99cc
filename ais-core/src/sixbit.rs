//! Six-bit ASCII armor decoding.
//!
//! An AIS payload is carried as printable characters, each standing for six
//! bits. Two alphabets are involved:
//! - the armor alphabet (`0x30..=0x57`, `0x60..=0x77`) packs raw bits into
//!   the NMEA sentence;
//! - the content alphabet maps decoded 6-bit groups back to text for names,
//!   call signs, and destinations (`@` is padding).

use crate::bits::BitVector;
use crate::types::{AisError, Result};

/// Bits carried by one armored character.
pub const CHAR_BITS: usize = 6;

/// Largest number of padding bits on the final character.
pub const MAX_FILL_BITS: u8 = 5;

/// Decode one armor character into its 6-bit value.
pub fn armor_value(c: u8) -> Option<u8> {
    match c {
        0x30..=0x57 => Some(c - 0x30),
        0x60..=0x77 => Some(c - 0x38),
        _ => None,
    }
}

/// Map a 6-bit value to its character in the content alphabet.
pub fn content_char(value: u8) -> char {
    let value = value & 0x3F;
    if value < 0x20 {
        (value + 0x40) as char
    } else {
        value as char
    }
}

/// Check that `payload` is a non-empty string over the armor alphabet.
pub fn validate_armor(payload: &str) -> Result<()> {
    if payload.is_empty() {
        return Err(AisError::MalformedPayload("empty payload".into()));
    }
    if let Some((pos, c)) = payload
        .char_indices()
        .find(|(_, c)| !c.is_ascii() || armor_value(*c as u8).is_none())
    {
        return Err(AisError::MalformedPayload(format!(
            "invalid armor character {c:?} at offset {pos}"
        )));
    }
    Ok(())
}

/// A decoded AIS payload: the armored text plus its bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sixbit {
    bits: BitVector,
    payload: String,
    fill_bits: u8,
}

impl Sixbit {
    /// Decode an armored payload. `fill_bits` (0-5) are ignored at the end.
    pub fn new(payload: &str, fill_bits: u8) -> Result<Self> {
        validate_armor(payload)?;
        if fill_bits > MAX_FILL_BITS {
            return Err(AisError::MalformedPayload(format!(
                "fill bits must be 0-{MAX_FILL_BITS}, got {fill_bits}"
            )));
        }

        let mut bits = BitVector::new(payload.len() * CHAR_BITS);
        for (i, c) in payload.bytes().enumerate() {
            let value = armor_value(c).unwrap_or_default();
            for b in 0..CHAR_BITS {
                if (value >> (CHAR_BITS - 1 - b)) & 1 == 1 {
                    bits.set(i * CHAR_BITS + b)?;
                }
            }
        }

        Ok(Sixbit {
            bits,
            payload: payload.to_string(),
            fill_bits,
        })
    }

    /// Number of usable bits: six per character, minus the fill bits.
    pub fn length(&self) -> usize {
        self.payload.len() * CHAR_BITS - self.fill_bits as usize
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn fill_bits(&self) -> u8 {
        self.fill_bits
    }

    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        self.check_range(index, index + 1)?;
        self.bits.get(index)
    }

    pub fn get_unsigned(&self, from: usize, to: usize) -> Result<u64> {
        self.check_range(from, to)?;
        self.bits.get_unsigned(from, to)
    }

    pub fn get_signed(&self, from: usize, to: usize) -> Result<i64> {
        self.check_range(from, to)?;
        self.bits.get_signed(from, to)
    }

    /// Copy a sub-range of the usable bits.
    pub fn slice(&self, from: usize, to: usize) -> Result<BitVector> {
        self.check_range(from, to)?;
        self.bits.slice(from, to)
    }

    /// Decode `[from, to)` as content-alphabet text.
    ///
    /// Only a trailing run of `@` padding is stripped; interior `@` stays.
    pub fn get_string(&self, from: usize, to: usize) -> Result<String> {
        self.check_range(from, to)?;
        let mut text = String::with_capacity((to - from) / CHAR_BITS);
        let mut pos = from;
        while pos + CHAR_BITS <= to {
            let value = self.bits.get_unsigned(pos, pos + CHAR_BITS)? as u8;
            text.push(content_char(value));
            pos += CHAR_BITS;
        }
        let trimmed = text.trim_end_matches('@').len();
        text.truncate(trimmed);
        Ok(text)
    }

    fn check_range(&self, from: usize, to: usize) -> Result<()> {
        if from > to || to > self.length() {
            return Err(AisError::MalformedPayload(format!(
                "bits {from}..{to} beyond usable length {}",
                self.length()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
