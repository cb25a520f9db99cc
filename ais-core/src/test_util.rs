//! Payload construction for tests: pack fields MSB-first and armor them.

use crate::sixbit::{Sixbit, CHAR_BITS};

#[derive(Debug, Default)]
pub(crate) struct PayloadBuilder {
    bits: Vec<bool>,
}

impl PayloadBuilder {
    /// Start a payload with the common header.
    pub fn header(message_type: u8, mmsi: u32) -> Self {
        PayloadBuilder::default()
            .unsigned(6, message_type as u64)
            .unsigned(2, 0)
            .unsigned(30, mmsi as u64)
    }

    /// `value` in `width` bits. Widths past 64 are zero-extended.
    pub fn unsigned(mut self, width: usize, value: u64) -> Self {
        for i in (0..width).rev() {
            self.bits.push(i < 64 && (value >> i) & 1 == 1);
        }
        self
    }

    pub fn signed(self, width: usize, value: i64) -> Self {
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        self.unsigned(width, value as u64 & mask)
    }

    pub fn flag(self, value: bool) -> Self {
        self.unsigned(1, value as u64)
    }

    /// Content-alphabet text, padded with `@` to `width` bits.
    pub fn text(mut self, width: usize, text: &str) -> Self {
        let chars = width / CHAR_BITS;
        let mut codes: Vec<u64> = text
            .bytes()
            .take(chars)
            .map(|c| if c >= 0x40 { (c - 0x40) as u64 } else { c as u64 })
            .collect();
        codes.resize(chars, 0);
        for code in codes {
            self = self.unsigned(CHAR_BITS, code);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Armored payload and fill bits.
    pub fn armor(&self) -> (String, u8) {
        let fill = (CHAR_BITS - self.bits.len() % CHAR_BITS) % CHAR_BITS;
        let mut padded = self.bits.clone();
        padded.resize(self.bits.len() + fill, false);
        let payload = padded
            .chunks(CHAR_BITS)
            .map(|chunk| {
                let v = chunk.iter().fold(0u8, |acc, b| (acc << 1) | *b as u8);
                (if v < 40 { v + 48 } else { v + 56 }) as char
            })
            .collect();
        (payload, fill as u8)
    }

    pub fn sixbit(&self) -> Sixbit {
        let (payload, fill) = self.armor();
        Sixbit::new(&payload, fill).expect("builder produces valid armor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_known_payload() {
        // Header of "13aEOK?P00PD2wVMdLDRhgvL289?"
        let sixbit = PayloadBuilder::header(1, 244670316).sixbit();
        assert_eq!(sixbit.get_unsigned(0, 6).unwrap(), 1);
        assert_eq!(sixbit.get_unsigned(8, 38).unwrap(), 244670316);
        assert!("13aEOK?".starts_with(&sixbit.payload()[..6]));
    }

    #[test]
    fn test_builder_wide_zero_field() {
        let builder = PayloadBuilder::header(21, 1).unsigned(100, 0).unsigned(2, 3);
        assert_eq!(builder.len(), 140);
        let sixbit = builder.sixbit();
        assert_eq!(sixbit.get_unsigned(38, 102).unwrap(), 0);
        assert_eq!(sixbit.get_unsigned(102, 138).unwrap(), 0);
        assert_eq!(sixbit.get_unsigned(138, 140).unwrap(), 3);
    }

    #[test]
    fn test_builder_text_roundtrip() {
        let sixbit = PayloadBuilder::default().text(42, "LFNA").sixbit();
        assert_eq!(sixbit.get_string(0, 42).unwrap(), "LFNA");
    }
}
