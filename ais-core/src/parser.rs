//! Header decoding, fragment accumulation, and lenient field reading.
//!
//! Responsibilities:
//! - Field offset tables (`FieldSpec`) shared by every message decoder
//! - Decode the fixed header (type, repeat indicator, MMSI)
//! - Accumulate the payload of a multi-sentence message in order
//! - Read fields through their codecs, recording rule violations instead
//!   of failing

use crate::fields::FieldCodec;
use crate::sixbit::{validate_armor, Sixbit, MAX_FILL_BITS};
use crate::types::{AisError, MessageHeader, Result, RuleViolation};

// ---------------------------------------------------------------------------
// Field offsets
// ---------------------------------------------------------------------------

/// Bit range `[start, end)` of a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, start: usize, end: usize) -> Self {
        FieldSpec { name, start, end }
    }

    pub const fn width(&self) -> usize {
        self.end - self.start
    }
}

pub const MESSAGE_TYPE: FieldSpec = FieldSpec::new("message_type", 0, 6);
pub const REPEAT_INDICATOR: FieldSpec = FieldSpec::new("repeat_indicator", 6, 8);
pub const MMSI: FieldSpec = FieldSpec::new("mmsi", 8, 38);

/// Bits every message carries before its type-specific fields.
pub const HEADER_BITS: usize = 38;

/// Read only the 6-bit message type.
pub fn decode_message_type(bits: &Sixbit) -> Result<u8> {
    Ok(bits.get_unsigned(MESSAGE_TYPE.start, MESSAGE_TYPE.end)? as u8)
}

/// Decode the fixed header shared by every message.
pub fn decode_header(bits: &Sixbit) -> Result<MessageHeader> {
    Ok(MessageHeader {
        message_type: bits.get_unsigned(MESSAGE_TYPE.start, MESSAGE_TYPE.end)? as u8,
        repeat_indicator: bits.get_unsigned(REPEAT_INDICATOR.start, REPEAT_INDICATOR.end)? as u8,
        mmsi: bits.get_unsigned(MMSI.start, MMSI.end)? as u32,
    })
}

/// Fail unless the usable length is one of `allowed`.
pub fn require_length(bits: &Sixbit, message_type: u8, allowed: &[usize]) -> Result<()> {
    let actual = bits.length();
    if allowed.contains(&actual) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    Err(AisError::InvalidMessageLength {
        message_type,
        expected,
        actual,
    })
}

/// Fail unless the usable length lies within `min..=max`.
pub fn require_length_between(
    bits: &Sixbit,
    message_type: u8,
    min: usize,
    max: usize,
) -> Result<()> {
    let actual = bits.length();
    if (min..=max).contains(&actual) {
        return Ok(());
    }
    Err(AisError::InvalidMessageLength {
        message_type,
        expected: format!("{min}-{max}"),
        actual,
    })
}

// ---------------------------------------------------------------------------
// Fragment accumulation
// ---------------------------------------------------------------------------

/// Accumulates the armored payload of one message, fragment by fragment.
///
/// Fragments must arrive numbered 1, 2, 3, ... Only the fill bits of the
/// last appended fragment are kept.
#[derive(Debug, Clone, Default)]
pub struct MessageParser {
    payload: String,
    fill_bits: u8,
    appended: usize,
    expected: Option<usize>,
    sixbit: Option<Sixbit>,
}

impl MessageParser {
    /// Builder for a message of unknown fragment count.
    pub fn new() -> Self {
        MessageParser::default()
    }

    /// Builder for a message announced as `count` fragments.
    pub fn with_fragment_count(count: usize) -> Self {
        MessageParser {
            expected: Some(count),
            ..MessageParser::default()
        }
    }

    /// Wrap an already complete single-fragment payload.
    pub fn from_sixbit(sixbit: Sixbit) -> Self {
        MessageParser {
            payload: sixbit.payload().to_string(),
            fill_bits: sixbit.fill_bits(),
            appended: 1,
            expected: Some(1),
            sixbit: Some(sixbit),
        }
    }

    /// Append the next fragment. `fragment_index` is 1-based.
    pub fn append(&mut self, payload: &str, fragment_index: usize, fill_bits: u8) -> Result<()> {
        validate_armor(payload)?;
        if fill_bits > MAX_FILL_BITS {
            return Err(AisError::MalformedPayload(format!(
                "fill bits must be 0-{MAX_FILL_BITS}, got {fill_bits}"
            )));
        }

        let next = self.appended + 1;
        let past_end = self.expected.is_some_and(|count| fragment_index > count);
        if fragment_index != next || past_end {
            return Err(AisError::FragmentOrder {
                expected: next,
                actual: fragment_index,
            });
        }

        let mut combined = String::with_capacity(self.payload.len() + payload.len());
        combined.push_str(&self.payload);
        combined.push_str(payload);
        let sixbit = Sixbit::new(&combined, fill_bits)?;

        self.payload = combined;
        self.fill_bits = fill_bits;
        self.appended = next;
        self.sixbit = Some(sixbit);
        Ok(())
    }

    /// Number of fragments appended so far.
    pub fn fragments(&self) -> usize {
        self.appended
    }

    /// True once the announced number of fragments has been appended.
    pub fn is_complete(&self) -> bool {
        match self.expected {
            Some(count) => self.appended == count,
            None => self.appended > 0,
        }
    }

    /// Concatenated armored payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn fill_bits(&self) -> u8 {
        self.fill_bits
    }

    pub fn sixbit(&self) -> Result<&Sixbit> {
        self.sixbit.as_ref().ok_or(AisError::EmptyMessage)
    }

    pub fn into_sixbit(self) -> Result<Sixbit> {
        self.sixbit.ok_or(AisError::EmptyMessage)
    }

    pub fn header(&self) -> Result<MessageHeader> {
        decode_header(self.sixbit()?)
    }

    pub fn message_type(&self) -> Result<u8> {
        decode_message_type(self.sixbit()?)
    }

    pub fn repeat_indicator(&self) -> Result<u8> {
        Ok(self.header()?.repeat_indicator)
    }

    pub fn mmsi(&self) -> Result<u32> {
        Ok(self.header()?.mmsi)
    }
}

// ---------------------------------------------------------------------------
// Lenient field reader
// ---------------------------------------------------------------------------

/// Reads fields of one message, collecting rule violations as it goes.
///
/// A field that breaks its codec's rules is recorded and decoding moves on;
/// only reads beyond the payload fail.
pub struct FieldReader<'a> {
    bits: &'a Sixbit,
    violations: Vec<RuleViolation>,
}

impl<'a> FieldReader<'a> {
    pub fn new(bits: &'a Sixbit) -> Self {
        FieldReader {
            bits,
            violations: Vec::new(),
        }
    }

    pub fn header(&self) -> Result<MessageHeader> {
        decode_header(self.bits)
    }

    pub fn message_type(&self) -> Result<u8> {
        decode_message_type(self.bits)
    }

    pub fn unsigned(&self, field: &FieldSpec) -> Result<u64> {
        self.bits.get_unsigned(field.start, field.end)
    }

    pub fn flag(&self, field: &FieldSpec) -> Result<bool> {
        self.bits.get_bool(field.start)
    }

    pub fn text(&self, field: &FieldSpec) -> Result<String> {
        self.bits.get_string(field.start, field.end)
    }

    /// Converted value, or `None` when the field holds no data.
    pub fn value<C: FieldCodec>(&mut self, field: &FieldSpec) -> Result<Option<C::Units>> {
        let raw = self.raw::<C>(field)?;
        Ok(C::is_available(raw).then(|| C::to_units(raw)))
    }

    /// Converted value for codecs whose units describe the no-data case.
    pub fn code<C: FieldCodec>(&mut self, field: &FieldSpec) -> Result<C::Units> {
        let raw = self.raw::<C>(field)?;
        Ok(C::to_units(raw))
    }

    /// Record a violation found by the caller.
    pub fn violation(&mut self, field: &FieldSpec, observed: i64, expected: &'static str) {
        self.violations.push(RuleViolation {
            location: field.name,
            observed,
            expected,
        });
    }

    pub fn finish(self) -> Vec<RuleViolation> {
        self.violations
    }

    fn raw<C: FieldCodec>(&mut self, field: &FieldSpec) -> Result<i64> {
        debug_assert_eq!(field.width(), C::WIDTH, "width mismatch for {}", field.name);
        let raw = if C::SIGNED {
            self.bits.get_signed(field.start, field.end)?
        } else {
            self.bits.get_unsigned(field.start, field.end)? as i64
        };
        if !C::is_correct(raw) {
            self.violation(field, raw, C::RANGE);
        }
        Ok(raw)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Angle9, Latitude};

    const TYPE_1: &str = "13aEOK?P00PD2wVMdLDRhgvL289?";
    const TYPE_5_PART_1: &str = "53nFBv01SJ<thHp6220H4heHTf2222222222221?50:454o<`9QSlUDp";
    const TYPE_5_PART_2: &str = "888888888888880";

    #[test]
    fn test_decode_header() {
        let bits = Sixbit::new(TYPE_1, 0).unwrap();
        let header = decode_header(&bits).unwrap();
        assert_eq!(header.message_type, 1);
        assert_eq!(header.repeat_indicator, 0);
        assert_eq!(header.mmsi, 244670316);
    }

    #[test]
    fn test_append_first() {
        let mut parser = MessageParser::new();
        parser.append(TYPE_1, 1, 0).unwrap();
        assert_eq!(parser.fragments(), 1);
        assert_eq!(parser.message_type().unwrap(), 1);
    }

    #[test]
    fn test_append_must_start_at_one() {
        let mut parser = MessageParser::new();
        let err = parser.append(TYPE_1, 2, 0).unwrap_err();
        assert!(matches!(
            err,
            AisError::FragmentOrder {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_append_repeated_index() {
        let mut parser = MessageParser::new();
        parser.append(TYPE_5_PART_1, 1, 0).unwrap();
        let err = parser.append(TYPE_5_PART_2, 1, 2).unwrap_err();
        assert!(matches!(err, AisError::FragmentOrder { .. }));
        // State is untouched by the failed append
        assert_eq!(parser.fragments(), 1);
        assert_eq!(parser.payload(), TYPE_5_PART_1);
    }

    #[test]
    fn test_append_concatenates_in_order() {
        let mut parser = MessageParser::with_fragment_count(2);
        parser.append(TYPE_5_PART_1, 1, 0).unwrap();
        assert!(!parser.is_complete());
        parser.append(TYPE_5_PART_2, 2, 2).unwrap();
        assert!(parser.is_complete());
        assert_eq!(parser.payload(), format!("{TYPE_5_PART_1}{TYPE_5_PART_2}"));
        assert_eq!(parser.fill_bits(), 2);
        assert_eq!(parser.sixbit().unwrap().length(), 424);
        assert_eq!(parser.mmsi().unwrap(), 258315000);
    }

    #[test]
    fn test_append_past_single_fragment() {
        let mut parser = MessageParser::from_sixbit(Sixbit::new(TYPE_1, 0).unwrap());
        let err = parser.append(TYPE_5_PART_2, 2, 0).unwrap_err();
        assert!(matches!(
            err,
            AisError::FragmentOrder {
                expected: 2,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_append_malformed() {
        let mut parser = MessageParser::new();
        assert!(matches!(
            parser.append("", 1, 0),
            Err(AisError::MalformedPayload(_))
        ));
        assert!(matches!(
            parser.append("13a!", 1, 0),
            Err(AisError::MalformedPayload(_))
        ));
        assert!(matches!(
            parser.append(TYPE_1, 1, 6),
            Err(AisError::MalformedPayload(_))
        ));
        assert_eq!(parser.fragments(), 0);
    }

    #[test]
    fn test_getters_before_append() {
        let parser = MessageParser::new();
        assert!(matches!(parser.message_type(), Err(AisError::EmptyMessage)));
        assert!(matches!(parser.mmsi(), Err(AisError::EmptyMessage)));
        assert!(matches!(parser.sixbit(), Err(AisError::EmptyMessage)));
        assert!(!parser.is_complete());
    }

    #[test]
    fn test_require_length() {
        let bits = Sixbit::new(TYPE_1, 0).unwrap();
        assert!(require_length(&bits, 1, &[168]).is_ok());
        let err = require_length(&bits, 24, &[160, 170]).unwrap_err();
        match err {
            AisError::InvalidMessageLength {
                message_type,
                expected,
                actual,
            } => {
                assert_eq!(message_type, 24);
                assert_eq!(expected, "160 or 170");
                assert_eq!(actual, 168);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(require_length_between(&bits, 21, 272, 360).is_err());
        assert!(require_length_between(&bits, 21, 100, 200).is_ok());
    }

    #[test]
    fn test_reader_records_violation() {
        let bits = Sixbit::new(TYPE_1, 0).unwrap();
        let mut reader = FieldReader::new(&bits);
        let heading = reader
            .value::<Angle9>(&FieldSpec::new("true_heading", 128, 137))
            .unwrap();
        assert_eq!(heading, None); // 511
        let lat = reader
            .value::<Latitude>(&FieldSpec::new("latitude", 89, 116))
            .unwrap()
            .unwrap();
        assert!((lat - 51.89475).abs() < 1e-6);
        reader.violation(&FieldSpec::new("spare", 145, 148), 7, "0");
        let violations = reader.finish();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "spare");
    }
}
