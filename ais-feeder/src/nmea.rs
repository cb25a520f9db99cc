//! NMEA 0183 framing for AIS log files.
//!
//! Accepts `!<talker>VDM` (other ships) and `!<talker>VDO` (own ship)
//! sentences, checks the XOR checksum, and turns the comma fields into a
//! [`CarrierSentence`] for the reassembler. Anything before the `!` (log
//! timestamps, tag blocks) is ignored.

use log::debug;

use ais_core::CarrierSentence;

/// A checked AIS sentence with its transport details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AisSentence {
    pub talker: String,
    /// True for VDO (own-ship) sentences
    pub own_ship: bool,
    pub sequence_id: Option<u8>,
    pub channel: Option<char>,
    pub carrier: CarrierSentence,
}

/// XOR of every byte between the leading `!` and the `*`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |acc, b| acc ^ b)
}

/// Split a line into its sentence body and checksum, verifying the sum.
fn checked_body(line: &str) -> Option<&str> {
    let start = line.find('!')?;
    let sentence = line[start + 1..].trim_end();
    let (body, sum) = sentence.rsplit_once('*')?;
    let expected = u8::from_str_radix(sum.get(..2)?, 16).ok()?;
    let actual = checksum(body);
    if actual != expected {
        debug!("checksum mismatch: expected {expected:02X}, got {actual:02X}: {line}");
        return None;
    }
    Some(body)
}

/// Parse one log line. `None` for blank lines, comments, other sentence
/// types, and anything malformed.
pub fn parse_line(line: &str) -> Option<AisSentence> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let body = checked_body(line)?;
    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() != 7 {
        debug!("expected 7 fields, got {}: {line}", fields.len());
        return None;
    }

    let address = fields[0];
    if address.len() != 5 || !address.is_ascii() {
        debug!("bad sentence address {address:?}: {line}");
        return None;
    }
    let (talker, formatter) = address.split_at(2);
    let own_ship = match formatter {
        "VDM" => false,
        "VDO" => true,
        _ => return None,
    };

    let fragment_count: usize = fields[1].parse().ok()?;
    let fragment_index: usize = fields[2].parse().ok()?;
    if fragment_count == 0 || fragment_index == 0 || fragment_index > fragment_count {
        debug!("bad fragment numbering {fragment_index}/{fragment_count}: {line}");
        return None;
    }
    let sequence_id = fields[3].parse().ok();
    let channel = fields[4].chars().next();
    let payload = fields[5];
    let fill_bits: u8 = fields[6].parse().ok()?;

    Some(AisSentence {
        talker: talker.to_string(),
        own_ship,
        sequence_id,
        channel,
        carrier: CarrierSentence::new(fragment_count, fragment_index, fill_bits, payload),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
