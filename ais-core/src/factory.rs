//! Build typed messages from one or more ordered payload fragments.
//!
//! The message type in the first 6 bits selects a decoder from
//! [`DECODER_TABLE`]; types without an entry are rejected.

use crate::parser::{decode_message_type, MessageParser};
use crate::position::{
    decode_base_station, decode_class_b, decode_long_range, decode_position_report,
    decode_sar_aircraft,
};
use crate::reassembly::CarrierSentence;
use crate::sixbit::Sixbit;
use crate::static_data::{
    decode_aid_to_navigation, decode_extended_class_b, decode_static_data, decode_static_voyage,
};
use crate::types::*;

type Decoder = fn(&Sixbit) -> Result<AisMessage>;

fn scheduled_position(bits: &Sixbit) -> Result<AisMessage> {
    decode_position_report(bits).map(AisMessage::ScheduledPosition)
}

fn assigned_position(bits: &Sixbit) -> Result<AisMessage> {
    decode_position_report(bits).map(AisMessage::AssignedPosition)
}

fn interrogated_position(bits: &Sixbit) -> Result<AisMessage> {
    decode_position_report(bits).map(AisMessage::InterrogatedPosition)
}

fn base_station(bits: &Sixbit) -> Result<AisMessage> {
    decode_base_station(bits).map(AisMessage::BaseStation)
}

fn static_voyage(bits: &Sixbit) -> Result<AisMessage> {
    decode_static_voyage(bits).map(AisMessage::StaticVoyage)
}

fn sar_aircraft(bits: &Sixbit) -> Result<AisMessage> {
    decode_sar_aircraft(bits).map(AisMessage::SarAircraft)
}

fn utc_date_response(bits: &Sixbit) -> Result<AisMessage> {
    decode_base_station(bits).map(AisMessage::UtcDateResponse)
}

fn class_b_position(bits: &Sixbit) -> Result<AisMessage> {
    decode_class_b(bits).map(AisMessage::ClassBPosition)
}

fn extended_class_b_position(bits: &Sixbit) -> Result<AisMessage> {
    decode_extended_class_b(bits).map(AisMessage::ExtendedClassBPosition)
}

fn aid_to_navigation(bits: &Sixbit) -> Result<AisMessage> {
    decode_aid_to_navigation(bits).map(AisMessage::AidToNavigation)
}

fn static_data(bits: &Sixbit) -> Result<AisMessage> {
    decode_static_data(bits).map(AisMessage::StaticData)
}

fn long_range(bits: &Sixbit) -> Result<AisMessage> {
    decode_long_range(bits).map(AisMessage::LongRange)
}

/// Decoder for each supported message type.
pub const DECODER_TABLE: &[(u8, Decoder)] = &[
    (1, scheduled_position),
    (2, assigned_position),
    (3, interrogated_position),
    (4, base_station),
    (5, static_voyage),
    (9, sar_aircraft),
    (11, utc_date_response),
    (18, class_b_position),
    (19, extended_class_b_position),
    (21, aid_to_navigation),
    (24, static_data),
    (27, long_range),
];

fn decoder_for(message_type: u8) -> Option<Decoder> {
    DECODER_TABLE
        .iter()
        .find(|(t, _)| *t == message_type)
        .map(|(_, decoder)| *decoder)
}

/// True if `message_type` has a decoder.
pub fn is_supported(message_type: u8) -> bool {
    decoder_for(message_type).is_some()
}

/// Decode a complete payload.
///
/// Only the type is read before dispatch; each decoder checks the length
/// before touching the rest of the header.
pub fn decode_sixbit(bits: &Sixbit) -> Result<AisMessage> {
    let message_type = decode_message_type(bits)?;
    let decoder = decoder_for(message_type).ok_or(AisError::UnsupportedMessageType(message_type))?;
    decoder(bits)
}

/// Decode a single-sentence payload.
pub fn decode_payload(payload: &str, fill_bits: u8) -> Result<AisMessage> {
    decode_sixbit(&Sixbit::new(payload, fill_bits)?)
}

/// Build a message from its carrier sentences, in the order given.
///
/// A single sentence is decoded directly. Several are joined through a
/// [`MessageParser`] using each sentence's own fragment index, so input out
/// of order fails with [`AisError::FragmentOrder`].
pub fn create(sentences: &[CarrierSentence]) -> Result<AisMessage> {
    match sentences {
        [] => Err(AisError::EmptyMessage),
        [only] => decode_payload(&only.payload, only.fill_bits),
        [first, ..] => {
            let mut parser = MessageParser::with_fragment_count(first.fragment_count);
            for sentence in sentences {
                parser.append(&sentence.payload, sentence.fragment_index, sentence.fill_bits)?;
            }
            decode_sixbit(parser.sixbit()?)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
