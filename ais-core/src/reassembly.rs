//! Streaming reassembly of multi-sentence AIS transmissions.
//!
//! The transport layer hands over one [`CarrierSentence`] at a time. A
//! sentence flagged first starts a new group (dropping any unfinished one);
//! a sentence flagged last closes the group and sends it to the factory.
//! Groups the factory rejects are dropped: other message types share the
//! same channel and are not an error here.

use log::{debug, trace};
use serde::Serialize;

use crate::factory;
use crate::types::{AisMessage, MessageKind};

/// One carrier sentence's share of an AIS transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierSentence {
    /// Number of sentences in the group
    pub fragment_count: usize,
    /// 1-based position of this sentence in the group
    pub fragment_index: usize,
    pub first: bool,
    pub last: bool,
    /// Padding bits on the final character (0-5); only the last sentence's value counts
    pub fill_bits: u8,
    /// Six-bit armored payload
    pub payload: String,
}

impl CarrierSentence {
    /// Build a record, deriving the first/last flags from the index.
    pub fn new(
        fragment_count: usize,
        fragment_index: usize,
        fill_bits: u8,
        payload: impl Into<String>,
    ) -> Self {
        CarrierSentence {
            fragment_count,
            fragment_index,
            first: fragment_index == 1,
            last: fragment_index == fragment_count,
            fill_bits,
            payload: payload.into(),
        }
    }
}

/// Which decoded messages a reassembler delivers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageFilter {
    #[default]
    All,
    Only(Vec<MessageKind>),
}

impl MessageFilter {
    /// Filter for the given numeric types; an empty list accepts everything.
    pub fn from_types(types: &[u8]) -> Self {
        if types.is_empty() {
            return MessageFilter::All;
        }
        MessageFilter::Only(
            types
                .iter()
                .filter_map(|t| MessageKind::from_type(*t))
                .collect(),
        )
    }

    pub fn accepts(&self, kind: MessageKind) -> bool {
        match self {
            MessageFilter::All => true,
            MessageFilter::Only(kinds) => kinds.contains(&kind),
        }
    }
}

/// Buffers the sentences of one in-flight group and emits decoded messages.
#[derive(Debug, Default)]
pub struct FragmentReassembler {
    filter: MessageFilter,
    pending: Vec<CarrierSentence>,
    /// Groups closed by a last sentence
    pub groups_completed: u64,
    /// Unfinished groups dropped when a new first sentence arrived
    pub groups_discarded: u64,
    /// Completed groups the factory could not decode
    pub groups_rejected: u64,
    pub messages_delivered: u64,
}

impl FragmentReassembler {
    pub fn new(filter: MessageFilter) -> Self {
        FragmentReassembler {
            filter,
            ..FragmentReassembler::default()
        }
    }

    pub fn filter(&self) -> &MessageFilter {
        &self.filter
    }

    /// Sentences buffered for the group in flight.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Feed one sentence. Returns a message when it closes a group that
    /// decodes and passes the filter.
    pub fn push(&mut self, sentence: CarrierSentence) -> Option<AisMessage> {
        if sentence.first && !self.pending.is_empty() {
            debug!(
                "discarding incomplete group of {} sentence(s)",
                self.pending.len()
            );
            self.groups_discarded += 1;
            self.pending.clear();
        }

        let last = sentence.last;
        self.pending.push(sentence);
        if !last {
            return None;
        }

        let group = std::mem::take(&mut self.pending);
        self.groups_completed += 1;

        let msg = match factory::create(&group) {
            Ok(msg) => msg,
            Err(e) => {
                debug!("dropping group of {} sentence(s): {e}", group.len());
                self.groups_rejected += 1;
                return None;
            }
        };

        if !self.filter.accepts(msg.kind()) {
            trace!("filtered out type {} from {}", msg.message_type(), msg.mmsi());
            return None;
        }

        trace!("delivering type {} from {}", msg.message_type(), msg.mmsi());
        self.messages_delivered += 1;
        Some(msg)
    }

    /// Drop any buffered sentences.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE_1: &str = "13aEOK?P00PD2wVMdLDRhgvL289?";
    const TYPE_5_PART_1: &str = "53nFBv01SJ<thHp6220H4heHTf2222222222221?50:454o<`9QSlUDp";
    const TYPE_5_PART_2: &str = "888888888888880";
    const TYPE_8: &str = "85MwpKiKf:MPiQa:ofV@v2mQTfB26oEtbEVqh4j1QDQPFhKPmmnTuj";

    #[test]
    fn test_sentence_flags() {
        let s = CarrierSentence::new(1, 1, 0, TYPE_1);
        assert!(s.first && s.last);
        let s = CarrierSentence::new(2, 1, 0, TYPE_5_PART_1);
        assert!(s.first && !s.last);
        let s = CarrierSentence::new(2, 2, 2, TYPE_5_PART_2);
        assert!(!s.first && s.last);
    }

    #[test]
    fn test_single_sentence_delivered() {
        let mut r = FragmentReassembler::new(MessageFilter::All);
        let msg = r.push(CarrierSentence::new(1, 1, 0, TYPE_1)).unwrap();
        assert_eq!(msg.mmsi(), 244670316);
        assert_eq!(r.messages_delivered, 1);
        assert_eq!(r.pending(), 0);
    }

    #[test]
    fn test_two_sentence_group() {
        let mut r = FragmentReassembler::new(MessageFilter::All);
        assert!(r.push(CarrierSentence::new(2, 1, 0, TYPE_5_PART_1)).is_none());
        assert_eq!(r.pending(), 1);
        let msg = r.push(CarrierSentence::new(2, 2, 2, TYPE_5_PART_2)).unwrap();
        assert_eq!(msg.kind(), MessageKind::StaticVoyage);
        assert_eq!(r.groups_completed, 1);
    }

    #[test]
    fn test_unsupported_type_not_delivered() {
        let mut r = FragmentReassembler::new(MessageFilter::All);
        assert!(r.push(CarrierSentence::new(1, 1, 0, TYPE_8)).is_none());
        assert_eq!(r.messages_delivered, 0);
        assert_eq!(r.groups_rejected, 1);

        // Still usable afterwards
        assert!(r.push(CarrierSentence::new(1, 1, 0, TYPE_1)).is_some());
    }

    #[test]
    fn test_new_first_discards_incomplete_group() {
        let mut r = FragmentReassembler::new(MessageFilter::All);
        assert!(r.push(CarrierSentence::new(2, 1, 0, TYPE_5_PART_1)).is_none());
        let msg = r.push(CarrierSentence::new(1, 1, 0, TYPE_1)).unwrap();
        assert_eq!(msg.message_type(), 1);
        assert_eq!(r.groups_discarded, 1);
    }

    #[test]
    fn test_orphan_last_fragment_rejected() {
        let mut r = FragmentReassembler::new(MessageFilter::All);
        assert!(r.push(CarrierSentence::new(2, 2, 2, TYPE_5_PART_2)).is_none());
        assert_eq!(r.groups_rejected, 1);
        assert_eq!(r.pending(), 0);
    }

    #[test]
    fn test_filter() {
        let mut r = FragmentReassembler::new(MessageFilter::Only(vec![MessageKind::StaticVoyage]));
        assert!(r.push(CarrierSentence::new(1, 1, 0, TYPE_1)).is_none());
        assert_eq!(r.groups_completed, 1);
        assert_eq!(r.messages_delivered, 0);

        r.push(CarrierSentence::new(2, 1, 0, TYPE_5_PART_1));
        assert!(r.push(CarrierSentence::new(2, 2, 2, TYPE_5_PART_2)).is_some());
    }

    #[test]
    fn test_filter_from_types() {
        assert_eq!(MessageFilter::from_types(&[]), MessageFilter::All);
        let filter = MessageFilter::from_types(&[1, 6, 5]);
        assert!(filter.accepts(MessageKind::ScheduledPosition));
        assert!(filter.accepts(MessageKind::StaticVoyage));
        assert!(!filter.accepts(MessageKind::AssignedPosition));
    }
}
