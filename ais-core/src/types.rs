//! Shared types, error enum, and decoded message types for ais-core.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::fields::{
    Dimensions, ManeuverIndicator, NavAidType, NavigationalStatus, PositioningDevice, ShipType,
    TimeStamp, TurnRate,
};

/// All errors produced by ais-core.
#[derive(Debug, Error)]
pub enum AisError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("incorrect order of AIS sentences: expected fragment {expected}, got {actual}")]
    FragmentOrder { expected: usize, actual: usize },
    #[error("unsupported AIS message type: {0}")]
    UnsupportedMessageType(u8),
    #[error("invalid length for message type {message_type}: expected {expected} bits, got {actual}")]
    InvalidMessageLength {
        message_type: u8,
        expected: String,
        actual: usize,
    },
    #[error("message accessed before any fragment was appended")]
    EmptyMessage,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AisError>;

// ---------------------------------------------------------------------------
// Common header and rule violations
// ---------------------------------------------------------------------------

/// Fields present at the start of every AIS message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageHeader {
    /// Message type (1-27)
    pub message_type: u8,
    /// How many times the message has been repeated (0-3)
    pub repeat_indicator: u8,
    /// 30-bit Maritime Mobile Service Identity
    pub mmsi: u32,
}

/// A field whose raw value lies outside what the standard allows.
///
/// Recorded while decoding continues; never raised as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    pub location: &'static str,
    pub observed: i64,
    pub expected: &'static str,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: value {} outside {}",
            self.location, self.observed, self.expected
        )
    }
}

// ---------------------------------------------------------------------------
// Message kinds
// ---------------------------------------------------------------------------

/// Tag for every supported message type. Subscribers use it to declare
/// which messages they want delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageKind {
    ScheduledPosition,
    AssignedPosition,
    InterrogatedPosition,
    BaseStation,
    StaticVoyage,
    SarAircraft,
    UtcDateResponse,
    ClassBPosition,
    ExtendedClassBPosition,
    AidToNavigation,
    StaticData,
    LongRange,
}

/// Supported message kinds keyed by numeric type.
pub const KIND_TABLE: &[(u8, MessageKind)] = &[
    (1, MessageKind::ScheduledPosition),
    (2, MessageKind::AssignedPosition),
    (3, MessageKind::InterrogatedPosition),
    (4, MessageKind::BaseStation),
    (5, MessageKind::StaticVoyage),
    (9, MessageKind::SarAircraft),
    (11, MessageKind::UtcDateResponse),
    (18, MessageKind::ClassBPosition),
    (19, MessageKind::ExtendedClassBPosition),
    (21, MessageKind::AidToNavigation),
    (24, MessageKind::StaticData),
    (27, MessageKind::LongRange),
];

impl MessageKind {
    /// Look up the kind for a numeric message type. `None` for unsupported types.
    pub fn from_type(message_type: u8) -> Option<MessageKind> {
        KIND_TABLE
            .iter()
            .find(|(t, _)| *t == message_type)
            .map(|(_, kind)| *kind)
    }

    pub fn message_type(self) -> u8 {
        KIND_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(t, _)| *t)
            .unwrap_or_default()
    }

    /// Human-readable message name.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::ScheduledPosition => "Position report (scheduled)",
            MessageKind::AssignedPosition => "Position report (assigned schedule)",
            MessageKind::InterrogatedPosition => "Position report (response to interrogation)",
            MessageKind::BaseStation => "Base station report",
            MessageKind::StaticVoyage => "Static and voyage related data",
            MessageKind::SarAircraft => "Standard SAR aircraft position report",
            MessageKind::UtcDateResponse => "UTC and date response",
            MessageKind::ClassBPosition => "Standard class B position report",
            MessageKind::ExtendedClassBPosition => "Extended class B position report",
            MessageKind::AidToNavigation => "Aid-to-navigation report",
            MessageKind::StaticData => "Static data report",
            MessageKind::LongRange => "Long range AIS broadcast",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Decoded message types
// ---------------------------------------------------------------------------

/// Types 1, 2, 3: class A position report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    pub header: MessageHeader,
    pub navigational_status: NavigationalStatus,
    pub rate_of_turn: TurnRate,
    pub speed_over_ground: Option<f64>,
    pub position_accuracy: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<u16>,
    pub time_stamp: TimeStamp,
    pub maneuver: ManeuverIndicator,
    pub raim: bool,
    pub radio_status: u32,
    pub violations: Vec<RuleViolation>,
}

/// Types 4 and 11: base station report / UTC and date response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStationReport {
    pub header: MessageHeader,
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub position_accuracy: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub positioning_device: PositioningDevice,
    pub raim: bool,
    pub radio_status: u32,
    pub violations: Vec<RuleViolation>,
}

/// Estimated time of arrival as broadcast (no year, UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eta {
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}

/// Type 5: static and voyage related data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticVoyageData {
    pub header: MessageHeader,
    pub ais_version: u8,
    pub imo_number: Option<u32>,
    pub call_sign: String,
    pub name: String,
    pub ship_type: ShipType,
    pub dimensions: Dimensions,
    pub positioning_device: PositioningDevice,
    pub eta: Eta,
    pub draught: Option<f64>,
    pub destination: String,
    /// Data terminal equipment ready (false = available)
    pub dte: bool,
    pub violations: Vec<RuleViolation>,
}

/// Type 9: standard SAR aircraft position report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SarAircraftReport {
    pub header: MessageHeader,
    pub altitude: Option<u16>,
    pub speed_over_ground: Option<u16>,
    pub position_accuracy: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub time_stamp: TimeStamp,
    pub regional: u8,
    pub dte: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio_status: u32,
    pub violations: Vec<RuleViolation>,
}

/// Type 18: standard class B position report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBPositionReport {
    pub header: MessageHeader,
    pub speed_over_ground: Option<f64>,
    pub position_accuracy: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<u16>,
    pub time_stamp: TimeStamp,
    pub regional: u8,
    /// Carrier-sense unit (true) or SOTDMA unit (false)
    pub cs_unit: bool,
    pub display: bool,
    pub dsc: bool,
    pub band: bool,
    pub message_22: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio_status: u32,
    pub violations: Vec<RuleViolation>,
}

/// Type 19: extended class B position report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedClassBReport {
    pub header: MessageHeader,
    pub speed_over_ground: Option<f64>,
    pub position_accuracy: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<u16>,
    pub time_stamp: TimeStamp,
    pub regional: u8,
    pub name: String,
    pub ship_type: ShipType,
    pub dimensions: Dimensions,
    pub positioning_device: PositioningDevice,
    pub raim: bool,
    pub dte: bool,
    pub assigned: bool,
    pub violations: Vec<RuleViolation>,
}

/// Type 21: aid-to-navigation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AidToNavigationReport {
    pub header: MessageHeader,
    pub aid_type: NavAidType,
    pub name: String,
    pub position_accuracy: bool,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub dimensions: Dimensions,
    pub positioning_device: PositioningDevice,
    pub time_stamp: TimeStamp,
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned: bool,
    pub name_extension: String,
    pub violations: Vec<RuleViolation>,
}

impl AidToNavigationReport {
    /// Name with the extension appended.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name.trim_end(), self.name_extension)
    }
}

/// Part B of a type 24 report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticDataPartB {
    pub ship_type: ShipType,
    pub vendor_id: String,
    pub unit_model: u8,
    pub serial_number: u32,
    pub call_sign: String,
    /// Present unless the sender is an auxiliary craft.
    pub dimensions: Option<Dimensions>,
    /// Present only for auxiliary craft (MMSI 98xxxxxxx).
    pub mothership_mmsi: Option<u32>,
}

/// Body of a type 24 report, selected by the part number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StaticDataPart {
    A { name: String },
    B(StaticDataPartB),
    Unknown(u8),
}

/// Type 24: static data report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticDataReport {
    pub header: MessageHeader,
    pub part: StaticDataPart,
    pub violations: Vec<RuleViolation>,
}

/// Type 27: long range AIS broadcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRangeReport {
    pub header: MessageHeader,
    pub position_accuracy: bool,
    pub raim: bool,
    pub navigational_status: NavigationalStatus,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub speed_over_ground: Option<u8>,
    pub course_over_ground: Option<u16>,
    /// True when the reported position is the current GNSS fix.
    pub gnss_current: bool,
    pub violations: Vec<RuleViolation>,
}

/// Union type for all decoded messages, one variant per numeric type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AisMessage {
    ScheduledPosition(PositionReport),
    AssignedPosition(PositionReport),
    InterrogatedPosition(PositionReport),
    BaseStation(BaseStationReport),
    StaticVoyage(StaticVoyageData),
    SarAircraft(SarAircraftReport),
    UtcDateResponse(BaseStationReport),
    ClassBPosition(ClassBPositionReport),
    ExtendedClassBPosition(ExtendedClassBReport),
    AidToNavigation(AidToNavigationReport),
    StaticData(StaticDataReport),
    LongRange(LongRangeReport),
}

impl AisMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            AisMessage::ScheduledPosition(_) => MessageKind::ScheduledPosition,
            AisMessage::AssignedPosition(_) => MessageKind::AssignedPosition,
            AisMessage::InterrogatedPosition(_) => MessageKind::InterrogatedPosition,
            AisMessage::BaseStation(_) => MessageKind::BaseStation,
            AisMessage::StaticVoyage(_) => MessageKind::StaticVoyage,
            AisMessage::SarAircraft(_) => MessageKind::SarAircraft,
            AisMessage::UtcDateResponse(_) => MessageKind::UtcDateResponse,
            AisMessage::ClassBPosition(_) => MessageKind::ClassBPosition,
            AisMessage::ExtendedClassBPosition(_) => MessageKind::ExtendedClassBPosition,
            AisMessage::AidToNavigation(_) => MessageKind::AidToNavigation,
            AisMessage::StaticData(_) => MessageKind::StaticData,
            AisMessage::LongRange(_) => MessageKind::LongRange,
        }
    }

    /// Get the shared header from any message type.
    pub fn header(&self) -> &MessageHeader {
        match self {
            AisMessage::ScheduledPosition(m)
            | AisMessage::AssignedPosition(m)
            | AisMessage::InterrogatedPosition(m) => &m.header,
            AisMessage::BaseStation(m) | AisMessage::UtcDateResponse(m) => &m.header,
            AisMessage::StaticVoyage(m) => &m.header,
            AisMessage::SarAircraft(m) => &m.header,
            AisMessage::ClassBPosition(m) => &m.header,
            AisMessage::ExtendedClassBPosition(m) => &m.header,
            AisMessage::AidToNavigation(m) => &m.header,
            AisMessage::StaticData(m) => &m.header,
            AisMessage::LongRange(m) => &m.header,
        }
    }

    pub fn mmsi(&self) -> u32 {
        self.header().mmsi
    }

    pub fn message_type(&self) -> u8 {
        self.header().message_type
    }

    /// Rule violations recorded while decoding.
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            AisMessage::ScheduledPosition(m)
            | AisMessage::AssignedPosition(m)
            | AisMessage::InterrogatedPosition(m) => &m.violations,
            AisMessage::BaseStation(m) | AisMessage::UtcDateResponse(m) => &m.violations,
            AisMessage::StaticVoyage(m) => &m.violations,
            AisMessage::SarAircraft(m) => &m.violations,
            AisMessage::ClassBPosition(m) => &m.violations,
            AisMessage::ExtendedClassBPosition(m) => &m.violations,
            AisMessage::AidToNavigation(m) => &m.violations,
            AisMessage::StaticData(m) => &m.violations,
            AisMessage::LongRange(m) => &m.violations,
        }
    }

    /// True if no field broke the rules of the standard.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Latitude and longitude in degrees, when the message carries both.
    pub fn position(&self) -> Option<(f64, f64)> {
        let (lat, lon) = match self {
            AisMessage::ScheduledPosition(m)
            | AisMessage::AssignedPosition(m)
            | AisMessage::InterrogatedPosition(m) => (m.latitude, m.longitude),
            AisMessage::BaseStation(m) | AisMessage::UtcDateResponse(m) => {
                (m.latitude, m.longitude)
            }
            AisMessage::SarAircraft(m) => (m.latitude, m.longitude),
            AisMessage::ClassBPosition(m) => (m.latitude, m.longitude),
            AisMessage::ExtendedClassBPosition(m) => (m.latitude, m.longitude),
            AisMessage::AidToNavigation(m) => (m.latitude, m.longitude),
            AisMessage::LongRange(m) => (m.latitude, m.longitude),
            AisMessage::StaticVoyage(_) | AisMessage::StaticData(_) => (None, None),
        };
        Some((lat?, lon?))
    }

    /// Station or vessel name, for messages that carry one.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            AisMessage::StaticVoyage(m) => &m.name,
            AisMessage::ExtendedClassBPosition(m) => &m.name,
            AisMessage::AidToNavigation(m) => &m.name,
            AisMessage::StaticData(StaticDataReport {
                part: StaticDataPart::A { name },
                ..
            }) => name,
            _ => return None,
        };
        let name = name.trim_end();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
