//! Per-field codecs for AIS quantities.
//!
//! Each codec knows its raw width, the range of physically meaningful values,
//! and the sentinel the standard reserves for "not available". Two predicates
//! are kept apart on purpose:
//! - `is_available`: the raw value carries data;
//! - `is_correct`: the raw value is allowed by the standard, which includes
//!   the sentinel.
//!
//! Enumerated fields (navigational status, positioning device, ...) implement
//! the codec directly on their value type.

use std::fmt;

use serde::Serialize;

/// Decoding rules for one AIS quantity.
pub trait FieldCodec {
    /// Converted value.
    type Units: fmt::Display;
    /// Raw width in bits.
    const WIDTH: usize;
    /// Raw value is two's complement.
    const SIGNED: bool = false;
    /// Allowed values, as reported in rule violations.
    const RANGE: &'static str;

    fn is_available(raw: i64) -> bool;

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw)
    }

    fn to_units(raw: i64) -> Self::Units;

    /// Diagnostic text: the formatted value, "not available", or "illegal value".
    fn describe(raw: i64) -> String {
        if Self::is_available(raw) {
            Self::to_units(raw).to_string()
        } else if Self::is_correct(raw) {
            "not available".into()
        } else {
            format!("illegal value {raw}")
        }
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Raw position units per degree (1/10000 minute).
pub const POSITION_SCALE: i64 = 600_000;

/// Raw position units per degree in long-range reports (1/10 minute).
pub const LOW_RES_POSITION_SCALE: i64 = 600;

/// Latitude, 27-bit signed, 1/10000 minute.
pub struct Latitude;

impl FieldCodec for Latitude {
    type Units = f64;
    const WIDTH: usize = 27;
    const SIGNED: bool = true;
    const RANGE: &'static str = "-90..=90 degrees, 91 = not available";

    fn is_available(raw: i64) -> bool {
        (-90 * POSITION_SCALE..=90 * POSITION_SCALE).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw) || raw == 91 * POSITION_SCALE
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / POSITION_SCALE as f64
    }
}

/// Longitude, 28-bit signed, 1/10000 minute.
pub struct Longitude;

impl FieldCodec for Longitude {
    type Units = f64;
    const WIDTH: usize = 28;
    const SIGNED: bool = true;
    const RANGE: &'static str = "-180..=180 degrees, 181 = not available";

    fn is_available(raw: i64) -> bool {
        (-180 * POSITION_SCALE..=180 * POSITION_SCALE).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw) || raw == 181 * POSITION_SCALE
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / POSITION_SCALE as f64
    }
}

/// Latitude in long-range broadcasts, 17-bit signed, 1/10 minute.
pub struct LowResLatitude;

impl FieldCodec for LowResLatitude {
    type Units = f64;
    const WIDTH: usize = 17;
    const SIGNED: bool = true;
    const RANGE: &'static str = "-90..=90 degrees, 91 = not available";

    fn is_available(raw: i64) -> bool {
        (-90 * LOW_RES_POSITION_SCALE..=90 * LOW_RES_POSITION_SCALE).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw) || raw == 91 * LOW_RES_POSITION_SCALE
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / LOW_RES_POSITION_SCALE as f64
    }
}

/// Longitude in long-range broadcasts, 18-bit signed, 1/10 minute.
pub struct LowResLongitude;

impl FieldCodec for LowResLongitude {
    type Units = f64;
    const WIDTH: usize = 18;
    const SIGNED: bool = true;
    const RANGE: &'static str = "-180..=180 degrees, 181 = not available";

    fn is_available(raw: i64) -> bool {
        (-180 * LOW_RES_POSITION_SCALE..=180 * LOW_RES_POSITION_SCALE).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw) || raw == 181 * LOW_RES_POSITION_SCALE
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / LOW_RES_POSITION_SCALE as f64
    }
}

// ---------------------------------------------------------------------------
// Integer quantities with a single sentinel
// ---------------------------------------------------------------------------

/// Unsigned quantity used as-is, available in `min..=max`, with one sentinel.
/// Any other raw value is illegal.
macro_rules! bounded_codec {
    ($(#[$meta:meta])* $name:ident: $units:ty, $width:expr, $min:expr, $max:expr, $na:expr, $range:expr) => {
        $(#[$meta])*
        pub struct $name;

        impl FieldCodec for $name {
            type Units = $units;
            const WIDTH: usize = $width;
            const RANGE: &'static str = $range;

            fn is_available(raw: i64) -> bool {
                ($min..=$max).contains(&raw)
            }

            fn is_correct(raw: i64) -> bool {
                Self::is_available(raw) || raw == $na
            }

            fn to_units(raw: i64) -> $units {
                raw as $units
            }
        }
    };
}

bounded_codec!(
    /// Heading or course in whole degrees (9 bits).
    Angle9: u16, 9, 0, 359, 511, "0-359, 511 = not available"
);
bounded_codec!(
    /// SAR aircraft speed in whole knots; 1022 means 1022 knots or more.
    SarSpeed: u16, 10, 0, 1022, 1023, "0-1022, 1023 = not available"
);
bounded_codec!(
    /// SAR aircraft altitude in metres; 4094 means 4094 m or higher.
    SarAltitude: u16, 12, 0, 4094, 4095, "0-4094, 4095 = not available"
);
bounded_codec!(
    /// Long-range speed in whole knots.
    LowResSpeed: u8, 6, 0, 62, 63, "0-62, 63 = not available"
);
bounded_codec!(Year: u16, 14, 1, 9999, 0, "1-9999, 0 = not available");
bounded_codec!(Month: u8, 4, 1, 12, 0, "1-12, 0 = not available");
bounded_codec!(Day: u8, 5, 1, 31, 0, "1-31, 0 = not available");
bounded_codec!(Hour: u8, 5, 0, 23, 24, "0-23, 24 = not available");
bounded_codec!(Minute: u8, 6, 0, 59, 60, "0-59, 60 = not available");
bounded_codec!(
    /// Second of a full UTC date-time (base station reports).
    UtcSecond: u8, 6, 0, 59, 60, "0-59, 60 = not available"
);

/// Course over ground, 12 bits, 1/10 degree.
pub struct Angle12;

impl FieldCodec for Angle12 {
    type Units = f64;
    const WIDTH: usize = 12;
    const RANGE: &'static str = "0-3599, 3600 = not available";

    fn is_available(raw: i64) -> bool {
        (0..=3599).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw) || raw == 3600
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / 10.0
    }
}

/// Speed over ground, 10 bits, 1/10 knot. 1022 means 102.2 knots or more.
pub struct SpeedOverGround;

impl FieldCodec for SpeedOverGround {
    type Units = f64;
    const WIDTH: usize = 10;
    const RANGE: &'static str = "0-1022, 1023 = not available";

    fn is_available(raw: i64) -> bool {
        (0..=1022).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        Self::is_available(raw) || raw == 1023
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / 10.0
    }
}

/// Maximum present static draught, 1/10 metre.
pub struct Draught;

impl FieldCodec for Draught {
    type Units = f64;
    const WIDTH: usize = 8;
    const RANGE: &'static str = "1-255, 0 = not available";

    fn is_available(raw: i64) -> bool {
        (1..=255).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=255).contains(&raw)
    }

    fn to_units(raw: i64) -> f64 {
        raw as f64 / 10.0
    }
}

// ---------------------------------------------------------------------------
// Rate of turn
// ---------------------------------------------------------------------------

/// Decoded rate-of-turn indication.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TurnRate {
    NotAvailable,
    /// Degrees per minute, positive to starboard.
    Rate(f64),
    /// Turning right at more than 5 degrees per 30 s, no turn indicator.
    FastRight,
    /// Turning left at more than 5 degrees per 30 s, no turn indicator.
    FastLeft,
}

impl fmt::Display for TurnRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRate::NotAvailable => f.write_str("not available"),
            TurnRate::Rate(r) => write!(f, "{r:.1} deg/min"),
            TurnRate::FastRight => f.write_str("turning right, more than 5 deg/30 s"),
            TurnRate::FastLeft => f.write_str("turning left, more than 5 deg/30 s"),
        }
    }
}

/// Rate of turn, 8-bit signed ROT_AIS encoding.
pub struct RateOfTurn;

impl FieldCodec for RateOfTurn {
    type Units = TurnRate;
    const WIDTH: usize = 8;
    const SIGNED: bool = true;
    const RANGE: &'static str = "-127..=127, -128 = not available";

    fn is_available(raw: i64) -> bool {
        (-126..=126).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        (-128..=127).contains(&raw)
    }

    fn to_units(raw: i64) -> TurnRate {
        match raw {
            127 => TurnRate::FastRight,
            -127 => TurnRate::FastLeft,
            r if Self::is_available(r) => {
                let magnitude = (r as f64 / 4.733).powi(2);
                TurnRate::Rate(if r < 0 { -magnitude } else { magnitude })
            }
            _ => TurnRate::NotAvailable,
        }
    }

    fn describe(raw: i64) -> String {
        if Self::is_correct(raw) {
            Self::to_units(raw).to_string()
        } else {
            format!("illegal value {raw}")
        }
    }
}

// ---------------------------------------------------------------------------
// Time stamp
// ---------------------------------------------------------------------------

/// UTC second of the position fix, or why there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeStamp {
    Second(u8),
    NotAvailable,
    ManualInput,
    DeadReckoning,
    Inoperative,
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeStamp::Second(s) => write!(f, "{s}"),
            TimeStamp::NotAvailable => f.write_str("not available"),
            TimeStamp::ManualInput => f.write_str("manual input mode"),
            TimeStamp::DeadReckoning => f.write_str("dead reckoning mode"),
            TimeStamp::Inoperative => f.write_str("positioning system inoperative"),
        }
    }
}

impl FieldCodec for TimeStamp {
    type Units = TimeStamp;
    const WIDTH: usize = 6;
    const RANGE: &'static str = "0-59, 60-63 = no time stamp";

    fn is_available(raw: i64) -> bool {
        (0..=59).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=63).contains(&raw)
    }

    fn to_units(raw: i64) -> TimeStamp {
        match raw {
            0..=59 => TimeStamp::Second(raw as u8),
            61 => TimeStamp::ManualInput,
            62 => TimeStamp::DeadReckoning,
            63 => TimeStamp::Inoperative,
            _ => TimeStamp::NotAvailable,
        }
    }

    fn describe(raw: i64) -> String {
        if Self::is_correct(raw) {
            Self::to_units(raw).to_string()
        } else {
            format!("illegal value {raw}")
        }
    }
}

// ---------------------------------------------------------------------------
// Navigational status
// ---------------------------------------------------------------------------

/// Class A navigational status.
///
/// Codes 9, 10 and 13 are reserved by the standard. They decode to
/// `Reserved` rather than to a not-available case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationalStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManoeuvrability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    TowingAstern,
    PushingAheadOrTowingAlongside,
    AisSartActive,
    NotDefined,
    Reserved(u8),
}

impl NavigationalStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => NavigationalStatus::UnderWayUsingEngine,
            1 => NavigationalStatus::AtAnchor,
            2 => NavigationalStatus::NotUnderCommand,
            3 => NavigationalStatus::RestrictedManoeuvrability,
            4 => NavigationalStatus::ConstrainedByDraught,
            5 => NavigationalStatus::Moored,
            6 => NavigationalStatus::Aground,
            7 => NavigationalStatus::EngagedInFishing,
            8 => NavigationalStatus::UnderWaySailing,
            11 => NavigationalStatus::TowingAstern,
            12 => NavigationalStatus::PushingAheadOrTowingAlongside,
            14 => NavigationalStatus::AisSartActive,
            15 => NavigationalStatus::NotDefined,
            other => NavigationalStatus::Reserved(other),
        }
    }
}

impl fmt::Display for NavigationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NavigationalStatus::UnderWayUsingEngine => "under way using engine",
            NavigationalStatus::AtAnchor => "at anchor",
            NavigationalStatus::NotUnderCommand => "not under command",
            NavigationalStatus::RestrictedManoeuvrability => "restricted manoeuvrability",
            NavigationalStatus::ConstrainedByDraught => "constrained by her draught",
            NavigationalStatus::Moored => "moored",
            NavigationalStatus::Aground => "aground",
            NavigationalStatus::EngagedInFishing => "engaged in fishing",
            NavigationalStatus::UnderWaySailing => "under way sailing",
            NavigationalStatus::TowingAstern => "power-driven vessel towing astern",
            NavigationalStatus::PushingAheadOrTowingAlongside => {
                "power-driven vessel pushing ahead or towing alongside"
            }
            NavigationalStatus::AisSartActive => "AIS-SART active",
            NavigationalStatus::NotDefined => "not defined",
            NavigationalStatus::Reserved(_) => "reserved for future use",
        };
        f.write_str(text)
    }
}

/// Codes 11 and 12 (towing, added in ITU-R M.1371-5) count as available
/// alongside 0-8, 14 and 15. Reserved codes are correct but not available.
impl FieldCodec for NavigationalStatus {
    type Units = NavigationalStatus;
    const WIDTH: usize = 4;
    const RANGE: &'static str = "0-15";

    fn is_available(raw: i64) -> bool {
        matches!(raw, 0..=8 | 11 | 12 | 14 | 15)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=15).contains(&raw)
    }

    fn to_units(raw: i64) -> NavigationalStatus {
        NavigationalStatus::from_code(raw as u8)
    }

    fn describe(raw: i64) -> String {
        if Self::is_correct(raw) {
            Self::to_units(raw).to_string()
        } else {
            format!("illegal value {raw}")
        }
    }
}

// ---------------------------------------------------------------------------
// Positioning device
// ---------------------------------------------------------------------------

/// Type of electronic position fixing device (EPFD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PositioningDevice {
    Undefined,
    Gps,
    Glonass,
    CombinedGpsGlonass,
    LoranC,
    Chayka,
    IntegratedNavigation,
    Surveyed,
    Galileo,
    InternalGnss,
    NotUsed(u8),
}

impl fmt::Display for PositioningDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PositioningDevice::Undefined => "undefined",
            PositioningDevice::Gps => "GPS",
            PositioningDevice::Glonass => "GLONASS",
            PositioningDevice::CombinedGpsGlonass => "combined GPS/GLONASS",
            PositioningDevice::LoranC => "Loran-C",
            PositioningDevice::Chayka => "Chayka",
            PositioningDevice::IntegratedNavigation => "integrated navigation system",
            PositioningDevice::Surveyed => "surveyed",
            PositioningDevice::Galileo => "Galileo",
            PositioningDevice::InternalGnss => "internal GNSS",
            PositioningDevice::NotUsed(_) => "not used",
        };
        f.write_str(text)
    }
}

impl FieldCodec for PositioningDevice {
    type Units = PositioningDevice;
    const WIDTH: usize = 4;
    const RANGE: &'static str = "0-15";

    fn is_available(raw: i64) -> bool {
        matches!(raw, 1..=8 | 15)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=15).contains(&raw)
    }

    fn to_units(raw: i64) -> PositioningDevice {
        match raw {
            1 => PositioningDevice::Gps,
            2 => PositioningDevice::Glonass,
            3 => PositioningDevice::CombinedGpsGlonass,
            4 => PositioningDevice::LoranC,
            5 => PositioningDevice::Chayka,
            6 => PositioningDevice::IntegratedNavigation,
            7 => PositioningDevice::Surveyed,
            8 => PositioningDevice::Galileo,
            15 => PositioningDevice::InternalGnss,
            9..=14 => PositioningDevice::NotUsed(raw as u8),
            _ => PositioningDevice::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Maneuver indicator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ManeuverIndicator {
    NotAvailable,
    NoSpecialManeuver,
    SpecialManeuver,
    Reserved,
}

impl fmt::Display for ManeuverIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ManeuverIndicator::NotAvailable => "not available",
            ManeuverIndicator::NoSpecialManeuver => "no special maneuver",
            ManeuverIndicator::SpecialManeuver => "special maneuver",
            ManeuverIndicator::Reserved => "reserved",
        };
        f.write_str(text)
    }
}

impl FieldCodec for ManeuverIndicator {
    type Units = ManeuverIndicator;
    const WIDTH: usize = 2;
    const RANGE: &'static str = "0-3";

    fn is_available(raw: i64) -> bool {
        matches!(raw, 1 | 2)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=3).contains(&raw)
    }

    fn to_units(raw: i64) -> ManeuverIndicator {
        match raw {
            1 => ManeuverIndicator::NoSpecialManeuver,
            2 => ManeuverIndicator::SpecialManeuver,
            3 => ManeuverIndicator::Reserved,
            _ => ManeuverIndicator::NotAvailable,
        }
    }
}

// ---------------------------------------------------------------------------
// Ship and cargo type
// ---------------------------------------------------------------------------

/// Ship and cargo type code (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipType(pub u8);

impl ShipType {
    /// Vessel category for the code.
    pub fn category(&self) -> &'static str {
        match self.0 {
            0 => "not available",
            1..=19 => "reserved for future use",
            20..=29 => "wing in ground",
            30 => "fishing",
            31 | 32 => "towing",
            33 => "dredging or underwater operations",
            34 => "diving operations",
            35 => "military operations",
            36 => "sailing",
            37 => "pleasure craft",
            38 | 39 => "reserved",
            40..=49 => "high speed craft",
            50 => "pilot vessel",
            51 => "search and rescue vessel",
            52 => "tug",
            53 => "port tender",
            54 => "anti-pollution equipment",
            55 => "law enforcement",
            56 | 57 => "spare, local vessel",
            58 => "medical transport",
            59 => "noncombatant ship",
            60..=69 => "passenger",
            70..=79 => "cargo",
            80..=89 => "tanker",
            90..=99 => "other type",
            100..=199 => "reserved for regional use",
            _ => "reserved for future use",
        }
    }

    /// Cargo qualifier for the groups that carry one.
    pub fn cargo(&self) -> Option<&'static str> {
        let grouped = matches!(self.0 / 10, 2 | 4 | 6 | 7 | 8 | 9) && self.0 < 100;
        if !grouped {
            return None;
        }
        match self.0 % 10 {
            0 => Some("all ships of this type"),
            1 => Some("hazardous category A"),
            2 => Some("hazardous category B"),
            3 => Some("hazardous category C"),
            4 => Some("hazardous category D"),
            9 => Some("no additional information"),
            _ => Some("reserved for future use"),
        }
    }

    pub fn description(&self) -> String {
        match self.cargo() {
            Some(cargo) => format!("{}, {}", self.category(), cargo),
            None => self.category().to_string(),
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl FieldCodec for ShipType {
    type Units = ShipType;
    const WIDTH: usize = 8;
    const RANGE: &'static str = "0-255";

    fn is_available(raw: i64) -> bool {
        (1..=99).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=255).contains(&raw)
    }

    fn to_units(raw: i64) -> ShipType {
        ShipType(raw as u8)
    }
}

// ---------------------------------------------------------------------------
// Aid-to-navigation type
// ---------------------------------------------------------------------------

const NAV_AID_TYPES: [&str; 32] = [
    "not specified",
    "reference point",
    "RACON",
    "fixed structure off shore",
    "spare",
    "light, without sectors",
    "light, with sectors",
    "leading light front",
    "leading light rear",
    "beacon, cardinal N",
    "beacon, cardinal E",
    "beacon, cardinal S",
    "beacon, cardinal W",
    "beacon, port hand",
    "beacon, starboard hand",
    "beacon, preferred channel port hand",
    "beacon, preferred channel starboard hand",
    "beacon, isolated danger",
    "beacon, safe water",
    "beacon, special mark",
    "cardinal mark N",
    "cardinal mark E",
    "cardinal mark S",
    "cardinal mark W",
    "port hand mark",
    "starboard hand mark",
    "preferred channel port hand",
    "preferred channel starboard hand",
    "isolated danger",
    "safe water",
    "special mark",
    "light vessel / LANBY / rigs",
];

/// Aid-to-navigation type code (0-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavAidType(pub u8);

impl NavAidType {
    pub fn description(&self) -> &'static str {
        NAV_AID_TYPES
            .get(self.0 as usize)
            .copied()
            .unwrap_or("unknown")
    }

    /// Fixed structure (1-19) as opposed to a floating aid (20-31).
    pub fn is_fixed(&self) -> bool {
        (1..=19).contains(&self.0)
    }
}

impl fmt::Display for NavAidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FieldCodec for NavAidType {
    type Units = NavAidType;
    const WIDTH: usize = 5;
    const RANGE: &'static str = "0-31";

    fn is_available(raw: i64) -> bool {
        (1..=31).contains(&raw)
    }

    fn is_correct(raw: i64) -> bool {
        (0..=31).contains(&raw)
    }

    fn to_units(raw: i64) -> NavAidType {
        NavAidType(raw as u8)
    }
}

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Distances in metres from the position reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Dimensions {
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
}

impl Dimensions {
    /// Overall length in metres. `None` when either part is unknown.
    pub fn length(&self) -> Option<u16> {
        if self.to_bow == 0 || self.to_stern == 0 {
            return None;
        }
        Some(self.to_bow + self.to_stern)
    }

    /// Overall beam in metres. `None` when either part is unknown.
    pub fn beam(&self) -> Option<u8> {
        if self.to_port == 0 || self.to_starboard == 0 {
            return None;
        }
        Some(self.to_port + self.to_starboard)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude() {
        assert_eq!(Latitude::to_units(0), 0.0);
        assert!(Latitude::is_available(90 * POSITION_SCALE));
        assert!(Latitude::is_available(-90 * POSITION_SCALE));
        assert!(!Latitude::is_available(91 * POSITION_SCALE));
        assert!(Latitude::is_correct(91 * POSITION_SCALE));
        assert!(!Latitude::is_correct(92 * POSITION_SCALE));
        assert!(!Latitude::is_correct(-91 * POSITION_SCALE));
        assert_eq!(Latitude::to_units(30_000_000), 50.0);
    }

    #[test]
    fn test_longitude() {
        assert_eq!(Longitude::to_units(0), 0.0);
        assert!(Longitude::is_available(180 * POSITION_SCALE));
        assert!(Longitude::is_available(-180 * POSITION_SCALE));
        assert!(!Longitude::is_available(181 * POSITION_SCALE));
        assert!(Longitude::is_correct(181 * POSITION_SCALE));
        assert!(!Longitude::is_correct(182 * POSITION_SCALE));
        assert!(!Longitude::is_correct(-181 * POSITION_SCALE));
    }

    #[test]
    fn test_low_res_position() {
        assert!(LowResLatitude::is_correct(91 * 600));
        assert!(!LowResLatitude::is_available(91 * 600));
        assert!(LowResLongitude::is_correct(181 * 600));
        assert_eq!(LowResLatitude::to_units(-22592), -22592.0 / 600.0);
    }

    #[test]
    fn test_speed_over_ground() {
        assert_eq!(SpeedOverGround::to_units(1022), 102.2);
        assert!(SpeedOverGround::is_available(1022));
        assert!(!SpeedOverGround::is_available(1023));
        assert!(SpeedOverGround::is_correct(1023));
        assert!(!SpeedOverGround::is_correct(1024));
    }

    #[test]
    fn test_angles() {
        assert!(Angle9::is_available(359));
        assert!(!Angle9::is_available(360));
        assert!(!Angle9::is_correct(360));
        assert!(Angle9::is_correct(511));
        assert!(Angle12::is_correct(3600));
        assert!(!Angle12::is_correct(3601));
        assert_eq!(Angle12::to_units(706), 70.6);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Latitude::describe(91 * POSITION_SCALE), "not available");
        assert_eq!(Latitude::describe(92 * POSITION_SCALE), "illegal value 55200000");
        assert_eq!(Angle9::describe(511), "not available");
        assert_eq!(Angle9::describe(400), "illegal value 400");
        assert_eq!(Angle9::describe(90), "90");
    }

    #[test]
    fn test_time_stamp() {
        assert_eq!(TimeStamp::to_units(14), TimeStamp::Second(14));
        assert_eq!(TimeStamp::to_units(60), TimeStamp::NotAvailable);
        assert_eq!(TimeStamp::to_units(61), TimeStamp::ManualInput);
        assert_eq!(TimeStamp::to_units(62), TimeStamp::DeadReckoning);
        assert_eq!(TimeStamp::to_units(63), TimeStamp::Inoperative);
        assert!(!TimeStamp::is_available(60));
        assert!(TimeStamp::is_correct(63));
        assert_eq!(TimeStamp::describe(62), "dead reckoning mode");
    }

    #[test]
    fn test_rate_of_turn() {
        assert_eq!(RateOfTurn::to_units(-128), TurnRate::NotAvailable);
        assert_eq!(RateOfTurn::to_units(127), TurnRate::FastRight);
        assert_eq!(RateOfTurn::to_units(-127), TurnRate::FastLeft);
        assert_eq!(RateOfTurn::to_units(0), TurnRate::Rate(0.0));
        match RateOfTurn::to_units(-10) {
            TurnRate::Rate(r) => assert!((r + 4.464).abs() < 0.01, "got {r}"),
            other => panic!("expected rate, got {other:?}"),
        }
        assert!(RateOfTurn::is_correct(-128));
        assert!(!RateOfTurn::is_available(-128));
    }

    #[test]
    fn test_navigational_status_reserved_codes() {
        for code in [9, 10, 13] {
            assert!(NavigationalStatus::is_correct(code));
            assert_eq!(
                NavigationalStatus::to_units(code),
                NavigationalStatus::Reserved(code as u8)
            );
            assert_eq!(NavigationalStatus::describe(code), "reserved for future use");
        }
        assert_eq!(NavigationalStatus::to_units(5), NavigationalStatus::Moored);
        assert_eq!(NavigationalStatus::describe(15), "not defined");
    }

    #[test]
    fn test_navigational_status_available_set() {
        let available: Vec<i64> = (0..16)
            .filter(|c| NavigationalStatus::is_available(*c))
            .collect();
        assert_eq!(available, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 11, 12, 14, 15]);
        assert_eq!(
            NavigationalStatus::to_units(11),
            NavigationalStatus::TowingAstern
        );
        assert!(!NavigationalStatus::is_correct(16));
    }

    #[test]
    fn test_positioning_device() {
        assert_eq!(PositioningDevice::to_units(1), PositioningDevice::Gps);
        assert_eq!(PositioningDevice::to_units(15), PositioningDevice::InternalGnss);
        assert_eq!(PositioningDevice::to_units(11), PositioningDevice::NotUsed(11));
        assert_eq!(PositioningDevice::describe(0), "not available");
        assert_eq!(PositioningDevice::describe(7), "surveyed");
    }

    #[test]
    fn test_ship_type() {
        assert_eq!(ShipType(79).description(), "cargo, no additional information");
        assert_eq!(ShipType(52).description(), "tug");
        assert_eq!(ShipType(81).description(), "tanker, hazardous category A");
        assert_eq!(ShipType(0).description(), "not available");
    }

    #[test]
    fn test_nav_aid_type() {
        assert_eq!(NavAidType(28).description(), "isolated danger");
        assert_eq!(NavAidType(31).description(), "light vessel / LANBY / rigs");
        assert!(NavAidType(5).is_fixed());
        assert!(!NavAidType(28).is_fixed());
    }

    #[test]
    fn test_date_parts() {
        assert!(Month::is_correct(0));
        assert!(!Month::is_available(0));
        assert!(!Month::is_correct(13));
        assert!(Hour::is_correct(24));
        assert!(!Hour::is_correct(25));
        assert!(!Minute::is_correct(61));
        assert!(!UtcSecond::is_correct(63));
        assert!(!Year::is_correct(10000));
    }

    #[test]
    fn test_dimensions() {
        let dims = Dimensions {
            to_bow: 40,
            to_stern: 10,
            to_port: 4,
            to_starboard: 5,
        };
        assert_eq!(dims.length(), Some(50));
        assert_eq!(dims.beam(), Some(9));
        assert_eq!(Dimensions::default().length(), None);
    }
}
