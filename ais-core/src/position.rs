//! Decoders for position-bearing messages.
//!
//! - Types 1, 2, 3: class A position report
//! - Types 4, 11:   base station report / UTC and date response
//! - Type 9:        standard SAR aircraft position report
//! - Type 18:       standard class B position report
//! - Type 27:       long range AIS broadcast
//!
//! Every decoder checks the usable bit length first, then reads each field
//! through its codec. Fields that break the rules are recorded as
//! violations; the message is still returned.

use crate::fields::{
    Angle12, Angle9, Day, Hour, Latitude, LowResLatitude, LowResLongitude, LowResSpeed,
    Longitude, ManeuverIndicator, Minute, Month, NavigationalStatus, PositioningDevice,
    RateOfTurn, SarAltitude, SarSpeed, SpeedOverGround, TimeStamp, UtcSecond, Year,
};
use crate::parser::{require_length, FieldReader, FieldSpec, MESSAGE_TYPE, MMSI, REPEAT_INDICATOR};
use crate::sixbit::Sixbit;
use crate::types::*;

// ---------------------------------------------------------------------------
// Class A position report (types 1, 2, 3)
// ---------------------------------------------------------------------------

pub const POSITION_REPORT_BITS: usize = 168;

pub mod class_a {
    use crate::parser::FieldSpec;

    pub const NAV_STATUS: FieldSpec = FieldSpec::new("navigational_status", 38, 42);
    pub const RATE_OF_TURN: FieldSpec = FieldSpec::new("rate_of_turn", 42, 50);
    pub const SPEED: FieldSpec = FieldSpec::new("speed_over_ground", 50, 60);
    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 60, 61);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 61, 89);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 89, 116);
    pub const COURSE: FieldSpec = FieldSpec::new("course_over_ground", 116, 128);
    pub const HEADING: FieldSpec = FieldSpec::new("true_heading", 128, 137);
    pub const TIME_STAMP: FieldSpec = FieldSpec::new("time_stamp", 137, 143);
    pub const MANEUVER: FieldSpec = FieldSpec::new("maneuver", 143, 145);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 145, 148);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 148, 149);
    pub const RADIO: FieldSpec = FieldSpec::new("radio_status", 149, 168);
}

pub const POSITION_REPORT_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    class_a::NAV_STATUS,
    class_a::RATE_OF_TURN,
    class_a::SPEED,
    class_a::ACCURACY,
    class_a::LONGITUDE,
    class_a::LATITUDE,
    class_a::COURSE,
    class_a::HEADING,
    class_a::TIME_STAMP,
    class_a::MANEUVER,
    class_a::SPARE,
    class_a::RAIM,
    class_a::RADIO,
];

/// Decode types 1, 2 and 3.
pub fn decode_position_report(bits: &Sixbit) -> Result<PositionReport> {
    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[POSITION_REPORT_BITS])?;
    let header = r.header()?;

    Ok(PositionReport {
        header,
        navigational_status: r.code::<NavigationalStatus>(&class_a::NAV_STATUS)?,
        rate_of_turn: r.code::<RateOfTurn>(&class_a::RATE_OF_TURN)?,
        speed_over_ground: r.value::<SpeedOverGround>(&class_a::SPEED)?,
        position_accuracy: r.flag(&class_a::ACCURACY)?,
        longitude: r.value::<Longitude>(&class_a::LONGITUDE)?,
        latitude: r.value::<Latitude>(&class_a::LATITUDE)?,
        course_over_ground: r.value::<Angle12>(&class_a::COURSE)?,
        true_heading: r.value::<Angle9>(&class_a::HEADING)?,
        time_stamp: r.code::<TimeStamp>(&class_a::TIME_STAMP)?,
        maneuver: r.code::<ManeuverIndicator>(&class_a::MANEUVER)?,
        raim: r.flag(&class_a::RAIM)?,
        radio_status: r.unsigned(&class_a::RADIO)? as u32,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Base station report / UTC and date response (types 4, 11)
// ---------------------------------------------------------------------------

pub const BASE_STATION_BITS: usize = 168;

pub mod base_station {
    use crate::parser::FieldSpec;

    pub const YEAR: FieldSpec = FieldSpec::new("year", 38, 52);
    pub const MONTH: FieldSpec = FieldSpec::new("month", 52, 56);
    pub const DAY: FieldSpec = FieldSpec::new("day", 56, 61);
    pub const HOUR: FieldSpec = FieldSpec::new("hour", 61, 66);
    pub const MINUTE: FieldSpec = FieldSpec::new("minute", 66, 72);
    pub const SECOND: FieldSpec = FieldSpec::new("second", 72, 78);
    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 78, 79);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 79, 107);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 107, 134);
    pub const DEVICE: FieldSpec = FieldSpec::new("positioning_device", 134, 138);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 138, 148);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 148, 149);
    pub const RADIO: FieldSpec = FieldSpec::new("radio_status", 149, 168);
}

pub const BASE_STATION_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    base_station::YEAR,
    base_station::MONTH,
    base_station::DAY,
    base_station::HOUR,
    base_station::MINUTE,
    base_station::SECOND,
    base_station::ACCURACY,
    base_station::LONGITUDE,
    base_station::LATITUDE,
    base_station::DEVICE,
    base_station::SPARE,
    base_station::RAIM,
    base_station::RADIO,
];

/// Decode types 4 and 11.
pub fn decode_base_station(bits: &Sixbit) -> Result<BaseStationReport> {
    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[BASE_STATION_BITS])?;
    let header = r.header()?;

    Ok(BaseStationReport {
        header,
        year: r.value::<Year>(&base_station::YEAR)?,
        month: r.value::<Month>(&base_station::MONTH)?,
        day: r.value::<Day>(&base_station::DAY)?,
        hour: r.value::<Hour>(&base_station::HOUR)?,
        minute: r.value::<Minute>(&base_station::MINUTE)?,
        second: r.value::<UtcSecond>(&base_station::SECOND)?,
        position_accuracy: r.flag(&base_station::ACCURACY)?,
        longitude: r.value::<Longitude>(&base_station::LONGITUDE)?,
        latitude: r.value::<Latitude>(&base_station::LATITUDE)?,
        positioning_device: r.code::<PositioningDevice>(&base_station::DEVICE)?,
        raim: r.flag(&base_station::RAIM)?,
        radio_status: r.unsigned(&base_station::RADIO)? as u32,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// SAR aircraft position report (type 9)
// ---------------------------------------------------------------------------

pub const SAR_AIRCRAFT_BITS: usize = 168;

pub mod sar {
    use crate::parser::FieldSpec;

    pub const ALTITUDE: FieldSpec = FieldSpec::new("altitude", 38, 50);
    pub const SPEED: FieldSpec = FieldSpec::new("speed_over_ground", 50, 60);
    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 60, 61);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 61, 89);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 89, 116);
    pub const COURSE: FieldSpec = FieldSpec::new("course_over_ground", 116, 128);
    pub const TIME_STAMP: FieldSpec = FieldSpec::new("time_stamp", 128, 134);
    pub const REGIONAL: FieldSpec = FieldSpec::new("regional", 134, 142);
    pub const DTE: FieldSpec = FieldSpec::new("dte", 142, 143);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 143, 146);
    pub const ASSIGNED: FieldSpec = FieldSpec::new("assigned", 146, 147);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 147, 148);
    pub const RADIO: FieldSpec = FieldSpec::new("radio_status", 148, 168);
}

pub const SAR_AIRCRAFT_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    sar::ALTITUDE,
    sar::SPEED,
    sar::ACCURACY,
    sar::LONGITUDE,
    sar::LATITUDE,
    sar::COURSE,
    sar::TIME_STAMP,
    sar::REGIONAL,
    sar::DTE,
    sar::SPARE,
    sar::ASSIGNED,
    sar::RAIM,
    sar::RADIO,
];

/// Decode type 9.
pub fn decode_sar_aircraft(bits: &Sixbit) -> Result<SarAircraftReport> {
    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[SAR_AIRCRAFT_BITS])?;
    let header = r.header()?;

    Ok(SarAircraftReport {
        header,
        altitude: r.value::<SarAltitude>(&sar::ALTITUDE)?,
        speed_over_ground: r.value::<SarSpeed>(&sar::SPEED)?,
        position_accuracy: r.flag(&sar::ACCURACY)?,
        longitude: r.value::<Longitude>(&sar::LONGITUDE)?,
        latitude: r.value::<Latitude>(&sar::LATITUDE)?,
        course_over_ground: r.value::<Angle12>(&sar::COURSE)?,
        time_stamp: r.code::<TimeStamp>(&sar::TIME_STAMP)?,
        regional: r.unsigned(&sar::REGIONAL)? as u8,
        dte: r.flag(&sar::DTE)?,
        assigned: r.flag(&sar::ASSIGNED)?,
        raim: r.flag(&sar::RAIM)?,
        radio_status: r.unsigned(&sar::RADIO)? as u32,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Class B position report (type 18)
// ---------------------------------------------------------------------------

pub const CLASS_B_BITS: usize = 168;

pub mod class_b {
    use crate::parser::FieldSpec;

    pub const RESERVED: FieldSpec = FieldSpec::new("reserved", 38, 46);
    pub const SPEED: FieldSpec = FieldSpec::new("speed_over_ground", 46, 56);
    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 56, 57);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 57, 85);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 85, 112);
    pub const COURSE: FieldSpec = FieldSpec::new("course_over_ground", 112, 124);
    pub const HEADING: FieldSpec = FieldSpec::new("true_heading", 124, 133);
    pub const TIME_STAMP: FieldSpec = FieldSpec::new("time_stamp", 133, 139);
    pub const REGIONAL: FieldSpec = FieldSpec::new("regional", 139, 141);
    pub const CS_UNIT: FieldSpec = FieldSpec::new("cs_unit", 141, 142);
    pub const DISPLAY: FieldSpec = FieldSpec::new("display", 142, 143);
    pub const DSC: FieldSpec = FieldSpec::new("dsc", 143, 144);
    pub const BAND: FieldSpec = FieldSpec::new("band", 144, 145);
    pub const MESSAGE_22: FieldSpec = FieldSpec::new("message_22", 145, 146);
    pub const ASSIGNED: FieldSpec = FieldSpec::new("assigned", 146, 147);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 147, 148);
    pub const RADIO: FieldSpec = FieldSpec::new("radio_status", 148, 168);
}

pub const CLASS_B_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    class_b::RESERVED,
    class_b::SPEED,
    class_b::ACCURACY,
    class_b::LONGITUDE,
    class_b::LATITUDE,
    class_b::COURSE,
    class_b::HEADING,
    class_b::TIME_STAMP,
    class_b::REGIONAL,
    class_b::CS_UNIT,
    class_b::DISPLAY,
    class_b::DSC,
    class_b::BAND,
    class_b::MESSAGE_22,
    class_b::ASSIGNED,
    class_b::RAIM,
    class_b::RADIO,
];

/// Decode type 18.
pub fn decode_class_b(bits: &Sixbit) -> Result<ClassBPositionReport> {
    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[CLASS_B_BITS])?;
    let header = r.header()?;

    Ok(ClassBPositionReport {
        header,
        speed_over_ground: r.value::<SpeedOverGround>(&class_b::SPEED)?,
        position_accuracy: r.flag(&class_b::ACCURACY)?,
        longitude: r.value::<Longitude>(&class_b::LONGITUDE)?,
        latitude: r.value::<Latitude>(&class_b::LATITUDE)?,
        course_over_ground: r.value::<Angle12>(&class_b::COURSE)?,
        true_heading: r.value::<Angle9>(&class_b::HEADING)?,
        time_stamp: r.code::<TimeStamp>(&class_b::TIME_STAMP)?,
        regional: r.unsigned(&class_b::REGIONAL)? as u8,
        cs_unit: r.flag(&class_b::CS_UNIT)?,
        display: r.flag(&class_b::DISPLAY)?,
        dsc: r.flag(&class_b::DSC)?,
        band: r.flag(&class_b::BAND)?,
        message_22: r.flag(&class_b::MESSAGE_22)?,
        assigned: r.flag(&class_b::ASSIGNED)?,
        raim: r.flag(&class_b::RAIM)?,
        radio_status: r.unsigned(&class_b::RADIO)? as u32,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Long range broadcast (type 27)
// ---------------------------------------------------------------------------

pub const LONG_RANGE_BITS: usize = 96;

pub mod long_range {
    use crate::parser::FieldSpec;

    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 38, 39);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 39, 40);
    pub const NAV_STATUS: FieldSpec = FieldSpec::new("navigational_status", 40, 44);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 44, 62);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 62, 79);
    pub const SPEED: FieldSpec = FieldSpec::new("speed_over_ground", 79, 85);
    pub const COURSE: FieldSpec = FieldSpec::new("course_over_ground", 85, 94);
    pub const GNSS: FieldSpec = FieldSpec::new("gnss_position_status", 94, 95);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 95, 96);
}

pub const LONG_RANGE_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    long_range::ACCURACY,
    long_range::RAIM,
    long_range::NAV_STATUS,
    long_range::LONGITUDE,
    long_range::LATITUDE,
    long_range::SPEED,
    long_range::COURSE,
    long_range::GNSS,
    long_range::SPARE,
];

/// Decode type 27.
pub fn decode_long_range(bits: &Sixbit) -> Result<LongRangeReport> {
    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[LONG_RANGE_BITS])?;
    let header = r.header()?;

    Ok(LongRangeReport {
        header,
        position_accuracy: r.flag(&long_range::ACCURACY)?,
        raim: r.flag(&long_range::RAIM)?,
        navigational_status: r.code::<NavigationalStatus>(&long_range::NAV_STATUS)?,
        longitude: r.value::<LowResLongitude>(&long_range::LONGITUDE)?,
        latitude: r.value::<LowResLatitude>(&long_range::LATITUDE)?,
        speed_over_ground: r.value::<LowResSpeed>(&long_range::SPEED)?,
        course_over_ground: r.value::<Angle9>(&long_range::COURSE)?,
        // 0 = current GNSS position, 1 = not GNSS position
        gnss_current: !r.flag(&long_range::GNSS)?,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
