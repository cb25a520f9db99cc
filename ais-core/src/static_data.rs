//! Decoders for static, voyage, and identity messages.
//!
//! - Type 5:  static and voyage related data (usually two sentences)
//! - Type 19: extended class B position report
//! - Type 21: aid-to-navigation report, with optional name extension
//! - Type 24: static data report, parts A and B

use crate::fields::{
    Angle12, Angle9, Day, Dimensions, Draught, Hour, Latitude, Longitude, Minute, Month,
    NavAidType, PositioningDevice, ShipType, SpeedOverGround, TimeStamp,
};
use crate::parser::{
    require_length, require_length_between, FieldReader, FieldSpec, MESSAGE_TYPE, MMSI,
    REPEAT_INDICATOR,
};
use crate::sixbit::{Sixbit, CHAR_BITS};
use crate::types::*;

/// Read bow, stern, port and starboard offsets.
fn read_dimensions(r: &FieldReader<'_>, fields: &[FieldSpec; 4]) -> Result<Dimensions> {
    Ok(Dimensions {
        to_bow: r.unsigned(&fields[0])? as u16,
        to_stern: r.unsigned(&fields[1])? as u16,
        to_port: r.unsigned(&fields[2])? as u8,
        to_starboard: r.unsigned(&fields[3])? as u8,
    })
}

// ---------------------------------------------------------------------------
// Static and voyage related data (type 5)
// ---------------------------------------------------------------------------

pub const STATIC_VOYAGE_BITS: usize = 424;

pub mod voyage {
    use crate::parser::FieldSpec;

    pub const AIS_VERSION: FieldSpec = FieldSpec::new("ais_version", 38, 40);
    pub const IMO: FieldSpec = FieldSpec::new("imo_number", 40, 70);
    pub const CALL_SIGN: FieldSpec = FieldSpec::new("call_sign", 70, 112);
    pub const NAME: FieldSpec = FieldSpec::new("name", 112, 232);
    pub const SHIP_TYPE: FieldSpec = FieldSpec::new("ship_type", 232, 240);
    pub const DIMENSIONS: [FieldSpec; 4] = [
        FieldSpec::new("to_bow", 240, 249),
        FieldSpec::new("to_stern", 249, 258),
        FieldSpec::new("to_port", 258, 264),
        FieldSpec::new("to_starboard", 264, 270),
    ];
    pub const DEVICE: FieldSpec = FieldSpec::new("positioning_device", 270, 274);
    pub const ETA_MONTH: FieldSpec = FieldSpec::new("eta_month", 274, 278);
    pub const ETA_DAY: FieldSpec = FieldSpec::new("eta_day", 278, 283);
    pub const ETA_HOUR: FieldSpec = FieldSpec::new("eta_hour", 283, 288);
    pub const ETA_MINUTE: FieldSpec = FieldSpec::new("eta_minute", 288, 294);
    pub const DRAUGHT: FieldSpec = FieldSpec::new("draught", 294, 302);
    pub const DESTINATION: FieldSpec = FieldSpec::new("destination", 302, 422);
    pub const DTE: FieldSpec = FieldSpec::new("dte", 422, 423);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 423, 424);
}

pub const STATIC_VOYAGE_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    voyage::AIS_VERSION,
    voyage::IMO,
    voyage::CALL_SIGN,
    voyage::NAME,
    voyage::SHIP_TYPE,
    voyage::DIMENSIONS[0],
    voyage::DIMENSIONS[1],
    voyage::DIMENSIONS[2],
    voyage::DIMENSIONS[3],
    voyage::DEVICE,
    voyage::ETA_MONTH,
    voyage::ETA_DAY,
    voyage::ETA_HOUR,
    voyage::ETA_MINUTE,
    voyage::DRAUGHT,
    voyage::DESTINATION,
    voyage::DTE,
    voyage::SPARE,
];

/// Decode type 5.
pub fn decode_static_voyage(bits: &Sixbit) -> Result<StaticVoyageData> {
    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[STATIC_VOYAGE_BITS])?;
    let header = r.header()?;

    let imo = r.unsigned(&voyage::IMO)? as u32;

    Ok(StaticVoyageData {
        header,
        ais_version: r.unsigned(&voyage::AIS_VERSION)? as u8,
        imo_number: (imo != 0).then_some(imo),
        call_sign: r.text(&voyage::CALL_SIGN)?,
        name: r.text(&voyage::NAME)?,
        ship_type: r.code::<ShipType>(&voyage::SHIP_TYPE)?,
        dimensions: read_dimensions(&r, &voyage::DIMENSIONS)?,
        positioning_device: r.code::<PositioningDevice>(&voyage::DEVICE)?,
        eta: Eta {
            month: r.value::<Month>(&voyage::ETA_MONTH)?,
            day: r.value::<Day>(&voyage::ETA_DAY)?,
            hour: r.value::<Hour>(&voyage::ETA_HOUR)?,
            minute: r.value::<Minute>(&voyage::ETA_MINUTE)?,
        },
        draught: r.value::<Draught>(&voyage::DRAUGHT)?,
        destination: r.text(&voyage::DESTINATION)?,
        dte: r.flag(&voyage::DTE)?,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Extended class B position report (type 19)
// ---------------------------------------------------------------------------

pub const EXTENDED_CLASS_B_BITS: usize = 312;

pub mod extended_class_b {
    use crate::parser::FieldSpec;

    pub const RESERVED: FieldSpec = FieldSpec::new("reserved", 38, 46);
    pub const SPEED: FieldSpec = FieldSpec::new("speed_over_ground", 46, 56);
    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 56, 57);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 57, 85);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 85, 112);
    pub const COURSE: FieldSpec = FieldSpec::new("course_over_ground", 112, 124);
    pub const HEADING: FieldSpec = FieldSpec::new("true_heading", 124, 133);
    pub const TIME_STAMP: FieldSpec = FieldSpec::new("time_stamp", 133, 139);
    pub const REGIONAL: FieldSpec = FieldSpec::new("regional", 139, 143);
    pub const NAME: FieldSpec = FieldSpec::new("name", 143, 263);
    pub const SHIP_TYPE: FieldSpec = FieldSpec::new("ship_type", 263, 271);
    pub const DIMENSIONS: [FieldSpec; 4] = [
        FieldSpec::new("to_bow", 271, 280),
        FieldSpec::new("to_stern", 280, 289),
        FieldSpec::new("to_port", 289, 295),
        FieldSpec::new("to_starboard", 295, 301),
    ];
    pub const DEVICE: FieldSpec = FieldSpec::new("positioning_device", 301, 305);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 305, 306);
    pub const DTE: FieldSpec = FieldSpec::new("dte", 306, 307);
    pub const ASSIGNED: FieldSpec = FieldSpec::new("assigned", 307, 308);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 308, 312);
}

pub const EXTENDED_CLASS_B_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    extended_class_b::RESERVED,
    extended_class_b::SPEED,
    extended_class_b::ACCURACY,
    extended_class_b::LONGITUDE,
    extended_class_b::LATITUDE,
    extended_class_b::COURSE,
    extended_class_b::HEADING,
    extended_class_b::TIME_STAMP,
    extended_class_b::REGIONAL,
    extended_class_b::NAME,
    extended_class_b::SHIP_TYPE,
    extended_class_b::DIMENSIONS[0],
    extended_class_b::DIMENSIONS[1],
    extended_class_b::DIMENSIONS[2],
    extended_class_b::DIMENSIONS[3],
    extended_class_b::DEVICE,
    extended_class_b::RAIM,
    extended_class_b::DTE,
    extended_class_b::ASSIGNED,
    extended_class_b::SPARE,
];

/// Decode type 19.
pub fn decode_extended_class_b(bits: &Sixbit) -> Result<ExtendedClassBReport> {
    use extended_class_b as f;

    let mut r = FieldReader::new(bits);
    require_length(bits, r.message_type()?, &[EXTENDED_CLASS_B_BITS])?;
    let header = r.header()?;

    Ok(ExtendedClassBReport {
        header,
        speed_over_ground: r.value::<SpeedOverGround>(&f::SPEED)?,
        position_accuracy: r.flag(&f::ACCURACY)?,
        longitude: r.value::<Longitude>(&f::LONGITUDE)?,
        latitude: r.value::<Latitude>(&f::LATITUDE)?,
        course_over_ground: r.value::<Angle12>(&f::COURSE)?,
        true_heading: r.value::<Angle9>(&f::HEADING)?,
        time_stamp: r.code::<TimeStamp>(&f::TIME_STAMP)?,
        regional: r.unsigned(&f::REGIONAL)? as u8,
        name: r.text(&f::NAME)?,
        ship_type: r.code::<ShipType>(&f::SHIP_TYPE)?,
        dimensions: read_dimensions(&r, &f::DIMENSIONS)?,
        positioning_device: r.code::<PositioningDevice>(&f::DEVICE)?,
        raim: r.flag(&f::RAIM)?,
        dte: r.flag(&f::DTE)?,
        assigned: r.flag(&f::ASSIGNED)?,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Aid-to-navigation report (type 21)
// ---------------------------------------------------------------------------

/// Length without a name extension.
pub const AID_TO_NAVIGATION_MIN_BITS: usize = 272;

/// Length with the longest name extension (14 characters).
pub const AID_TO_NAVIGATION_MAX_BITS: usize = 360;

pub mod aid {
    use crate::parser::FieldSpec;

    pub const AID_TYPE: FieldSpec = FieldSpec::new("aid_type", 38, 43);
    pub const NAME: FieldSpec = FieldSpec::new("name", 43, 163);
    pub const ACCURACY: FieldSpec = FieldSpec::new("position_accuracy", 163, 164);
    pub const LONGITUDE: FieldSpec = FieldSpec::new("longitude", 164, 192);
    pub const LATITUDE: FieldSpec = FieldSpec::new("latitude", 192, 219);
    pub const DIMENSIONS: [FieldSpec; 4] = [
        FieldSpec::new("to_bow", 219, 228),
        FieldSpec::new("to_stern", 228, 237),
        FieldSpec::new("to_port", 237, 243),
        FieldSpec::new("to_starboard", 243, 249),
    ];
    pub const DEVICE: FieldSpec = FieldSpec::new("positioning_device", 249, 253);
    pub const TIME_STAMP: FieldSpec = FieldSpec::new("time_stamp", 253, 259);
    pub const OFF_POSITION: FieldSpec = FieldSpec::new("off_position", 259, 260);
    pub const REGIONAL: FieldSpec = FieldSpec::new("regional", 260, 268);
    pub const RAIM: FieldSpec = FieldSpec::new("raim", 268, 269);
    pub const VIRTUAL_AID: FieldSpec = FieldSpec::new("virtual_aid", 269, 270);
    pub const ASSIGNED: FieldSpec = FieldSpec::new("assigned", 270, 271);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 271, 272);
}

pub const AID_TO_NAVIGATION_FIELDS: &[FieldSpec] = &[
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    aid::AID_TYPE,
    aid::NAME,
    aid::ACCURACY,
    aid::LONGITUDE,
    aid::LATITUDE,
    aid::DIMENSIONS[0],
    aid::DIMENSIONS[1],
    aid::DIMENSIONS[2],
    aid::DIMENSIONS[3],
    aid::DEVICE,
    aid::TIME_STAMP,
    aid::OFF_POSITION,
    aid::REGIONAL,
    aid::RAIM,
    aid::VIRTUAL_AID,
    aid::ASSIGNED,
    aid::SPARE,
];

/// Decode type 21.
///
/// The name extension is read in whole 6-bit characters after bit 272;
/// leftover bits that do not fill a character are ignored.
pub fn decode_aid_to_navigation(bits: &Sixbit) -> Result<AidToNavigationReport> {
    let mut r = FieldReader::new(bits);
    require_length_between(
        bits,
        r.message_type()?,
        AID_TO_NAVIGATION_MIN_BITS,
        AID_TO_NAVIGATION_MAX_BITS,
    )?;
    let header = r.header()?;

    let extension_chars = (bits.length() - AID_TO_NAVIGATION_MIN_BITS) / CHAR_BITS;
    let extension = FieldSpec::new(
        "name_extension",
        AID_TO_NAVIGATION_MIN_BITS,
        AID_TO_NAVIGATION_MIN_BITS + extension_chars * CHAR_BITS,
    );

    Ok(AidToNavigationReport {
        header,
        aid_type: r.code::<NavAidType>(&aid::AID_TYPE)?,
        name: r.text(&aid::NAME)?,
        position_accuracy: r.flag(&aid::ACCURACY)?,
        longitude: r.value::<Longitude>(&aid::LONGITUDE)?,
        latitude: r.value::<Latitude>(&aid::LATITUDE)?,
        dimensions: read_dimensions(&r, &aid::DIMENSIONS)?,
        positioning_device: r.code::<PositioningDevice>(&aid::DEVICE)?,
        time_stamp: r.code::<TimeStamp>(&aid::TIME_STAMP)?,
        off_position: r.flag(&aid::OFF_POSITION)?,
        regional: r.unsigned(&aid::REGIONAL)? as u8,
        raim: r.flag(&aid::RAIM)?,
        virtual_aid: r.flag(&aid::VIRTUAL_AID)?,
        assigned: r.flag(&aid::ASSIGNED)?,
        name_extension: r.text(&extension)?,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Static data report (type 24)
// ---------------------------------------------------------------------------

/// Part A length; some transmitters pad it to a full slot.
pub const STATIC_DATA_A_BITS: &[usize] = &[160, 168];

pub const STATIC_DATA_B_BITS: &[usize] = &[168];

/// Bounds checked before the part number is known.
pub const STATIC_DATA_MIN_BITS: usize = 160;
pub const STATIC_DATA_MAX_BITS: usize = 168;

pub mod static_report {
    use crate::parser::FieldSpec;

    pub const PART_NUMBER: FieldSpec = FieldSpec::new("part_number", 38, 40);

    pub const NAME: FieldSpec = FieldSpec::new("name", 40, 160);

    pub const SHIP_TYPE: FieldSpec = FieldSpec::new("ship_type", 40, 48);
    pub const VENDOR_ID: FieldSpec = FieldSpec::new("vendor_id", 48, 66);
    pub const UNIT_MODEL: FieldSpec = FieldSpec::new("unit_model", 66, 70);
    pub const SERIAL_NUMBER: FieldSpec = FieldSpec::new("serial_number", 70, 90);
    pub const CALL_SIGN: FieldSpec = FieldSpec::new("call_sign", 90, 132);
    pub const DIMENSIONS: [FieldSpec; 4] = [
        FieldSpec::new("to_bow", 132, 141),
        FieldSpec::new("to_stern", 141, 150),
        FieldSpec::new("to_port", 150, 156),
        FieldSpec::new("to_starboard", 156, 162),
    ];
    /// Overlays the dimensions for auxiliary craft.
    pub const MOTHERSHIP_MMSI: FieldSpec = FieldSpec::new("mothership_mmsi", 132, 162);
    pub const SPARE: FieldSpec = FieldSpec::new("spare", 162, 168);
}

/// Auxiliary craft carry MMSIs of the form 98xxxxxxx.
pub fn is_auxiliary_craft(mmsi: u32) -> bool {
    mmsi / 10_000_000 == 98
}

/// Decode type 24.
pub fn decode_static_data(bits: &Sixbit) -> Result<StaticDataReport> {
    use static_report as f;

    let mut r = FieldReader::new(bits);
    let message_type = r.message_type()?;
    require_length_between(bits, message_type, STATIC_DATA_MIN_BITS, STATIC_DATA_MAX_BITS)?;
    let header = r.header()?;
    let part_number = r.unsigned(&f::PART_NUMBER)? as u8;

    let part = match part_number {
        0 => {
            require_length(bits, header.message_type, STATIC_DATA_A_BITS)?;
            StaticDataPart::A {
                name: r.text(&f::NAME)?,
            }
        }
        1 => {
            require_length(bits, header.message_type, STATIC_DATA_B_BITS)?;
            let auxiliary = is_auxiliary_craft(header.mmsi);
            StaticDataPart::B(StaticDataPartB {
                ship_type: r.code::<ShipType>(&f::SHIP_TYPE)?,
                vendor_id: r.text(&f::VENDOR_ID)?,
                unit_model: r.unsigned(&f::UNIT_MODEL)? as u8,
                serial_number: r.unsigned(&f::SERIAL_NUMBER)? as u32,
                call_sign: r.text(&f::CALL_SIGN)?,
                dimensions: if auxiliary {
                    None
                } else {
                    Some(read_dimensions(&r, &f::DIMENSIONS)?)
                },
                mothership_mmsi: if auxiliary {
                    Some(r.unsigned(&f::MOTHERSHIP_MMSI)? as u32)
                } else {
                    None
                },
            })
        }
        other => {
            r.violation(&f::PART_NUMBER, other as i64, "0-1");
            StaticDataPart::Unknown(other)
        }
    };

    Ok(StaticDataReport {
        header,
        part,
        violations: r.finish(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MessageParser;
    use crate::test_util::PayloadBuilder;

    fn sixbit(payload: &str, fill: u8) -> Sixbit {
        Sixbit::new(payload, fill).expect("valid payload")
    }

    fn assert_contiguous(fields: &[FieldSpec], total: usize) {
        let mut pos = 0;
        for f in fields {
            assert_eq!(f.start, pos, "gap or overlap before {}", f.name);
            pos = f.end;
        }
        assert_eq!(pos, total);
    }

    #[test]
    fn test_layouts_contiguous() {
        assert_contiguous(STATIC_VOYAGE_FIELDS, STATIC_VOYAGE_BITS);
        assert_contiguous(EXTENDED_CLASS_B_FIELDS, EXTENDED_CLASS_B_BITS);
        assert_contiguous(AID_TO_NAVIGATION_FIELDS, AID_TO_NAVIGATION_MIN_BITS);
    }

    // -- Type 5 --

    fn type_5() -> Sixbit {
        let mut parser = MessageParser::with_fragment_count(2);
        parser
            .append("53nFBv01SJ<thHp6220H4heHTf2222222222221?50:454o<`9QSlUDp", 1, 0)
            .unwrap();
        parser.append("888888888888880", 2, 2).unwrap();
        parser.into_sixbit().unwrap()
    }

    #[test]
    fn test_decode_static_voyage() {
        let msg = decode_static_voyage(&type_5()).unwrap();
        assert_eq!(msg.header.message_type, 5);
        assert_eq!(msg.header.mmsi, 258315000);
        assert_eq!(msg.ais_version, 0);
        assert_eq!(msg.imo_number, Some(6514895));
        assert_eq!(msg.call_sign, "LFNA   ");
        assert_eq!(msg.name.trim_end(), "FALKVIK");
        assert_eq!(msg.ship_type, ShipType(79));
        assert_eq!(msg.dimensions.length(), Some(50));
        assert_eq!(msg.dimensions.beam(), Some(9));
        assert_eq!(msg.positioning_device, PositioningDevice::Gps);
        assert_eq!(msg.eta.month, Some(3));
        assert_eq!(msg.eta.day, Some(14));
        assert_eq!(msg.eta.hour, Some(12));
        assert_eq!(msg.eta.minute, Some(40));
        assert_eq!(msg.draught, Some(3.8));
        assert_eq!(msg.destination.trim_end(), "FORUS");
        assert!(!msg.dte);
        assert!(msg.violations.is_empty());
    }

    #[test]
    fn test_static_voyage_first_fragment_only() {
        let bits = sixbit("53nFBv01SJ<thHp6220H4heHTf2222222222221?50:454o<`9QSlUDp", 0);
        let err = decode_static_voyage(&bits).unwrap_err();
        assert!(matches!(
            err,
            AisError::InvalidMessageLength {
                message_type: 5,
                actual: 336,
                ..
            }
        ));
    }

    // -- Type 19 --

    #[test]
    fn test_decode_extended_class_b() {
        let bits = sixbit("C5N3SRgPEnJGEBT>NhWAwwo862PaLELTBJ:V00000000S0D:R220", 0);
        let msg = decode_extended_class_b(&bits).unwrap();
        assert_eq!(msg.header.message_type, 19);
        assert_eq!(msg.header.mmsi, 367059850);
        assert_eq!(msg.speed_over_ground, Some(8.7));
        assert!((msg.longitude.unwrap() + 88.810391).abs() < 1e-5);
        assert!((msg.latitude.unwrap() - 29.543695).abs() < 1e-5);
        assert_eq!(msg.course_over_ground, Some(335.9));
        assert_eq!(msg.true_heading, None);
        assert_eq!(msg.time_stamp, TimeStamp::Second(46));
        assert_eq!(msg.name, "CAPT.J.RIMES");
        assert_eq!(msg.ship_type, ShipType(70));
        assert_eq!(msg.dimensions.to_bow, 5);
        assert_eq!(msg.dimensions.to_stern, 21);
        assert_eq!(msg.positioning_device, PositioningDevice::Gps);
    }

    // -- Type 21 --

    #[test]
    fn test_decode_aid_to_navigation() {
        let bits = sixbit("E>jCfrv2`0c2h0W:0a2ah@@@@@@004WD>;2<H50hppN000", 4);
        let msg = decode_aid_to_navigation(&bits).unwrap();
        assert_eq!(msg.header.message_type, 21);
        assert_eq!(msg.header.mmsi, 992276203);
        assert_eq!(msg.aid_type, NavAidType(28));
        assert_eq!(msg.name.trim_end(), "EPAVE ANTARES");
        assert!((msg.latitude.unwrap() - 49.536165).abs() < 1e-5);
        assert_eq!(msg.positioning_device, PositioningDevice::Undefined);
        assert_eq!(msg.time_stamp, TimeStamp::NotAvailable);
        assert_eq!(msg.name_extension, "");
        assert_eq!(msg.full_name(), "EPAVE ANTARES");
    }

    fn aid_payload(extension: &str, extension_bits: usize) -> PayloadBuilder {
        PayloadBuilder::header(21, 993_456_789)
            .unsigned(5, 1)
            .text(120, "NORTH PIER LIGHT")
            .flag(true)
            .signed(28, 600_000)
            .signed(27, 600_000)
            .unsigned(9, 0)
            .unsigned(9, 0)
            .unsigned(6, 0)
            .unsigned(6, 0)
            .unsigned(4, 7)
            .unsigned(6, 60)
            .flag(false)
            .unsigned(8, 0)
            .flag(false)
            .flag(true)
            .flag(false)
            .flag(false)
            .text(extension_bits, extension)
    }

    #[test]
    fn test_aid_name_extension() {
        let builder = aid_payload("EXT", 18);
        let msg = decode_aid_to_navigation(&builder.sixbit()).unwrap();
        assert_eq!(msg.name, "NORTH PIER LIGHT");
        assert_eq!(msg.name_extension, "EXT");
        assert_eq!(msg.full_name(), "NORTH PIER LIGHTEXT");
        assert!(msg.virtual_aid);
        assert_eq!(msg.aid_type.description(), "reference point");
    }

    #[test]
    fn test_aid_name_extension_partial_character_ignored() {
        // 4 leftover bits do not make a character
        let builder = aid_payload("AB", 12).unsigned(4, 0);
        let msg = decode_aid_to_navigation(&builder.sixbit()).unwrap();
        assert_eq!(msg.name_extension, "AB");
    }

    #[test]
    fn test_aid_too_short() {
        let builder = PayloadBuilder::header(21, 1).unsigned(200, 0);
        let err = decode_aid_to_navigation(&builder.sixbit()).unwrap_err();
        assert!(matches!(
            err,
            AisError::InvalidMessageLength {
                message_type: 21,
                actual: 238,
                ..
            }
        ));
    }

    // -- Type 24 --

    #[test]
    fn test_decode_static_data_part_a() {
        let msg = decode_static_data(&sixbit("H42O55i18tMET00000000000000", 2)).unwrap();
        assert_eq!(msg.header.mmsi, 271041815);
        assert_eq!(
            msg.part,
            StaticDataPart::A {
                name: "PROGUY".into()
            }
        );
        assert!(msg.violations.is_empty());
    }

    #[test]
    fn test_decode_static_data_part_b() {
        let msg = decode_static_data(&sixbit("H42O55lti4hhhilD3nink000?050", 0)).unwrap();
        let StaticDataPart::B(b) = msg.part else {
            panic!("expected part B, got {:?}", msg.part);
        };
        assert_eq!(b.ship_type, ShipType(60));
        assert_eq!(b.vendor_id, "1D0");
        assert_eq!(b.unit_model, 12);
        assert_eq!(b.serial_number, 199796);
        assert_eq!(b.call_sign, "TC6163");
        let dims = b.dimensions.unwrap();
        assert_eq!(dims.to_bow, 0);
        assert_eq!(dims.to_stern, 15);
        assert_eq!(dims.to_starboard, 5);
        assert_eq!(b.mothership_mmsi, None);
    }

    #[test]
    fn test_static_data_auxiliary_craft() {
        let builder = PayloadBuilder::header(24, 981_234_567)
            .unsigned(2, 1)
            .unsigned(8, 31)
            .text(18, "ABC")
            .unsigned(4, 1)
            .unsigned(20, 5)
            .text(42, "AUX")
            .unsigned(30, 244_670_316)
            .unsigned(6, 0);
        let msg = decode_static_data(&builder.sixbit()).unwrap();
        let StaticDataPart::B(b) = msg.part else {
            panic!("expected part B");
        };
        assert_eq!(b.dimensions, None);
        assert_eq!(b.mothership_mmsi, Some(244_670_316));
    }

    #[test]
    fn test_static_data_unknown_part() {
        let builder = PayloadBuilder::header(24, 1).unsigned(2, 3).unsigned(128, 0);
        let msg = decode_static_data(&builder.sixbit()).unwrap();
        assert_eq!(msg.part, StaticDataPart::Unknown(3));
        assert_eq!(msg.violations.len(), 1);
        assert_eq!(msg.violations[0].location, "part_number");
    }

    #[test]
    fn test_static_data_part_a_wrong_length() {
        let builder = PayloadBuilder::header(24, 1).unsigned(2, 0).unsigned(60, 0);
        assert!(matches!(
            decode_static_data(&builder.sixbit()),
            Err(AisError::InvalidMessageLength { .. })
        ));
    }
}
