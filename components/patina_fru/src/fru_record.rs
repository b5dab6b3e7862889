//! FRU Area and Record Types
//!
//! This module provides the caller-facing values that are registered in a
//! [`FruRecordStore`](crate::encoder::FruRecordStore) before encoding:
//!
//! - [`BoardInfoArea`] with its five type/length-prefixed [`FruField`]s
//! - [`DcLoadRecord`] and [`DcOutputRecord`] multi-records
//! - [`OemRecord`], usually built from the VITA 57.1 [`FmcOemData`] payload
//! - [`InternalUseArea`], an opaque blob
//!
//! # Type/Length Fields
//!
//! Every variable-length board info field is preceded by a type/length byte:
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! ┌───────┬───────────────────────┐
//! │ type  │  data length (0-63)   │
//! └───────┴───────────────────────┘
//! ```
//!
//! The type code is opaque to the encoder. [`FruField::text`] uses type 3 (8-bit ASCII +
//! Latin 1), which is what board EEPROM tooling emits for every field.
//!
//! # Example
//!
//! ```
//! use patina_fru::fru_record::{BoardInfoArea, DcLoadRecord, FmcOemData, OemRecord};
//!
//! let board = BoardInfoArea::new(12345678, "CERN", "ADC100M", "1234567890", "ADC100M", "abcde").unwrap();
//! assert_eq!(board.manufacturing_date(), 12345678 & 0xFF_FFFF);
//!
//! let vadj = DcLoadRecord::from_ratings(0, 2.5, 2.4, 2.6, 0.0, 0, 4000);
//! assert_eq!(vadj.nominal_voltage, 250);
//!
//! let mut fmc = FmcOemData::default();
//! fmc.set_signal_count(patina_fru::fru_record::FmcPort::P1, patina_fru::fru_record::FmcBank::A, 68);
//! let oem = OemRecord::from(fmc);
//! assert_eq!(oem.data[2], 68);
//! ```
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

extern crate alloc;
use alloc::vec::Vec;
use zerocopy::{IntoBytes, byteorder::little_endian::U16};
use zerocopy_derive::*;

use crate::{
    error::FruError,
    service::{
        DC_RECORD_LEN, FRU_FORMAT_VERSION, INTERNAL_USE_HEADER_SIZE, LANGUAGE_ENGLISH, OEM_PAYLOAD_LEN,
        OEM_RECORD_LEN, TYPE_CODE_ASCII_LATIN1, TYPELEN_MAX_DATA_LEN, VITA_MANUFACTURER_ID,
    },
};

/// A type/length-prefixed board info field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FruField {
    type_code: u8,
    data: Vec<u8>,
}

impl FruField {
    /// Creates a field with a caller-chosen type code.
    ///
    /// # Errors
    ///
    /// Returns `FruError::InvalidTypeCode` if `type_code` does not fit in 2 bits and
    /// `FruError::FieldTooLong` if `data` is longer than 63 bytes.
    pub fn new(type_code: u8, data: &[u8]) -> Result<Self, FruError> {
        if type_code > 0x03 {
            log::error!(target: "fru", "FRU field type code {:#04X} does not fit in 2 bits", type_code);
            return Err(FruError::InvalidTypeCode);
        }
        if data.len() > TYPELEN_MAX_DATA_LEN {
            log::error!(target: "fru", "FRU field of {} bytes exceeds {} bytes", data.len(), TYPELEN_MAX_DATA_LEN);
            return Err(FruError::FieldTooLong);
        }
        Ok(Self { type_code, data: data.to_vec() })
    }

    /// Creates an 8-bit ASCII + Latin 1 field.
    ///
    /// Each character is stored as one byte, so the 63 byte limit counts characters.
    ///
    /// # Errors
    ///
    /// Returns `FruError::InvalidFieldData` if `s` holds a character above U+00FF and
    /// `FruError::FieldTooLong` if it has more than 63 characters.
    pub fn text(s: &str) -> Result<Self, FruError> {
        let data = s
            .chars()
            .map(|c| {
                u8::try_from(c).map_err(|_| {
                    log::error!(target: "fru", "FRU text field character {:?} is not Latin-1", c);
                    FruError::InvalidFieldData
                })
            })
            .collect::<Result<Vec<u8>, FruError>>()?;
        Self::new(TYPE_CODE_ASCII_LATIN1, &data)
    }

    /// The type/length byte written before the field data
    pub fn typelen(&self) -> u8 {
        (self.type_code << 6) | self.data.len() as u8
    }

    /// Type code (high 2 bits of the type/length byte)
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Field data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the field data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field carries no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Board info area
///
/// The area length, end-of-fields marker, pad and checksum are not stored here; they are
/// computed when the area is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardInfoArea {
    /// Area format version
    pub format: u8,
    /// Language code
    pub language: u8,
    /// Manufacturing date/time, least significant byte first
    pub mfg_date: [u8; 3],
    /// Board manufacturer
    pub manufacturer: FruField,
    /// Board product name
    pub product_name: FruField,
    /// Board serial number
    pub serial_number: FruField,
    /// Board part number
    pub part_number: FruField,
    /// FRU file id
    pub fru_file_id: FruField,
}

impl Default for BoardInfoArea {
    fn default() -> Self {
        Self {
            format: FRU_FORMAT_VERSION,
            language: LANGUAGE_ENGLISH,
            mfg_date: [0; 3],
            manufacturer: FruField::default(),
            product_name: FruField::default(),
            serial_number: FruField::default(),
            part_number: FruField::default(),
            fru_file_id: FruField::default(),
        }
    }
}

impl BoardInfoArea {
    /// Creates an English board info area with text fields.
    ///
    /// # Arguments
    ///
    /// * `mfg_date` - manufacturing date/time, only the low 24 bits are kept
    /// * `manufacturer`, `product_name`, `serial_number`, `part_number`, `fru_file_id` - field text
    ///
    /// # Errors
    ///
    /// Returns `FruError::FieldTooLong` if any field is longer than 63 characters and
    /// `FruError::InvalidFieldData` if a field is not Latin-1 text.
    pub fn new(
        mfg_date: u32,
        manufacturer: &str,
        product_name: &str,
        serial_number: &str,
        part_number: &str,
        fru_file_id: &str,
    ) -> Result<Self, FruError> {
        let mut area = Self {
            manufacturer: FruField::text(manufacturer)?,
            product_name: FruField::text(product_name)?,
            serial_number: FruField::text(serial_number)?,
            part_number: FruField::text(part_number)?,
            fru_file_id: FruField::text(fru_file_id)?,
            ..Self::default()
        };
        area.set_manufacturing_date(mfg_date);
        Ok(area)
    }

    /// Stores the low 24 bits of `date`, least significant byte first.
    pub fn set_manufacturing_date(&mut self, date: u32) {
        let bytes = date.to_le_bytes();
        self.mfg_date = [bytes[0], bytes[1], bytes[2]];
    }

    /// The manufacturing date packed as `date0 | date1 << 8 | date2 << 16`
    pub fn manufacturing_date(&self) -> u32 {
        u32::from_le_bytes([self.mfg_date[0], self.mfg_date[1], self.mfg_date[2], 0])
    }

    /// The five variable-length fields in encoding order
    pub fn fields(&self) -> [&FruField; 5] {
        [&self.manufacturer, &self.product_name, &self.serial_number, &self.part_number, &self.fru_file_id]
    }
}

#[repr(C)]
#[derive(IntoBytes, Immutable, Unaligned)]
struct DcRecordWire {
    info: u8,
    values: [U16; 6],
}

impl DcRecordWire {
    fn to_bytes(info: u8, values: [u16; 6]) -> [u8; DC_RECORD_LEN] {
        let wire = Self { info, values: values.map(U16::new) };
        let mut bytes = [0u8; DC_RECORD_LEN];
        bytes.copy_from_slice(wire.as_bytes());
        bytes
    }
}

// Rounds to the nearest unit; negative and out-of-range values saturate.
fn scaled(value: f32, scale: f32) -> u16 {
    (value * scale + 0.5) as u16
}

/// DC load multi-record
///
/// Voltages are in 10 mV units, ripple in mV and currents in mA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DcLoadRecord {
    /// Voltage required / output number
    pub voltage_required: u8,
    /// Nominal voltage
    pub nominal_voltage: u16,
    /// Minimum specified voltage
    pub min_voltage: u16,
    /// Maximum specified voltage
    pub max_voltage: u16,
    /// Specified ripple and noise, peak to peak
    pub spec_ripple: u16,
    /// Minimum current load
    pub min_current: u16,
    /// Maximum current load
    pub max_current: u16,
}

impl DcLoadRecord {
    /// Creates a record from voltages in volts and currents in mA.
    pub fn from_ratings(
        record_number: u8,
        nominal_v: f32,
        min_v: f32,
        max_v: f32,
        ripple_v: f32,
        min_current_ma: u16,
        max_current_ma: u16,
    ) -> Self {
        Self {
            voltage_required: record_number,
            nominal_voltage: scaled(nominal_v, 100.0),
            min_voltage: scaled(min_v, 100.0),
            max_voltage: scaled(max_v, 100.0),
            spec_ripple: scaled(ripple_v, 1000.0),
            min_current: min_current_ma,
            max_current: max_current_ma,
        }
    }

    /// Serializes the 13-byte record payload.
    pub fn to_bytes(&self) -> [u8; DC_RECORD_LEN] {
        DcRecordWire::to_bytes(
            self.voltage_required,
            [
                self.nominal_voltage,
                self.min_voltage,
                self.max_voltage,
                self.spec_ripple,
                self.min_current,
                self.max_current,
            ],
        )
    }
}

/// DC output multi-record
///
/// Voltages are in 10 mV units, ripple in mV and currents in mA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DcOutputRecord {
    /// Output information / output number
    pub output_info: u8,
    /// Nominal voltage
    pub nominal_voltage: u16,
    /// Maximum negative voltage deviation
    pub max_neg_voltage_dev: u16,
    /// Maximum positive voltage deviation
    pub max_pos_voltage_dev: u16,
    /// Ripple and noise, peak to peak
    pub ripple: u16,
    /// Minimum current draw
    pub min_current_draw: u16,
    /// Maximum current draw
    pub max_current_draw: u16,
}

impl DcOutputRecord {
    /// Creates a record from voltages in volts and currents in mA.
    pub fn from_ratings(
        record_number: u8,
        nominal_v: f32,
        max_neg_dev_v: f32,
        max_pos_dev_v: f32,
        ripple_v: f32,
        min_current_ma: u16,
        max_current_ma: u16,
    ) -> Self {
        Self {
            output_info: record_number,
            nominal_voltage: scaled(nominal_v, 100.0),
            max_neg_voltage_dev: scaled(max_neg_dev_v, 100.0),
            max_pos_voltage_dev: scaled(max_pos_dev_v, 100.0),
            ripple: scaled(ripple_v, 1000.0),
            min_current_draw: min_current_ma,
            max_current_draw: max_current_ma,
        }
    }

    /// Serializes the 13-byte record payload.
    pub fn to_bytes(&self) -> [u8; DC_RECORD_LEN] {
        DcRecordWire::to_bytes(
            self.output_info,
            [
                self.nominal_voltage,
                self.max_neg_voltage_dev,
                self.max_pos_voltage_dev,
                self.ripple,
                self.min_current_draw,
                self.max_current_draw,
            ],
        )
    }
}

/// OEM multi-record
///
/// Only the vendor payload is caller-supplied. The manufacturer id is always
/// [`VITA_MANUFACTURER_ID`] and is prepended during serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OemRecord {
    /// Vendor payload
    pub data: [u8; OEM_PAYLOAD_LEN],
}

impl OemRecord {
    /// Creates an OEM record carrying `data`.
    pub fn new(data: [u8; OEM_PAYLOAD_LEN]) -> Self {
        Self { data }
    }

    /// Serializes the manufacturer id followed by the vendor payload.
    pub fn to_bytes(&self) -> [u8; OEM_RECORD_LEN] {
        let mut bytes = [0u8; OEM_RECORD_LEN];
        bytes[..3].copy_from_slice(&VITA_MANUFACTURER_ID);
        bytes[3..].copy_from_slice(&self.data);
        bytes
    }
}

/// FMC module width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FmcModuleSize {
    /// Single width
    Single = 0,
    /// Double width
    Double = 1,
}

/// FMC connector size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FmcConnectorSize {
    /// Low pin count
    Lpc = 0,
    /// High pin count
    Hpc = 1,
    /// Connector not fitted
    NotFitted = 3,
}

/// FMC clock direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FmcClockDirection {
    /// Mezzanine drives the clocks
    MezzanineToCarrier = 0,
    /// Carrier drives the clocks
    CarrierToMezzanine = 1,
}

/// FMC connector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmcPort {
    /// Primary connector
    P1,
    /// Secondary connector
    P2,
}

/// Signal bank of an FMC connector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmcBank {
    /// Bank A
    A,
    /// Bank B
    B,
}

/// VITA 57.1 FMC OEM payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FmcOemData {
    /// Subtype and version
    pub subtype_version: u8,
    /// Module size, connector sizes and clock direction
    pub other: u8,
    /// P1 bank A signal count
    pub p1_a_nsig: u8,
    /// P1 bank B signal count
    pub p1_b_nsig: u8,
    /// P2 bank A signal count
    pub p2_a_nsig: u8,
    /// P2 bank B signal count
    pub p2_b_nsig: u8,
    /// P1 GBT transceivers (high nibble), P2 GBT transceivers (low nibble)
    pub p1_p2_gbt_ntran: u8,
    /// Maximum clock for TCK in MHz
    pub max_clock: u8,
}

impl FmcOemData {
    fn set_other_bits(&mut self, mask: u8, shift: u8, value: u8) {
        self.other = (self.other & !mask) | ((value << shift) & mask);
    }

    /// Sets the module width (bits 7:6).
    pub fn set_module_size(&mut self, size: FmcModuleSize) {
        self.set_other_bits(0xC0, 6, size as u8);
    }

    /// Sets the size of a connector (P1: bits 5:4, P2: bits 3:2).
    pub fn set_connector_size(&mut self, port: FmcPort, size: FmcConnectorSize) {
        match port {
            FmcPort::P1 => self.set_other_bits(0x30, 4, size as u8),
            FmcPort::P2 => self.set_other_bits(0x0C, 2, size as u8),
        }
    }

    /// Sets the clock direction (bit 1).
    pub fn set_clock_direction(&mut self, direction: FmcClockDirection) {
        self.set_other_bits(0x02, 1, direction as u8);
    }

    /// Sets the number of signals wired on a connector bank.
    pub fn set_signal_count(&mut self, port: FmcPort, bank: FmcBank, count: u8) {
        match (port, bank) {
            (FmcPort::P1, FmcBank::A) => self.p1_a_nsig = count,
            (FmcPort::P1, FmcBank::B) => self.p1_b_nsig = count,
            (FmcPort::P2, FmcBank::A) => self.p2_a_nsig = count,
            (FmcPort::P2, FmcBank::B) => self.p2_b_nsig = count,
        }
    }

    /// Sets the number of GBT transceivers on a connector (0-15).
    pub fn set_gbt_transceivers(&mut self, port: FmcPort, count: u8) {
        match port {
            FmcPort::P1 => self.p1_p2_gbt_ntran = (self.p1_p2_gbt_ntran & 0x0F) | ((count << 4) & 0xF0),
            FmcPort::P2 => self.p1_p2_gbt_ntran = (self.p1_p2_gbt_ntran & 0xF0) | (count & 0x0F),
        }
    }

    /// Sets the maximum TCK clock.
    pub fn set_max_clock(&mut self, clock: u8) {
        self.max_clock = clock;
    }

    /// Serializes the 8-byte payload.
    pub fn to_bytes(&self) -> [u8; OEM_PAYLOAD_LEN] {
        [
            self.subtype_version,
            self.other,
            self.p1_a_nsig,
            self.p1_b_nsig,
            self.p2_a_nsig,
            self.p2_b_nsig,
            self.p1_p2_gbt_ntran,
            self.max_clock,
        ]
    }
}

impl From<FmcOemData> for OemRecord {
    fn from(data: FmcOemData) -> Self {
        Self::new(data.to_bytes())
    }
}

/// Internal use area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalUseArea {
    /// Area format version
    pub format: u8,
    /// Opaque payload
    pub data: Vec<u8>,
}

impl InternalUseArea {
    /// Creates a format 1 internal use area holding `data`.
    pub fn new(data: &[u8]) -> Self {
        Self { format: FRU_FORMAT_VERSION, data: data.to_vec() }
    }

    /// Size of the encoded area: format byte, 4-byte length and payload
    pub fn encoded_len(&self) -> usize {
        INTERNAL_USE_HEADER_SIZE + self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::vec;

    #[test]
    fn test_fru_field_typelen() {
        let field = FruField::text("ACME").expect("valid field");
        assert_eq!(field.typelen(), 0xC4);
        assert_eq!(field.len(), 4);
        assert_eq!(field.data(), b"ACME");

        let empty = FruField::default();
        assert_eq!(empty.typelen(), 0x00);
        assert!(empty.is_empty());

        let binary = FruField::new(0, &[1, 2, 3]).expect("valid field");
        assert_eq!(binary.typelen(), 0x03);
    }

    #[test]
    fn test_fru_field_max_length() {
        let data = vec![b'x'; 63];
        let field = FruField::new(3, &data).expect("63 bytes fits");
        assert_eq!(field.typelen(), 0xFF);

        let data = vec![b'x'; 64];
        assert_eq!(FruField::new(3, &data), Err(FruError::FieldTooLong));
    }

    #[test]
    fn test_fru_field_text_is_latin1() {
        let field = FruField::text("Müller").expect("Latin-1 text");
        assert_eq!(field.typelen(), 0xC6);
        assert_eq!(field.data(), &[0x4D, 0xFC, 0x6C, 0x6C, 0x65, 0x72]);

        let accented = "é".repeat(40);
        let field = FruField::text(&accented).expect("40 Latin-1 characters fit");
        assert_eq!(field.len(), 40);
        assert!(field.data().iter().all(|&b| b == 0xE9));
    }

    #[test]
    fn test_fru_field_text_rejects_non_latin1() {
        assert_eq!(FruField::text("100€"), Err(FruError::InvalidFieldData));
        assert_eq!(
            BoardInfoArea::new(0, "ACME", "日本", "", "", "").unwrap_err(),
            FruError::InvalidFieldData
        );
    }

    #[test]
    fn test_fru_field_invalid_type_code() {
        assert_eq!(FruField::new(4, b"x"), Err(FruError::InvalidTypeCode));
    }

    #[test]
    fn test_board_info_area_new() {
        let area = BoardInfoArea::new(0x00BC614E, "CERN", "ADC100M", "1234567890", "ADC100M", "abcde")
            .expect("valid board info area");
        assert_eq!(area.format, 1);
        assert_eq!(area.language, LANGUAGE_ENGLISH);
        assert_eq!(area.mfg_date, [0x4E, 0x61, 0xBC]);
        assert_eq!(area.manufacturing_date(), 0x00BC614E);
        assert_eq!(area.serial_number.typelen(), 0xCA);
    }

    #[test]
    fn test_board_info_area_date_truncated_to_24_bits() {
        let mut area = BoardInfoArea::default();
        area.set_manufacturing_date(0x12345678);
        assert_eq!(area.mfg_date, [0x78, 0x56, 0x34]);
        assert_eq!(area.manufacturing_date(), 0x345678);
    }

    #[test]
    fn test_board_info_area_rejects_long_field() {
        let long = "x".repeat(64);
        assert_eq!(BoardInfoArea::new(0, "ACME", &long, "", "", "").unwrap_err(), FruError::FieldTooLong);
    }

    #[test]
    fn test_dc_load_record_bytes() {
        let record = DcLoadRecord {
            voltage_required: 0x01,
            nominal_voltage: 0x00FA,
            min_voltage: 0x00F0,
            max_voltage: 0x0104,
            spec_ripple: 0x0000,
            min_current: 0x0000,
            max_current: 0x0FA0,
        };
        assert_eq!(
            record.to_bytes(),
            [0x01, 0xFA, 0x00, 0xF0, 0x00, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0xA0, 0x0F]
        );
    }

    #[test]
    fn test_dc_load_record_from_ratings() {
        let record = DcLoadRecord::from_ratings(2, 2.5, 2.4, 2.6, 0.0, 0, 4000);
        assert_eq!(record.voltage_required, 2);
        assert_eq!(record.nominal_voltage, 250);
        assert_eq!(record.min_voltage, 240);
        assert_eq!(record.max_voltage, 260);
        assert_eq!(record.spec_ripple, 0);
        assert_eq!(record.max_current, 4000);
    }

    #[test]
    fn test_dc_output_record_from_ratings() {
        let record = DcOutputRecord::from_ratings(1, 3.3, 0.1, 0.1, 0.05, 10, 3000);
        assert_eq!(record.output_info, 1);
        assert_eq!(record.nominal_voltage, 330);
        assert_eq!(record.max_neg_voltage_dev, 10);
        assert_eq!(record.max_pos_voltage_dev, 10);
        assert_eq!(record.ripple, 50);
        assert_eq!(record.min_current_draw, 10);

        let bytes = record.to_bytes();
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..3], &330u16.to_le_bytes());
        assert_eq!(&bytes[11..13], &3000u16.to_le_bytes());
    }

    #[test]
    fn test_negative_rating_saturates_to_zero() {
        let record = DcOutputRecord::from_ratings(0, -1.0, 0.0, 0.0, 0.0, 0, 0);
        assert_eq!(record.nominal_voltage, 0);
    }

    #[test]
    fn test_oem_record_prepends_vita_id() {
        let record = OemRecord::new([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(record.to_bytes(), [0xA2, 0x12, 0x00, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_fmc_oem_data_bits() {
        let mut data = FmcOemData::default();
        data.set_module_size(FmcModuleSize::Double);
        data.set_connector_size(FmcPort::P1, FmcConnectorSize::Hpc);
        data.set_connector_size(FmcPort::P2, FmcConnectorSize::NotFitted);
        data.set_clock_direction(FmcClockDirection::CarrierToMezzanine);
        assert_eq!(data.other, 0b0101_1110);

        data.set_connector_size(FmcPort::P2, FmcConnectorSize::Lpc);
        assert_eq!(data.other, 0b0101_0010);

        data.set_gbt_transceivers(FmcPort::P1, 4);
        data.set_gbt_transceivers(FmcPort::P2, 2);
        assert_eq!(data.p1_p2_gbt_ntran, 0x42);

        data.set_signal_count(FmcPort::P1, FmcBank::A, 68);
        data.set_signal_count(FmcPort::P2, FmcBank::B, 10);
        data.set_max_clock(25);
        assert_eq!(data.to_bytes(), [0, 0b0101_0010, 68, 0, 0, 10, 0x42, 25]);
    }

    #[test]
    fn test_oem_record_from_fmc_data() {
        let mut data = FmcOemData::default();
        data.set_signal_count(FmcPort::P1, FmcBank::A, 68);
        let record = OemRecord::from(data);
        assert_eq!(record.data, [0, 0, 68, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_internal_use_area() {
        let area = InternalUseArea::new(b"AAAAAAA");
        assert_eq!(area.format, 1);
        assert_eq!(area.encoded_len(), 12);
    }
}
