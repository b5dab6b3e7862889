//! Board info area encoder
//!
//! Serializes a [`BoardInfoArea`] as:
//!
//! ```text
//! [format][area len][language][date0][date1][date2]
//! [typelen][mfgr data][typelen][product data][typelen][serial data]
//! [typelen][part number data][typelen][fru file id data]
//! [0xC1][0-7 pad bytes][checksum]
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

use super::checksum::zero_checksum;
use crate::{
    error::FruError,
    fru_record::BoardInfoArea,
    service::{AreaSize, BOARD_INFO_FIXED_SIZE, TYPELEN_END_OF_FIELDS},
    sink::FruSink,
};

/// Computes the unpadded and padded size of `area`.
pub fn board_info_area_size(area: &BoardInfoArea) -> AreaSize {
    let data_len: usize = area.fields().iter().map(|field| field.len()).sum();
    AreaSize::new(BOARD_INFO_FIXED_SIZE + data_len)
}

/// Computes the checksum byte of `area` encoded with the given length in 8-byte units.
///
/// Pad bytes are zero and do not take part in the sum.
pub fn board_info_area_checksum(area: &BoardInfoArea, area_len_units: u8) -> u8 {
    let [date0, date1, date2] = area.mfg_date;
    let fixed = [area.format, area_len_units, area.language, date0, date1, date2, TYPELEN_END_OF_FIELDS];
    let fields = area
        .fields()
        .into_iter()
        .flat_map(|field| core::iter::once(field.typelen()).chain(field.data().iter().copied()));
    let sum = fixed.into_iter().chain(fields).fold(0u8, u8::wrapping_add);
    0u8.wrapping_sub(sum)
}

/// Writes `area` with the given length in 8-byte units and returns the area checksum.
///
/// The length is computed by the layout orchestrator from [`board_info_area_size`]; it is taken
/// as an argument so the area can be emitted on its own with the same value the common header
/// was built from.
pub fn write_board_info_area<S: FruSink + ?Sized>(
    sink: &mut S,
    area: &BoardInfoArea,
    area_len_units: u8,
) -> Result<u8, FruError> {
    let size = board_info_area_size(area);
    let mut bytes = Vec::with_capacity(size.padded);

    bytes.push(area.format);
    bytes.push(area_len_units);
    bytes.push(area.language);
    bytes.extend_from_slice(&area.mfg_date);
    for field in area.fields() {
        bytes.push(field.typelen());
        bytes.extend_from_slice(field.data());
    }
    bytes.push(TYPELEN_END_OF_FIELDS);

    let checksum = board_info_area_checksum(area, area_len_units);
    debug_assert_eq!(checksum, zero_checksum(&bytes));
    bytes.resize(size.padded - 1, 0);
    bytes.push(checksum);

    log::debug!(
        target: "fru",
        "Board info area: {} bytes ({} pad), length {} units, checksum {:#04X}",
        size.padded,
        size.pad(),
        area_len_units,
        checksum
    );
    sink.write_bytes(&bytes)?;
    Ok(checksum)
}
