//! Multi-record area encoder
//!
//! Every record in the area is a 5-byte [`MultiRecordHeader`] followed by its payload. Records
//! are written in a fixed order:
//!
//! 1. DC load records (type 0x02)
//! 2. DC output records (type 0x01)
//! 3. The OEM record (type 0xFA), which always carries the end-of-list flag
//!
//! Padding up to the next 8-byte boundary is left to the caller.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

use zerocopy::IntoBytes;

use super::checksum::zero_checksum;
use crate::{
    error::FruError,
    fru_record::{DcLoadRecord, DcOutputRecord, OemRecord},
    service::{
        AreaSize, DC_RECORD_LEN, MULTIRECORD_END_OF_LIST, MULTIRECORD_FORMAT_VERSION, MULTIRECORD_HEADER_SIZE,
        MultiRecordHeader, MultiRecordType, OEM_RECORD_LEN,
    },
    sink::FruSink,
};

/// Builds the header for a record of `record_type` carrying `payload`.
pub fn multirecord_header(record_type: MultiRecordType, payload: &[u8], end_of_list: bool) -> MultiRecordHeader {
    let mut header = MultiRecordHeader {
        record_type_id: record_type.id(),
        extra: MULTIRECORD_FORMAT_VERSION,
        record_len: payload.len() as u8,
        record_checksum: zero_checksum(payload),
        header_checksum: 0,
    };
    if end_of_list {
        header.extra |= MULTIRECORD_END_OF_LIST;
    }
    header.header_checksum = zero_checksum(&header.as_bytes()[..MULTIRECORD_HEADER_SIZE - 1]);
    header
}

fn write_record<S: FruSink + ?Sized>(
    sink: &mut S,
    record_type: MultiRecordType,
    payload: &[u8],
    end_of_list: bool,
) -> Result<usize, FruError> {
    let header = multirecord_header(record_type, payload, end_of_list);
    sink.write_bytes(header.as_bytes())?;
    sink.write_bytes(payload)?;
    Ok(MULTIRECORD_HEADER_SIZE + payload.len())
}

/// Computes the size of a multi-record area holding the given number of DC records and the OEM
/// record.
pub fn multirecord_area_size(dc_load_count: usize, dc_output_count: usize) -> AreaSize {
    let dc_records = dc_load_count + dc_output_count;
    AreaSize::new(
        dc_records * (MULTIRECORD_HEADER_SIZE + DC_RECORD_LEN) + MULTIRECORD_HEADER_SIZE + OEM_RECORD_LEN,
    )
}

/// Writes the DC load, DC output and OEM records and returns the size of the area.
///
/// # Errors
///
/// Returns `FruError::OemRecordNotSet` before anything is written if `oem` is `None`; the area
/// always terminates with the OEM record.
pub fn write_multirecord_area<S: FruSink + ?Sized>(
    sink: &mut S,
    dc_loads: &[DcLoadRecord],
    dc_outputs: &[DcOutputRecord],
    oem: Option<&OemRecord>,
) -> Result<AreaSize, FruError> {
    let Some(oem) = oem else {
        log::error!(target: "fru", "Multi-record area requires an OEM record");
        return Err(FruError::OemRecordNotSet);
    };

    let mut written = 0;
    for record in dc_loads {
        written += write_record(sink, MultiRecordType::DcLoad, &record.to_bytes(), false)?;
    }
    for record in dc_outputs {
        written += write_record(sink, MultiRecordType::DcOutput, &record.to_bytes(), false)?;
    }
    written += write_record(sink, MultiRecordType::Oem, &oem.to_bytes(), true)?;

    let size = AreaSize::new(written);
    debug_assert_eq!(size, multirecord_area_size(dc_loads.len(), dc_outputs.len()));
    log::debug!(
        target: "fru",
        "Multi-record area: {} load, {} output, 1 OEM record, {} bytes ({} pad)",
        dc_loads.len(),
        dc_outputs.len(),
        size.padded,
        size.pad()
    );
    Ok(size)
}
