//! Common header encoder
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
    service::{COMMON_HEADER_SIZE, CommonHeader},
    sink::FruSink,
};

/// Fills in the checksum of `header` over its first 7 bytes.
pub fn seal_common_header(header: &mut CommonHeader) {
    header.checksum = 0;
    header.checksum = zero_checksum(&header.as_bytes()[..COMMON_HEADER_SIZE - 1]);
}

/// Writes `header` with its checksum filled in and returns the written header.
pub fn write_common_header<S: FruSink + ?Sized>(sink: &mut S, header: &CommonHeader) -> Result<CommonHeader, FruError> {
    let mut sealed = *header;
    seal_common_header(&mut sealed);
    log::debug!(
        target: "fru",
        "Common header: internal_use={} board={} multirecord={} checksum={:#04X}",
        sealed.internal_use_offset,
        sealed.board_area_offset,
        sealed.multirecord_offset,
        sealed.checksum
    );
    sink.write_bytes(sealed.as_bytes())?;
    Ok(sealed)
}
