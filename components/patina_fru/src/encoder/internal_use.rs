//! Internal use area encoder
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

use crate::{error::FruError, fru_record::InternalUseArea, sink::FruSink};

/// Writes the format byte, the little-endian 32-bit length and the payload of `area`.
///
/// No padding follows the area.
///
/// # Errors
///
/// Returns `FruError::InternalUseAreaNotSet` if `area` is `None` and `FruError::AreaTooLarge` if
/// the payload length does not fit in 32 bits.
pub fn write_internal_use_area<S: FruSink + ?Sized>(
    sink: &mut S,
    area: Option<&InternalUseArea>,
) -> Result<usize, FruError> {
    let Some(area) = area else {
        log::error!(target: "fru", "Internal use area written without being set");
        return Err(FruError::InternalUseAreaNotSet);
    };
    let len = u32::try_from(area.data.len()).map_err(|_| FruError::AreaTooLarge)?;

    sink.write_bytes(&[area.format])?;
    sink.write_bytes(&len.to_le_bytes())?;
    sink.write_bytes(&area.data)?;

    log::debug!(target: "fru", "Internal use area: {} payload bytes", len);
    Ok(area.encoded_len())
}
