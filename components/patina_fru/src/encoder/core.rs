//! FRU image layout and encoding
//!
//! [`FruEncoder`] computes the size of every area, derives the common header offsets and runs
//! the area encoders in order:
//!
//! 1. Common header
//! 2. Board info area (padded by its own encoder)
//! 3. Multi-record area, followed by zero padding to the next 8-byte boundary
//! 4. Internal use area, when one is set
//!
//! The whole image is staged in memory and handed to the sink in a single write, so a failed
//! precondition never leaves a truncated image behind.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

extern crate alloc;
use alloc::{borrow::Cow, vec::Vec};

use super::{
    board::{board_info_area_checksum, board_info_area_size, write_board_info_area},
    header::{seal_common_header, write_common_header},
    internal_use::write_internal_use_area,
    multirecord::{multirecord_area_size, write_multirecord_area},
    store::FruRecordStore,
};
use crate::{
    config::{FruConfiguration, RecordOrder},
    error::FruError,
    fru_record::BoardInfoArea,
    service::{AreaSize, COMMON_HEADER_SIZE, CommonHeader, FRU_AREA_ALIGNMENT},
    sink::FruSink,
};

/// Sizes and offsets of an encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruLayout {
    /// Common header, checksum included
    pub header: CommonHeader,
    /// Board info area size
    pub board_info: AreaSize,
    /// Board info area length byte, in 8-byte units
    pub board_len_units: u8,
    /// Board info area checksum byte
    pub board_info_checksum: u8,
    /// Multi-record area size
    pub multirecord: AreaSize,
    /// Internal use area size, 0 when absent
    pub internal_use_len: usize,
}

impl FruLayout {
    /// Total size of the image in bytes
    pub fn total_len(&self) -> usize {
        COMMON_HEADER_SIZE + self.board_info.padded + self.multirecord.padded + self.internal_use_len
    }
}

/// Encoder for one FRU image
///
/// Built over a populated [`FruRecordStore`] for a single encode run.
pub struct FruEncoder<'a> {
    records: &'a FruRecordStore,
    config: FruConfiguration,
}

fn offset_units(offset: usize) -> Result<u8, FruError> {
    u8::try_from(offset / FRU_AREA_ALIGNMENT).map_err(|_| {
        log::error!(target: "fru", "Area offset {} bytes does not fit in the common header", offset);
        FruError::AreaTooLarge
    })
}

fn ordered<T: Clone>(records: &[T], order: RecordOrder) -> Cow<'_, [T]> {
    match order {
        RecordOrder::Registration => Cow::Borrowed(records),
        RecordOrder::LastRegisteredFirst => Cow::Owned(records.iter().rev().cloned().collect()),
    }
}

impl<'a> FruEncoder<'a> {
    /// Creates an encoder over `records`.
    pub fn new(records: &'a FruRecordStore, config: FruConfiguration) -> Self {
        Self { records, config }
    }

    /// The configuration this encoder was built with
    pub fn config(&self) -> &FruConfiguration {
        &self.config
    }

    /// Computes area sizes and the common header.
    ///
    /// # Errors
    ///
    /// - `FruError::BoardInfoAreaNotSet` if no board info area is set
    /// - `FruError::OemRecordNotSet` if no OEM record is set
    /// - `FruError::AreaTooLarge` if an offset does not fit in the common header
    pub fn layout(&self) -> Result<FruLayout, FruError> {
        self.board_and_layout().map(|(_, layout)| layout)
    }

    fn board_and_layout(&self) -> Result<(&'a BoardInfoArea, FruLayout), FruError> {
        let records: &'a FruRecordStore = self.records;
        let Some(board) = records.board_info_area() else {
            log::error!(target: "fru", "Cannot lay out FRU image without a board info area");
            return Err(FruError::BoardInfoAreaNotSet);
        };
        if records.oem_record().is_none() {
            log::error!(target: "fru", "Cannot lay out FRU image without an OEM record");
            return Err(FruError::OemRecordNotSet);
        }

        let board_info = board_info_area_size(board);
        let board_len_units = u8::try_from(board_info.units()).map_err(|_| FruError::AreaTooLarge)?;
        let board_info_checksum = board_info_area_checksum(board, board_len_units);
        let multirecord = multirecord_area_size(records.dc_load_records().len(), records.dc_output_records().len());
        let internal_use_len = records.internal_use_area().map_or(0, |area| area.encoded_len());

        let board_offset = offset_units(COMMON_HEADER_SIZE)?;
        let multirecord_offset = offset_units(COMMON_HEADER_SIZE + board_info.padded)?;
        let internal_use_offset = match records.internal_use_area() {
            Some(_) => offset_units(COMMON_HEADER_SIZE + board_info.padded + multirecord.padded)?,
            None => 0,
        };

        let mut header = CommonHeader::new(internal_use_offset, board_offset, multirecord_offset);
        seal_common_header(&mut header);

        log::debug!(
            target: "fru",
            "FRU layout: board {}/{} bytes, multi-record {}/{} bytes, internal use {} bytes",
            board_info.unpadded,
            board_info.padded,
            multirecord.unpadded,
            multirecord.padded,
            internal_use_len
        );

        let layout =
            FruLayout { header, board_info, board_len_units, board_info_checksum, multirecord, internal_use_len };
        Ok((board, layout))
    }

    /// Encodes the image into a new buffer.
    pub fn encode(&self) -> Result<Vec<u8>, FruError> {
        self.build().map(|(_, image)| image)
    }

    /// Encodes the image and commits it to `sink` with a single write.
    pub fn write<S: FruSink + ?Sized>(&self, sink: &mut S) -> Result<FruLayout, FruError> {
        let (layout, image) = self.build()?;
        sink.write_bytes(&image)?;
        log::debug!(target: "fru", "Wrote {} byte FRU image", image.len());
        Ok(layout)
    }

    fn build(&self) -> Result<(FruLayout, Vec<u8>), FruError> {
        let (board, layout) = self.board_and_layout()?;

        let mut image = Vec::<u8>::with_capacity(layout.total_len());
        write_common_header(&mut image, &layout.header)?;
        write_board_info_area(&mut image, board, layout.board_len_units)?;

        let dc_loads = ordered(self.records.dc_load_records(), self.config.record_order);
        let dc_outputs = ordered(self.records.dc_output_records(), self.config.record_order);
        let multirecord = write_multirecord_area(&mut image, &dc_loads, &dc_outputs, self.records.oem_record())?;
        image.resize(image.len() + multirecord.pad(), 0);

        if self.records.internal_use_area().is_some() {
            write_internal_use_area(&mut image, self.records.internal_use_area())?;
        }

        debug_assert_eq!(image.len(), layout.total_len());
        Ok((layout, image))
    }
}
