//! FRU image decoder
//!
//! Reads back the fields of an encoded image that test tooling and manufacturing checks care
//! about. The common header is validated once in [`FruImage::parse`]; every accessor bounds
//! checks the area it reads, so a corrupt or truncated image yields an error instead of a panic.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

use zerocopy::{FromBytes, IntoBytes};

use crate::{
    encoder::{checksum_is_valid, zero_checksum},
    error::FruError,
    service::{
        COMMON_HEADER_SIZE, CommonHeader, FRU_AREA_ALIGNMENT, FRU_FORMAT_VERSION, INTERNAL_USE_HEADER_SIZE,
        MultiRecordHeader, MultiRecordType,
    },
};

/// A validated view over an encoded FRU image
#[derive(Debug, Clone, Copy)]
pub struct FruImage<'a> {
    bytes: &'a [u8],
    header: CommonHeader,
}

/// One record of the multi-record area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiRecord<'a> {
    /// Record header as stored in the image
    pub header: MultiRecordHeader,
    /// Record payload, `header.record_len` bytes
    pub payload: &'a [u8],
}

impl MultiRecord<'_> {
    /// Record type, `None` for ids this crate does not produce
    pub fn record_type(&self) -> Option<MultiRecordType> {
        MultiRecordType::from_id(self.header.record_type_id)
    }
}

/// Iterator over the records of a multi-record area
///
/// Yields an error and stops at the first record that is truncated, fails a checksum or is an
/// empty record of unknown type (zero fill). Stops after the record carrying the end-of-list
/// flag.
#[derive(Debug, Clone)]
pub struct MultiRecords<'a> {
    remaining: &'a [u8],
    done: bool,
}

impl<'a> MultiRecords<'a> {
    fn fail(&mut self, error: FruError) -> Option<Result<MultiRecord<'a>, FruError>> {
        self.done = true;
        Some(Err(error))
    }
}

impl<'a> Iterator for MultiRecords<'a> {
    type Item = Result<MultiRecord<'a>, FruError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Ok((header, rest)) = MultiRecordHeader::read_from_prefix(self.remaining) else {
            return self.fail(FruError::AreaOutOfBounds);
        };
        if !checksum_is_valid(header.as_bytes()) {
            log::warn!(target: "fru", "Multi-record header checksum mismatch for type {:#04X}", header.record_type_id);
            return self.fail(FruError::RecordChecksumMismatch);
        }

        let len = header.record_len as usize;
        if len == 0 && MultiRecordType::from_id(header.record_type_id).is_none() {
            log::warn!(target: "fru", "Empty multi-record of unknown type {:#04X}", header.record_type_id);
            return self.fail(FruError::MalformedRecord);
        }
        if rest.len() < len {
            return self.fail(FruError::AreaOutOfBounds);
        }
        let (payload, rest) = rest.split_at(len);
        if zero_checksum(payload) != header.record_checksum {
            log::warn!(target: "fru", "Multi-record payload checksum mismatch for type {:#04X}", header.record_type_id);
            return self.fail(FruError::RecordChecksumMismatch);
        }

        self.remaining = rest;
        self.done = header.is_end_of_list();
        Some(Ok(MultiRecord { header, payload }))
    }
}

impl<'a> FruImage<'a> {
    /// Validates the common header of `bytes`.
    ///
    /// # Errors
    ///
    /// - `FruError::ImageTooSmall` if `bytes` is shorter than a common header
    /// - `FruError::UnsupportedFormatVersion` if the header format is not 1
    /// - `FruError::HeaderChecksumMismatch` if the header bytes do not sum to zero
    pub fn parse(bytes: &'a [u8]) -> Result<Self, FruError> {
        let (header, _) = CommonHeader::read_from_prefix(bytes).map_err(|_| FruError::ImageTooSmall)?;
        if header.format != FRU_FORMAT_VERSION {
            return Err(FruError::UnsupportedFormatVersion);
        }
        if !checksum_is_valid(&bytes[..COMMON_HEADER_SIZE]) {
            log::warn!(target: "fru", "Common header checksum mismatch");
            return Err(FruError::HeaderChecksumMismatch);
        }
        Ok(Self { bytes, header })
    }

    /// The validated common header
    pub fn header(&self) -> &CommonHeader {
        &self.header
    }

    /// The whole image
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    fn area_start(&self, offset: u8) -> Result<usize, FruError> {
        if offset == 0 {
            return Err(FruError::AreaNotPresent);
        }
        Ok(offset as usize * FRU_AREA_ALIGNMENT)
    }

    fn slice(&self, start: usize, len: usize) -> Result<&'a [u8], FruError> {
        start.checked_add(len).and_then(|end| self.bytes.get(start..end)).ok_or(FruError::AreaOutOfBounds)
    }

    /// The board info area, `len * 8` bytes as stated by its length byte
    ///
    /// # Errors
    ///
    /// - `FruError::AreaNotPresent` if the image has no board info area
    /// - `FruError::UnsupportedFormatVersion` if the area format is not 1
    /// - `FruError::InvalidAreaLength` if the length byte is 0
    /// - `FruError::AreaOutOfBounds` if the area runs past the end of the image
    pub fn board_info_area(&self) -> Result<&'a [u8], FruError> {
        let start = self.area_start(self.header.board_area_offset)?;
        let area_header = self.slice(start, 2)?;
        if area_header[0] != FRU_FORMAT_VERSION {
            log::warn!(target: "fru", "Board info area format {:#04X} is not supported", area_header[0]);
            return Err(FruError::UnsupportedFormatVersion);
        }
        if area_header[1] == 0 {
            log::warn!(target: "fru", "Board info area length is zero");
            return Err(FruError::InvalidAreaLength);
        }
        self.slice(start, area_header[1] as usize * FRU_AREA_ALIGNMENT)
    }

    /// Whether the board info area sums to zero
    pub fn board_info_area_checksum_ok(&self) -> Result<bool, FruError> {
        self.board_info_area().map(checksum_is_valid)
    }

    /// The board manufacturing date, `date0 | date1 << 8 | date2 << 16`
    pub fn manufacturing_date(&self) -> Result<u32, FruError> {
        let area = self.board_info_area()?;
        Ok(u32::from_le_bytes([area[3], area[4], area[5], 0]))
    }

    /// Payload of the internal use area
    ///
    /// # Errors
    ///
    /// - `FruError::AreaNotPresent` if the image has no internal use area
    /// - `FruError::AreaOutOfBounds` if the stated length runs past the end of the image
    pub fn internal_use_data(&self) -> Result<&'a [u8], FruError> {
        let start = self.area_start(self.header.internal_use_offset)?;
        let area_header = self.slice(start, INTERNAL_USE_HEADER_SIZE)?;
        let len = u32::from_le_bytes([area_header[1], area_header[2], area_header[3], area_header[4]]);
        let len = usize::try_from(len).map_err(|_| FruError::AreaOutOfBounds)?;
        self.slice(start + INTERNAL_USE_HEADER_SIZE, len)
    }

    /// Iterates over the records of the multi-record area.
    pub fn multi_records(&self) -> Result<MultiRecords<'a>, FruError> {
        let start = self.area_start(self.header.multirecord_offset)?;
        let remaining = self.bytes.get(start..).ok_or(FruError::AreaOutOfBounds)?;
        Ok(MultiRecords { remaining, done: false })
    }
}
