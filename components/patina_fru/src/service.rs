//! FRU binary structures and constants
//!
//! This module defines the fixed-size wire structures of a FRU information image and the
//! constants shared by the encoder and the decoder.
//!
//! ## Image Layout
//!
//! ```text
//! +------------------------------+  offset 0
//! | Common header (8 bytes)      |
//! +------------------------------+  board_area_offset * 8 (always 8)
//! | Board info area              |
//! +------------------------------+  multirecord_offset * 8
//! | Multi-record area            |
//! |     +------------------------+
//! |     | DC load records        |
//! |     +------------------------+
//! |     | DC output records      |
//! |     +------------------------+
//! |     | OEM record (last)      |
//! +-----+------------------------+  internal_use_offset * 8
//! | Internal use area (optional) |
//! +------------------------------+
//! ```
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

use zerocopy_derive::*;

/// Format version of the common header, board info area and internal use area
pub const FRU_FORMAT_VERSION: u8 = 0x01;

/// Granularity of area sizes and offsets in the common header
pub const FRU_AREA_ALIGNMENT: usize = 8;

/// Size of the common header
pub const COMMON_HEADER_SIZE: usize = core::mem::size_of::<CommonHeader>();

/// Size of a multi-record header
pub const MULTIRECORD_HEADER_SIZE: usize = core::mem::size_of::<MultiRecordHeader>();

/// Bytes of a board info area that do not depend on field contents:
/// format, length, language, 3 date bytes, 5 type/length bytes, end marker and checksum.
pub const BOARD_INFO_FIXED_SIZE: usize = 13;

/// Type/length byte terminating the board info fields
pub const TYPELEN_END_OF_FIELDS: u8 = 0xC1;

/// Largest data length a type/length byte can describe
pub const TYPELEN_MAX_DATA_LEN: usize = 0x3F;

/// Type code for 8-bit ASCII + Latin 1 field data
pub const TYPE_CODE_ASCII_LATIN1: u8 = 0x03;

/// Board info area language code for English
pub const LANGUAGE_ENGLISH: u8 = 0x00;

/// Record format nibble carried by every multi-record header
pub const MULTIRECORD_FORMAT_VERSION: u8 = 0x02;

/// Bit set in the second multi-record header byte of the last record in the area
pub const MULTIRECORD_END_OF_LIST: u8 = 0x80;

/// Payload size of DC load and DC output records
pub const DC_RECORD_LEN: usize = 13;

/// Size of the vendor payload that follows the OEM manufacturer id
pub const OEM_PAYLOAD_LEN: usize = 8;

/// Payload size of the OEM record (manufacturer id + vendor payload)
pub const OEM_RECORD_LEN: usize = 3 + OEM_PAYLOAD_LEN;

/// VITA IANA enterprise number 0x0012A2, least significant byte first
pub const VITA_MANUFACTURER_ID: [u8; 3] = [0xA2, 0x12, 0x00];

/// Size of the internal use area format byte and length field
pub const INTERNAL_USE_HEADER_SIZE: usize = 5;

/// Multi-record sub-record type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MultiRecordType {
    /// DC output record
    DcOutput = 0x01,
    /// DC load record
    DcLoad = 0x02,
    /// OEM vendor record
    Oem = 0xFA,
}

impl MultiRecordType {
    /// Maps a record type id read from an image back to the record type.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0x01 => Some(Self::DcOutput),
            0x02 => Some(Self::DcLoad),
            0xFA => Some(Self::Oem),
            _ => None,
        }
    }

    /// The record type id written in the multi-record header
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// FRU common header
///
/// The 8-byte header at offset 0 of every image. Area offsets are counted in 8-byte units from
/// the start of the image, 0 meaning the area is absent.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct CommonHeader {
    /// Common header format version (0x01)
    pub format: u8,
    /// Internal use area offset
    pub internal_use_offset: u8,
    /// Chassis info area offset, not produced by this encoder
    pub chassis_info_offset: u8,
    /// Board info area offset
    pub board_area_offset: u8,
    /// Product info area offset, not produced by this encoder
    pub product_area_offset: u8,
    /// Multi-record area offset
    pub multirecord_offset: u8,
    /// Reserved, always 0
    pub pad: u8,
    /// Zero checksum over the 7 preceding bytes
    pub checksum: u8,
}

impl CommonHeader {
    /// Creates a common header for the given offsets with a zero checksum.
    pub fn new(internal_use_offset: u8, board_area_offset: u8, multirecord_offset: u8) -> Self {
        Self {
            format: FRU_FORMAT_VERSION,
            internal_use_offset,
            chassis_info_offset: 0,
            board_area_offset,
            product_area_offset: 0,
            multirecord_offset,
            pad: 0,
            checksum: 0,
        }
    }
}

/// Multi-record header
///
/// The 5-byte header preceding every record in the multi-record area.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct MultiRecordHeader {
    /// Record type id, see [`MultiRecordType`]
    pub record_type_id: u8,
    /// Format version in the low nibble, end-of-list flag in bit 7
    pub extra: u8,
    /// Length of the record payload
    pub record_len: u8,
    /// Zero checksum of the record payload
    pub record_checksum: u8,
    /// Zero checksum of the 4 preceding header bytes
    pub header_checksum: u8,
}

impl MultiRecordHeader {
    /// Whether this header marks the last record of the multi-record area
    pub fn is_end_of_list(&self) -> bool {
        self.extra & MULTIRECORD_END_OF_LIST != 0
    }
}

/// Unpadded and padded size of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSize {
    /// Bytes of area content
    pub unpadded: usize,
    /// Content rounded up to a multiple of [`FRU_AREA_ALIGNMENT`]
    pub padded: usize,
}

impl AreaSize {
    /// Rounds `unpadded` up to the area alignment.
    pub fn new(unpadded: usize) -> Self {
        Self { unpadded, padded: unpadded.next_multiple_of(FRU_AREA_ALIGNMENT) }
    }

    /// Number of zero bytes needed to reach the padded size (0-7)
    pub fn pad(&self) -> usize {
        self.padded - self.unpadded
    }

    /// Padded size in 8-byte units
    pub fn units(&self) -> usize {
        self.padded / FRU_AREA_ALIGNMENT
    }
}
