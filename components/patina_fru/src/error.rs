//! Error types for FRU operations
//!
//! This module defines the error type returned by the FRU encoder, the byte sinks and the
//! image decoder.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

use core::fmt;

/// FRU operation errors
///
/// This enum represents all possible errors that can occur while building, writing or reading
/// back a FRU information image.
#[derive(Debug, Clone, PartialEq)]
pub enum FruError {
    // Precondition errors
    /// No board info area has been set in the record store
    BoardInfoAreaNotSet,
    /// No OEM record has been set; the multi-record area always terminates with one
    OemRecordNotSet,
    /// The internal use area was requested but none has been set
    InternalUseAreaNotSet,
    /// The sink has been closed (or was never opened)
    SinkNotOpen,

    // Sink errors
    /// The backing resource of a sink could not be opened
    SinkOpenFailed,
    /// Writing to the sink failed
    SinkWriteFailed,

    // Layout errors
    /// Field data exceeds the 63 bytes a type/length byte can describe
    FieldTooLong,
    /// Type code does not fit in the two high bits of a type/length byte
    InvalidTypeCode,
    /// Text field holds a character outside Latin-1
    InvalidFieldData,
    /// An area length or offset does not fit in its 8-bit (or 32-bit) field
    AreaTooLarge,

    // Decode errors
    /// Buffer is too small to hold a common header
    ImageTooSmall,
    /// Common header format version is not 1
    UnsupportedFormatVersion,
    /// Common header bytes do not sum to zero
    HeaderChecksumMismatch,
    /// The requested area has a zero offset in the common header
    AreaNotPresent,
    /// An area or record extends past the end of the buffer
    AreaOutOfBounds,
    /// An area states a length of zero
    InvalidAreaLength,
    /// A multi-record header describes no known record
    MalformedRecord,
    /// A multi-record header or payload checksum does not match
    RecordChecksumMismatch,
}

/// Broad classes of [`FruError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruErrorCategory {
    /// A required area, record or sink is missing
    Precondition,
    /// The underlying resource failed
    Sink,
    /// The registered values cannot be represented in the binary layout
    Layout,
    /// An encoded image is malformed
    Decode,
}

impl FruError {
    /// Returns the class this error belongs to.
    pub fn category(&self) -> FruErrorCategory {
        match self {
            FruError::BoardInfoAreaNotSet
            | FruError::OemRecordNotSet
            | FruError::InternalUseAreaNotSet
            | FruError::SinkNotOpen => FruErrorCategory::Precondition,

            FruError::SinkOpenFailed | FruError::SinkWriteFailed => FruErrorCategory::Sink,

            FruError::FieldTooLong
            | FruError::InvalidTypeCode
            | FruError::InvalidFieldData
            | FruError::AreaTooLarge => FruErrorCategory::Layout,

            FruError::ImageTooSmall
            | FruError::UnsupportedFormatVersion
            | FruError::HeaderChecksumMismatch
            | FruError::AreaNotPresent
            | FruError::AreaOutOfBounds
            | FruError::InvalidAreaLength
            | FruError::MalformedRecord
            | FruError::RecordChecksumMismatch => FruErrorCategory::Decode,
        }
    }
}

impl fmt::Display for FruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FruError::BoardInfoAreaNotSet => "board info area not set",
            FruError::OemRecordNotSet => "OEM record not set",
            FruError::InternalUseAreaNotSet => "internal use area not set",
            FruError::SinkNotOpen => "sink is not open",
            FruError::SinkOpenFailed => "failed to open sink",
            FruError::SinkWriteFailed => "failed to write to sink",
            FruError::FieldTooLong => "field longer than 63 bytes",
            FruError::InvalidTypeCode => "type code does not fit in 2 bits",
            FruError::InvalidFieldData => "text field is not Latin-1",
            FruError::AreaTooLarge => "area does not fit in the FRU layout",
            FruError::ImageTooSmall => "image smaller than the common header",
            FruError::UnsupportedFormatVersion => "unsupported common header format version",
            FruError::HeaderChecksumMismatch => "common header checksum mismatch",
            FruError::AreaNotPresent => "area not present",
            FruError::AreaOutOfBounds => "area extends past the end of the image",
            FruError::InvalidAreaLength => "area length is zero",
            FruError::MalformedRecord => "malformed multi-record header",
            FruError::RecordChecksumMismatch => "multi-record checksum mismatch",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for FruError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::{string::ToString, vec};

    #[test]
    fn test_fru_error_clone_and_eq() {
        let err1 = FruError::FieldTooLong;
        let err2 = err1.clone();
        assert_eq!(err1, err2);

        let err3 = FruError::SinkWriteFailed;
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_fru_error_categories() {
        let precondition = vec![
            FruError::BoardInfoAreaNotSet,
            FruError::OemRecordNotSet,
            FruError::InternalUseAreaNotSet,
            FruError::SinkNotOpen,
        ];
        for err in precondition {
            assert_eq!(err.category(), FruErrorCategory::Precondition, "{err:?}");
        }

        assert_eq!(FruError::SinkOpenFailed.category(), FruErrorCategory::Sink);
        assert_eq!(FruError::SinkWriteFailed.category(), FruErrorCategory::Sink);

        assert_eq!(FruError::FieldTooLong.category(), FruErrorCategory::Layout);
        assert_eq!(FruError::InvalidTypeCode.category(), FruErrorCategory::Layout);
        assert_eq!(FruError::InvalidFieldData.category(), FruErrorCategory::Layout);
        assert_eq!(FruError::AreaTooLarge.category(), FruErrorCategory::Layout);

        let decode = vec![
            FruError::ImageTooSmall,
            FruError::UnsupportedFormatVersion,
            FruError::HeaderChecksumMismatch,
            FruError::AreaNotPresent,
            FruError::AreaOutOfBounds,
            FruError::InvalidAreaLength,
            FruError::MalformedRecord,
            FruError::RecordChecksumMismatch,
        ];
        for err in decode {
            assert_eq!(err.category(), FruErrorCategory::Decode, "{err:?}");
        }
    }

    #[test]
    fn test_fru_error_display() {
        assert_eq!(FruError::OemRecordNotSet.to_string(), "OEM record not set");
        assert_eq!(FruError::HeaderChecksumMismatch.to_string(), "common header checksum mismatch");
    }
}
