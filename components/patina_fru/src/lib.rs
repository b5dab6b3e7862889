//! IPMI FRU Information Encoder
//!
//! Builds the binary FRU information image stored in the identification EEPROM of a board or
//! FMC mezzanine: a common header, a board info area, a multi-record area holding DC load, DC
//! output and VITA OEM records, and an optional internal use area.
//!
//! ## Architecture
//!
//! ```text
//!   BoardInfoArea   DcLoadRecord   DcOutputRecord   OemRecord   InternalUseArea
//!          \              |              |              |             /
//!           +-------------+------ FruRecordStore -------+------------+
//!                                       |
//!                          FruEncoder (FruConfiguration)
//!                                       |  layout, stage, single write
//!                                       v
//!                          FruSink (Vec<u8>, FileSink)
//!                                       |
//!                                       v
//!                          FruImage (validated read-back)
//! ```
//!
//! ## Example
//!
//! ```
//! use patina_fru::{
//!     FruConfiguration, FruEncoder, FruImage, FruRecordStore,
//!     fru_record::{BoardInfoArea, DcLoadRecord, FmcBank, FmcOemData, FmcPort, InternalUseArea},
//! };
//!
//! # fn main() -> Result<(), patina_fru::FruError> {
//! let mut store = FruRecordStore::new();
//! store.set_board_info_area(BoardInfoArea::new(0x0123, "CERN", "ADC100M", "0001", "ADC100M", "adc")?);
//! store.add_dc_load_record(DcLoadRecord::from_ratings(0, 2.5, 2.4, 2.6, 0.0, 0, 4000));
//!
//! let mut fmc = FmcOemData::default();
//! fmc.set_signal_count(FmcPort::P1, FmcBank::A, 68);
//! store.set_oem_record(fmc.into());
//! store.set_internal_use_area(InternalUseArea::new(b"cal"));
//!
//! let image = FruEncoder::new(&store, FruConfiguration::default()).encode()?;
//!
//! let fru = FruImage::parse(&image)?;
//! assert_eq!(fru.manufacturing_date()?, 0x0123);
//! assert_eq!(fru.internal_use_data()?, b"cal");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fru_record;
pub mod service;
pub mod sink;

pub use config::{FruConfiguration, RecordOrder};
pub use decoder::FruImage;
pub use encoder::{FruEncoder, FruLayout, FruRecordStore};
pub use error::FruError;
#[cfg(feature = "std")]
pub use sink::FileSink;
pub use sink::FruSink;
