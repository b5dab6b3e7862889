//! FRU record store
//!
//! Holds the areas and records registered by the caller until an encoder is built over them.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

extern crate alloc;
use alloc::vec::Vec;

use crate::fru_record::{BoardInfoArea, DcLoadRecord, DcOutputRecord, InternalUseArea, OemRecord};

/// Areas and records to be encoded
///
/// DC load and DC output records are kept in the order they were added. The board info area,
/// the OEM record and the internal use area are single slots: setting one replaces the previous
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FruRecordStore {
    board_info: Option<BoardInfoArea>,
    dc_loads: Vec<DcLoadRecord>,
    dc_outputs: Vec<DcOutputRecord>,
    oem: Option<OemRecord>,
    internal_use: Option<InternalUseArea>,
}

impl FruRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the board info area, replacing any previous one.
    pub fn set_board_info_area(&mut self, area: BoardInfoArea) {
        self.board_info = Some(area);
    }

    /// Appends a DC load record.
    pub fn add_dc_load_record(&mut self, record: DcLoadRecord) {
        self.dc_loads.push(record);
    }

    /// Appends a DC output record.
    pub fn add_dc_output_record(&mut self, record: DcOutputRecord) {
        self.dc_outputs.push(record);
    }

    /// Sets the OEM record, replacing any previous one.
    pub fn set_oem_record(&mut self, record: OemRecord) {
        self.oem = Some(record);
    }

    /// Sets the internal use area, replacing any previous one.
    pub fn set_internal_use_area(&mut self, area: InternalUseArea) {
        self.internal_use = Some(area);
    }

    /// Removes the internal use area.
    pub fn clear_internal_use_area(&mut self) -> Option<InternalUseArea> {
        self.internal_use.take()
    }

    /// Board info area, if set
    pub fn board_info_area(&self) -> Option<&BoardInfoArea> {
        self.board_info.as_ref()
    }

    /// DC load records in the order they were added
    pub fn dc_load_records(&self) -> &[DcLoadRecord] {
        &self.dc_loads
    }

    /// DC output records in the order they were added
    pub fn dc_output_records(&self) -> &[DcOutputRecord] {
        &self.dc_outputs
    }

    /// OEM record, if set
    pub fn oem_record(&self) -> Option<&OemRecord> {
        self.oem.as_ref()
    }

    /// Internal use area, if set
    pub fn internal_use_area(&self) -> Option<&InternalUseArea> {
        self.internal_use.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = FruRecordStore::new();
        assert!(store.board_info_area().is_none());
        assert!(store.dc_load_records().is_empty());
        assert!(store.dc_output_records().is_empty());
        assert!(store.oem_record().is_none());
        assert!(store.internal_use_area().is_none());
    }

    #[test]
    fn test_dc_records_keep_insertion_order() {
        let mut store = FruRecordStore::new();
        for n in 0..3 {
            store.add_dc_load_record(DcLoadRecord { voltage_required: n, ..Default::default() });
            store.add_dc_output_record(DcOutputRecord { output_info: 10 + n, ..Default::default() });
        }

        let loads: Vec<u8> = store.dc_load_records().iter().map(|r| r.voltage_required).collect();
        assert_eq!(loads, [0, 1, 2]);
        let outputs: Vec<u8> = store.dc_output_records().iter().map(|r| r.output_info).collect();
        assert_eq!(outputs, [10, 11, 12]);
    }

    #[test]
    fn test_single_slots_overwrite() {
        let mut store = FruRecordStore::new();
        store.set_oem_record(OemRecord::new([1; 8]));
        store.set_oem_record(OemRecord::new([2; 8]));
        assert_eq!(store.oem_record(), Some(&OemRecord::new([2; 8])));

        store.set_internal_use_area(InternalUseArea::new(b"first"));
        store.set_internal_use_area(InternalUseArea::new(b"second"));
        assert_eq!(store.internal_use_area().map(|a| a.data.as_slice()), Some(&b"second"[..]));

        let mut board = BoardInfoArea::default();
        store.set_board_info_area(board.clone());
        board.language = 0x19;
        store.set_board_info_area(board);
        assert_eq!(store.board_info_area().map(|a| a.language), Some(0x19));
    }

    #[test]
    fn test_clear_internal_use_area() {
        let mut store = FruRecordStore::new();
        store.set_internal_use_area(InternalUseArea::new(b"blob"));
        assert!(store.clear_internal_use_area().is_some());
        assert!(store.internal_use_area().is_none());
    }
}
