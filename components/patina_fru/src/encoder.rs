//! FRU image encoder
//!
//! Records are collected in a [`FruRecordStore`] and laid out by a [`FruEncoder`]. The per-area
//! writers are public so a single area can be emitted to a [`FruSink`](crate::sink::FruSink) on
//! its own.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

mod board;
mod checksum;
mod core;
mod header;
mod internal_use;
mod multirecord;
mod store;

pub use board::{board_info_area_checksum, board_info_area_size, write_board_info_area};
pub use checksum::{checksum_is_valid, zero_checksum};
pub use core::{FruEncoder, FruLayout};
pub use header::{seal_common_header, write_common_header};
pub use internal_use::write_internal_use_area;
pub use multirecord::{multirecord_area_size, multirecord_header, write_multirecord_area};
pub use store::FruRecordStore;
