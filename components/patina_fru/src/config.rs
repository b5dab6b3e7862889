//! FRU encoder configuration
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

/// Order in which registered DC records are written to the multi-record area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordOrder {
    /// Records are written in the order they were added.
    #[default]
    Registration,
    /// The most recently added record is written first. Matches images produced by tools that
    /// kept records in a prepend-only list.
    LastRegisteredFirst,
}

/// Configuration for a [`FruEncoder`](crate::encoder::FruEncoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FruConfiguration {
    /// DC record order, applied to the load and output records separately
    pub record_order: RecordOrder,
}

impl FruConfiguration {
    /// Creates a configuration with the given record order.
    pub fn new(record_order: RecordOrder) -> Self {
        Self { record_order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_registration_order() {
        assert_eq!(FruConfiguration::default().record_order, RecordOrder::Registration);
    }

    #[test]
    fn test_new_sets_record_order() {
        let config = FruConfiguration::new(RecordOrder::LastRegisteredFirst);
        assert_eq!(config.record_order, RecordOrder::LastRegisteredFirst);
        assert_ne!(config, FruConfiguration::default());
    }
}
