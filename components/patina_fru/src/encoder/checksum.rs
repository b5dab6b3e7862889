//! Zero checksum shared by every FRU area
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

/// Computes the zero checksum of `bytes`
///
/// Returns the byte value such that the sum of `bytes` followed by that value equals zero
/// (modulo 256). Used for the common header, the board info area and both checksums of every
/// multi-record.
pub fn zero_checksum(bytes: &[u8]) -> u8 {
    let sum: u8 = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Whether `bytes`, checksum included, sum to zero (modulo 256)
pub fn checksum_is_valid(bytes: &[u8]) -> bool {
    zero_checksum(bytes) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::vec::Vec;

    #[test]
    fn test_zero_checksum_empty() {
        assert_eq!(zero_checksum(&[]), 0);
    }

    #[test]
    fn test_zero_checksum_wraps() {
        assert_eq!(zero_checksum(&[0x01]), 0xFF);
        assert_eq!(zero_checksum(&[0xFF, 0xFF]), 0x02);
        assert_eq!(zero_checksum(&[0x80, 0x80]), 0x00);
    }

    #[test]
    fn test_appended_checksum_sums_to_zero() {
        let mut bytes: Vec<u8> = (0u8..=200).collect();
        let checksum = zero_checksum(&bytes);
        bytes.push(checksum);
        assert!(checksum_is_valid(&bytes));

        bytes[3] ^= 0x10;
        assert!(!checksum_is_valid(&bytes));
    }
}
