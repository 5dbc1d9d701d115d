// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Single-bit access within a byte.
//!
//! Bits are addressed by an index in `0..8`, whose meaning depends on a
//! [`BitOrder`]:
//! - With [`BitOrder::MsbFirst`], index `0` is the most significant bit
//!   (`0x80`) and index `7` is the least significant bit (`0x01`).
//! - With [`BitOrder::LsbFirst`], index `0` is the least significant bit
//!   (`0x01`) and index `7` is the most significant bit (`0x80`).
//!
//! These functions are useful for decoding flag fields, where each bit of a
//! byte carries an independent boolean.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "arbitrary-derive")]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of bits in a byte.
pub const BITS_PER_BYTE: usize = 8;

/// The order in which the bits of a byte are indexed.
///
/// See the [module documentation](index.html) for details.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary-derive", derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitOrder {
    /// Index `0` is the most significant bit.
    MsbFirst,
    /// Index `0` is the least significant bit.
    LsbFirst,
}

impl BitOrder {
    /// Returns the opposite bit order.
    pub const fn reverse(self) -> Self {
        match self {
            Self::MsbFirst => Self::LsbFirst,
            Self::LsbFirst => Self::MsbFirst,
        }
    }
}

impl FromStr for BitOrder {
    type Err = ParseBitOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msb" | "msb-first" | "MsbFirst" => Ok(Self::MsbFirst),
            "lsb" | "lsb-first" | "LsbFirst" => Ok(Self::LsbFirst),
            _ => Err(ParseBitOrderError),
        }
    }
}

/// An error returned when parsing a [`BitOrder`] from a string fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseBitOrderError;

impl fmt::Display for ParseBitOrderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("expected one of `msb` or `lsb`")
    }
}

/// A bit-access error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates that a bit index outside of `0..8` was requested.
    ///
    /// This is a contract violation on the caller's part; retrying with the
    /// same index will never succeed.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index } => write!(
                f,
                "bit index {} out of range 0..{}",
                index, BITS_PER_BYTE
            ),
        }
    }
}

/// Returns the eight bits of `byte`, in the given order.
///
/// ```
/// # use binio::bits::*;
/// let bits = get_bits(0x80, BitOrder::MsbFirst);
/// assert!(bits[0]);
/// assert!(!bits[7]);
/// ```
pub fn get_bits(byte: u8, order: BitOrder) -> [bool; BITS_PER_BYTE] {
    let mut bits = [false; BITS_PER_BYTE];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = byte & mask_unchecked(i, order) != 0;
    }
    bits
}

/// Assembles a byte out of eight bits, in the given order.
///
/// This is the inverse of [`get_bits()`].
pub fn from_bits(bits: &[bool; BITS_PER_BYTE], order: BitOrder) -> u8 {
    bits.iter()
        .enumerate()
        .filter(|&(_, &bit)| bit)
        .fold(0, |byte, (i, _)| byte | mask_unchecked(i, order))
}

/// Returns a byte with only the bit at `index` set, in the given order.
///
/// Fails with [`Error::IndexOutOfRange`] if `index` is not in `0..8`.
pub fn bit_mask(index: usize, order: BitOrder) -> Result<u8, Error> {
    if index >= BITS_PER_BYTE {
        return Err(Error::IndexOutOfRange { index });
    }
    Ok(mask_unchecked(index, order))
}

/// Returns whether the bit at `index` of `byte` is set, in the given order.
///
/// Fails with [`Error::IndexOutOfRange`] if `index` is not in `0..8`.
pub fn get_bit(byte: u8, index: usize, order: BitOrder) -> Result<bool, Error> {
    bit_mask(index, order).map(|mask| byte & mask != 0)
}

// NOTE: `index` must already be known to be less than `BITS_PER_BYTE`.
#[inline(always)]
fn mask_unchecked(index: usize, order: BitOrder) -> u8 {
    match order {
        BitOrder::MsbFirst => 0x80 >> index,
        BitOrder::LsbFirst => 0x01 << index,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn one_hot(index: usize) -> [bool; BITS_PER_BYTE] {
        let mut bits = [false; BITS_PER_BYTE];
        bits[index] = true;
        bits
    }

    #[test]
    fn single_bits() {
        assert_eq!(get_bits(0x01, BitOrder::LsbFirst), one_hot(0));
        assert_eq!(get_bits(0x01, BitOrder::MsbFirst), one_hot(7));
        assert_eq!(get_bits(0x80, BitOrder::MsbFirst), one_hot(0));
        assert_eq!(get_bits(0x80, BitOrder::LsbFirst), one_hot(7));
    }

    #[test]
    fn all_or_nothing() {
        for &order in &[BitOrder::MsbFirst, BitOrder::LsbFirst] {
            assert_eq!(get_bits(0xff, order), [true; BITS_PER_BYTE]);
            assert_eq!(get_bits(0x00, order), [false; BITS_PER_BYTE]);
        }
    }

    #[test]
    fn first_bit_every_byte() {
        for b in 0..=u8::MAX {
            assert_eq!(get_bits(b, BitOrder::MsbFirst)[0], b & 0x80 != 0);
            assert_eq!(get_bits(b, BitOrder::LsbFirst)[0], b & 0x01 != 0);
        }
    }

    #[test]
    fn orders_are_mirrors() {
        for b in 0..=u8::MAX {
            let mut lsb = get_bits(b, BitOrder::LsbFirst);
            lsb.reverse();
            assert_eq!(get_bits(b, BitOrder::MsbFirst), lsb);
        }
    }

    #[test]
    fn from_bits_inverts_get_bits() {
        for b in 0..=u8::MAX {
            for &order in &[BitOrder::MsbFirst, BitOrder::LsbFirst] {
                assert_eq!(from_bits(&get_bits(b, order), order), b);
            }
        }
    }

    #[test]
    fn masks() {
        assert_eq!(bit_mask(0, BitOrder::MsbFirst), Ok(0x80));
        assert_eq!(bit_mask(0, BitOrder::LsbFirst), Ok(0x01));
        assert_eq!(bit_mask(7, BitOrder::MsbFirst), Ok(0x01));
        assert_eq!(bit_mask(7, BitOrder::LsbFirst), Ok(0x80));
        assert_eq!(bit_mask(3, BitOrder::MsbFirst), Ok(0x10));
        assert_eq!(bit_mask(3, BitOrder::LsbFirst), Ok(0x08));

        for i in 0..BITS_PER_BYTE {
            let msb = bit_mask(i, BitOrder::MsbFirst).unwrap();
            let lsb = bit_mask(i, BitOrder::LsbFirst).unwrap();
            assert_eq!(msb.count_ones(), 1);
            assert_eq!(msb, lsb.reverse_bits());
        }
    }

    #[test]
    fn out_of_range() {
        for &order in &[BitOrder::MsbFirst, BitOrder::LsbFirst] {
            assert_eq!(
                bit_mask(8, order),
                Err(Error::IndexOutOfRange { index: 8 })
            );
            assert_eq!(
                bit_mask(usize::MAX, order),
                Err(Error::IndexOutOfRange { index: usize::MAX })
            );
            assert!(get_bit(0xff, 8, order).is_err());
        }
    }

    #[test]
    fn single_bit_lookup() {
        assert_eq!(get_bit(0b0100_0000, 1, BitOrder::MsbFirst), Ok(true));
        assert_eq!(get_bit(0b0100_0000, 1, BitOrder::LsbFirst), Ok(false));
        assert_eq!(get_bit(0b0100_0000, 6, BitOrder::LsbFirst), Ok(true));
    }

    #[test]
    fn parse_order() {
        assert_eq!("msb".parse(), Ok(BitOrder::MsbFirst));
        assert_eq!("lsb-first".parse(), Ok(BitOrder::LsbFirst));
        assert!("middle".parse::<BitOrder>().is_err());
        assert_eq!(BitOrder::MsbFirst.reverse(), BitOrder::LsbFirst);
    }
}
