// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Byte-order reversal for fixed-width values.
//!
//! All functions in this module are pure and total. Floating-point values are
//! swapped by way of their IEEE 754 bit pattern, so NaN payloads and
//! infinities survive untouched. Signed values are swapped by way of their
//! two's complement bit pattern: the sign bit travels with its byte.

const MASK0: u64 = 0xff << (0 * 8);
const MASK1: u64 = 0xff << (1 * 8);
const MASK2: u64 = 0xff << (2 * 8);
const MASK3: u64 = 0xff << (3 * 8);
const MASK4: u64 = 0xff << (4 * 8);
const MASK5: u64 = 0xff << (5 * 8);
const MASK6: u64 = 0xff << (6 * 8);
const MASK7: u64 = 0xff << (7 * 8);

/// Reverses the two bytes of `x`.
#[inline]
pub const fn swap16(x: u16) -> u16 {
    x << 8 | x >> 8
}

/// Reverses the four bytes of `x`.
#[inline]
pub const fn swap32(x: u32) -> u32 {
    x << (3 * 8)
        | x << 8 & MASK2 as u32
        | x >> 8 & MASK1 as u32
        | x >> (3 * 8)
}

/// Reverses the eight bytes of `x`.
#[inline]
pub const fn swap64(x: u64) -> u64 {
    x << (7 * 8) & MASK7
        | x << (5 * 8) & MASK6
        | x << (3 * 8) & MASK5
        | x << 8 & MASK4
        | x >> 8 & MASK3
        | x >> (3 * 8) & MASK2
        | x >> (5 * 8) & MASK1
        | x >> (7 * 8) & MASK0
}

/// Reverses the bytes of the bit pattern of `x`.
#[inline]
pub const fn swap_f32(x: f32) -> f32 {
    f32::from_bits(swap32(x.to_bits()))
}

/// Reverses the bytes of the bit pattern of `x`.
#[inline]
pub const fn swap_f64(x: f64) -> f64 {
    f64::from_bits(swap64(x.to_bits()))
}

/// Reverses the bytes of `x` if `condition` holds; otherwise, returns `x`
/// unchanged.
///
/// [`io::EndianReader`] and [`io::EndianWriter`] use this with the condition
/// "the requested byte order is not the native one".
///
/// [`io::EndianReader`]: ../io/struct.EndianReader.html
/// [`io::EndianWriter`]: ../io/struct.EndianWriter.html
#[inline]
pub fn swap_if<T: ByteSwap>(x: T, condition: bool) -> T {
    if condition {
        x.swap()
    } else {
        x
    }
}

/// A fixed-width value whose byte order can be reversed.
///
/// For every implementation, `x.swap().swap()` must be bit-identical to `x`.
pub trait ByteSwap: Sized + Copy {
    /// Returns `self` with its byte order reversed.
    fn swap(self) -> Self;
}

impl ByteSwap for u8 {
    #[inline]
    fn swap(self) -> Self {
        self
    }
}

impl ByteSwap for i8 {
    #[inline]
    fn swap(self) -> Self {
        self
    }
}

impl ByteSwap for bool {
    #[inline]
    fn swap(self) -> Self {
        self
    }
}

macro_rules! byte_swap {
    ($($ty:ty => $unsigned:ty, $swap:ident;)*) => {$(
        impl ByteSwap for $ty {
            #[inline]
            fn swap(self) -> Self {
                $swap(self as $unsigned) as $ty
            }
        }
    )*}
}

byte_swap! {
    u16 => u16, swap16;
    i16 => u16, swap16;
    u32 => u32, swap32;
    i32 => u32, swap32;
    u64 => u64, swap64;
    i64 => u64, swap64;
}

impl ByteSwap for f32 {
    #[inline]
    fn swap(self) -> Self {
        swap_f32(self)
    }
}

impl ByteSwap for f64 {
    #[inline]
    fn swap(self) -> Self {
        swap_f64(self)
    }
}
