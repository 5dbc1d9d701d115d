// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Provides [`EndianReader`], a typed reader over a [`Read`].

use crate::io;
use crate::io::read::check_available;
use crate::io::Endianness;
use crate::io::Primitive;
use crate::io::Read;

/// A reader of fixed-width values in a fixed byte order.
///
/// An `EndianReader` exclusively owns its source for its whole lifetime, and
/// its byte order never changes once chosen. Every read consumes exactly the
/// bytes of the value read; a read that cannot be satisfied consumes nothing
/// and returns [`io::Error::InsufficientData`].
///
/// ```
/// # use binio::io::*;
/// let bytes = [0x00, 0x2a, 0xff, 0xfe];
/// let mut r = EndianReader::new(&bytes[..], Endianness::Big);
/// assert_eq!(r.read_u16().unwrap(), 42);
/// assert_eq!(r.read_i16().unwrap(), -2);
/// assert!(r.read_u8().is_err());
/// ```
pub struct EndianReader<R> {
    inner: R,
    endianness: Endianness,
}

macro_rules! read_methods {
    ($($ty:ident),* $(,)?) => {paste::paste! {$(
        #[doc = "Reads a `" $ty "` in this reader's byte order."]
        #[inline]
        pub fn [<read_ $ty>](&mut self) -> Result<$ty, io::Error> {
            self.read::<$ty>()
        }
    )*}}
}

impl<R: Read> EndianReader<R> {
    /// Creates a new `EndianReader` over `inner`, which will interpret all
    /// values as `endianness`.
    pub fn new(inner: R, endianness: Endianness) -> Self {
        trace!(
            "new {} endian reader over {} bytes",
            endianness,
            inner.remaining_data()
        );
        Self { inner, endianness }
    }

    /// Returns the byte order this reader was created with.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns the number of bytes still available in the underlying source.
    pub fn remaining_data(&self) -> usize {
        self.inner.remaining_data()
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps this `EndianReader`, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads a single value of type `P`.
    #[inline]
    pub fn read<P: Primitive>(&mut self) -> Result<P, io::Error> {
        P::read_from(&mut self.inner, self.endianness)
    }

    read_methods!(u8, i8, bool, u16, i16, u32, i32, u64, i64, f32, f64);

    /// Reads exactly `out.len()` raw bytes, without any reordering.
    pub fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), io::Error> {
        self.inner.read_bytes(out)
    }

    /// Fills `out` with consecutive values of type `P`.
    ///
    /// The whole array is checked against the remaining data before anything
    /// is consumed, so on failure `out` and the source are left untouched.
    pub fn read_array<P: Primitive>(
        &mut self,
        out: &mut [P],
    ) -> Result<(), io::Error> {
        let available = self.inner.remaining_data();
        let required = out
            .len()
            .checked_mul(P::KIND.size())
            .unwrap_or(usize::MAX);
        check_available(required, available)?;

        for val in out {
            *val = self.read()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use testutil::hex;

    #[test]
    fn read_f32_be() {
        let bytes = hex::parse("4158 a6ff");
        let mut r = EndianReader::new(&bytes[..], Endianness::Big);
        assert_eq!(r.read_f32().unwrap(), 13.5407705);
        assert_eq!(r.remaining_data(), 0);
    }

    #[test]
    fn read_f32_le() {
        let bytes = hex::parse("ffa6 5841");
        let mut r = EndianReader::new(&bytes[..], Endianness::Little);
        assert_eq!(r.read_f32().unwrap(), 13.5407705);
    }

    #[test]
    fn every_width() {
        let bytes = hex::parse(
            "
            01
            fe
            02
            0102
            fffe
            01020304
            fffffffe
            0102030405060708
            fffffffffffffffe
            3ff0000000000000
            ",
        );

        let mut r = EndianReader::new(&bytes[..], Endianness::Big);
        assert_eq!(r.read_u8().unwrap(), 1);
        assert_eq!(r.read_i8().unwrap(), -2);
        assert_eq!(r.read_bool().unwrap(), true);
        assert_eq!(r.read_u16().unwrap(), 0x0102);
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_u32().unwrap(), 0x0102_0304);
        assert_eq!(r.read_i32().unwrap(), -2);
        assert_eq!(r.read_u64().unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(r.read_i64().unwrap(), -2);
        assert_eq!(r.read_f64().unwrap(), 1.0);
        assert_eq!(r.remaining_data(), 0);

        let mut r = EndianReader::new(&bytes[3..], Endianness::Little);
        assert_eq!(r.read_u16().unwrap(), 0x0201);
        assert_eq!(r.read_i16().unwrap(), -257);
        assert_eq!(r.read_u32().unwrap(), 0x0403_0201);
    }

    #[test]
    fn insufficient_data() {
        let bytes = hex::parse("0102 03");
        let mut r = EndianReader::new(&bytes[..], Endianness::Little);
        assert_eq!(
            r.read_u32(),
            Err(io::Error::InsufficientData {
                required: 4,
                available: 3,
            })
        );
        // Nothing was consumed by the failed read.
        assert_eq!(r.remaining_data(), 3);
        assert_eq!(r.read_u16().unwrap(), 0x0201);
        assert!(r.read_f64().is_err());
        assert_eq!(r.read_u8().unwrap(), 3);
        assert!(r.read_u8().is_err());
    }

    #[test]
    fn arrays() {
        let bytes = hex::parse("0001 0002 0003");
        let mut r = EndianReader::new(&bytes[..], Endianness::Big);

        let mut too_many = [0u16; 4];
        assert_eq!(
            r.read_array(&mut too_many),
            Err(io::Error::InsufficientData {
                required: 8,
                available: 6,
            })
        );
        assert_eq!(too_many, [0; 4]);

        let mut vals = [0u16; 3];
        r.read_array(&mut vals).unwrap();
        assert_eq!(vals, [1, 2, 3]);
        assert_eq!(r.into_inner().len(), 0);
    }
}
