// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Provides [`EndianWriter`], a typed writer over a [`Write`].

use crate::io;
use crate::io::Endianness;
use crate::io::Primitive;
use crate::io::Write;

/// A writer of fixed-width values in a fixed byte order.
///
/// This is the mirror image of [`EndianReader`]: writing a value with an
/// `EndianWriter` and reading it back with an [`EndianReader`] of the same
/// byte order reproduces it bit-for-bit.
///
/// Errors from the underlying sink are returned exactly as the sink reported
/// them.
///
/// [`EndianReader`]: struct.EndianReader.html
pub struct EndianWriter<W> {
    inner: W,
    endianness: Endianness,
}

macro_rules! write_methods {
    ($($ty:ident),* $(,)?) => {paste::paste! {$(
        #[doc = "Writes a `" $ty "` in this writer's byte order."]
        #[inline]
        pub fn [<write_ $ty>](&mut self, val: $ty) -> Result<(), io::Error> {
            self.write::<$ty>(val)
        }
    )*}}
}

impl<W: Write> EndianWriter<W> {
    /// Creates a new `EndianWriter` over `inner`, which will emit all values
    /// as `endianness`.
    pub fn new(inner: W, endianness: Endianness) -> Self {
        trace!("new {} endian writer", endianness);
        Self { inner, endianness }
    }

    /// Returns the byte order this writer was created with.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps this `EndianWriter`, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes a single value of type `P`.
    #[inline]
    pub fn write<P: Primitive>(&mut self, val: P) -> Result<(), io::Error> {
        val.write_to(&mut self.inner, self.endianness)
    }

    write_methods!(u8, i8, bool, u16, i16, u32, i32, u64, i64, f32, f64);

    /// Writes `buf` as-is, without any reordering.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<(), io::Error> {
        self.inner.write_bytes(buf)
    }

    /// Writes every value in `vals`, in order.
    pub fn write_array<P: Primitive>(
        &mut self,
        vals: &[P],
    ) -> Result<(), io::Error> {
        for &val in vals {
            self.write(val)?;
        }
        Ok(())
    }
}
