// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Provides the [`Read`] trait, analogous to [`std::io::Read`].

use core::mem;

use static_assertions::assert_obj_safe;

use crate::io;
use crate::io::endian::Endianness;
use crate::io::endian::Primitive;

/// Represents a place that bytes can be read from, such as a `&[u8]`.
///
/// Bytes come out in stream order: the order in which they physically
/// appear, regardless of how they will later be interpreted.
///
/// # Relation with [`std::io::Read`]
/// [`std::io::Read`] is distinct from `Read`, since `Read` must know,
/// a-priori, the total length of the underlying buffer, so that it can
/// refuse a short read up front rather than half-way through.
///
/// The recommended way to use a [`std::io::Read`] with a `binio` API is to
/// use `read_to_end(&mut buf)` and to then pass `&buf[..]` into `binio`.
pub trait Read {
    /// Reads exactly `out.len()` bytes from `self`.
    ///
    /// If fewer bytes than that are available, this function must return
    /// [`io::Error::InsufficientData`] without consuming anything.
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), io::Error>;

    /// Returns the number of bytes still available to read.
    fn remaining_data(&self) -> usize;

    /// Reads a fixed-width value in the given byte order.
    ///
    /// # Note
    /// Do not implement this function yourself. Callers are not required to
    /// call it in order to actually perform a read, so whether or not it is
    /// called is an implementation detail.
    #[inline]
    fn read_endian<P: Primitive>(
        &mut self,
        endianness: Endianness,
    ) -> Result<P, io::Error>
    where
        Self: Sized,
    {
        P::read_from(self, endianness)
    }
}
assert_obj_safe!(Read);

impl<R: Read + ?Sized> Read for &'_ mut R {
    #[inline]
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), io::Error> {
        R::read_bytes(*self, out)
    }

    #[inline]
    fn remaining_data(&self) -> usize {
        R::remaining_data(*self)
    }
}

/// Checks that `n` bytes can be taken out of a source holding `available`.
#[inline]
pub(crate) fn check_available(
    n: usize,
    available: usize,
) -> Result<(), io::Error> {
    if available < n {
        return Err(io::Error::InsufficientData {
            required: n,
            available,
        });
    }
    Ok(())
}

impl Read for &[u8] {
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), io::Error> {
        let n = out.len();
        check_available(n, self.len())?;

        out.copy_from_slice(&self[..n]);
        *self = &self[n..];
        Ok(())
    }

    fn remaining_data(&self) -> usize {
        self.len()
    }
}

impl Read for &mut [u8] {
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), io::Error> {
        let n = out.len();
        check_available(n, self.len())?;

        out.copy_from_slice(&self[..n]);
        let buf = mem::replace(self, &mut []);
        *self = &mut buf[n..];
        Ok(())
    }

    fn remaining_data(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_bytes() {
        let mut bytes: &[u8] = b"Hello!";
        let mut three_bytes = [0; 3];
        bytes.read_bytes(&mut three_bytes).unwrap();
        assert_eq!(&three_bytes[..], b"Hel");
        assert_eq!(bytes.remaining_data(), 3);
        assert_eq!(
            bytes.read_endian::<u16>(Endianness::Little).unwrap(),
            0x6f6c
        );
        assert_eq!(bytes.remaining_data(), 1);
    }

    #[test]
    fn short_read_consumes_nothing() {
        let mut bytes: &[u8] = &[1, 2, 3];
        let mut out = [0xaa; 4];
        assert_eq!(
            bytes.read_bytes(&mut out),
            Err(io::Error::InsufficientData {
                required: 4,
                available: 3,
            })
        );
        assert_eq!(out, [0xaa; 4]);
        assert_eq!(bytes, &[1, 2, 3]);
    }

    #[test]
    fn mut_slice() {
        let mut buf = [0x12u8, 0x34, 0x56];
        let mut bytes = &mut buf[..];
        assert_eq!(bytes.read_endian::<u16>(Endianness::Big).unwrap(), 0x1234);
        assert_eq!(bytes.remaining_data(), 1);
        assert!(bytes.read_endian::<u16>(Endianness::Big).is_err());
        assert_eq!(bytes.read_endian::<u8>(Endianness::Big).unwrap(), 0x56);
    }
}
