// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Provides the [`Write`] trait, analogous to [`std::io::Write`].

use core::mem;

use static_assertions::assert_obj_safe;

use crate::io;
use crate::io::endian::Endianness;
use crate::io::endian::Primitive;

/// Represents a place that bytes can be written to, such as a `&mut [u8]`.
///
/// Bytes go in stream order; whatever error the sink reports is passed
/// through to callers unchanged.
///
/// # Relation with [`std::io::Write`]
/// [`std::io::Write`] provides approximately a superset of `Write`, with
/// more detailed errors. [`StdWrite`] provides an implementation of
/// `Write` in terms of [`std::io::Write`].
pub trait Write {
    /// Attempt to write `buf` exactly to `self`.
    ///
    /// This function does not perform partial writes: it will either block
    /// until completion or return an error.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), io::Error>;

    /// Writes a fixed-width value in the given byte order.
    ///
    /// # Note
    /// Do not implement this function yourself. Callers are not required to
    /// call it in order to actually perform a write, so whether or not it is
    /// called is an implementation detail.
    #[inline]
    fn write_endian<P: Primitive>(
        &mut self,
        val: P,
        endianness: Endianness,
    ) -> Result<(), io::Error>
    where
        Self: Sized,
    {
        val.write_to(self, endianness)
    }
}

assert_obj_safe!(Write);

impl<W: Write + ?Sized> Write for &'_ mut W {
    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), io::Error> {
        W::write_bytes(*self, buf)
    }
}

impl Write for &'_ mut [u8] {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), io::Error> {
        let n = buf.len();
        if self.len() < n {
            return Err(io::Error::BufferExhausted);
        }

        let (dest, rest) = mem::replace(self, &mut []).split_at_mut(n);
        dest.copy_from_slice(buf);
        *self = rest;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl Write for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), io::Error> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

// This allows us to refer to types via the `binio` prefix in the
// doc comments below, which is useful for clarity between `std` and
// `binio` IO traits.
#[cfg(doc)]
use crate as binio;

/// Converts a [`std::io::Write`] into a [`binio::io::Write`].
///
/// [`binio::io::Write::write_bytes()`] is implemented by simply calling
/// [`std::io::Write::write()`] repeatedly until every byte is written;
/// [`binio::io::Write`] should be implemented directly if possible.
///
/// Any failure of the underlying writer, including a write that accepts zero
/// bytes, is reported as [`io::Error::WriteFailed`].
///
/// This type is provided instead of implementing [`binio::io::Write`]
/// directly for every [`std::io::Write`] due to trait coherence issues
/// involving the blanket impl on `&mut _`.
#[cfg(feature = "std")]
pub struct StdWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdWrite<W> {
    fn write_bytes(&mut self, mut buf: &[u8]) -> Result<(), io::Error> {
        use std::io::ErrorKind;
        while !buf.is_empty() {
            match self.0.write(buf).map_err(|e| e.kind()) {
                Ok(0) => {
                    warn!("writer accepted zero bytes; {} left", buf.len());
                    return Err(io::Error::WriteFailed);
                }
                Ok(len) => buf = &buf[len..],
                Err(ErrorKind::Interrupted) => continue,
                Err(_kind) => {
                    warn!("underlying write failed: {:?}", _kind);
                    return Err(io::Error::WriteFailed);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::Read;

    #[test]
    fn read_and_write_bytes() {
        let mut buf = [0; 6];
        let mut bytes = &mut buf[..];
        bytes.write_bytes(b"Wo").unwrap();
        bytes.write_bytes(b"r").unwrap();
        assert_eq!(bytes.len(), 3);
        bytes.write_endian::<u16>(0x6c64, Endianness::Big).unwrap();
        assert_eq!(bytes.len(), 1);
        assert_eq!(bytes.write_bytes(b"!!"), Err(io::Error::BufferExhausted));
        bytes.write_endian::<u8>(b'!', Endianness::Big).unwrap();
        assert_eq!(bytes.len(), 0);
        assert_eq!(&buf, b"World!");

        let mut bytes = &buf[..];
        assert_eq!(
            bytes.read_endian::<u32>(Endianness::Little).unwrap(),
            0x6c726f57
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn vec() {
        let mut buf = Vec::new();
        buf.write_endian::<u32>(0x04030201, Endianness::Little).unwrap();
        buf.write_endian::<u16>(0x0506, Endianness::Big).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn std_write() {
        let mut buf = [0; 4];
        let mut std_write = StdWrite(&mut buf[..]);
        std_write
            .write_endian::<u32>(0x04030201, Endianness::Little)
            .unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn std_write_full() {
        let mut buf = [0; 2];
        let mut std_write = StdWrite(&mut buf[..]);
        assert_eq!(
            std_write.write_bytes(&[1, 2, 3]),
            Err(io::Error::WriteFailed)
        );
    }
}
