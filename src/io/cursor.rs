// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Provides a "cursor" over a mutable byte buffer.
//!
//! [`Cursor`] is a fixed-capacity [`Write`] sink that remembers how far into
//! its buffer it has written. This is useful when you want to feed a scratch
//! buffer to an [`EndianWriter`] and then extract exactly the bytes that were
//! produced:
//! ```
//! # use binio::io::*;
//! let mut buf = [0; 16];
//! let mut w = EndianWriter::new(Cursor::new(&mut buf), Endianness::Little);
//! w.write_u16(0xfeff).unwrap();
//! w.write_u32(7).unwrap();
//!
//! let bytes = w.into_inner().into_written();
//! assert_eq!(bytes, &[0xff, 0xfe, 7, 0, 0, 0]);
//! ```
//!
//! [`Write`]: ../trait.Write.html
//! [`EndianWriter`]: ../struct.EndianWriter.html

use crate::io;
use crate::io::Write;

/// A write cursor over a buffer of memory.
///
/// See the [module documentation](index.html) for more information.
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    // Invariant: pos <= buf.len().
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new `Cursor` at the start of the given buffer.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written thus far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes that can still be written.
    pub fn remaining_capacity(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the portion of the buffer which has been written thus far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Rewinds the cursor to the start of the buffer.
    ///
    /// The buffer's contents are left as-is; they will be overwritten by
    /// subsequent writes.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Consumes the `Cursor`, returning the written portion of the buffer
    /// with the buffer's full lifetime.
    pub fn into_written(self) -> &'a mut [u8] {
        let Self { buf, pos } = self;
        &mut buf[..pos]
    }
}

impl Write for Cursor<'_> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), io::Error> {
        if self.remaining_capacity() < buf.len() {
            return Err(io::Error::BufferExhausted);
        }
        let end = self.pos + buf.len();
        self.buf[self.pos..end].copy_from_slice(buf);
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::Endianness;

    #[test]
    fn cursor() {
        let mut buf = [0; 8];
        let mut cursor = Cursor::new(&mut buf);

        cursor.write_endian::<u32>(0xffaaffaa, Endianness::Little).unwrap();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining_capacity(), 4);
        assert_eq!(cursor.written(), &[0xaa, 0xff, 0xaa, 0xff]);

        // A write that does not fit leaves the cursor where it was.
        assert_eq!(
            cursor.write_bytes(&[0x55; 5]),
            Err(io::Error::BufferExhausted)
        );
        assert_eq!(cursor.position(), 4);

        cursor.write_bytes(&[0x55; 4]).unwrap();
        assert_eq!(cursor.remaining_capacity(), 0);
        assert!(cursor.write_bytes(&[0]).is_err());
        assert!(cursor.write_bytes(&[]).is_ok());

        cursor.reset();
        cursor.write_endian::<u16>(0x0102, Endianness::Big).unwrap();
        assert_eq!(cursor.into_written(), &[0x01, 0x02]);
    }
}
