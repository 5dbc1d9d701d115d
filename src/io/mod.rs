// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Endian-aware I/O, in lieu of [`std::io`].
//!
//! The [`Read`] and [`Write`] traits describe sequential byte sources and
//! sinks. They are mostly intended for manipulating byte buffers, but they
//! could be implemented on other types that provide a read/write interface.
//!
//! On top of them, [`EndianReader`] and [`EndianWriter`] read and write
//! fixed-width values (the [`Primitive`] types) in a byte order chosen once,
//! at construction:
//! ```
//! # use binio::io::*;
//! let mut buf = [0; 4];
//! let mut w = EndianWriter::new(&mut buf[..], Endianness::Big);
//! w.write_f32(13.5407705).unwrap();
//! assert_eq!(buf, [0x41, 0x58, 0xa6, 0xff]);
//!
//! let mut r = EndianReader::new(&buf[..], Endianness::Big);
//! assert_eq!(r.read_f32().unwrap(), 13.5407705);
//! ```
//!
//! Nothing here buffers or seeks: every call consumes exactly the bytes of
//! the value it reads or writes, in call order.
//!
//! [`std::io`]: https://doc.rust-lang.org/std/io/index.html

use core::fmt;

pub mod cursor;
pub mod endian;
pub mod read;
pub mod reader;
pub mod write;
pub mod writer;

pub use cursor::Cursor;
pub use endian::Endianness;
pub use endian::Primitive;
pub use endian::PrimitiveKind;
pub use read::Read;
pub use reader::EndianReader;
pub use write::Write;
pub use writer::EndianWriter;

#[cfg(feature = "std")]
pub use write::StdWrite;

/// A generic, low-level I/O error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates that a read asked for more bytes than the source had left.
    ///
    /// Nothing is consumed from the source when this error is returned, and
    /// no partially-read value is ever produced.
    InsufficientData {
        /// The number of bytes the read needed.
        required: usize,
        /// The number of bytes the source actually had.
        available: usize,
    },

    /// Indicates that a fixed-capacity sink has been completely used up.
    ///
    /// This is typically a fatal error, since it is probably not possible
    /// to re-allocate that underlying buffer.
    BufferExhausted,

    /// Indicates that an underlying writer refused a write.
    WriteFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "insufficient data: needed {} bytes, but only {} available",
                required, available
            ),
            Self::BufferExhausted => f.write_str("output buffer exhausted"),
            Self::WriteFailed => f.write_str("underlying write failed"),
        }
    }
}
