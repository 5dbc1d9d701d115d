// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Byte orders, and the fixed-width values that can be read and written in
//! them.
//!
//! Reading a [`Primitive`] always proceeds the same way: pull exactly
//! `size_of::<P>()` bytes in stream order, interpret them as the native
//! in-memory representation of `P`, and then byte-swap the result if the
//! requested [`Endianness`] is not the native one. Writing is the exact
//! inverse.

use core::fmt;
use core::str::FromStr;

use crate::io;
use crate::io::Read;
use crate::io::Write;
use crate::swap::swap_if;
use crate::swap::ByteSwap;

#[cfg(feature = "arbitrary-derive")]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The order in which the bytes of a multi-byte value appear in a stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary-derive", derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Returns the byte order of the target this code was compiled for.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Returns whether `self` is the target's byte order.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }

    /// Returns whether values must be byte-swapped to convert between `self`
    /// and the native byte order.
    #[inline]
    pub const fn needs_swap(self) -> bool {
        !self.is_native()
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Big => "big",
            Self::Little => "little",
        })
    }
}

impl FromStr for Endianness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "big" | "be" | "Big" | "BE" => Ok(Self::Big),
            "little" | "le" | "Little" | "LE" => Ok(Self::Little),
            "native" => Ok(Self::native()),
            _ => Err(ParseError),
        }
    }
}

/// An error returned when parsing an [`Endianness`] or [`PrimitiveKind`] out
/// of a string fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unrecognized name")
    }
}

/// Generates [`PrimitiveKind`], along with its name and size tables.
macro_rules! primitive_kinds {
    ($($(#[$meta:meta])* $variant:ident => $name:literal, $size:expr,)*) => {
        /// The closed set of fixed-width value types that [`EndianReader`]
        /// and [`EndianWriter`] know how to handle.
        ///
        /// Every [`Primitive`] maps to exactly one `PrimitiveKind`, which
        /// allows callers to ask "is this type supported?" without any kind
        /// of runtime type introspection.
        ///
        /// [`EndianReader`]: ../struct.EndianReader.html
        /// [`EndianWriter`]: ../struct.EndianWriter.html
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "arbitrary-derive", derive(Arbitrary))]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum PrimitiveKind {
            $($(#[$meta])* $variant,)*
        }

        impl PrimitiveKind {
            /// Every supported kind, narrowest first.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the Rust name of this kind's type, such as `"u16"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns the number of bytes a value of this kind occupies in a
            /// stream.
            pub const fn size(self) -> usize {
                match self {
                    $(Self::$variant => $size,)*
                }
            }

            /// Looks up a kind by its Rust type name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    }
}

primitive_kinds! {
    /// `u8`.
    U8 => "u8", 1,
    /// `i8`.
    I8 => "i8", 1,
    /// `bool`, stored as a single byte.
    Bool => "bool", 1,
    /// `u16`.
    U16 => "u16", 2,
    /// `i16`.
    I16 => "i16", 2,
    /// `u32`.
    U32 => "u32", 4,
    /// `i32`.
    I32 => "i32", 4,
    /// `u64`.
    U64 => "u64", 8,
    /// `i64`.
    I64 => "i64", 8,
    /// `f32`, in IEEE 754 binary32 format.
    F32 => "f32", 4,
    /// `f64`, in IEEE 754 binary64 format.
    F64 => "f64", 8,
}

impl PrimitiveKind {
    /// Returns whether this kind is a signed integer.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns whether this kind is a floating-point number.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns whether values of this kind are affected by byte order.
    pub const fn is_multibyte(self) -> bool {
        self.size() > 1
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ParseError)
    }
}

/// The widest [`Primitive`], in bytes.
const MAX_SIZE: usize = 8;

/// A fixed-width value, which can be read and written in either byte order.
///
/// This trait can be used for operating generically over endian-aware I/O;
/// its implementations are exactly the types listed in [`PrimitiveKind`].
pub trait Primitive: ByteSwap {
    /// The kind tag for this type.
    const KIND: PrimitiveKind;

    /// Interprets `bytes` as the native in-memory representation of `Self`.
    ///
    /// `bytes.len()` must be exactly `Self::KIND.size()`.
    fn from_native_bytes(bytes: &[u8]) -> Self;

    /// Writes the native in-memory representation of `self` into `out`.
    ///
    /// `out.len()` must be exactly `Self::KIND.size()`.
    fn to_native_bytes(self, out: &mut [u8]);

    /// Reads a value of type `Self`, in the given byte order.
    #[inline]
    fn read_from<R: Read>(
        mut r: R,
        endianness: Endianness,
    ) -> Result<Self, io::Error> {
        let mut buf = [0; MAX_SIZE];
        let bytes = &mut buf[..Self::KIND.size()];
        r.read_bytes(bytes)?;
        Ok(swap_if(Self::from_native_bytes(bytes), endianness.needs_swap()))
    }

    /// Writes a value of type `Self`, in the given byte order.
    #[inline]
    fn write_to<W: Write>(
        self,
        mut w: W,
        endianness: Endianness,
    ) -> Result<(), io::Error> {
        let mut buf = [0; MAX_SIZE];
        let bytes = &mut buf[..Self::KIND.size()];
        swap_if(self, endianness.needs_swap()).to_native_bytes(bytes);
        w.write_bytes(bytes)
    }
}

impl Primitive for u8 {
    const KIND: PrimitiveKind = PrimitiveKind::U8;

    #[inline]
    fn from_native_bytes(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn to_native_bytes(self, out: &mut [u8]) {
        out[0] = self;
    }
}

impl Primitive for i8 {
    const KIND: PrimitiveKind = PrimitiveKind::I8;

    #[inline]
    fn from_native_bytes(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    #[inline]
    fn to_native_bytes(self, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

/// Any non-zero byte reads as `true`; `true` is always written as `1`.
impl Primitive for bool {
    const KIND: PrimitiveKind = PrimitiveKind::Bool;

    #[inline]
    fn from_native_bytes(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    #[inline]
    fn to_native_bytes(self, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

macro_rules! multibyte_primitive {
    ($($ty:ident => $kind:ident,)*) => {$(
        impl Primitive for $ty {
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline]
            fn from_native_bytes(bytes: &[u8]) -> Self {
                use byteorder::ByteOrder as _;
                paste::paste! {
                    byteorder::NativeEndian::[<read_ $ty>](bytes)
                }
            }

            #[inline]
            fn to_native_bytes(self, out: &mut [u8]) {
                use byteorder::ByteOrder as _;
                paste::paste! {
                    byteorder::NativeEndian::[<write_ $ty>](out, self)
                }
            }
        }
    )*}
}

multibyte_primitive! {
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn native() {
        #[cfg(target_endian = "little")]
        assert_eq!(Endianness::native(), Endianness::Little);
        #[cfg(target_endian = "big")]
        assert_eq!(Endianness::native(), Endianness::Big);

        assert!(Endianness::native().is_native());
        assert_ne!(Endianness::Big.needs_swap(), Endianness::Little.needs_swap());
    }

    #[test]
    fn kinds_match_types() {
        fn check<P: Primitive>() {
            assert_eq!(P::KIND.size(), core::mem::size_of::<P>());
            assert_eq!(PrimitiveKind::from_name(P::KIND.name()), Some(P::KIND));
        }
        check::<u8>();
        check::<i8>();
        check::<bool>();
        check::<u16>();
        check::<i16>();
        check::<u32>();
        check::<i32>();
        check::<u64>();
        check::<i64>();
        check::<f32>();
        check::<f64>();

        assert_eq!(PrimitiveKind::ALL.len(), 11);
        assert!(PrimitiveKind::ALL.iter().all(|k| k.size() <= MAX_SIZE));
    }

    #[test]
    fn kind_properties() {
        assert!(PrimitiveKind::I16.is_signed());
        assert!(!PrimitiveKind::U64.is_signed());
        assert!(!PrimitiveKind::F32.is_signed());
        assert!(PrimitiveKind::F64.is_float());
        assert!(!PrimitiveKind::Bool.is_multibyte());
        assert!(PrimitiveKind::U16.is_multibyte());
        assert_eq!("f32".parse(), Ok(PrimitiveKind::F32));
        assert_eq!("u128".parse::<PrimitiveKind>(), Err(ParseError));
    }

    #[test]
    fn parse_endianness() {
        assert_eq!("be".parse(), Ok(Endianness::Big));
        assert_eq!("little".parse(), Ok(Endianness::Little));
        assert_eq!("native".parse(), Ok(Endianness::native()));
        assert!("middle".parse::<Endianness>().is_err());
        assert_eq!(Endianness::Big.to_string(), "big");
    }

    #[test]
    fn stream_order() {
        let mut buf = [0u8; 4];
        0x0102_0304u32
            .write_to(&mut buf[..], Endianness::Big)
            .unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
        0x0102_0304u32
            .write_to(&mut buf[..], Endianness::Little)
            .unwrap();
        assert_eq!(buf, [4, 3, 2, 1]);

        assert_eq!(
            u32::read_from(&buf[..], Endianness::Little).unwrap(),
            0x0102_0304
        );
        assert_eq!(
            i32::read_from(&buf[..], Endianness::Big).unwrap(),
            0x0403_0201
        );
    }

    #[test]
    fn bool_bytes() {
        assert_eq!(bool::read_from(&[0x00u8][..], Endianness::Big), Ok(false));
        assert_eq!(bool::read_from(&[0x7fu8][..], Endianness::Big), Ok(true));
        let mut buf = [0xffu8];
        true.write_to(&mut buf[..], Endianness::Little).unwrap();
        assert_eq!(buf, [1]);
    }
}
