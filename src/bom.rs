// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Text-encoding byte-order marks.
//!
//! This module contains a fixed catalog of every byte-order mark (BOM) in
//! common use, and a detector that identifies which of them, if any, a byte
//! stream begins with.
//!
//! # Detection
//!
//! Some marks are prefixes of others: the UTF-32 LE mark, `ff fe 00 00`,
//! begins with the UTF-16 LE mark, `ff fe`. [`ByteOrderMark::detect()`]
//! resolves this by walking the distinct mark lengths in the catalog,
//! shortest first. At each length `n`, the candidates are the marks at least
//! `n` bytes long that agree with the input: either the input starts with the
//! whole mark, or the input is shorter than the mark and the mark starts with
//! the whole input. Detection succeeds at the first length with exactly one
//! candidate, provided the input actually contains that candidate's whole
//! mark.
//!
//! If the input runs out before a length is reached, detection gives up. In
//! particular, an input of exactly `ff fe` is *not* detected: it could still
//! turn out to be UTF-32 LE once more data arrives, and guessing is worse
//! than reporting nothing.
//!
//! Not finding a mark is a normal outcome, so detection returns an [`Option`]
//! rather than an error.

use core::fmt;

use crate::io;
use crate::io::Endianness;
use crate::io::Write;

#[cfg(feature = "arbitrary-derive")]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A text codec associated with a [`ByteOrderMark`].
///
/// Only the Unicode transformation formats in everyday use get one; the
/// rarer encodings in the catalog have no associated codec.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary-derive", derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Codec {
    /// UTF-8.
    Utf8,
    /// UTF-16, big-endian.
    Utf16Be,
    /// UTF-16, little-endian.
    Utf16Le,
    /// UTF-32, big-endian.
    Utf32Be,
    /// UTF-32, little-endian.
    Utf32Le,
}

impl Codec {
    /// Returns the size of this codec's code units, in bytes.
    pub const fn code_unit_size(self) -> usize {
        match self {
            Self::Utf8 => 1,
            Self::Utf16Be | Self::Utf16Le => 2,
            Self::Utf32Be | Self::Utf32Le => 4,
        }
    }

    /// Returns the byte order of this codec's code units, if they are wider
    /// than a byte.
    pub const fn endianness(self) -> Option<Endianness> {
        match self {
            Self::Utf8 => None,
            Self::Utf16Be | Self::Utf32Be => Some(Endianness::Big),
            Self::Utf16Le | Self::Utf32Le => Some(Endianness::Little),
        }
    }
}

/// A byte-order mark: the bytes that open a stream in some text encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ByteOrderMark {
    bytes: &'static [u8],
    encoding_name: &'static str,
    codec: Option<Codec>,
}

impl ByteOrderMark {
    /// UTF-8.
    pub const UTF8: Self =
        Self::new(&[0xef, 0xbb, 0xbf], "UTF-8", Some(Codec::Utf8));
    /// UTF-16, big-endian.
    pub const UTF16_BE: Self =
        Self::new(&[0xfe, 0xff], "UTF-16 BE", Some(Codec::Utf16Be));
    /// UTF-16, little-endian.
    pub const UTF16_LE: Self =
        Self::new(&[0xff, 0xfe], "UTF-16 LE", Some(Codec::Utf16Le));
    /// UTF-32, big-endian.
    pub const UTF32_BE: Self = Self::new(
        &[0x00, 0x00, 0xfe, 0xff],
        "UTF-32 BE",
        Some(Codec::Utf32Be),
    );
    /// UTF-32, little-endian.
    pub const UTF32_LE: Self = Self::new(
        &[0xff, 0xfe, 0x00, 0x00],
        "UTF-32 LE",
        Some(Codec::Utf32Le),
    );
    /// UTF-7.
    pub const UTF7: Self = Self::new(&[0x2b, 0x2f, 0x76], "UTF-7", None);
    /// UTF-1.
    pub const UTF1: Self = Self::new(&[0xf7, 0x64, 0x4c], "UTF-1", None);
    /// UTF-EBCDIC.
    pub const UTF_EBCDIC: Self =
        Self::new(&[0xdd, 0x73, 0x66, 0x73], "UTF-EBCDIC", None);
    /// Standard Compression Scheme for Unicode.
    pub const SCSU: Self = Self::new(&[0x0e, 0xfe, 0xff], "SCSU", None);
    /// Binary Ordered Compression for Unicode.
    pub const BOCU1: Self = Self::new(&[0xfb, 0xee, 0x28], "BOCU-1", None);
    /// GB 18030.
    pub const GB18030: Self =
        Self::new(&[0x84, 0x31, 0x95, 0x33], "GB18030", None);

    /// The complete catalog of known marks.
    pub const ALL: &'static [Self] = &[
        Self::UTF8,
        Self::UTF16_BE,
        Self::UTF16_LE,
        Self::UTF32_BE,
        Self::UTF32_LE,
        Self::UTF7,
        Self::UTF1,
        Self::UTF_EBCDIC,
        Self::SCSU,
        Self::BOCU1,
        Self::GB18030,
    ];

    /// The length of the longest mark in the catalog.
    pub const MAX_LEN: usize = 4;

    const fn new(
        bytes: &'static [u8],
        encoding_name: &'static str,
        codec: Option<Codec>,
    ) -> Self {
        Self {
            bytes,
            encoding_name,
            codec,
        }
    }

    /// Returns the mark itself.
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Returns the length of the mark, in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns a human-readable name for the mark's encoding.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding_name
    }

    /// Returns the codec associated with this mark, if there is one.
    pub fn codec(&self) -> Option<Codec> {
        self.codec
    }

    /// Looks up a mark by its encoding name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<&'static Self> {
        Self::ALL
            .iter()
            .find(|bom| bom.encoding_name.eq_ignore_ascii_case(name))
    }

    /// Identifies the mark `bytes` begins with, if any.
    ///
    /// See the [module documentation](index.html) for the exact rules.
    pub fn detect(bytes: &[u8]) -> Option<&'static Self> {
        for len in 1..=Self::MAX_LEN {
            if !Self::ALL.iter().any(|bom| bom.len() == len) {
                continue;
            }
            if bytes.len() < len {
                trace!("no BOM: input ended before {}-byte marks", len);
                return None;
            }

            let mut candidates = Self::ALL
                .iter()
                .filter(|bom| bom.len() >= len && bom.agrees_with(bytes));
            match (candidates.next(), candidates.next()) {
                (Some(bom), None) if bytes.starts_with(bom.bytes) => {
                    trace!("detected {} BOM", bom);
                    return Some(bom);
                }
                _ => continue,
            }
        }
        None
    }

    /// Detects the mark `bytes` begins with, and splits it off.
    ///
    /// Returns the mark, if any, and whatever follows it. If no mark is
    /// detected, all of `bytes` is returned.
    pub fn strip(bytes: &[u8]) -> (Option<&'static Self>, &[u8]) {
        match Self::detect(bytes) {
            Some(bom) => (Some(bom), &bytes[bom.len()..]),
            None => (None, bytes),
        }
    }

    /// Writes this mark to `w`.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), io::Error> {
        w.write_bytes(self.bytes)
    }

    /// Returns whether `bytes` is consistent with this mark, as far as it goes.
    fn agrees_with(&self, bytes: &[u8]) -> bool {
        if bytes.len() >= self.len() {
            bytes.starts_with(self.bytes)
        } else {
            self.bytes.starts_with(bytes)
        }
    }
}

impl fmt::Display for ByteOrderMark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.encoding_name)
    }
}
