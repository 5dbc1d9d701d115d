// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Sample streams, each opening with a byte-order mark.

/// "hi" in UTF-8, with a BOM.
#[rustfmt::skip]
pub const UTF8_HI: &[u8] = &[0xef, 0xbb, 0xbf, b'h', b'i'];

/// "hi" in UTF-16 LE, with a BOM.
#[rustfmt::skip]
pub const UTF16_LE_HI: &[u8] = &[0xff, 0xfe, b'h', 0x00, b'i', 0x00];

/// "hi" in UTF-16 BE, with a BOM.
#[rustfmt::skip]
pub const UTF16_BE_HI: &[u8] = &[0xfe, 0xff, 0x00, b'h', 0x00, b'i'];

/// "hi" in UTF-32 LE, with a BOM.
#[rustfmt::skip]
pub const UTF32_LE_HI: &[u8] = &[
    0xff, 0xfe, 0x00, 0x00,
    b'h', 0x00, 0x00, 0x00,
    b'i', 0x00, 0x00, 0x00,
];

/// "hi" in UTF-32 BE, with a BOM.
#[rustfmt::skip]
pub const UTF32_BE_HI: &[u8] = &[
    0x00, 0x00, 0xfe, 0xff,
    0x00, 0x00, 0x00, b'h',
    0x00, 0x00, 0x00, b'i',
];

/// A UTF-16 LE stream whose first character is U+0000, which is
/// indistinguishable from a UTF-32 LE BOM.
#[rustfmt::skip]
pub const UTF16_LE_LEADING_NUL: &[u8] = &[0xff, 0xfe, 0x00, 0x00, b'h', 0x00];
