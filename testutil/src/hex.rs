// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Hex-string fixtures.
//!
//! Fixtures are written as runs of hex digits, optionally broken up by
//! whitespace, so that they can be laid out to mirror the structure of the
//! bytes they describe:
//! ```
//! # use testutil::hex;
//! assert_eq!(hex::parse("4158 a6ff"), [0x41, 0x58, 0xa6, 0xff]);
//! ```

/// Parses a hex string into bytes, ignoring all whitespace.
///
/// # Panics
///
/// This function will panic on all errors, to help with testing: on any
/// character that is neither whitespace nor a hex digit, and on an odd number
/// of digits.
pub fn parse(hex: &str) -> Vec<u8> {
    let digits = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_digit(16) {
            Some(d) => d as u8,
            None => panic!("invalid hex digit {:?} in {:?}", c, hex),
        })
        .collect::<Vec<_>>();
    assert!(
        digits.len() % 2 == 0,
        "odd number of hex digits in {:?}",
        hex
    );

    digits.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect()
}

/// Formats bytes as a lowercase hex string, with no separators.
pub fn format(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_format() {
        assert_eq!(parse(""), Vec::<u8>::new());
        assert_eq!(parse("  00ff\n\tA5 "), [0x00, 0xff, 0xa5]);
        assert_eq!(format(&parse("de ad be ef")), "deadbeef");
    }

    #[test]
    #[should_panic]
    fn odd_digits() {
        parse("abc");
    }

    #[test]
    #[should_panic]
    fn bad_digit() {
        parse("zz");
    }
}
