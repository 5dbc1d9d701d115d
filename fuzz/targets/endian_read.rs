// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;

use binio::io::EndianReader;
use binio::io::Endianness;

fuzz_target!(|input: (Endianness, Vec<u8>)| {
    let (endianness, data) = input;
    let mut r = EndianReader::new(&data[..], endianness);
    loop {
        let before = r.remaining_data();
        match r.read_u64() {
            Ok(_) => assert_eq!(r.remaining_data(), before - 8),
            Err(_) => {
                // Failed reads never consume anything.
                assert_eq!(r.remaining_data(), before);
                break;
            }
        }
    }
    while r.read_u8().is_ok() {}
    assert_eq!(r.remaining_data(), 0);
});
