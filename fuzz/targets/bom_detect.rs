// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;

use binio::bom::ByteOrderMark;

fuzz_target!(|data: &[u8]| {
    let (bom, rest) = ByteOrderMark::strip(data);
    match bom {
        Some(bom) => {
            assert!(data.starts_with(bom.bytes()));
            assert_eq!(rest.len() + bom.len(), data.len());
        }
        None => assert_eq!(rest, data),
    }
});
