// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use binio::io::EndianReader;
use binio::io::EndianWriter;
use binio::io::Endianness;

#[derive(Arbitrary, Debug)]
struct Values {
    endianness: Endianness,
    a: u16,
    b: i32,
    c: u64,
    d: f32,
    e: f64,
}

fuzz_target!(|v: Values| {
    let mut w = EndianWriter::new(Vec::new(), v.endianness);
    w.write_u16(v.a).unwrap();
    w.write_i32(v.b).unwrap();
    w.write_u64(v.c).unwrap();
    w.write_f32(v.d).unwrap();
    w.write_f64(v.e).unwrap();
    let bytes = w.into_inner();

    let mut r = EndianReader::new(&bytes[..], v.endianness);
    assert_eq!(r.read_u16().unwrap(), v.a);
    assert_eq!(r.read_i32().unwrap(), v.b);
    assert_eq!(r.read_u64().unwrap(), v.c);
    assert_eq!(r.read_f32().unwrap().to_bits(), v.d.to_bits());
    assert_eq!(r.read_f64().unwrap().to_bits(), v.e.to_bits());
    assert_eq!(r.remaining_data(), 0);
});
