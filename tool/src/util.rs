// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! I/O utilities.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::path::Path;

/// Like `?`, but crashes the binary with a nice error message.
macro_rules! check {
    ($result:expr, $fmt:literal $(, $args:expr)* $(,)?) => {
        match $result {
            Ok(x) => x,
            Err(e) => {
                eprintln!("error: {}: {:?}", format_args!($fmt, $($args,)*), e);
                std::process::exit(2)
            }
        }
    }
}

/// Expands `$expr` once for the Rust type matching a
/// [`binio::io::PrimitiveKind`], with that type bound to `$ty`.
macro_rules! kind_match {
    ($kind:expr, |$ty:ident: type| $expr:expr) => {{
        use binio::io::PrimitiveKind as K;
        match $kind {
            K::U8 => { type $ty = u8; $expr }
            K::I8 => { type $ty = i8; $expr }
            K::Bool => { type $ty = bool; $expr }
            K::U16 => { type $ty = u16; $expr }
            K::I16 => { type $ty = i16; $expr }
            K::U32 => { type $ty = u32; $expr }
            K::I32 => { type $ty = i32; $expr }
            K::U64 => { type $ty = u64; $expr }
            K::I64 => { type $ty = i64; $expr }
            K::F32 => { type $ty = f32; $expr }
            K::F64 => { type $ty = f64; $expr }
        }
    }};
}

/// Opens the given input and output files.
///
/// If either file is missing, it is replaced with stdin or stdout, respectively.
pub fn stdio(
    input_file: Option<impl AsRef<Path>>,
    output_file: Option<impl AsRef<Path>>,
) -> (Box<dyn Read>, Box<dyn Write>) {
    let input: Box<dyn Read> = match input_file {
        Some(path) => {
            let file = check!(File::open(path), "failed to open input file");
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin()),
    };

    let output: Box<dyn Write> = match output_file {
        Some(path) => {
            let file =
                check!(File::create(path), "failed to open output file");
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    (input, output)
}

/// Reads `r` to completion.
pub fn read_all(mut r: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    check!(r.read_to_end(&mut buf), "failed to read input");
    buf
}

/// Writes `value` to `w` as JSON, followed by a newline.
pub fn write_json(
    mut w: impl Write,
    value: &impl serde::Serialize,
    pretty: bool,
) {
    let r = match pretty {
        true => serde_json::to_writer_pretty(&mut w, value),
        false => serde_json::to_writer(&mut w, value),
    };
    check!(r, "failed to serialize output");
    check!(writeln!(w), "failed to write output");
}

/// A decoded value that can be printed as JSON.
///
/// Floats are printed as an object holding both the value and its raw bit
/// pattern, since JSON has no NaN or infinities.
pub trait ToJson {
    /// Converts `self` into a JSON value.
    fn to_json(self) -> serde_json::Value;
}

macro_rules! to_json_exact {
    ($($ty:ty),*) => {$(
        impl ToJson for $ty {
            fn to_json(self) -> serde_json::Value {
                self.into()
            }
        }
    )*}
}

to_json_exact!(u8, i8, bool, u16, i16, u32, i32, u64, i64);

macro_rules! to_json_float {
    ($($ty:ty => $digits:literal),*) => {$(
        impl ToJson for $ty {
            fn to_json(self) -> serde_json::Value {
                serde_json::json!({
                    "value": self,
                    "bits": format!("{:#0w$x}", self.to_bits(), w = $digits + 2),
                })
            }
        }
    )*}
}

to_json_float!(f32 => 8, f64 => 16);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_values() {
        assert_eq!(0xffu8.to_json(), json!(255));
        assert_eq!((-2i64).to_json(), json!(-2));
        assert_eq!(u64::MAX.to_json(), json!(u64::MAX));
        assert_eq!(true.to_json(), json!(true));
    }

    #[test]
    fn floats_carry_bits() {
        assert_eq!(
            1.0f64.to_json(),
            json!({"value": 1.0, "bits": "0x3ff0000000000000"})
        );
        assert_eq!(
            f32::NEG_INFINITY.to_json(),
            json!({"value": null, "bits": "0xff800000"})
        );
        assert_eq!(
            f32::from_bits(0x0000_0001).to_json()["bits"],
            json!("0x00000001")
        );
    }
}
