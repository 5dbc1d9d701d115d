// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Commands for decoding and encoding whole binary streams.

use std::path::PathBuf;

use binio::bom::ByteOrderMark;
use binio::io;
use binio::io::EndianReader;
use binio::io::EndianWriter;
use binio::io::Endianness;
use binio::io::PrimitiveKind;
use binio::io::StdWrite;

use crate::util::ToJson as _;

/// Commands operating on a whole input or output stream.
#[derive(structopt::StructOpt)]
pub enum Stream {
    /// Reports which byte-order mark, if any, a stream begins with.
    DetectBom {
        /// Whether to pretty-print the resulting JSON.
        #[structopt(long)]
        pretty: bool,

        /// Input file, defaults to stdin.
        #[structopt(short = "i", long, parse(from_os_str))]
        input: Option<PathBuf>,

        /// Output file, defaults to stdout.
        #[structopt(short = "o", long, parse(from_os_str))]
        output: Option<PathBuf>,
    },

    /// Decodes a stream as a sequence of fixed-width values, printing them
    /// as a JSON array.
    Dump {
        /// The byte order to decode with: `big`, `little` or `native`.
        #[structopt(long, short = "e")]
        endian: Endianness,

        /// The type of every value, such as `u32` or `f64`.
        #[structopt(long, short = "k")]
        kind: PrimitiveKind,

        /// Number of values to decode; defaults to as many as fit.
        #[structopt(long, short = "n")]
        count: Option<usize>,

        /// Number of leading bytes to skip before decoding.
        #[structopt(long, default_value = "0")]
        skip: usize,

        /// Whether to pretty-print the resulting JSON.
        #[structopt(long)]
        pretty: bool,

        /// Input file, defaults to stdin.
        #[structopt(short = "i", long, parse(from_os_str))]
        input: Option<PathBuf>,

        /// Output file, defaults to stdout.
        #[structopt(short = "o", long, parse(from_os_str))]
        output: Option<PathBuf>,
    },

    /// Encodes values given on the command line as binary.
    Encode {
        /// The byte order to encode with: `big`, `little` or `native`.
        #[structopt(long, short = "e")]
        endian: Endianness,

        /// The type of every value, such as `u32` or `f64`.
        #[structopt(long, short = "k")]
        kind: PrimitiveKind,

        /// A byte-order mark to emit before the values, by encoding name.
        #[structopt(long)]
        bom: Option<String>,

        /// Output file, defaults to stdout.
        #[structopt(short = "o", long, parse(from_os_str))]
        output: Option<PathBuf>,

        /// The values to encode.
        values: Vec<String>,
    },
}

/// The result of `detect-bom`.
#[derive(serde::Serialize)]
struct Detection {
    bom: Option<&'static ByteOrderMark>,
    payload_len: usize,
}

impl Stream {
    pub fn run(self) {
        match self {
            Self::DetectBom {
                pretty,
                input,
                output,
            } => {
                let (r, w) =
                    crate::util::stdio(input.as_deref(), output.as_deref());
                let bytes = crate::util::read_all(r);

                let (bom, payload) = ByteOrderMark::strip(&bytes);
                let detection = Detection {
                    bom,
                    payload_len: payload.len(),
                };
                crate::util::write_json(w, &detection, pretty);
            }

            Self::Dump {
                endian,
                kind,
                count,
                skip,
                pretty,
                input,
                output,
            } => {
                let (r, w) =
                    crate::util::stdio(input.as_deref(), output.as_deref());
                let bytes = crate::util::read_all(r);
                let bytes = bytes.get(skip..).unwrap_or(&[]);

                let (values, trailing) = check!(
                    dump(bytes, endian, kind, count),
                    "failed to decode {} values",
                    kind
                );
                if trailing != 0 {
                    eprintln!(
                        "warning: {} trailing bytes left undecoded",
                        trailing
                    );
                }
                crate::util::write_json(w, &values, pretty);
            }

            Self::Encode {
                endian,
                kind,
                bom,
                output,
                values,
            } => {
                let (_, w) = crate::util::stdio(None::<PathBuf>, output);
                let mut w = EndianWriter::new(StdWrite(w), endian);

                if let Some(name) = bom {
                    let bom = check!(
                        ByteOrderMark::from_name(&name).ok_or(()),
                        "unknown byte-order mark {:?}",
                        name
                    );
                    check!(bom.write_to(w.get_mut()), "failed to write BOM");
                }

                for value in &values {
                    kind_match!(kind, |T: type| {
                        let val = check!(
                            value.parse::<T>(),
                            "failed to parse {:?} as {}",
                            value,
                            kind
                        );
                        check!(w.write::<T>(val), "failed to write {}", kind);
                    });
                }
            }
        }
    }
}

/// Decodes `count` values of the given kind from `bytes`, or as many as fit
/// if `count` is `None`.
///
/// Returns the values along with the number of bytes left over. A `count`
/// that does not fit fails before anything is decoded.
fn dump(
    bytes: &[u8],
    endian: Endianness,
    kind: PrimitiveKind,
    count: Option<usize>,
) -> Result<(Vec<serde_json::Value>, usize), io::Error> {
    let mut r = EndianReader::new(bytes, endian);
    let available = r.remaining_data();
    let count = match count {
        Some(count) => {
            let required =
                count.checked_mul(kind.size()).unwrap_or(usize::MAX);
            if required > available {
                return Err(io::Error::InsufficientData {
                    required,
                    available,
                });
            }
            count
        }
        None => available / kind.size(),
    };

    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(kind_match!(kind, |T: type| r.read::<T>()?.to_json()));
    }
    Ok((values, r.remaining_data()))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use testutil::hex;

    #[test]
    fn dump_nan_payloads() {
        let bytes = hex::parse("7fc01234 7f800000");
        let (values, trailing) =
            dump(&bytes, Endianness::Big, PrimitiveKind::F32, None).unwrap();
        assert_eq!(trailing, 0);
        assert_eq!(
            values,
            [
                json!({"value": null, "bits": "0x7fc01234"}),
                json!({"value": null, "bits": "0x7f800000"}),
            ]
        );

        let bits = values[0]["bits"].as_str().unwrap();
        let nan = f32::from_bits(u32::from_str_radix(&bits[2..], 16).unwrap());
        assert!(nan.is_nan());
        assert_eq!(nan.to_bits(), 0x7fc0_1234);
    }

    #[test]
    fn dump_finite_floats() {
        let bytes = hex::parse("ffa65841");
        let (values, _) =
            dump(&bytes, Endianness::Little, PrimitiveKind::F32, None)
                .unwrap();
        assert_eq!(values[0]["value"], json!(13.5407705f32));
        assert_eq!(values[0]["bits"], json!("0x4158a6ff"));
    }

    #[test]
    fn dump_ints_with_trailing() {
        let bytes = hex::parse("0100 ffff 7f");
        let (values, trailing) =
            dump(&bytes, Endianness::Little, PrimitiveKind::U16, None)
                .unwrap();
        assert_eq!(values, [json!(1), json!(0xffff)]);
        assert_eq!(trailing, 1);

        let (values, trailing) =
            dump(&bytes, Endianness::Big, PrimitiveKind::I8, Some(2)).unwrap();
        assert_eq!(values, [json!(1), json!(0)]);
        assert_eq!(trailing, 3);
    }

    #[test]
    fn dump_count_too_large() {
        assert_eq!(
            dump(&[], Endianness::Big, PrimitiveKind::U8, Some(usize::MAX)),
            Err(io::Error::InsufficientData {
                required: usize::MAX,
                available: 0,
            })
        );
        assert_eq!(
            dump(&[0; 8], Endianness::Big, PrimitiveKind::U32, Some(3)),
            Err(io::Error::InsufficientData {
                required: 12,
                available: 8,
            })
        );
        assert_eq!(
            dump(
                &[0; 8],
                Endianness::Big,
                PrimitiveKind::U64,
                Some(usize::MAX / 2)
            ),
            Err(io::Error::InsufficientData {
                required: usize::MAX,
                available: 8,
            })
        );
    }
}
