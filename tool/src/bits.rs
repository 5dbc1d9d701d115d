// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Commands for looking at individual bits and bytes.

use binio::bits;
use binio::bits::BitOrder;
use binio::bits::BITS_PER_BYTE;
use binio::io::PrimitiveKind;
use binio::swap::swap_if;

use crate::util::ToJson as _;

/// Commands operating on a single value.
#[derive(structopt::StructOpt)]
pub enum Bits {
    /// Splits a byte into its bits, along with the mask for each one.
    Bits {
        /// The bit order to index with: `msb` or `lsb`.
        #[structopt(long, default_value = "msb")]
        order: BitOrder,

        /// Whether to pretty-print the resulting JSON.
        #[structopt(long)]
        pretty: bool,

        /// The byte to split, in decimal or `0x`-prefixed hex.
        #[structopt(parse(try_from_str = parse_byte))]
        byte: u8,
    },

    /// Reverses the byte order of a value.
    Swap {
        /// The type of the value, such as `u32` or `f64`.
        #[structopt(long, short = "k")]
        kind: PrimitiveKind,

        /// The value to swap.
        value: String,
    },
}

fn parse_byte(s: &str) -> Result<u8, std::num::ParseIntError> {
    match s.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

/// The result of `bits`.
#[derive(serde::Serialize)]
struct Split {
    byte: u8,
    order: BitOrder,
    bits: [bool; BITS_PER_BYTE],
    masks: Vec<u8>,
}

impl Bits {
    pub fn run(self) {
        match self {
            Self::Bits {
                order,
                pretty,
                byte,
            } => {
                let masks = (0..BITS_PER_BYTE)
                    .map(|i| {
                        check!(bits::bit_mask(i, order), "bad bit index {}", i)
                    })
                    .collect();
                let split = Split {
                    byte,
                    order,
                    bits: bits::get_bits(byte, order),
                    masks,
                };
                crate::util::write_json(std::io::stdout(), &split, pretty);
            }

            Self::Swap { kind, value } => kind_match!(kind, |T: type| {
                let val = check!(
                    value.parse::<T>(),
                    "failed to parse {:?} as {}",
                    value,
                    kind
                );
                let swapped = swap_if(val, true);
                crate::util::write_json(
                    std::io::stdout(),
                    &swapped.to_json(),
                    false,
                );
            }),
        }
    }
}
