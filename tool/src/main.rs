// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! `binio-tool` is a simple command-line tool for inspecting and producing
//! binary data with `binio`.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(unused)]
#![deny(unsafe_code)]

use structopt::StructOpt as _;

#[macro_use]
mod util;

mod bits;
mod stream;

/// A command-line tool for working with binary data.
#[allow(missing_docs)]
#[derive(structopt::StructOpt)]
#[structopt(author)]
enum CliCommand {
    #[structopt(flatten)]
    Stream(stream::Stream),
    #[structopt(flatten)]
    Bits(bits::Bits),
}

fn main() {
    match CliCommand::from_args() {
        CliCommand::Stream(s) => s.run(),
        CliCommand::Bits(b) => b.run(),
    }
}
