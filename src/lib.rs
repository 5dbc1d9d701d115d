// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! `binio` is a small toolkit for working with binary data formats.
//!
//! It provides four loosely-coupled pieces:
//! - [`bits`], for pulling individual bits out of a byte in either bit order.
//! - [`swap`], for reversing the byte order of fixed-width integers and
//!   floats.
//! - [`io`], for reading and writing fixed-width values in a chosen byte
//!   order over abstract byte sources and sinks.
//! - [`bom`], a catalog of text-encoding byte-order marks, along with an
//!   unambiguous detector for them.
//!
//! `binio` does not perform any text decoding; [`bom`] only identifies which
//! encoding a stream claims to be in.
//!
//! Like [`std::io`], the [`io`] traits here represent sequential byte
//! streams, but they are usable in `no_std` environments; adapters for the
//! standard library types are available behind the `std` feature.
//!
//! [`std::io`]: https://doc.rust-lang.org/std/io/index.html

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(warnings)]
#![deny(unused)]
#![deny(unsafe_code)]

#[macro_use]
mod debug;

pub mod bits;
pub mod bom;
pub mod io;
pub mod swap;
