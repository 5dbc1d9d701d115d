// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Test-only utilities for building `binio` byte fixtures.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod data;
pub mod hex;
