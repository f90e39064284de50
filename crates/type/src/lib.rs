// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Scalar types and values shared by the dataset and executor crates.
//!
//! This crate defines the fixed enumeration of scalar types a dataset can
//! carry, the owned value types backing the reference-typed columns and the
//! bit-packed null-presence map used by the fixed-width ones.

pub mod util;
pub mod value;

pub use util::BitVec;
pub use value::{Blob, Date, Timestamp, Type, Value};
