// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

mod bitvec;

pub use bitvec::{BitVec, BitVecIter};
