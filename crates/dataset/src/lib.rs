// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The columnar dataset contract: column metadata keyed by a stable column
//! id, one homogeneous buffer per column and out-of-band null maps for the
//! fixed-width types.
//!
//! [`Dataset`] is the capability trait the executor works against;
//! [`PrimitiveDataset`] is the concrete batch container both sides of the
//! boundary exchange.

mod column;
mod dataset;
mod error;
mod metadata;
mod primitive;

pub use column::ColumnData;
pub use dataset::Dataset;
pub use error::DatasetError;
pub use metadata::ColumnMetadata;
pub use primitive::PrimitiveDataset;

pub type Result<T> = std::result::Result<T, DatasetError>;
