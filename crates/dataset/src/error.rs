// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use langext_type::Type;

/// Contract violations raised by dataset bookkeeping.
///
/// These are programming errors on the producer or consumer side, reported
/// synchronously and never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
	#[error("metadata for column id {column_id} already exists")]
	DuplicateColumn {
		column_id: u32,
	},

	#[error("metadata for column id {column_id} does not exist")]
	UnknownColumn {
		column_id: u32,
	},

	#[error("column id {column_id} stores {stored} data, accessed as {requested}")]
	TypeMismatch {
		column_id: u32,
		requested: Type,
		stored: Type,
	},

	#[error("no data attached for column id {column_id}")]
	NoColumnData {
		column_id: u32,
	},

	#[error("null map for column id {column_id} has {actual} entries, column has {expected} rows")]
	NullMapLength {
		column_id: u32,
		expected: usize,
		actual: usize,
	},

	#[error("{method} is not implemented by this dataset")]
	Unsupported {
		method: &'static str,
	},
}
