// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use bigdecimal::BigDecimal;
use langext_type::{BitVec, Blob, Date, Timestamp, Type};

use crate::{DatasetError, Result};

fn unsupported<T>(method: &'static str) -> Result<T> {
	Err(DatasetError::Unsupported {
		method,
	})
}

/// The capability interface for batch input and output data.
///
/// Every method has a failing default body; a dataset implementation
/// overrides the surface it actually supports and call sites hold a
/// polymorphic `&dyn Dataset` handle. Column ids are producer-assigned,
/// unique within a dataset and not required to be contiguous.
///
/// Fixed-width columns (`integer`, `boolean`, `bigint`, `real`, `double`,
/// `smallint`) pair a dense buffer with an optional null map; the
/// reference-typed columns represent null rows in-band as `None` slots.
pub trait Dataset {
	// Column metadata.

	fn add_column_metadata(
		&mut self,
		_column_id: u32,
		_name: &str,
		_ty: Type,
		_precision: u32,
		_scale: u32,
	) -> Result<()> {
		unsupported("add_column_metadata")
	}

	fn column_count(&self) -> Result<usize> {
		unsupported("column_count")
	}

	fn column_name(&self, _column_id: u32) -> Result<String> {
		unsupported("column_name")
	}

	fn column_type(&self, _column_id: u32) -> Result<Type> {
		unsupported("column_type")
	}

	fn column_precision(&self, _column_id: u32) -> Result<u32> {
		unsupported("column_precision")
	}

	fn column_scale(&self, _column_id: u32) -> Result<u32> {
		unsupported("column_scale")
	}

	/// The null-presence map of a fixed-width column. `Ok(None)` means no
	/// row of the column is null.
	fn column_null_map(&self, _column_id: u32) -> Result<Option<&BitVec>> {
		unsupported("column_null_map")
	}

	// Attaching column data. Metadata for the column id must already be
	// registered.

	fn add_integer_column(&mut self, _column_id: u32, _rows: Vec<i32>, _null_map: Option<BitVec>) -> Result<()> {
		unsupported("add_integer_column")
	}

	fn add_boolean_column(&mut self, _column_id: u32, _rows: Vec<bool>, _null_map: Option<BitVec>) -> Result<()> {
		unsupported("add_boolean_column")
	}

	fn add_bigint_column(&mut self, _column_id: u32, _rows: Vec<i64>, _null_map: Option<BitVec>) -> Result<()> {
		unsupported("add_bigint_column")
	}

	fn add_real_column(&mut self, _column_id: u32, _rows: Vec<f32>, _null_map: Option<BitVec>) -> Result<()> {
		unsupported("add_real_column")
	}

	fn add_double_column(&mut self, _column_id: u32, _rows: Vec<f64>, _null_map: Option<BitVec>) -> Result<()> {
		unsupported("add_double_column")
	}

	fn add_smallint_column(&mut self, _column_id: u32, _rows: Vec<i16>, _null_map: Option<BitVec>) -> Result<()> {
		unsupported("add_smallint_column")
	}

	fn add_string_column(&mut self, _column_id: u32, _rows: Vec<Option<String>>) -> Result<()> {
		unsupported("add_string_column")
	}

	fn add_binary_column(&mut self, _column_id: u32, _rows: Vec<Option<Blob>>) -> Result<()> {
		unsupported("add_binary_column")
	}

	fn add_date_column(&mut self, _column_id: u32, _rows: Vec<Option<Date>>) -> Result<()> {
		unsupported("add_date_column")
	}

	fn add_numeric_column(&mut self, _column_id: u32, _rows: Vec<Option<BigDecimal>>) -> Result<()> {
		unsupported("add_numeric_column")
	}

	fn add_timestamp_column(&mut self, _column_id: u32, _rows: Vec<Option<Timestamp>>) -> Result<()> {
		unsupported("add_timestamp_column")
	}

	// Retrieving column data. Access through an accessor whose type does
	// not match the stored variant fails with `TypeMismatch`.

	fn integer_column(&self, _column_id: u32) -> Result<&[i32]> {
		unsupported("integer_column")
	}

	fn boolean_column(&self, _column_id: u32) -> Result<&[bool]> {
		unsupported("boolean_column")
	}

	fn bigint_column(&self, _column_id: u32) -> Result<&[i64]> {
		unsupported("bigint_column")
	}

	fn real_column(&self, _column_id: u32) -> Result<&[f32]> {
		unsupported("real_column")
	}

	fn double_column(&self, _column_id: u32) -> Result<&[f64]> {
		unsupported("double_column")
	}

	fn smallint_column(&self, _column_id: u32) -> Result<&[i16]> {
		unsupported("smallint_column")
	}

	fn string_column(&self, _column_id: u32) -> Result<&[Option<String>]> {
		unsupported("string_column")
	}

	fn binary_column(&self, _column_id: u32) -> Result<&[Option<Blob>]> {
		unsupported("binary_column")
	}

	fn date_column(&self, _column_id: u32) -> Result<&[Option<Date>]> {
		unsupported("date_column")
	}

	fn numeric_column(&self, _column_id: u32) -> Result<&[Option<BigDecimal>]> {
		unsupported("numeric_column")
	}

	fn timestamp_column(&self, _column_id: u32) -> Result<&[Option<Timestamp>]> {
		unsupported("timestamp_column")
	}
}
