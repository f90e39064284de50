// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use langext_type::{BitVec, Blob, Date, Timestamp, Type};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{ColumnData, ColumnMetadata, Dataset, DatasetError, Result};

fn check_null_map_len(column_id: u32, rows: usize, null_map: Option<&BitVec>) -> Result<()> {
	match null_map {
		Some(map) if map.len() != rows => Err(DatasetError::NullMapLength {
			column_id,
			expected: rows,
			actual: map.len(),
		}),
		_ => Ok(()),
	}
}

// One add/get pair per fixed-width type: dense buffer plus optional
// out-of-band null map.
macro_rules! fixed_width_column {
	($add:ident, $get:ident, $variant:ident, $ty:ty, $tag:expr) => {
		fn $add(&mut self, column_id: u32, rows: Vec<$ty>, null_map: Option<BitVec>) -> Result<()> {
			self.check_metadata(column_id)?;
			check_null_map_len(column_id, rows.len(), null_map.as_ref())?;
			trace!(column_id, rows = rows.len(), "attach {} column", stringify!($variant));
			self.columns.insert(column_id, ColumnData::$variant {
				values: rows,
				nulls: null_map,
			});
			Ok(())
		}

		fn $get(&self, column_id: u32) -> Result<&[$ty]> {
			match self.column(column_id)? {
				ColumnData::$variant {
					values,
					..
				} => Ok(values),
				other => Err(DatasetError::TypeMismatch {
					column_id,
					requested: $tag,
					stored: other.ty(),
				}),
			}
		}
	};
}

// One add/get pair per reference type: nulls are in-band `None` slots.
macro_rules! reference_column {
	($add:ident, $get:ident, $variant:ident, $ty:ty, $tag:expr) => {
		fn $add(&mut self, column_id: u32, rows: Vec<Option<$ty>>) -> Result<()> {
			self.check_metadata(column_id)?;
			trace!(column_id, rows = rows.len(), "attach {} column", stringify!($variant));
			self.columns.insert(column_id, ColumnData::$variant(rows));
			Ok(())
		}

		fn $get(&self, column_id: u32) -> Result<&[Option<$ty>]> {
			match self.column(column_id)? {
				ColumnData::$variant(values) => Ok(values),
				other => Err(DatasetError::TypeMismatch {
					column_id,
					requested: $tag,
					stored: other.ty(),
				}),
			}
		}
	};
}

/// The concrete batch container exchanged between host and extension.
///
/// Metadata and column storage are both keyed by the column id. Metadata
/// registers exactly once per id; attaching data for an id that already has
/// data replaces it silently (the populate phase is single-owner, a second
/// add is a deliberate producer action). All columns of one populated
/// dataset must share the same row count; that is a producer obligation,
/// the container enforces it only between a column and its own null map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDataset {
	metadata: HashMap<u32, ColumnMetadata>,
	columns: HashMap<u32, ColumnData>,
}

impl PrimitiveDataset {
	/// Dataset implementation identifier, as declared by executors in
	/// their compatibility handshake.
	pub const DATASET_TYPE: &'static str = "langext.PrimitiveDataset";

	pub fn new() -> Self {
		Self::default()
	}

	/// Row count of the batch: the row count of any attached column, 0
	/// while no data is attached.
	pub fn row_count(&self) -> usize {
		self.columns.values().next().map(ColumnData::row_count).unwrap_or(0)
	}

	pub fn metadata(&self, column_id: u32) -> Result<&ColumnMetadata> {
		self.metadata.get(&column_id).ok_or(DatasetError::UnknownColumn {
			column_id,
		})
	}

	fn check_metadata(&self, column_id: u32) -> Result<()> {
		self.metadata(column_id).map(|_| ())
	}

	fn column(&self, column_id: u32) -> Result<&ColumnData> {
		self.check_metadata(column_id)?;
		self.columns.get(&column_id).ok_or(DatasetError::NoColumnData {
			column_id,
		})
	}
}

impl Dataset for PrimitiveDataset {
	fn add_column_metadata(&mut self, column_id: u32, name: &str, ty: Type, precision: u32, scale: u32) -> Result<()> {
		if self.metadata.contains_key(&column_id) {
			return Err(DatasetError::DuplicateColumn {
				column_id,
			});
		}
		trace!(column_id, name, %ty, "register column metadata");
		self.metadata.insert(column_id, ColumnMetadata::new(name, ty, precision, scale));
		Ok(())
	}

	fn column_count(&self) -> Result<usize> {
		Ok(self.metadata.len())
	}

	fn column_name(&self, column_id: u32) -> Result<String> {
		self.metadata(column_id).map(|m| m.name.clone())
	}

	fn column_type(&self, column_id: u32) -> Result<Type> {
		self.metadata(column_id).map(|m| m.ty)
	}

	fn column_precision(&self, column_id: u32) -> Result<u32> {
		self.metadata(column_id).map(|m| m.precision)
	}

	fn column_scale(&self, column_id: u32) -> Result<u32> {
		self.metadata(column_id).map(|m| m.scale)
	}

	fn column_null_map(&self, column_id: u32) -> Result<Option<&BitVec>> {
		self.check_metadata(column_id)?;
		Ok(self.columns.get(&column_id).and_then(ColumnData::null_map))
	}

	fixed_width_column!(add_integer_column, integer_column, Integer, i32, Type::Integer);
	fixed_width_column!(add_boolean_column, boolean_column, Boolean, bool, Type::Boolean);
	fixed_width_column!(add_bigint_column, bigint_column, BigInt, i64, Type::BigInt);
	fixed_width_column!(add_real_column, real_column, Real, f32, Type::Real);
	fixed_width_column!(add_double_column, double_column, Double, f64, Type::Double);
	fixed_width_column!(add_smallint_column, smallint_column, SmallInt, i16, Type::SmallInt);

	reference_column!(add_string_column, string_column, Utf8, String, Type::Varchar);
	reference_column!(add_binary_column, binary_column, VarBinary, Blob, Type::VarBinary);
	reference_column!(add_date_column, date_column, Date, Date, Type::Date);
	reference_column!(add_numeric_column, numeric_column, Numeric, BigDecimal, Type::Numeric);
	reference_column!(add_timestamp_column, timestamp_column, Timestamp, Timestamp, Type::Timestamp);
}
