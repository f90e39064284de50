// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use bigdecimal::BigDecimal;
use langext_type::{BitVec, Blob, Date, Timestamp, Type};
use serde::{Deserialize, Serialize};

/// The storage of one column: a tagged union with one variant per
/// supported scalar type.
///
/// Fixed-width variants hold a dense value buffer plus an optional
/// null-presence map (`None` meaning no row is null); fixed-width values
/// cannot represent null in-band. Reference-typed variants carry their
/// nulls in-band as absent slots, so they need no separate map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Integer {
		values: Vec<i32>,
		nulls: Option<BitVec>,
	},
	Boolean {
		values: Vec<bool>,
		nulls: Option<BitVec>,
	},
	BigInt {
		values: Vec<i64>,
		nulls: Option<BitVec>,
	},
	Real {
		values: Vec<f32>,
		nulls: Option<BitVec>,
	},
	Double {
		values: Vec<f64>,
		nulls: Option<BitVec>,
	},
	SmallInt {
		values: Vec<i16>,
		nulls: Option<BitVec>,
	},
	/// Serves both VARCHAR and NVARCHAR registered columns.
	Utf8(Vec<Option<String>>),
	VarBinary(Vec<Option<Blob>>),
	Date(Vec<Option<Date>>),
	Numeric(Vec<Option<BigDecimal>>),
	Timestamp(Vec<Option<Timestamp>>),
}

impl ColumnData {
	/// The canonical type of the stored variant. Text storage answers
	/// [`Type::Varchar`] regardless of the width class the column was
	/// registered with.
	pub fn ty(&self) -> Type {
		match self {
			ColumnData::Integer {
				..
			} => Type::Integer,
			ColumnData::Boolean {
				..
			} => Type::Boolean,
			ColumnData::BigInt {
				..
			} => Type::BigInt,
			ColumnData::Real {
				..
			} => Type::Real,
			ColumnData::Double {
				..
			} => Type::Double,
			ColumnData::SmallInt {
				..
			} => Type::SmallInt,
			ColumnData::Utf8(_) => Type::Varchar,
			ColumnData::VarBinary(_) => Type::VarBinary,
			ColumnData::Date(_) => Type::Date,
			ColumnData::Numeric(_) => Type::Numeric,
			ColumnData::Timestamp(_) => Type::Timestamp,
		}
	}

	pub fn row_count(&self) -> usize {
		match self {
			ColumnData::Integer {
				values,
				..
			} => values.len(),
			ColumnData::Boolean {
				values,
				..
			} => values.len(),
			ColumnData::BigInt {
				values,
				..
			} => values.len(),
			ColumnData::Real {
				values,
				..
			} => values.len(),
			ColumnData::Double {
				values,
				..
			} => values.len(),
			ColumnData::SmallInt {
				values,
				..
			} => values.len(),
			ColumnData::Utf8(values) => values.len(),
			ColumnData::VarBinary(values) => values.len(),
			ColumnData::Date(values) => values.len(),
			ColumnData::Numeric(values) => values.len(),
			ColumnData::Timestamp(values) => values.len(),
		}
	}

	/// The out-of-band null map, when the variant is fixed-width and one
	/// was attached. Reference-typed variants always answer `None`.
	pub fn null_map(&self) -> Option<&BitVec> {
		match self {
			ColumnData::Integer {
				nulls,
				..
			}
			| ColumnData::Boolean {
				nulls,
				..
			}
			| ColumnData::BigInt {
				nulls,
				..
			}
			| ColumnData::Real {
				nulls,
				..
			}
			| ColumnData::Double {
				nulls,
				..
			}
			| ColumnData::SmallInt {
				nulls,
				..
			} => nulls.as_ref(),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ty_and_row_count() {
		let col = ColumnData::Integer {
			values: vec![1, 2, 3],
			nulls: None,
		};
		assert_eq!(col.ty(), Type::Integer);
		assert_eq!(col.row_count(), 3);

		let col = ColumnData::Utf8(vec![Some("a".to_string()), None]);
		assert_eq!(col.ty(), Type::Varchar);
		assert_eq!(col.row_count(), 2);
	}

	#[test]
	fn test_null_map() {
		let nulls = BitVec::from_slice(&[false, true]);
		let col = ColumnData::Double {
			values: vec![1.0, 0.0],
			nulls: Some(nulls.clone()),
		};
		assert_eq!(col.null_map(), Some(&nulls));

		let col = ColumnData::Date(vec![None, None]);
		assert_eq!(col.null_map(), None);
	}
}
