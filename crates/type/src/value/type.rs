// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The semantic scalar type of a column.
///
/// This is the fixed enumeration the dataset contract round-trips. Each
/// variant maps to a stable external (JDBC) type code, which is what the
/// host reads and writes across the process boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// 32-bit signed integer
	Integer,
	/// true or false
	Boolean,
	/// 64-bit signed integer
	BigInt,
	/// 32-bit floating point
	Real,
	/// 64-bit floating point
	Double,
	/// 16-bit signed integer
	SmallInt,
	/// Variable-length text, narrow encoding
	Varchar,
	/// Variable-length text, wide encoding
	Nvarchar,
	/// Variable-length binary
	VarBinary,
	/// Calendar date
	Date,
	/// Arbitrary-precision decimal
	Numeric,
	/// Date plus time of day
	Timestamp,
}

impl Type {
	/// The external type code, as exchanged with the host.
	pub fn code(&self) -> i32 {
		match self {
			Type::Integer => 4,
			Type::Boolean => 16,
			Type::BigInt => -5,
			Type::Real => 7,
			Type::Double => 8,
			Type::SmallInt => 5,
			Type::Varchar => 12,
			Type::Nvarchar => -9,
			Type::VarBinary => -3,
			Type::Date => 91,
			Type::Numeric => 2,
			Type::Timestamp => 93,
		}
	}

	/// Inverse of [`Type::code`]. Unknown codes answer `None`.
	pub fn from_code(code: i32) -> Option<Type> {
		match code {
			4 => Some(Type::Integer),
			16 => Some(Type::Boolean),
			-5 => Some(Type::BigInt),
			7 => Some(Type::Real),
			8 => Some(Type::Double),
			5 => Some(Type::SmallInt),
			12 => Some(Type::Varchar),
			-9 => Some(Type::Nvarchar),
			-3 => Some(Type::VarBinary),
			91 => Some(Type::Date),
			2 => Some(Type::Numeric),
			93 => Some(Type::Timestamp),
			_ => None,
		}
	}

	/// Whether values of this type are stored as a dense fixed-width
	/// buffer with an out-of-band null map. The remaining types carry
	/// nulls in-band as absent slots.
	pub fn is_fixed_width(&self) -> bool {
		matches!(
			self,
			Type::Integer | Type::Boolean | Type::BigInt | Type::Real | Type::Double | Type::SmallInt
		)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Integer => f.write_str("INTEGER"),
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::BigInt => f.write_str("BIGINT"),
			Type::Real => f.write_str("REAL"),
			Type::Double => f.write_str("DOUBLE"),
			Type::SmallInt => f.write_str("SMALLINT"),
			Type::Varchar => f.write_str("VARCHAR"),
			Type::Nvarchar => f.write_str("NVARCHAR"),
			Type::VarBinary => f.write_str("VARBINARY"),
			Type::Date => f.write_str("DATE"),
			Type::Numeric => f.write_str("NUMERIC"),
			Type::Timestamp => f.write_str("TIMESTAMP"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [Type; 12] = [
		Type::Integer,
		Type::Boolean,
		Type::BigInt,
		Type::Real,
		Type::Double,
		Type::SmallInt,
		Type::Varchar,
		Type::Nvarchar,
		Type::VarBinary,
		Type::Date,
		Type::Numeric,
		Type::Timestamp,
	];

	#[test]
	fn test_code_round_trip() {
		for ty in ALL {
			assert_eq!(Type::from_code(ty.code()), Some(ty));
		}
	}

	#[test]
	fn test_unknown_code() {
		assert_eq!(Type::from_code(0), None);
		assert_eq!(Type::from_code(999), None);
	}

	#[test]
	fn test_fixed_width_partition() {
		let fixed: Vec<Type> = ALL.into_iter().filter(Type::is_fixed_width).collect();
		assert_eq!(
			fixed,
			vec![Type::Integer, Type::Boolean, Type::BigInt, Type::Real, Type::Double, Type::SmallInt]
		);
	}
}
