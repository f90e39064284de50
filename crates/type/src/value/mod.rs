// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod blob;
mod date;
mod timestamp;
mod r#type;

pub use blob::Blob;
pub use date::Date;
pub use timestamp::Timestamp;
pub use r#type::Type;

/// A scalar configuration value, as passed to an executor via its ordered
/// parameter map.
///
/// Parameter values are extension-defined; this enum covers the shapes the
/// host hands over. Column data never flows through `Value`, it stays in
/// the dense per-column buffers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
}

impl Value {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			Value::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Bool(v) => Display::fmt(v, f),
			Value::Int(v) => Display::fmt(v, f),
			Value::Float(v) => Display::fmt(v, f),
			Value::Text(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v as i64)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accessors() {
		assert_eq!(Value::from("abc").as_str(), Some("abc"));
		assert_eq!(Value::from(42i64).as_i64(), Some(42));
		assert_eq!(Value::from(42i64).as_f64(), Some(42.0));
		assert_eq!(Value::from(true).as_bool(), Some(true));
		assert_eq!(Value::from(1.5).as_str(), None);
		assert_eq!(Value::from("abc").as_i64(), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::from("java").to_string(), "java");
		assert_eq!(Value::from(7i64).to_string(), "7");
	}
}
