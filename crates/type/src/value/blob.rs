// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::{
	fmt::{self, Debug, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// An owned variable-length byte string, the backing value of VARBINARY
/// columns.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob(Vec<u8>);

impl Blob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.0
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Blob(0x")?;
		for byte in &self.0 {
			write!(f, "{:02x}", byte)?;
		}
		write!(f, ")")
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		&self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}
