// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use langext_type::Type;
use serde::{Deserialize, Serialize};

/// Per-column metadata, registered exactly once per column id.
///
/// `precision` and `scale` are meaningful for NUMERIC columns only and are
/// carried verbatim for the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
	pub name: String,
	pub ty: Type,
	pub precision: u32,
	pub scale: u32,
}

impl ColumnMetadata {
	pub fn new(name: impl Into<String>, ty: Type, precision: u32, scale: u32) -> Self {
		Self {
			name: name.into(),
			ty,
			precision,
			scale,
		}
	}
}
