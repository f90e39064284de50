// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use indexmap::IndexMap;
use langext_type::Value;
use serde::{Deserialize, Serialize};

use crate::{ExecutorError, Result};

/// The ordered parameter map passed to [`execute`](crate::Executor::execute).
///
/// Keys are extension-defined option names; iteration preserves insertion
/// order. The contract defines only the container, never the recognized
/// keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(IndexMap<String, Value>);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Look up a parameter the extension cannot run without.
	pub fn require(&self, name: &str) -> Result<&Value> {
		self.0.get(name).ok_or_else(|| ExecutorError::MissingParameter {
			name: name.to_string(),
		})
	}

	/// [`require`](Self::require) narrowed to text-valued parameters.
	pub fn require_str(&self, name: &str) -> Result<&str> {
		self.require(name)?.as_str().ok_or_else(|| ExecutorError::MissingParameter {
			name: name.to_string(),
		})
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (k, v) in iter {
			params.insert(k, v);
		}
		params
	}
}
