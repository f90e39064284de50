// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use langext_dataset::DatasetError;

use crate::session::LifecycleState;

/// Contract violations raised while driving an executor.
///
/// All of these are surfaced synchronously to the host; none are
/// transient, so no retry logic lives at this layer. After an `execute`
/// error no output dataset is valid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutorError {
	#[error("required parameter '{name}' is not found")]
	MissingParameter {
		name: String,
	},

	#[error("input dataset does not match the expected schema: expected {expected}, got {actual}")]
	SchemaMismatch {
		expected: String,
		actual: String,
	},

	#[error("{method} called in lifecycle state {state}")]
	InvalidState {
		method: &'static str,
		state: LifecycleState,
	},

	#[error("{method} is not implemented by this executor")]
	Unsupported {
		method: &'static str,
	},

	#[error(transparent)]
	Dataset(#[from] DatasetError),
}
