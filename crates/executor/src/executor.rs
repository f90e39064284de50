// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use langext_dataset::{Dataset, PrimitiveDataset};

use crate::{ExecutorError, Params, Result};

/// Protocol version 1, the only version currently defined.
pub const PROTOCOL_VERSION_V1: u32 = 1;

/// A user-supplied computation unit driven by the host.
///
/// The declaration surface (`protocol_version` and the dataset type
/// identifiers) is the compatibility handshake the host checks before
/// invoking execute. `init` and `cleanup` default to no-ops; `execute`
/// must be overridden by any useful extension.
///
/// An executor is a pure function of `(input, params)` plus whatever state
/// `init` established; it holds no other hidden state across calls.
/// Lifecycle ordering is enforced by [`Session`](crate::Session), not
/// here.
pub trait Executor {
	/// The protocol version this extension implements.
	fn protocol_version(&self) -> u32 {
		PROTOCOL_VERSION_V1
	}

	/// Identifier of the dataset implementation expected as input.
	fn input_dataset_type(&self) -> &str {
		PrimitiveDataset::DATASET_TYPE
	}

	/// Identifier of the dataset implementation produced as output.
	fn output_dataset_type(&self) -> &str {
		PrimitiveDataset::DATASET_TYPE
	}

	/// Called exactly once per session, before any execute. Allocates
	/// per-session resources.
	fn init(&mut self, _session_id: &str, _task_id: u32, _num_tasks: u32) -> Result<()> {
		Ok(())
	}

	/// Consume one input batch and produce one output batch.
	///
	/// Implementations must validate the presence of their required
	/// parameters ([`ExecutorError::MissingParameter`]) and the input
	/// schema ([`ExecutorError::SchemaMismatch`]) before computing, and
	/// either return a fully populated output dataset or fail; there is
	/// no partial-result contract.
	fn execute(&mut self, _input: &dyn Dataset, _params: &Params) -> Result<Box<dyn Dataset>> {
		Err(ExecutorError::Unsupported {
			method: "execute",
		})
	}

	/// Called exactly once per session, after the last execute. Releases
	/// resources acquired in `init`.
	fn cleanup(&mut self) -> Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Bare;

	impl Executor for Bare {}

	#[test]
	fn test_declaration_defaults() {
		let executor = Bare;
		assert_eq!(executor.protocol_version(), PROTOCOL_VERSION_V1);
		assert_eq!(executor.input_dataset_type(), PrimitiveDataset::DATASET_TYPE);
		assert_eq!(executor.output_dataset_type(), PrimitiveDataset::DATASET_TYPE);
	}

	#[test]
	fn test_default_execute_is_unsupported() {
		let mut executor = Bare;
		let input = PrimitiveDataset::new();
		let result = executor.execute(&input, &Params::new());
		assert!(matches!(
			result,
			Err(ExecutorError::Unsupported {
				method: "execute"
			})
		));
	}

	#[test]
	fn test_default_init_cleanup_are_noops() {
		let mut executor = Bare;
		assert!(executor.init("session", 0, 1).is_ok());
		assert!(executor.cleanup().is_ok());
	}
}
