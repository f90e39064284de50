// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::fmt::{Display, Formatter};

use langext_dataset::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Executor, ExecutorError, Params, Result};

/// Where a session is in its linear lifecycle. There is no re-entry: a
/// cleaned-up session is finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
	Uninitialized,
	Initialized,
	CleanedUp,
}

impl Display for LifecycleState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			LifecycleState::Uninitialized => f.write_str("uninitialized"),
			LifecycleState::Initialized => f.write_str("initialized"),
			LifecycleState::CleanedUp => f.write_str("cleaned up"),
		}
	}
}

/// Drives one executor through `init -> execute* -> cleanup`.
///
/// Out-of-order lifecycle calls are rejected with
/// [`ExecutorError::InvalidState`]. A failed `init` leaves the session
/// uninitialized; a failed `execute` leaves it initialized, the session is
/// not poisoned (input errors are contract violations to surface, not
/// session faults). Calls take `&mut self`, so one session instance cannot
/// be driven from two places at once; each task owns its own session.
pub struct Session<E: Executor> {
	executor: E,
	state: LifecycleState,
}

impl<E: Executor> Session<E> {
	pub fn new(executor: E) -> Self {
		Self {
			executor,
			state: LifecycleState::Uninitialized,
		}
	}

	pub fn state(&self) -> LifecycleState {
		self.state
	}

	pub fn executor(&self) -> &E {
		&self.executor
	}

	pub fn into_inner(self) -> E {
		self.executor
	}

	fn expect_state(&self, method: &'static str, expected: LifecycleState) -> Result<()> {
		if self.state != expected {
			return Err(ExecutorError::InvalidState {
				method,
				state: self.state,
			});
		}
		Ok(())
	}

	/// Initialize the session. Valid exactly once, before any execute.
	pub fn init(&mut self, session_id: &str, task_id: u32, num_tasks: u32) -> Result<()> {
		self.expect_state("init", LifecycleState::Uninitialized)?;
		debug!(session_id, task_id, num_tasks, "initializing extension session");
		self.executor.init(session_id, task_id, num_tasks)?;
		self.state = LifecycleState::Initialized;
		Ok(())
	}

	/// Run one batch through the executor. Valid zero or more times while
	/// initialized.
	pub fn execute(&mut self, input: &dyn Dataset, params: &Params) -> Result<Box<dyn Dataset>> {
		self.expect_state("execute", LifecycleState::Initialized)?;
		debug!(params = params.len(), "executing extension");
		self.executor.execute(input, params)
	}

	/// Tear the session down. Valid exactly once, after the last execute.
	pub fn cleanup(&mut self) -> Result<()> {
		self.expect_state("cleanup", LifecycleState::Initialized)?;
		debug!("cleaning up extension session");
		self.executor.cleanup()?;
		self.state = LifecycleState::CleanedUp;
		Ok(())
	}
}
