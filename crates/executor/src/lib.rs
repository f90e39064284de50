// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The extension execution contract: an [`Executor`] computes one output
//! batch per [`execute`](Executor::execute) call, and a [`Session`] drives
//! it through the `init -> execute* -> cleanup` lifecycle on behalf of the
//! host, rejecting out-of-order calls.

mod error;
mod executor;
mod params;
mod session;

pub use error::ExecutorError;
pub use executor::{Executor, PROTOCOL_VERSION_V1};
pub use params::Params;
pub use session::{LifecycleState, Session};

pub type Result<T> = std::result::Result<T, ExecutorError>;
