//! # Chainviz Common
//!
//! Shared types, errors, logging and utilities for chainviz.
//!
//! This crate provides the data payload shapes exchanged between the
//! dataset backend and the chart option builder, plus the error and
//! logging plumbing used across the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
pub use utils::*;
