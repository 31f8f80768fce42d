//! # Chainviz CLI
//!
//! Command line front end: browses the dataset catalog and prints chart
//! options for serialised payloads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::*;
