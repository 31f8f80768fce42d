//! # Chainviz Charts
//!
//! Chart option builders for time-series payloads, and the on-disk
//! dataset catalog those payloads are read from.
//!
//! Builders produce a [`ChartOption`] that borrows from the payload and
//! serialises to the option object the browser-side chart library renders.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod line;
pub mod option;
pub mod traits;

pub use catalog::*;
pub use line::*;
pub use option::*;
pub use traits::*;
