//! # Sales Report CLI
//!
//! Loads the report configuration and an order snapshot, runs one report and
//! prints its `{raw, graph}` payload as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod args;
pub mod error;

pub use app::*;
pub use args::Args;
pub use error::*;
