//! # Sales Report Common
//!
//! Shared types, errors and logging for the sales report workspace.
//!
//! This crate provides the order model read by every aggregator, the money
//! and identifier newtypes, the workspace-wide error type and the tracing
//! bootstrap used by the binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod order;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, SalesReportError};
pub use logging::{init_logging, LoggingConfig};
pub use order::*;
pub use types::*;
pub use utils::*;
