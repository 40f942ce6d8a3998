//! # Sales Report Config
//!
//! Type-safe configuration for sales report generation.
//!
//! This crate provides the configuration schema, its defaults, YAML loading
//! with environment variable overrides and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::*;
