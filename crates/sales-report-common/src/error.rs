//! Error types and utilities for sales report generation

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type alias for sales report operations
pub type Result<T> = std::result::Result<T, SalesReportError>;

/// Main error type for sales report operations
#[derive(Error, Debug)]
pub enum SalesReportError {
    /// Normalized term bounds are not strictly increasing
    #[error("Invalid range: term start {start} is not before term end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Bucketing unit has no known label format
    #[error("Unknown unit: '{unit}'")]
    UnknownUnit { unit: String },

    /// Report type selector is not one of term, product or age
    #[error("Unknown report type: '{report_type}'")]
    UnknownReportType { report_type: String },

    /// A term report was requested without a bucketing unit
    #[error("Term report requires a bucketing unit")]
    MissingUnit,

    /// Aggregation invariant violated; never caused by input data
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Order source failed to deliver orders
    #[error("Order source error: {message}")]
    Source {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SalesReportError {
    /// Create a new invalid range error
    pub const fn invalid_range(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create a new unknown unit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }

    /// Create a new unknown report type error
    pub fn unknown_report_type(report_type: impl Into<String>) -> Self {
        Self::UnknownReportType {
            report_type: report_type.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal {
            message: msg.into(),
        }
    }

    /// Create a new order source error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new order source error with source
    pub fn source_with(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Source {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create an error for a money sum or product that left the decimal range
    pub fn amount_overflow(field: impl Into<String>) -> Self {
        Self::validation_field("Amount is outside the representable range", field)
    }

    /// Whether the error was raised while validating the request, before any
    /// orders were fetched or aggregated
    pub const fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::UnknownUnit { .. }
                | Self::UnknownReportType { .. }
                | Self::MissingUnit
                | Self::Validation { .. }
        )
    }
}
