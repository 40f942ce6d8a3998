//! Application-wide error types using thiserror.

use sales_report_common::SalesReportError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Report, configuration or order source error.
    #[error(transparent)]
    Report(#[from] SalesReportError),

    /// Command line arguments that clap cannot reject on its own.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Output encoding error.
    #[error("Failed to encode report: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
