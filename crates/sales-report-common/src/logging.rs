//! Structured logging infrastructure for sales reports

use crate::error::{Result, SalesReportError};
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`sales_report_core=trace`")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to log span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

fn open_log_file(path: &str) -> Result<Mutex<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Mutex::new(file))
}

fn already_initialized(err: impl std::error::Error + Send + Sync + 'static) -> SalesReportError {
    SalesReportError::config_with_source("Logging is already initialized", err)
}

/// Initialize the tracing subscriber with the given configuration
///
/// Without a file path, events go to stderr so stdout stays free for report output.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| SalesReportError::config_with_source("Invalid log level", e))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match config.file_path {
            Some(path) => registry
                .with(layer.with_writer(open_log_file(&path)?))
                .try_init()
                .map_err(already_initialized)?,
            None => registry
                .with(layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(already_initialized)?,
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match config.file_path {
            Some(path) => registry
                .with(layer.with_ansi(false).with_writer(open_log_file(&path)?))
                .try_init()
                .map_err(already_initialized)?,
            None => registry
                .with(layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(already_initialized)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_open_log_file_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.log");
        let path_str = path.to_str().unwrap();

        open_log_file(path_str).unwrap();
        assert!(path.exists());
    }
}
