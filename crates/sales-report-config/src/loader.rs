//! Configuration loading utilities

use crate::ReportConfig;
use sales_report_common::{OrderStatus, SalesReportError};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "SALES_REPORT_CONFIG_PATH";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_VAR: &str = "SALES_REPORT_LOG_LEVEL";
/// Environment variable adding comma separated excluded status ids.
pub const EXCLUDED_STATUSES_VAR: &str = "SALES_REPORT_EXCLUDED_STATUSES";
/// Environment variable overriding the product ranking threshold.
pub const TOP_PRODUCTS_VAR: &str = "SALES_REPORT_TOP_PRODUCTS";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sales-report.yaml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for SalesReportError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Configuration loading failed", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "Loaded configuration file");
        Self::from_yaml_str(&content, |var| env::var(var).ok())
    }

    /// Load configuration from `SALES_REPORT_CONFIG_PATH`, then
    /// `sales-report.yaml`, falling back to defaults
    pub fn load() -> sales_report_common::Result<ReportConfig> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_config(DEFAULT_CONFIG_FILE)?
        } else {
            debug!("No configuration file found, using defaults");
            let mut config = ReportConfig::default();
            Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
            config
                .validate_all()
                .map_err(|e| SalesReportError::from(ConfigError::from(e)))?;
            config
        };

        Ok(config)
    }

    /// Parse YAML text, apply overrides from `lookup` and validate
    pub fn from_yaml_str<F>(content: &str, lookup: F) -> Result<ReportConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: ReportConfig = if content.trim().is_empty() {
            ReportConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Apply environment style overrides; `lookup` returns a variable's value if set
    pub fn apply_overrides<F>(config: &mut ReportConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.logging.level = level;
        }

        if let Some(statuses) = lookup(EXCLUDED_STATUSES_VAR) {
            for raw in statuses.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let id = raw.parse::<u32>().map_err(|e| ConfigError::EnvParseError {
                    var: EXCLUDED_STATUSES_VAR.to_string(),
                    source: Box::new(e),
                })?;
                config.statuses.extra_excluded.push(OrderStatus(id));
            }
        }

        if let Some(top) = lookup(TOP_PRODUCTS_VAR) {
            config.chart.top_products = top.parse().map_err(|e| ConfigError::EnvParseError {
                var: TOP_PRODUCTS_VAR.to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
