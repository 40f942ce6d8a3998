//! Configuration schema definitions using serde with validation attributes.

use sales_report_common::{ExcludedStatuses, LoggingConfig, OrderStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure for sales reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportConfig {
    /// Order statuses left out of every report.
    #[validate]
    pub statuses: StatusConfig,
    /// Chart labels, palette and ranking threshold.
    #[validate]
    pub chart: ChartConfig,
    /// Logging configuration.
    #[validate]
    pub logging: LoggingSettings,
}

/// Order statuses that never count as a sale.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StatusConfig {
    /// Order still being processed.
    pub processing: OrderStatus,
    /// Cancelled order.
    pub cancelled: OrderStatus,
    /// Order pending payment or confirmation.
    pub pending: OrderStatus,
    /// Further statuses to exclude.
    pub extra_excluded: Vec<OrderStatus>,
}

/// Chart payload configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartConfig {
    /// Dataset label for revenue series.
    #[validate(length(min = 1, message = "Series label cannot be empty"))]
    pub series_label: String,

    /// Label of the merged entry past the product ranking threshold.
    #[validate(length(min = 1, message = "Other label cannot be empty"))]
    pub other_label: String,

    /// Age bucket label for orders without a known birth date.
    #[validate(length(min = 1, message = "Unknown age label cannot be empty"))]
    pub unknown_age_label: String,

    /// Suffix appended to the decade of an age bracket.
    pub age_suffix: String,

    /// Number of products shown individually before the rest is merged.
    #[validate(range(min = 1, max = 100, message = "Top products must be between 1 and 100"))]
    pub top_products: usize,

    /// Colors assigned to chart entries in order.
    #[validate(length(min = 1, message = "Palette needs at least one color"))]
    #[validate(custom(function = "crate::validation::validate_palette"))]
    pub palette: Vec<String>,
}

/// Logging settings as written in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter directive.
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
    /// Optional log file path.
    pub file: Option<String>,
}

impl ReportConfig {
    /// Runs every validation rule of the configuration.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }

    /// The status exclusion set handed to order sources.
    pub fn excluded_statuses(&self) -> ExcludedStatuses {
        self.statuses.excluded()
    }
}

impl StatusConfig {
    /// Collects every configured status into an exclusion set.
    pub fn excluded(&self) -> ExcludedStatuses {
        [self.processing, self.cancelled, self.pending]
            .into_iter()
            .chain(self.extra_excluded.iter().copied())
            .collect()
    }
}

impl LoggingSettings {
    /// Converts the file settings into a logging bootstrap configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
