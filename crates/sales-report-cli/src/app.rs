//! Report run: configuration, logging setup, generation and output.

use crate::args::Args;
use crate::error::CliResult;
use chrono::NaiveDateTime;
use sales_report_common::{LoggingConfig, SalesReportError};
use sales_report_config::{ConfigLoader, ReportConfig};
use sales_report_core::{InMemoryOrderSource, ReportResult, SalesReportService};
use tracing::info;

/// Load the configuration named by `--config`, or the default lookup chain.
pub fn load_config(args: &Args) -> CliResult<ReportConfig> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_config(path).map_err(SalesReportError::from)?,
        None => ConfigLoader::load()?,
    };
    Ok(config)
}

/// Logging settings from the configuration, with the `--log-level` override.
pub fn logging_config(args: &Args, config: &ReportConfig) -> LoggingConfig {
    let mut logging = config.logging.to_logging_config();
    if let Some(level) = &args.log_level {
        logging.level.clone_from(level);
    }
    logging
}

/// Generate the requested report; `now` is used unless `--now` was given.
pub async fn generate(args: &Args, config: ReportConfig, now: NaiveDateTime) -> CliResult<ReportResult> {
    let request = args.to_request()?;
    let source = InMemoryOrderSource::from_json_file(&args.orders).await?;
    info!(orders = source.len(), report_type = %request.report_type, "Order snapshot loaded");

    let service = SalesReportService::new(source, config);
    Ok(service.generate(&request, args.now.unwrap_or(now)).await?)
}

/// Encode a report as JSON.
pub fn render(result: &ReportResult, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
