//! Command line arguments and their translation into a report request.

use crate::error::{CliError, CliResult};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use sales_report_core::{normalize, ReportRequest, ReportType, ReportUnit, TermSelection};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Aggregate an order snapshot into a sales report", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON snapshot of orders to report on
    #[arg(short, long, env = "SALES_REPORT_ORDERS")]
    pub orders: PathBuf,

    /// Report type: term, product or age
    #[arg(short = 't', long = "type", default_value = "term")]
    pub report_type: String,

    /// Report on the whole month containing this date
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub monthly: Option<NaiveDate>,

    /// First day of an explicit range
    #[arg(long, requires = "end")]
    pub start: Option<NaiveDate>,

    /// Last day of an explicit range, included in the report
    #[arg(long, requires = "start")]
    pub end: Option<NaiveDate>,

    /// Bucketing unit of term reports: byHour, byDay, byWeekDay or byMonth
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Evaluation time for age reports, defaults to the local clock
    #[arg(long)]
    pub now: Option<NaiveDateTime>,

    /// Log level, overrides the configuration
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// The term selected by `--monthly` or `--start`/`--end`.
    pub fn selection(&self) -> CliResult<TermSelection> {
        match (self.monthly, self.start, self.end) {
            (Some(date), None, None) => Ok(TermSelection::Monthly(date)),
            (None, Some(start), Some(end)) => Ok(TermSelection::Range { start, end }),
            _ => Err(CliError::Arguments(
                "either --monthly or both --start and --end are required".to_string(),
            )),
        }
    }

    /// Parse and validate the report request.
    pub fn to_request(&self) -> CliResult<ReportRequest> {
        let report_type: ReportType = self.report_type.parse()?;
        let unit = self.unit.as_deref().map(str::parse::<ReportUnit>).transpose()?;
        let term = normalize(self.selection()?, unit)?;

        Ok(ReportRequest::new(report_type, term.bounds, term.unit)?)
    }
}
