//! Range normalization: turns a term selection into half-open bounds.

use crate::types::{ReportUnit, TermBounds};
use chrono::NaiveDate;
use sales_report_common::{first_day_of_month, first_day_of_next_month, start_of_day, Result, SalesReportError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the caller picked the reporting term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSelection {
    /// The whole calendar month containing the date.
    Monthly(NaiveDate),
    /// Calendar days from `start` through `end`, both inclusive.
    Range {
        /// First reported day.
        start: NaiveDate,
        /// Last reported day.
        end: NaiveDate,
    },
}

/// A normalized term together with the unit it was requested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedTerm {
    /// Half-open reporting interval.
    pub bounds: TermBounds,
    /// Bucketing unit, passed through unchanged.
    pub unit: Option<ReportUnit>,
}

impl TermSelection {
    /// Computes the half-open interval covered by this selection.
    ///
    /// Fails with [`SalesReportError::InvalidRange`] when the end day lies
    /// before the start day.
    pub fn bounds(self) -> Result<TermBounds> {
        match self {
            Self::Monthly(date) => {
                let next = first_day_of_next_month(date).ok_or_else(|| {
                    SalesReportError::validation_field("month lies past the supported calendar", "monthly")
                })?;
                TermBounds::new(start_of_day(first_day_of_month(date)), start_of_day(next))
            }
            Self::Range { start, end } => {
                let after_end = end.succ_opt().ok_or_else(|| {
                    SalesReportError::validation_field("end day lies past the supported calendar", "term_end")
                })?;
                TermBounds::new(start_of_day(start), start_of_day(after_end))
            }
        }
    }
}

/// Normalizes a term selection and carries the unit along.
pub fn normalize(selection: TermSelection, unit: Option<ReportUnit>) -> Result<NormalizedTerm> {
    let bounds = selection.bounds()?;
    debug!(%bounds, ?unit, "Normalized report term");
    Ok(NormalizedTerm { bounds, unit })
}
