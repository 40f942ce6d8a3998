//! Request-side types: report selectors, bucketing units and term bounds.

use chrono::NaiveDateTime;
use sales_report_common::{Result, SalesReportError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which report to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Revenue and order count per time bucket.
    Term,
    /// Revenue per product variant with a ranked chart.
    Product,
    /// Revenue per customer age bracket.
    Age,
}

impl ReportType {
    /// Selector string as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Product => "product",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = SalesReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "term" => Ok(Self::Term),
            "product" => Ok(Self::Product),
            "age" => Ok(Self::Age),
            other => Err(SalesReportError::unknown_report_type(other)),
        }
    }
}

/// Time bucketing unit of a term report.
///
/// Each unit maps a timestamp onto a label; timestamps sharing a label fall
/// into the same bucket, so `ByMonth` merges the same month of different years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportUnit {
    /// Hour of day, `"00"` to `"23"`.
    #[serde(rename = "byHour")]
    ByHour,
    /// Month and day, `"MM/DD"`.
    #[serde(rename = "byDay")]
    ByDay,
    /// Abbreviated English weekday, `"Mon"` to `"Sun"`.
    #[serde(rename = "byWeekDay")]
    ByWeekDay,
    /// Month number, `"01"` to `"12"`.
    #[serde(rename = "byMonth")]
    ByMonth,
}

impl ReportUnit {
    /// All units in declaration order.
    pub const ALL: [Self; 4] = [Self::ByHour, Self::ByDay, Self::ByWeekDay, Self::ByMonth];

    /// The chrono format string producing this unit's labels.
    pub const fn label_format(self) -> &'static str {
        match self {
            Self::ByHour => "%H",
            Self::ByDay => "%m/%d",
            Self::ByWeekDay => "%a",
            Self::ByMonth => "%m",
        }
    }

    /// Bucket label of `timestamp`.
    pub fn label(self, timestamp: NaiveDateTime) -> String {
        timestamp.format(self.label_format()).to_string()
    }

    /// Selector string as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByHour => "byHour",
            Self::ByDay => "byDay",
            Self::ByWeekDay => "byWeekDay",
            Self::ByMonth => "byMonth",
        }
    }
}

impl fmt::Display for ReportUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportUnit {
    type Err = SalesReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| SalesReportError::unknown_unit(s))
    }
}

/// A half-open reporting interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermBounds {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TermBounds {
    /// Creates bounds, rejecting empty or inverted intervals.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(SalesReportError::invalid_range(start, end))
        }
    }

    /// Inclusive lower bound.
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive upper bound.
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether `timestamp` lies inside the interval.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

impl fmt::Display for TermBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            sales_report_common::format_timestamp(self.start),
            sales_report_common::format_timestamp(self.end)
        )
    }
}

/// A validated report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Report to build.
    pub report_type: ReportType,
    /// Reporting interval.
    pub term: TermBounds,
    /// Bucketing unit; required for term reports, ignored otherwise.
    pub unit: Option<ReportUnit>,
}

impl ReportRequest {
    /// Creates a request, checking that term reports carry a unit.
    pub fn new(report_type: ReportType, term: TermBounds, unit: Option<ReportUnit>) -> Result<Self> {
        if report_type == ReportType::Term && unit.is_none() {
            return Err(SalesReportError::MissingUnit);
        }

        Ok(Self {
            report_type,
            term,
            unit,
        })
    }
}
