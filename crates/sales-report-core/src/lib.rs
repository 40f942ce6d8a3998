//! Sales report aggregation: term series, product ranking and age brackets
//!
//! A report request is normalized into half-open term bounds, the matching
//! orders are fetched from an [`OrderSource`], and one aggregator turns them
//! into a [`ReportResult`] holding both the detailed breakdown and its
//! chart.js shaped projection.

pub mod age;
pub mod aggregator;
pub mod chart;
pub mod product;
pub mod range;
pub mod service;
pub mod source;
pub mod term;
pub mod types;

pub use age::{AgeAggregator, AgeBracket, AgeBreakdown, AgeLabels};
pub use aggregator::{BucketTotals, LabeledBuckets, RawReport, ReportAggregator, ReportResult};
pub use chart::{ChartData, ColorSpec, Dataset, LineStyle, Palette};
pub use product::{ProductAggregate, ProductAggregator, ProductRanking, RankedEntry};
pub use range::{normalize, NormalizedTerm, TermSelection};
pub use service::{build_report, SalesReportService};
pub use source::{InMemoryOrderSource, OrderSource, StoredOrder};
pub use term::{TermAggregator, TermBreakdown};
pub use types::*;
