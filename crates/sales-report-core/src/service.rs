//! Report service: fetches orders for a request and dispatches to the matching aggregator.

use crate::age::{AgeAggregator, AgeLabels};
use crate::aggregator::{RawReport, ReportAggregator, ReportResult};
use crate::chart::Palette;
use crate::product::ProductAggregator;
use crate::source::OrderSource;
use crate::term::TermAggregator;
use crate::types::{ReportRequest, ReportType};
use chrono::NaiveDateTime;
use sales_report_common::{OrderRecord, Result, SalesReportError};
use sales_report_config::{ChartConfig, ReportConfig};
use tracing::{info, instrument};

/// Builds a report from orders already fetched for `request`.
///
/// Pure apart from logging; `now` only matters for age reports.
pub fn build_report(
    request: &ReportRequest,
    orders: &[OrderRecord],
    now: NaiveDateTime,
    chart: &ChartConfig,
) -> Result<ReportResult> {
    let palette = Palette::from_config(chart);

    let (raw, graph) = match request.report_type {
        ReportType::Term => {
            let unit = request.unit.ok_or(SalesReportError::MissingUnit)?;
            let (raw, graph) = TermAggregator::new(request.term, unit, chart.series_label.clone()).run(orders)?;
            (RawReport::Term(raw), graph)
        }
        ReportType::Product => {
            let (raw, graph) =
                ProductAggregator::new(chart.top_products, chart.other_label.clone(), palette).run(orders)?;
            (RawReport::Product(raw), graph)
        }
        ReportType::Age => {
            let labels = AgeLabels {
                series: chart.series_label.clone(),
                suffix: chart.age_suffix.clone(),
                unknown: chart.unknown_age_label.clone(),
            };
            let (raw, graph) = AgeAggregator::new(now, labels, palette).run(orders)?;
            (RawReport::Age(raw), graph)
        }
    };

    Ok(ReportResult::new(raw, graph))
}

/// Sales report service over an order source.
#[derive(Debug)]
pub struct SalesReportService<S> {
    source: S,
    config: ReportConfig,
}

impl<S: OrderSource> SalesReportService<S> {
    pub fn new(source: S, config: ReportConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate one report.
    ///
    /// Request problems are rejected before the order source is queried, and
    /// source failures are returned as they are; no partial result is produced.
    #[instrument(skip(self, request), fields(report_type = %request.report_type, term = %request.term))]
    pub async fn generate(&self, request: &ReportRequest, now: NaiveDateTime) -> Result<ReportResult> {
        if request.report_type == ReportType::Term && request.unit.is_none() {
            return Err(SalesReportError::MissingUnit);
        }

        let excluded = self.config.excluded_statuses();
        let orders = self.source.fetch_orders(&request.term, &excluded).await?;
        let result = build_report(request, &orders, now, &self.config.chart)?;

        info!(
            orders = orders.len(),
            labels = result.graph.labels.len(),
            "Generated sales report"
        );
        Ok(result)
    }
}
