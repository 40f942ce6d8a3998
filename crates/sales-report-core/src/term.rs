//! Revenue per time bucket, zero-filled over the whole term.

use crate::aggregator::{LabeledBuckets, ReportAggregator};
use crate::chart::{ChartData, Dataset};
use crate::types::{ReportUnit, TermBounds};
use chrono::{DurationRound, NaiveDateTime, TimeDelta};
use indexmap::IndexSet;
use sales_report_common::{format_timestamp, OrderRecord, Result, SalesReportError};
use tracing::{debug, instrument};

/// Term report breakdown: label to revenue and order count, in chronological first-seen order.
pub type TermBreakdown = LabeledBuckets;

/// Buckets orders by the label `unit` gives their order date.
#[derive(Debug, Clone)]
pub struct TermAggregator {
    bounds: TermBounds,
    unit: ReportUnit,
    series_label: String,
}

impl TermAggregator {
    pub fn new(bounds: TermBounds, unit: ReportUnit, series_label: impl Into<String>) -> Self {
        Self {
            bounds,
            unit,
            series_label: series_label.into(),
        }
    }

    /// Every distinct label of the term, found by stepping it hour by hour.
    ///
    /// Stepping starts at the top of the hour containing the term start, so a
    /// bound that is not hour aligned still yields the label of its own hour.
    pub fn seed_labels(&self) -> Vec<String> {
        let step = TimeDelta::hours(1);
        let mut labels = IndexSet::new();
        let mut cursor = hour_floor(self.bounds.start());

        while cursor < self.bounds.end() {
            labels.insert(self.unit.label(cursor));
            match cursor.checked_add_signed(step) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        labels.into_iter().collect()
    }

    /// A zero-valued bucket for every label of the term.
    pub fn seed(&self) -> TermBreakdown {
        TermBreakdown::zeroed(self.seed_labels())
    }
}

fn hour_floor(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.duration_trunc(TimeDelta::hours(1)).unwrap_or(timestamp)
}

impl ReportAggregator for TermAggregator {
    type Raw = TermBreakdown;

    #[instrument(skip(self, orders), fields(unit = %self.unit, term = %self.bounds, orders = orders.len()))]
    fn aggregate(&self, orders: &[OrderRecord]) -> Result<TermBreakdown> {
        let mut buckets = self.seed();

        for order in orders {
            let label = self.unit.label(order.order_date);
            let bucket = buckets.get_mut(&label).ok_or_else(|| {
                SalesReportError::internal(format!(
                    "order placed at {} falls into unseeded bucket '{label}'",
                    format_timestamp(order.order_date)
                ))
            })?;
            bucket.record(order.payment_total)?;
        }

        debug!(buckets = buckets.len(), orders = buckets.order_count(), "Aggregated term report");
        Ok(buckets)
    }

    fn chart(&self, raw: &TermBreakdown) -> Result<ChartData> {
        Ok(ChartData {
            labels: raw.labels().map(str::to_string).collect(),
            datasets: vec![Dataset::line(self.series_label.clone(), raw.revenues())],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_report_common::test_utils::mock_datetime;
    use sales_report_common::test_utils::order_fixtures::order_at;
    use crate::aggregator::BucketTotals;
    use rust_decimal::Decimal;
    use sales_report_common::Money;

    fn aggregator(start: NaiveDateTime, end: NaiveDateTime, unit: ReportUnit) -> TermAggregator {
        TermAggregator::new(TermBounds::new(start, end).unwrap(), unit, "Sales")
    }

    fn one_day(unit: ReportUnit) -> TermAggregator {
        aggregator(mock_datetime(2023, 2, 1, 0, 0, 0), mock_datetime(2023, 2, 2, 0, 0, 0), unit)
    }

    #[test]
    fn test_hourly_labels_cover_the_day() {
        let labels = one_day(ReportUnit::ByHour).seed_labels();
        let expected: Vec<String> = (0..24).map(|h| format!("{h:02}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_weekday_labels_merge_across_weeks() {
        // 2023-02-01 was a Wednesday
        let term = aggregator(mock_datetime(2023, 2, 1, 0, 0, 0), mock_datetime(2023, 3, 1, 0, 0, 0), ReportUnit::ByWeekDay);
        assert_eq!(term.seed_labels(), vec!["Wed", "Thu", "Fri", "Sat", "Sun", "Mon", "Tue"]);

        let orders = vec![order_at(2023, 2, 1, 10, 100), order_at(2023, 2, 8, 10, 50)];
        let raw = term.aggregate(&orders).unwrap();
        let wednesday = raw.get("Wed").unwrap();
        assert_eq!(wednesday.revenue_total, Money::from_units(150));
        assert_eq!(wednesday.order_count, 2);
    }

    #[test]
    fn test_monthly_labels_across_year_end() {
        let term = aggregator(mock_datetime(2022, 11, 1, 0, 0, 0), mock_datetime(2023, 2, 1, 0, 0, 0), ReportUnit::ByMonth);
        assert_eq!(term.seed_labels(), vec!["11", "12", "01"]);
    }

    #[test]
    fn test_daily_labels() {
        let term = aggregator(mock_datetime(2023, 2, 27, 0, 0, 0), mock_datetime(2023, 3, 2, 0, 0, 0), ReportUnit::ByDay);
        assert_eq!(term.seed_labels(), vec!["02/27", "02/28", "03/01"]);
    }

    #[test]
    fn test_unaligned_start_keeps_its_hour() {
        let term = aggregator(mock_datetime(2023, 2, 1, 10, 30, 0), mock_datetime(2023, 2, 1, 11, 15, 0), ReportUnit::ByHour);
        assert_eq!(term.seed_labels(), vec!["10", "11"]);
    }

    #[test]
    fn test_empty_orders_zero_fill() {
        let raw = one_day(ReportUnit::ByHour).aggregate(&[]).unwrap();
        assert_eq!(raw.len(), 24);
        assert!(raw.values().all(|bucket| *bucket == BucketTotals::default()));
    }

    #[test]
    fn test_accumulates_revenue_and_count() {
        let orders = vec![
            order_at(2023, 2, 1, 9, 1000),
            order_at(2023, 2, 1, 9, 500),
            order_at(2023, 2, 1, 18, 250),
        ];
        let raw = one_day(ReportUnit::ByHour).aggregate(&orders).unwrap();

        assert_eq!(raw.get("09").unwrap().revenue_total, Money::from_units(1500));
        assert_eq!(raw.get("09").unwrap().order_count, 2);
        assert_eq!(raw.get("18").unwrap().order_count, 1);
        assert_eq!(raw.get("00").unwrap().order_count, 0);
        assert_eq!(raw.revenue_total().unwrap(), Money::from_units(1750));
    }

    #[test]
    fn test_order_outside_term_is_internal_error() {
        let orders = vec![order_at(2023, 3, 15, 9, 100)];
        let result = one_day(ReportUnit::ByDay).aggregate(&orders);
        assert!(matches!(result, Err(SalesReportError::Internal { .. })));
    }

    #[test]
    fn test_revenue_overflow_is_validation_error() {
        let mut huge = order_at(2023, 2, 1, 9, 0);
        huge.payment_total = Money(Decimal::MAX);
        let orders = vec![huge.clone(), huge];

        let result = one_day(ReportUnit::ByDay).aggregate(&orders);
        assert!(matches!(
            result,
            Err(SalesReportError::Validation { field: Some(ref field), .. }) if field == "payment_total"
        ));
    }

    #[test]
    fn test_chart_follows_buckets() {
        let term = one_day(ReportUnit::ByHour);
        let (raw, graph) = term.run(&[order_at(2023, 2, 1, 1, 300)]).unwrap();

        assert_eq!(graph.labels, raw.labels().collect::<Vec<_>>());
        assert_eq!(graph.datasets.len(), 1);
        assert_eq!(graph.datasets[0].label.as_deref(), Some("Sales"));
        assert_eq!(graph.datasets[0].data[1], Money::from_units(300));
        assert_eq!(graph.datasets[0].data[0], Money::ZERO);
    }
}
