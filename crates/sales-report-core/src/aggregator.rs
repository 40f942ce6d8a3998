//! Aggregation pipeline shared by the term, product and age reports

use crate::age::AgeBreakdown;
use crate::chart::ChartData;
use crate::product::ProductRanking;
use crate::term::TermBreakdown;
use indexmap::IndexMap;
use sales_report_common::{Money, OrderRecord, Result, SalesReportError};
use serde::Serialize;

/// Trait for aggregating orders into one report type
pub trait ReportAggregator {
    /// Detailed breakdown produced by a single pass over the orders
    type Raw;

    /// Accumulate the orders into a fresh breakdown
    fn aggregate(&self, orders: &[OrderRecord]) -> Result<Self::Raw>;

    /// Project a breakdown onto chart data
    fn chart(&self, raw: &Self::Raw) -> Result<ChartData>;

    /// Aggregate once and derive both views from the same breakdown
    fn run(&self, orders: &[OrderRecord]) -> Result<(Self::Raw, ChartData)> {
        let raw = self.aggregate(orders)?;
        let graph = self.chart(&raw)?;
        Ok((raw, graph))
    }
}

/// Revenue and order count of one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketTotals {
    pub revenue_total: Money,
    pub order_count: u64,
}

impl BucketTotals {
    /// Count one order paying `amount`
    ///
    /// Fails without touching the bucket when the revenue leaves the decimal range.
    pub fn record(&mut self, amount: Money) -> Result<()> {
        self.revenue_total = self
            .revenue_total
            .checked_add(amount)
            .ok_or_else(|| SalesReportError::amount_overflow("payment_total"))?;
        self.order_count += 1;
        Ok(())
    }
}

/// Buckets keyed by label, serialized as a map in first-inserted order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabeledBuckets(IndexMap<String, BucketTotals>);

impl LabeledBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-valued bucket for each label; repeated labels keep their first position
    pub fn zeroed<I: IntoIterator<Item = String>>(labels: I) -> Self {
        Self(labels.into_iter().map(|label| (label, BucketTotals::default())).collect())
    }

    /// Bucket for `label`, created empty on first use
    pub fn bucket(&mut self, label: String) -> &mut BucketTotals {
        self.0.entry(label).or_default()
    }

    pub fn get(&self, label: &str) -> Option<&BucketTotals> {
        self.0.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut BucketTotals> {
        self.0.get_mut(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &BucketTotals> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BucketTotals)> {
        self.0.iter().map(|(label, bucket)| (label.as_str(), bucket))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Revenue of every bucket, in label order
    pub fn revenues(&self) -> Vec<Money> {
        self.values().map(|bucket| bucket.revenue_total).collect()
    }

    /// Revenue summed over every bucket
    pub fn revenue_total(&self) -> Result<Money> {
        Money::checked_sum(self.values().map(|bucket| bucket.revenue_total))
            .ok_or_else(|| SalesReportError::amount_overflow("payment_total"))
    }

    /// Orders counted over every bucket
    pub fn order_count(&self) -> u64 {
        self.values().map(|bucket| bucket.order_count).sum()
    }
}

/// Detailed breakdown of whichever report was built
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawReport {
    Term(TermBreakdown),
    Product(ProductRanking),
    Age(AgeBreakdown),
}

impl RawReport {
    pub const fn as_term(&self) -> Option<&TermBreakdown> {
        match self {
            Self::Term(raw) => Some(raw),
            _ => None,
        }
    }

    pub const fn as_product(&self) -> Option<&ProductRanking> {
        match self {
            Self::Product(raw) => Some(raw),
            _ => None,
        }
    }

    pub const fn as_age(&self) -> Option<&AgeBreakdown> {
        match self {
            Self::Age(raw) => Some(raw),
            _ => None,
        }
    }
}

/// Tabular breakdown plus its chart projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResult {
    pub raw: RawReport,
    pub graph: ChartData,
}

impl ReportResult {
    pub fn new(raw: RawReport, graph: ChartData) -> Self {
        Self { raw, graph }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_buckets_keep_insertion_order() {
        let mut buckets = LabeledBuckets::zeroed(["b", "a", "b"].map(String::from));
        buckets.bucket("c".to_string()).record(Money::from_units(5)).unwrap();
        buckets.bucket("a".to_string()).record(Money::from_units(7)).unwrap();

        assert_eq!(buckets.labels().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(buckets.get("a").unwrap().revenue_total, Money::from_units(7));
        assert_eq!(buckets.get("b"), Some(&BucketTotals::default()));
        assert_eq!(buckets.get("z"), None);
    }

    #[test]
    fn test_bucket_totals() {
        let mut buckets = LabeledBuckets::new();
        buckets.bucket("x".to_string()).record(Money::from_units(100)).unwrap();
        buckets.bucket("x".to_string()).record(Money::from_units(50)).unwrap();
        buckets.bucket("y".to_string());

        assert_eq!(buckets.revenues(), vec![Money::from_units(150), Money::ZERO]);
        assert_eq!(buckets.revenue_total().unwrap(), Money::from_units(150));
        assert_eq!(buckets.order_count(), 2);
    }

    #[test]
    fn test_record_overflow_leaves_bucket_untouched() {
        let mut bucket = BucketTotals::default();
        bucket.record(Money(Decimal::MAX)).unwrap();

        let err = bucket.record(Money::from_units(1)).unwrap_err();
        assert!(matches!(err, SalesReportError::Validation { field: Some(ref f), .. } if f == "payment_total"));
        assert_eq!(bucket.revenue_total, Money(Decimal::MAX));
        assert_eq!(bucket.order_count, 1);
    }

    #[test]
    fn test_revenue_total_overflow() {
        let mut buckets = LabeledBuckets::new();
        buckets.bucket("a".to_string()).record(Money(Decimal::MAX)).unwrap();
        buckets.bucket("b".to_string()).record(Money(Decimal::MAX)).unwrap();

        assert!(buckets.revenue_total().is_err());
    }

    #[test]
    fn test_buckets_serialize_as_ordered_map() {
        let mut buckets = LabeledBuckets::zeroed(["12".to_string()]);
        buckets.bucket("01".to_string()).record(Money::from_units(10)).unwrap();

        let json = serde_json::to_string(&buckets).unwrap();
        assert!(json.find("\"12\"").unwrap() < json.find("\"01\"").unwrap());

        let value = serde_json::to_value(&buckets).unwrap();
        assert_eq!(value["01"], json!({"revenue_total": 10.0, "order_count": 1}));
    }
}
