//! Per product revenue ranking with the long tail merged into one entry

use crate::aggregator::ReportAggregator;
use crate::chart::{ChartData, Dataset, Palette};
use indexmap::IndexMap;
use sales_report_common::{LineItem, Money, OrderRecord, ProductVariantId, Result, SalesReportError};
use tracing::{debug, instrument};

/// Totals of one product variant over the term
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProductAggregate {
    pub product_variant_id: ProductVariantId,
    /// Name seen on the variant's first line
    pub display_name: String,
    /// Price of the last line seen; not an average
    pub unit_price: Money,
    pub quantity_sum: u64,
    /// `unit_price * quantity_sum`
    pub revenue_total: Money,
    pub order_line_count: u64,
}

impl ProductAggregate {
    fn first_line(line: &LineItem) -> Self {
        Self {
            product_variant_id: line.product_variant_id,
            display_name: line.product_name.clone(),
            unit_price: line.unit_price_inc_tax,
            quantity_sum: 0,
            revenue_total: Money::ZERO,
            order_line_count: 0,
        }
    }

    fn add_line(&mut self, line: &LineItem) {
        self.quantity_sum += u64::from(line.quantity.get());
        self.unit_price = line.unit_price_inc_tax;
        self.order_line_count += 1;
    }
}

/// Every product of the term, ranked by revenue, highest first
///
/// Equal revenues keep the order in which the products were first seen.
/// Serializes as a map from variant id to aggregate, in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ProductRanking(IndexMap<ProductVariantId, ProductAggregate>);

/// One slice of the collapsed product chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub label: String,
    pub revenue_total: Money,
}

impl ProductRanking {
    /// Ranks finished aggregates kept in first-seen order; the sort is stable
    pub fn from_aggregates(mut aggregates: IndexMap<ProductVariantId, ProductAggregate>) -> Self {
        aggregates.sort_by(|_, a, _, b| b.revenue_total.cmp(&a.revenue_total));
        Self(aggregates)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ProductAggregate> {
        self.0.values()
    }

    pub fn get(&self, id: ProductVariantId) -> Option<&ProductAggregate> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn revenue_total(&self) -> Result<Money> {
        sum_revenues(self.entries())
    }

    /// The top `top_n` products under their own names, then one `other_label` entry summing the rest
    pub fn collapse(&self, top_n: usize, other_label: &str) -> Result<Vec<RankedEntry>> {
        let mut collapsed: Vec<RankedEntry> = self
            .entries()
            .take(top_n)
            .map(|entry| RankedEntry {
                label: entry.display_name.clone(),
                revenue_total: entry.revenue_total,
            })
            .collect();

        if self.len() > top_n {
            collapsed.push(RankedEntry {
                label: other_label.to_string(),
                revenue_total: sum_revenues(self.entries().skip(top_n))?,
            });
        }

        Ok(collapsed)
    }
}

fn sum_revenues<'a>(entries: impl Iterator<Item = &'a ProductAggregate>) -> Result<Money> {
    Money::checked_sum(entries.map(|entry| entry.revenue_total))
        .ok_or_else(|| SalesReportError::amount_overflow("unit_price_inc_tax"))
}

/// Aggregator ranking product variants by revenue
#[derive(Debug, Clone)]
pub struct ProductAggregator {
    top_n: usize,
    other_label: String,
    palette: Palette,
}

impl ProductAggregator {
    pub fn new(top_n: usize, other_label: impl Into<String>, palette: Palette) -> Self {
        Self {
            top_n,
            other_label: other_label.into(),
            palette,
        }
    }
}

impl ReportAggregator for ProductAggregator {
    type Raw = ProductRanking;

    #[instrument(skip(self, orders), fields(orders = orders.len(), top_n = self.top_n))]
    fn aggregate(&self, orders: &[OrderRecord]) -> Result<ProductRanking> {
        let mut aggregates: IndexMap<ProductVariantId, ProductAggregate> = IndexMap::new();

        for line in orders.iter().flat_map(|order| &order.line_items) {
            aggregates
                .entry(line.product_variant_id)
                .or_insert_with(|| ProductAggregate::first_line(line))
                .add_line(line);
        }

        for aggregate in aggregates.values_mut() {
            aggregate.revenue_total = aggregate
                .unit_price
                .checked_times(aggregate.quantity_sum)
                .ok_or_else(|| SalesReportError::amount_overflow("unit_price_inc_tax"))?;
        }

        let ranking = ProductRanking::from_aggregates(aggregates);
        debug!(products = ranking.len(), "Aggregated product report");
        Ok(ranking)
    }

    fn chart(&self, raw: &ProductRanking) -> Result<ChartData> {
        let entries = raw.collapse(self.top_n, &self.other_label)?;
        let colors = self.palette.take(entries.len());
        let (labels, data) = entries
            .into_iter()
            .map(|entry| (entry.label, entry.revenue_total))
            .unzip();

        Ok(ChartData {
            labels,
            datasets: vec![Dataset::segmented(data, colors)],
        })
    }
}
