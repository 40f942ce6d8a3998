//! Revenue per customer age bracket.

use crate::aggregator::{LabeledBuckets, ReportAggregator};
use crate::chart::{ChartData, Dataset, Palette};
use chrono::{NaiveDate, NaiveDateTime};
use sales_report_common::{OrderRecord, Result};
use tracing::{debug, instrument, warn};

/// Age report breakdown: bracket label to revenue and order count, in first-seen order.
pub type AgeBreakdown = LabeledBuckets;

/// Ten-year age bracket of a customer at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    /// Lower bound of the bracket: 0, 10, 20, ...
    Decade(u32),
    /// No customer, no birth date, or a birth date after evaluation time.
    Unknown,
}

impl AgeBracket {
    /// Bracket of someone born on `birth_date`, evaluated on `today`.
    pub fn of(birth_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        birth_date
            .and_then(|birth| today.years_since(birth))
            .map_or(Self::Unknown, |years| Self::Decade(years / 10 * 10))
    }

    /// Display label such as `"20代"`, or `unknown_label`.
    pub fn label(self, suffix: &str, unknown_label: &str) -> String {
        match self {
            Self::Decade(decade) => format!("{decade}{suffix}"),
            Self::Unknown => unknown_label.to_string(),
        }
    }
}

/// Labels used by the age report.
#[derive(Debug, Clone)]
pub struct AgeLabels {
    pub series: String,
    pub suffix: String,
    pub unknown: String,
}

/// Buckets orders by the age bracket of their customer.
#[derive(Debug, Clone)]
pub struct AgeAggregator {
    now: NaiveDateTime,
    labels: AgeLabels,
    palette: Palette,
}

impl AgeAggregator {
    /// `now` is the evaluation instant ages are computed against.
    pub fn new(now: NaiveDateTime, labels: AgeLabels, palette: Palette) -> Self {
        Self { now, labels, palette }
    }

    fn bracket(&self, order: &OrderRecord) -> AgeBracket {
        let birth_date = order.customer_birth_date();
        let bracket = AgeBracket::of(birth_date, self.now.date());

        if let (Some(birth), AgeBracket::Unknown) = (birth_date, bracket) {
            warn!(%birth, "Birth date lies after evaluation time, counting order as unknown age");
        }
        bracket
    }
}

impl ReportAggregator for AgeAggregator {
    type Raw = AgeBreakdown;

    #[instrument(skip(self, orders), fields(orders = orders.len()))]
    fn aggregate(&self, orders: &[OrderRecord]) -> Result<AgeBreakdown> {
        let mut buckets = AgeBreakdown::new();

        for order in orders {
            let label = self.bracket(order).label(&self.labels.suffix, &self.labels.unknown);
            buckets.bucket(label).record(order.payment_total)?;
        }

        debug!(brackets = buckets.len(), "Aggregated age report");
        Ok(buckets)
    }

    fn chart(&self, raw: &AgeBreakdown) -> Result<ChartData> {
        Ok(ChartData {
            labels: raw.labels().map(str::to_string).collect(),
            datasets: vec![Dataset::colored(
                self.labels.series.clone(),
                raw.revenues(),
                self.palette.take(raw.len()),
            )],
        })
    }
}
