//! Order source seam and the in-memory snapshot source.

use crate::types::TermBounds;
use async_trait::async_trait;
use sales_report_common::{ExcludedStatuses, OrderRecord, Result, SalesReportError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Supplies the orders a report aggregates.
///
/// Implementations return every non-deleted order placed inside `term` whose
/// status is not in `excluded`. No match is an empty vector, never an error.
/// Storage failures surface as [`SalesReportError::Source`].
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the orders of a reporting term.
    async fn fetch_orders(&self, term: &TermBounds, excluded: &ExcludedStatuses) -> Result<Vec<OrderRecord>>;
}

/// An order as kept by a store, including its soft-delete flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOrder {
    /// The order itself.
    #[serde(flatten)]
    pub order: OrderRecord,
    /// Soft-deleted orders never reach a report.
    #[serde(default)]
    pub deleted: bool,
}

impl StoredOrder {
    /// Wraps a live order.
    pub const fn live(order: OrderRecord) -> Self {
        Self { order, deleted: false }
    }

    /// Wraps a soft-deleted order.
    pub const fn deleted(order: OrderRecord) -> Self {
        Self { order, deleted: true }
    }

    fn matches(&self, term: &TermBounds, excluded: &ExcludedStatuses) -> bool {
        !self.deleted && term.contains(self.order.order_date) && !excluded.contains(self.order.status)
    }
}

/// Order source backed by a snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderSource {
    orders: Vec<StoredOrder>,
}

impl InMemoryOrderSource {
    /// Creates a source over the given snapshot.
    pub fn new(orders: Vec<StoredOrder>) -> Self {
        Self { orders }
    }

    /// Parses a JSON array of stored orders.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let orders: Vec<StoredOrder> = serde_json::from_str(content)?;
        Ok(Self::new(orders))
    }

    /// Reads a JSON snapshot file.
    pub async fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SalesReportError::source_with(format!("Failed to read order snapshot {}", path.display()), e))?;

        let source = Self::from_json_str(&content)?;
        debug!(path = %path.display(), orders = source.len(), "Loaded order snapshot");
        Ok(source)
    }

    /// Adds an order to the snapshot.
    pub fn push(&mut self, order: StoredOrder) {
        self.orders.push(order);
    }

    /// Number of stored orders, deleted ones included.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the snapshot holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<OrderRecord> for InMemoryOrderSource {
    fn from_iter<I: IntoIterator<Item = OrderRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(StoredOrder::live).collect())
    }
}

#[async_trait]
impl OrderSource for InMemoryOrderSource {
    #[instrument(skip(self, term, excluded), fields(term = %term, excluded = excluded.len()))]
    async fn fetch_orders(&self, term: &TermBounds, excluded: &ExcludedStatuses) -> Result<Vec<OrderRecord>> {
        let orders: Vec<OrderRecord> = self
            .orders
            .iter()
            .filter(|stored| stored.matches(term, excluded))
            .map(|stored| stored.order.clone())
            .collect();

        debug!(stored = self.orders.len(), matched = orders.len(), "Fetched orders");
        Ok(orders)
    }
}
