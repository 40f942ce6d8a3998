//! Read-only order model handed to the aggregators by an order source.

use crate::types::{Money, OrderStatus, ProductVariantId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::num::NonZeroU32;

/// A completed order as seen by the report aggregators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Wall-clock time the order was placed, in shop local time.
    pub order_date: NaiveDateTime,
    /// Total paid for the order, tax included.
    pub payment_total: Money,
    /// Current order status.
    pub status: OrderStatus,
    /// Ordered lines.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Registered customer, absent for guest checkouts.
    #[serde(default)]
    pub customer: Option<CustomerRef>,
}

/// A single ordered product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product variant that was ordered.
    pub product_variant_id: ProductVariantId,
    /// Display name of the parent product.
    pub product_name: String,
    /// Unit price including tax at the time of the order.
    pub unit_price_inc_tax: Money,
    /// Ordered quantity; a zero quantity fails to deserialize.
    pub quantity: NonZeroU32,
}

/// The customer side of an order, reduced to what reports need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// Birth date, if the customer supplied one.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

/// Order statuses an order source must leave out of a report.
///
/// Supplied by configuration; the aggregators treat it as an opaque set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExcludedStatuses(BTreeSet<OrderStatus>);

impl ExcludedStatuses {
    /// Creates an empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether orders in `status` are excluded.
    pub fn contains(&self, status: OrderStatus) -> bool {
        self.0.contains(&status)
    }

    /// Number of excluded statuses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the excluded statuses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = OrderStatus> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<OrderStatus> for ExcludedStatuses {
    fn from_iter<I: IntoIterator<Item = OrderStatus>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl OrderRecord {
    /// Creates an order without lines or customer.
    pub fn new(order_date: NaiveDateTime, payment_total: Money, status: OrderStatus) -> Self {
        Self {
            order_date,
            payment_total,
            status,
            line_items: Vec::new(),
            customer: None,
        }
    }

    /// Adds a line item.
    #[must_use]
    pub fn with_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    /// Attaches a customer.
    #[must_use]
    pub fn with_customer(mut self, customer: CustomerRef) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Birth date of the associated customer, if both are known.
    pub fn customer_birth_date(&self) -> Option<NaiveDate> {
        self.customer.as_ref().and_then(|c| c.birth_date)
    }
}

impl LineItem {
    /// Creates a line item.
    pub fn new(
        product_variant_id: ProductVariantId,
        product_name: impl Into<String>,
        unit_price_inc_tax: Money,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            product_variant_id,
            product_name: product_name.into(),
            unit_price_inc_tax,
            quantity,
        }
    }
}

impl CustomerRef {
    /// Customer with a known birth date.
    pub const fn born(birth_date: NaiveDate) -> Self {
        Self {
            birth_date: Some(birth_date),
        }
    }
}
