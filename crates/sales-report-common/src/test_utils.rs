//! Test utilities and shared test helpers for the sales report workspace.
//!
//! This module provides fixtures and helper functions shared by the unit and
//! integration tests of every crate in the workspace. Enable the `testing`
//! feature to use it from another crate.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Calendar date fixture.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Wall-clock timestamp fixture.
pub fn mock_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    mock_date(year, month, day)
        .and_hms_opt(hour, min, sec)
        .expect("valid fixture time")
}

/// Create a temporary file for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Failed to create temporary file")
}

/// Order fixtures for aggregator tests.
pub mod order_fixtures {
    use super::mock_datetime;
    use crate::{CustomerRef, LineItem, Money, OrderRecord, OrderStatus, ProductVariantId};
    use chrono::NaiveDate;
    use std::num::NonZeroU32;

    /// Status used for shipped orders in fixtures.
    pub const SHIPPED: OrderStatus = OrderStatus(5);

    /// A guest order with no lines.
    pub fn order_at(year: i32, month: u32, day: u32, hour: u32, total: i64) -> OrderRecord {
        OrderRecord::new(
            mock_datetime(year, month, day, hour, 0, 0),
            Money::from_units(total),
            SHIPPED,
        )
    }

    /// A product line with a whole-unit price.
    ///
    /// # Panics
    ///
    /// Panics if `quantity` is zero.
    pub fn product_line(id: u64, name: &str, price: i64, quantity: u32) -> LineItem {
        let quantity = NonZeroU32::new(quantity).expect("Line quantity must be positive");
        LineItem::new(ProductVariantId(id), name, Money::from_units(price), quantity)
    }

    /// An order placed by a customer with the given birth date.
    pub fn order_by_customer(total: i64, birth_date: Option<NaiveDate>) -> OrderRecord {
        order_at(2023, 2, 1, 12, total).with_customer(CustomerRef { birth_date })
    }

    /// One order per product, `count` products with strictly decreasing revenue.
    ///
    /// Product `i` (1-based) sells one unit at `(count - i + 1) * 100`.
    pub fn ranked_product_orders(count: u64) -> Vec<OrderRecord> {
        (1..=count)
            .map(|i| {
                let price = i64::try_from((count - i + 1) * 100).unwrap_or(i64::MAX);
                order_at(2023, 2, 1, 10, price).with_line(product_line(
                    i,
                    &format!("Product {i}"),
                    price,
                    1,
                ))
            })
            .collect()
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
statuses:
  processing: 8
  cancelled: 3
  pending: 7
"#
    }

    /// Create a full configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "statuses:\n",
            "  processing: 8\n",
            "  cancelled: 3\n",
            "  pending: 7\n",
            "  extra_excluded: [9]\n",
            "\n",
            "chart:\n",
            "  series_label: \"Revenue\"\n",
            "  other_label: \"Others\"\n",
            "  unknown_age_label: \"Unknown\"\n",
            "  age_suffix: \"s\"\n",
            "  top_products: 5\n",
            "  palette: [\"#FF6384\", \"#36A2EB\", \"#FFCE56\"]\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  json: true\n"
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::Money;
    use chrono::{Duration, NaiveDateTime};
    use proptest::prelude::*;

    /// Strategy for timestamps between 2000-01-01 and roughly 2040.
    pub fn datetime_strategy() -> impl Strategy<Value = NaiveDateTime> {
        (0i64..1_262_304_000).prop_map(|secs| super::mock_datetime(2000, 1, 1, 0, 0, 0) + Duration::seconds(secs))
    }

    /// Strategy for positive amounts with two decimal places.
    pub fn money_strategy() -> impl Strategy<Value = Money> {
        (0i64..10_000_000).prop_map(|cents| Money::from_scaled(cents, 2))
    }
}
