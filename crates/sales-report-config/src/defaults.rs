//! Default values for every configuration section.

use crate::schema::{ChartConfig, LoggingSettings, StatusConfig};
use sales_report_common::OrderStatus;

/// Default order status id for orders being processed.
pub const ORDER_PROCESSING: OrderStatus = OrderStatus(8);
/// Default order status id for cancelled orders.
pub const ORDER_CANCELLED: OrderStatus = OrderStatus(3);
/// Default order status id for pending orders.
pub const ORDER_PENDING: OrderStatus = OrderStatus(7);

/// Products listed individually before the tail is merged.
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Entry colors, one per ranked product plus the merged tail.
pub const DEFAULT_PALETTE: [&str; 11] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#5319e7", "#d93f0b", "#55a532", "#1d76db", "#bfd4f2",
    "#cc317c", "#006b75", "#444",
];

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            processing: ORDER_PROCESSING,
            cancelled: ORDER_CANCELLED,
            pending: ORDER_PENDING,
            extra_excluded: Vec::new(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_label: "購入合計".to_string(),
            other_label: "Other".to_string(),
            unknown_age_label: "未回答".to_string(),
            age_suffix: "代".to_string(),
            top_products: DEFAULT_TOP_PRODUCTS,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}
