//! Tests for the newtype wrappers in sales-report-common.

use sales_report_common::types::*;
use std::collections::HashMap;

#[test]
fn test_product_variant_id_traits() {
    let id = ProductVariantId(123);

    assert_eq!(format!("{:?}", id), "ProductVariantId(123)");
    assert_eq!(format!("{}", id), "123");

    let mut map = HashMap::new();
    map.insert(id, "tea");
    assert_eq!(map.get(&ProductVariantId(123)), Some(&"tea"));
}

#[test]
fn test_order_status_serialization() {
    let status = OrderStatus(8);
    let serialized = serde_json::to_string(&status).unwrap();
    assert_eq!(serialized, "8");

    let deserialized: OrderStatus = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, status);
}

#[test]
fn test_money_ordering() {
    let mut amounts = vec![
        Money::from_units(300),
        Money::from_scaled(10050, 2),
        Money::from_units(2000),
    ];
    amounts.sort();
    assert_eq!(
        amounts,
        vec![Money::from_scaled(10050, 2), Money::from_units(300), Money::from_units(2000)]
    );
}

#[test]
fn test_money_times_quantity_is_exact() {
    let price = Money::from_scaled(1999, 2);
    assert_eq!(price.checked_times(3), Some(Money::from_scaled(5997, 2)));
    assert_eq!(price.checked_times(0), Some(Money::ZERO));
}
