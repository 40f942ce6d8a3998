//! Integration tests for sales-report-core crate.
//!
//! These tests drive whole reports through the service, from term selection
//! to the serialized payload.

use sales_report_common::test_utils::order_fixtures::{order_at, order_by_customer, ranked_product_orders};
use sales_report_common::test_utils::{create_temp_file, init_test_logging, mock_date, mock_datetime};
use sales_report_common::{Money, SalesReportError};
use sales_report_config::ReportConfig;
use sales_report_core::{
    normalize, InMemoryOrderSource, ReportRequest, ReportType, ReportUnit, SalesReportService, StoredOrder,
    TermSelection,
};
use serde_json::json;
use std::io::Write;

fn service(orders: Vec<sales_report_common::OrderRecord>) -> SalesReportService<InMemoryOrderSource> {
    SalesReportService::new(orders.into_iter().collect(), ReportConfig::default())
}

fn request(report_type: ReportType, selection: TermSelection, unit: Option<ReportUnit>) -> ReportRequest {
    let term = normalize(selection, unit).unwrap();
    ReportRequest::new(report_type, term.bounds, term.unit).unwrap()
}

#[tokio::test]
async fn test_monthly_hourly_report() {
    init_test_logging();

    let service = service(vec![
        order_at(2023, 2, 1, 9, 1200),
        order_at(2023, 2, 14, 9, 800),
        order_at(2023, 2, 28, 23, 500),
        order_at(2023, 3, 1, 0, 10_000),
    ]);
    let request = request(
        ReportType::Term,
        TermSelection::Monthly(mock_date(2023, 2, 15)),
        Some(ReportUnit::ByHour),
    );

    let result = service.generate(&request, mock_datetime(2023, 3, 2, 0, 0, 0)).await.unwrap();
    let raw = result.raw.as_term().unwrap();

    let expected: Vec<String> = (0..24).map(|h| format!("{h:02}")).collect();
    assert_eq!(result.graph.labels, expected);
    assert_eq!(raw.get("09").unwrap().revenue_total, Money::from_units(2000));
    assert_eq!(raw.get("09").unwrap().order_count, 2);
    assert_eq!(raw.get("23").unwrap().order_count, 1);
    assert_eq!(raw.revenue_total().unwrap(), Money::from_units(2500));
}

#[tokio::test]
async fn test_explicit_range_includes_end_day() {
    let service = service(vec![
        order_at(2023, 2, 5, 23, 700),
        order_at(2023, 2, 6, 0, 900),
    ]);
    let request = request(
        ReportType::Term,
        TermSelection::Range {
            start: mock_date(2023, 2, 1),
            end: mock_date(2023, 2, 5),
        },
        Some(ReportUnit::ByDay),
    );

    assert_eq!(request.term.start(), mock_datetime(2023, 2, 1, 0, 0, 0));
    assert_eq!(request.term.end(), mock_datetime(2023, 2, 6, 0, 0, 0));

    let result = service.generate(&request, mock_datetime(2023, 3, 1, 0, 0, 0)).await.unwrap();
    assert_eq!(result.graph.labels, vec!["02/01", "02/02", "02/03", "02/04", "02/05"]);
    assert_eq!(
        result.graph.datasets[0].data,
        vec![Money::ZERO, Money::ZERO, Money::ZERO, Money::ZERO, Money::from_units(700)]
    );
}

#[tokio::test]
async fn test_empty_term_is_zero_filled() {
    let service = service(Vec::new());
    let request = request(
        ReportType::Term,
        TermSelection::Monthly(mock_date(2023, 12, 1)),
        Some(ReportUnit::ByWeekDay),
    );

    let result = service.generate(&request, mock_datetime(2024, 1, 1, 0, 0, 0)).await.unwrap();
    let raw = result.raw.as_term().unwrap();

    assert_eq!(raw.len(), 7);
    assert!(raw.values().all(|bucket| bucket.revenue_total.is_zero() && bucket.order_count == 0));
}

#[tokio::test]
async fn test_fifteen_products_collapse_into_ten_plus_other() {
    let service = service(ranked_product_orders(15));
    let request = request(ReportType::Product, TermSelection::Monthly(mock_date(2023, 2, 1)), None);

    let result = service.generate(&request, mock_datetime(2023, 3, 1, 0, 0, 0)).await.unwrap();
    let ranking = result.raw.as_product().unwrap();

    assert_eq!(ranking.len(), 15);
    assert_eq!(result.graph.labels.len(), 11);
    assert_eq!(result.graph.labels[10], "Other");
    assert_eq!(result.graph.datasets[0].data[10], Money::from_units(1500));

    let graph_total = Money::checked_sum(result.graph.datasets[0].data.iter().copied()).unwrap();
    assert_eq!(graph_total, ranking.revenue_total().unwrap());
}

#[tokio::test]
async fn test_age_brackets_at_evaluation_time() {
    let service = service(vec![
        order_by_customer(1000, Some(mock_date(1994, 2, 1))),
        order_by_customer(2000, Some(mock_date(1993, 2, 1))),
        order_at(2023, 2, 1, 15, 300),
    ]);
    let request = request(ReportType::Age, TermSelection::Monthly(mock_date(2023, 2, 1)), None);

    let result = service.generate(&request, mock_datetime(2023, 2, 1, 0, 0, 0)).await.unwrap();
    assert_eq!(result.graph.labels, vec!["20代", "30代", "未回答"]);
    assert_eq!(
        result.graph.datasets[0].data,
        vec![Money::from_units(1000), Money::from_units(2000), Money::from_units(300)]
    );
}

#[tokio::test]
async fn test_snapshot_file_report_payload() {
    let mut file = create_temp_file();
    let snapshot = json!([
        {"order_date": "2023-02-01T10:00:00", "payment_total": 1500, "status": 5,
         "line_items": [{"product_variant_id": 7, "product_name": "Tea", "unit_price_inc_tax": 500, "quantity": 3}]},
        {"order_date": "2023-02-01T11:00:00", "payment_total": 400, "status": 8,
         "line_items": [{"product_variant_id": 8, "product_name": "Cup", "unit_price_inc_tax": 400, "quantity": 1}]},
        {"order_date": "2023-02-02T11:00:00", "payment_total": 900, "status": 5, "deleted": true,
         "line_items": [{"product_variant_id": 9, "product_name": "Pot", "unit_price_inc_tax": 900, "quantity": 1}]}
    ]);
    file.write_all(snapshot.to_string().as_bytes()).unwrap();

    let source = InMemoryOrderSource::from_json_file(file.path()).await.unwrap();
    let service = SalesReportService::new(source, ReportConfig::default());
    let request = request(ReportType::Product, TermSelection::Monthly(mock_date(2023, 2, 1)), None);

    let result = service.generate(&request, mock_datetime(2023, 3, 1, 0, 0, 0)).await.unwrap();
    let payload = serde_json::to_value(&result).unwrap();

    assert_eq!(payload["raw"]["7"]["revenue_total"], json!(1500.0));
    assert!(payload["raw"].get("8").is_none());
    assert!(payload["raw"].get("9").is_none());
    assert_eq!(payload["graph"]["labels"], json!(["Tea"]));
    assert_eq!(payload["graph"]["datasets"][0]["data"], json!([1500.0]));
    assert_eq!(payload["graph"]["datasets"][0]["backgroundColor"], json!(["#FF6384"]));
}

#[tokio::test]
async fn test_same_input_gives_identical_output() {
    let orders = vec![
        order_by_customer(1000, Some(mock_date(1980, 6, 1))),
        order_at(2023, 2, 7, 8, 250),
    ];
    let service = SalesReportService::new(
        InMemoryOrderSource::new(orders.into_iter().map(StoredOrder::live).collect()),
        ReportConfig::default(),
    );
    let now = mock_datetime(2023, 3, 1, 0, 0, 0);

    for (report_type, unit) in [
        (ReportType::Term, Some(ReportUnit::ByDay)),
        (ReportType::Product, None),
        (ReportType::Age, None),
    ] {
        let request = request(report_type, TermSelection::Monthly(mock_date(2023, 2, 1)), unit);
        let first = serde_json::to_string(&service.generate(&request, now).await.unwrap()).unwrap();
        let second = serde_json::to_string(&service.generate(&request, now).await.unwrap()).unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_revenue_overflow_fails_the_report() {
    let snapshot = r#"[
        {"order_date": "2023-02-01T10:00:00", "payment_total": 5e28, "status": 5},
        {"order_date": "2023-02-01T11:00:00", "payment_total": 5e28, "status": 5}
    ]"#;
    let source = InMemoryOrderSource::from_json_str(snapshot).unwrap();
    let service = SalesReportService::new(source, ReportConfig::default());
    let now = mock_datetime(2023, 3, 1, 0, 0, 0);

    for (report_type, unit) in [(ReportType::Term, Some(ReportUnit::ByDay)), (ReportType::Age, None)] {
        let request = request(report_type, TermSelection::Monthly(mock_date(2023, 2, 1)), unit);
        let err = service.generate(&request, now).await.unwrap_err();
        assert!(matches!(
            err,
            SalesReportError::Validation { field: Some(ref field), .. } if field == "payment_total"
        ));
    }
}

#[test]
fn test_snapshot_rejects_zero_quantity() {
    let snapshot = r#"[
        {"order_date": "2023-02-01T10:00:00", "payment_total": 0, "status": 5,
         "line_items": [{"product_variant_id": 1, "product_name": "Tea", "unit_price_inc_tax": 500, "quantity": 0}]}
    ]"#;
    let result = InMemoryOrderSource::from_json_str(snapshot);
    assert!(matches!(result, Err(SalesReportError::Serialization(_))));
}
