use dinehall_totals_service::aggregate::compute_total;
use dinehall_totals_service::error::ApiError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sums_food_prices_across_open_and_closed_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "table_id": 1,
                "datetime": "2025-08-07T12:00:00Z",
                "active": true,
                "foods": [{"id": 1, "name": "Pizza", "price": "10.99"}]
            },
            {
                "id": 2,
                "table_id": 2,
                "datetime": "2025-08-07T12:05:00Z",
                "active": false,
                "foods": [
                    {"id": 2, "name": "Burger", "price": "8.49"},
                    {"id": 3, "name": "Tap water", "price": "0"}
                ]
            }
        ])))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let total = compute_total(&client, &server.uri()).await.unwrap();
    assert!((total.total - 19.48).abs() < 1e-9);
}

#[tokio::test]
async fn empty_order_list_totals_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let total = compute_total(&client, &server.uri()).await.unwrap();
    assert_eq!(total.total, 0.0);
}

#[tokio::test]
async fn upstream_error_surfaces_as_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view-order"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let err = compute_total(&client, &server.uri()).await.unwrap_err();
    assert!(matches!(err, ApiError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn unreachable_upstream_surfaces_as_service_unavailable() {
    let client = reqwest::Client::new();
    let err = compute_total(&client, "http://127.0.0.1:1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ServiceUnavailable(_)));
}
