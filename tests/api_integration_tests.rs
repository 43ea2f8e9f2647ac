//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use receipt_points::{api::create_router, cache::LruStore, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(capacity: usize) -> Router {
    create_router(AppState::new(LruStore::new(capacity).unwrap()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn process_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn points_request(id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/receipts/{}/points", id))
        .body(Body::empty())
        .unwrap()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn process(app: &Router, receipt: &Value) -> String {
    let response = app
        .clone()
        .oneshot(process_request(receipt.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    json["id"].as_str().unwrap().to_string()
}

async fn points(app: &Router, id: &str) -> (StatusCode, Value) {
    let response = app.clone().oneshot(points_request(id)).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Process Endpoint Tests ==

#[tokio::test]
async fn test_process_then_points() {
    let app = create_test_app(100);

    let id = process(&app, &target_receipt()).await;
    assert_eq!(id.len(), 36);

    let (status, json) = points(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"], 28);
}

#[tokio::test]
async fn test_corner_market_points() {
    let app = create_test_app(100);

    let id = process(&app, &corner_market_receipt()).await;

    let (status, json) = points(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"], 109);
}

#[tokio::test]
async fn test_same_receipt_returns_same_id() {
    let app = create_test_app(100);

    let first = process(&app, &corner_market_receipt()).await;
    let second = process(&app, &corner_market_receipt()).await;
    assert_eq!(first, second);

    // Surrounding whitespace does not change identity
    let mut padded = corner_market_receipt();
    padded["retailer"] = json!("  M&M Corner Market ");
    let third = process(&app, &padded).await;
    assert_eq!(first, third);
}

#[tokio::test]
async fn test_different_receipts_get_different_ids() {
    let app = create_test_app(100);

    let first = process(&app, &target_receipt()).await;
    let second = process(&app, &corner_market_receipt()).await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_process_empty_items_allowed() {
    let app = create_test_app(100);
    let receipt = json!({
        "retailer": "Corner",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "10:00",
        "items": [],
        "total": "0.00"
    });

    let id = process(&app, &receipt).await;

    let (_, json) = points(&app, &id).await;
    assert_eq!(json["points"], 6 + 75);
}

#[tokio::test]
async fn test_process_malformed_time_scores_no_afternoon_bonus() {
    let app = create_test_app(100);
    let mut receipt = corner_market_receipt();
    receipt["purchaseTime"] = json!("14:3");

    let id = process(&app, &receipt).await;

    let (_, json) = points(&app, &id).await;
    assert_eq!(json["points"], 109 - 10);
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app(100);

    let response = app
        .oneshot(process_request(r#"{"retailer": "Target""#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn test_missing_items_is_invalid_json() {
    let app = create_test_app(100);
    let body = json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "total": "1.00"
    });

    let response = app.oneshot(process_request(body.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_errors_listed() {
    let app = create_test_app(100);
    let body = json!({
        "retailer": "  ",
        "purchaseDate": "2022/01/01",
        "purchaseTime": "13:01",
        "items": [{"shortDescription": "Pepsi", "price": ""}],
        "total": "1.00"
    });

    let response = app.oneshot(process_request(body.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["retailer", "purchaseDate", "items[0].price"]);
}

#[tokio::test]
async fn test_unpadded_date_rejected() {
    let app = create_test_app(100);
    let mut receipt = target_receipt();
    receipt["purchaseDate"] = json!("2022-01-1");

    let response = app
        .oneshot(process_request(receipt.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["fields"][0]["field"], "purchaseDate");
}

#[tokio::test]
async fn test_points_unknown_id() {
    let app = create_test_app(100);

    let (status, json) = points(&app, "00000000-0000-0000-0000-000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "ID not found");
}

// == Cache Behaviour Tests ==

#[tokio::test]
async fn test_least_recently_used_receipt_evicted() {
    let app = create_test_app(2);

    let a = process(&app, &target_receipt()).await;
    let b = process(&app, &corner_market_receipt()).await;

    // Reading 'a' makes 'b' the eviction candidate
    assert_eq!(points(&app, &a).await.0, StatusCode::OK);

    let mut third = target_receipt();
    third["total"] = json!("35.36");
    let c = process(&app, &third).await;

    assert_eq!(points(&app, &b).await.0, StatusCode::NOT_FOUND);
    assert_eq!(points(&app, &a).await.0, StatusCode::OK);
    assert_eq!(points(&app, &c).await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app(1);

    let first = process(&app, &target_receipt()).await;
    points(&app, &first).await; // hit
    points(&app, "missing").await; // miss
    process(&app, &corner_market_receipt()).await; // evicts first

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["evictions"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["capacity"], 1);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(100);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Live Server Tests ==

#[tokio::test]
async fn test_live_server_round_trip() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, create_test_app(100)).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let created: Value = client
        .post(format!("{}/receipts/process", base))
        .json(&corner_market_receipt())
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = client
        .get(format!("{}/receipts/{}/points", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["points"], 109);

    server.abort();
}
