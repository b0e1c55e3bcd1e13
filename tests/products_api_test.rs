mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::Value;

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|p| p["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn listing_defaults_to_twelve_name_sorted_products() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 12);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["per_page"], 12);
    assert_eq!(body["pagination"]["total"], 24);
    assert_eq!(body["pagination"]["total_pages"], 2);

    // Name ascending: digits sort before letters
    assert_eq!(body["data"][0]["name"], "4K Action Camera");
}

#[tokio::test]
async fn out_of_range_page_is_empty_not_an_error() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/products?page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total"], 24);
}

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let app = TestApp::new();
    let (status, upper) = app.get("/api/v1/products?category=Fitness").await;
    assert_eq!(status, StatusCode::OK);
    let (_, lower) = app.get("/api/v1/products?category=fitness").await;

    assert_eq!(upper["pagination"]["total"], 6);
    assert_eq!(ids(&upper), ids(&lower));
}

#[tokio::test]
async fn price_range_bounds_are_inclusive() {
    let app = TestApp::new();
    let (status, body) = app
        .get("/api/v1/products?min_price=1000&max_price=2000")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 7);
    for product in body["data"].as_array().unwrap() {
        let price = product["price"].as_i64().unwrap();
        assert!((1000..=2000).contains(&price), "price {} out of range", price);
    }
}

#[tokio::test]
async fn inverted_price_range_is_rejected() {
    let app = TestApp::new();
    let (status, body) = app
        .get("/api/v1/products?min_price=2000&max_price=1000")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn price_sorts_are_exact_reverses() {
    let app = TestApp::new();
    let (_, low) = app.get("/api/v1/products?sort=price-low&per_page=24").await;
    let (_, high) = app.get("/api/v1/products?sort=price-high&per_page=24").await;

    let mut high_ids = ids(&high);
    high_ids.reverse();
    assert_eq!(ids(&low), high_ids);
    assert_eq!(low["data"][0]["price"], 899);
    assert_eq!(high["data"][0]["price"], 24999);
}

#[tokio::test]
async fn rating_sort_is_descending() {
    let app = TestApp::new();
    let (_, body) = app.get("/api/v1/products?sort=rating").await;
    assert_eq!(body["data"][0]["name"], "Adjustable Dumbbells");
}

#[tokio::test]
async fn unknown_sort_key_falls_back_to_name_order() {
    let app = TestApp::new();
    let (_, by_name) = app.get("/api/v1/products?sort=name").await;
    let (_, unknown) = app.get("/api/v1/products?sort=newest").await;
    assert_eq!(ids(&by_name), ids(&unknown));
}

#[tokio::test]
async fn get_product_returns_full_record() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/products/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Wireless Headphones");
    assert_eq!(body["category"], "Electronics");
    assert_eq!(body["price"], 7999);
    assert_eq!(body["stock"], true);
}

#[tokio::test]
async fn unknown_product_is_structured_404() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/products/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("9999"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn categories_are_distinct_and_in_catalog_order() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect::<Vec<_>>(),
        vec!["Electronics", "Accessories", "Home", "Fitness"]
    );
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
