//! HTTP boundary behavior: envelope normalization and error mapping.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use httpmock::prelude::*;
use marigold_client::types::Product;
use marigold_client::{ApiClient, ApiError, ClientConfig};
use marigold_integration_tests::TestContext;
use serde_json::{Value, json};
use url::Url;

#[tokio::test]
async fn enveloped_list_is_unwrapped() {
    let ctx = TestContext::new();
    let mock = ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/products");
        then.status(200)
            .json_body(json!({ "data": [{ "sku": "TEA-1" }, { "sku": "TEA-2" }], "total": 2 }));
    });

    let body: Value = ctx.client.get("/products").await.unwrap();

    mock.assert();
    assert_eq!(body, json!([{ "sku": "TEA-1" }, { "sku": "TEA-2" }]));
}

#[tokio::test]
async fn bare_object_is_returned_verbatim() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/analytics/revenue");
        then.status(200)
            .json_body(json!({ "total": 452310.5, "currency": "INR" }));
    });

    let body: Value = ctx.client.get("/analytics/revenue").await.unwrap();

    assert_eq!(body, json!({ "total": 452310.5, "currency": "INR" }));
}

#[tokio::test]
async fn bare_array_is_returned_verbatim() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/orders");
        then.status(200).json_body(json!([{ "id": 1 }, { "id": 2 }]));
    });

    let body: Value = ctx.client.get("/orders").await.unwrap();

    assert_eq!(body, json!([{ "id": 1 }, { "id": 2 }]));
}

#[tokio::test]
async fn object_with_non_array_data_field_is_not_unwrapped() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/analytics/sales");
        then.status(200)
            .json_body(json!({ "data": { "rows": [] }, "generated_at": "2026-02-01" }));
    });

    let body: Value = ctx.client.get("/analytics/sales").await.unwrap();

    assert_eq!(
        body,
        json!({ "data": { "rows": [] }, "generated_at": "2026-02-01" })
    );
}

#[tokio::test]
async fn typed_deserialization_applies_after_unwrapping() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/products");
        then.status(200).json_body(json!({ "data": [{
            "id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
            "name": "Assam Gold Loose Leaf",
            "description": null,
            "price": 449.0,
            "compare_at_price": null,
            "sku": "TEA-ASM-250",
            "stock_quantity": 120,
            "image_url": null,
            "images": null,
            "category": "Tea",
            "tags": null,
            "is_active": true,
            "created_at": "2026-01-12T08:30:00Z",
            "updated_at": "2026-02-01T10:00:00Z"
        }] }));
    });

    let products: Vec<Product> = ctx.client.get("/products").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products.first().unwrap().name, "Assam Gold Loose Leaf");
}

#[tokio::test]
async fn error_field_becomes_the_message() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::POST).path("/api/products");
        then.status(400)
            .json_body(json!({ "error": "name is required" }));
    });

    let err = ctx
        .client
        .post::<Value, _>("/products", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(&err, ApiError::Api { status: 400, message } if message == "name is required"));
    assert_eq!(err.to_string(), "name is required");
}

#[tokio::test]
async fn message_field_is_used_when_error_is_absent() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/coupons");
        then.status(409)
            .json_body(json!({ "message": "code already exists" }));
    });

    let err = ctx.client.get::<Value>("/coupons").await.unwrap_err();

    assert_eq!(err.to_string(), "code already exists");
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_text() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::GET).path("/api/products/missing");
        then.status(404).body("<html>not found</html>");
    });

    let err = ctx
        .client
        .get::<Value>("/products/missing")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn json_error_body_without_known_fields_reports_the_status_code() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(Method::PUT).path("/api/settings/theme");
        then.status(422).json_body(json!({ "details": ["bad value"] }));
    });

    let err = ctx
        .client
        .put::<Value, _>("/settings/theme", &json!({ "value": 1 }))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "request failed with status 422");
}

#[tokio::test]
async fn connect_failure_names_the_base_url() {
    // Nothing listens on port 9; the request dies at connect time.
    let dir = tempfile::tempdir().unwrap();
    let base_url = Url::parse("http://127.0.0.1:9/api").unwrap();
    let client =
        ApiClient::new(ClientConfig::new(base_url, dir.path().join("token"))).unwrap();

    let err = client.get::<Value>("/products").await.unwrap_err();

    assert!(matches!(err, ApiError::Connect { .. }));
    assert_eq!(
        err.to_string(),
        "unable to connect to the server at http://127.0.0.1:9/api"
    );
}
