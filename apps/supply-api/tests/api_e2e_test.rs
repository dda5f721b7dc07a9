//! E2E integration tests for the REST API.
//!
//! Drives the full flow: JSON over HTTP -> handlers -> entity stores, with
//! `Stores::reset_all` giving each scenario a clean seed state.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tower::ServiceExt;

use supply_api::domain::identifiers::{BranchId, HeadquartersId, OrderId, ProductId, SupplierId};
use supply_api::infrastructure::http::create_router;
use supply_api::infrastructure::seed::{Stores, seed_orders, seed_products};
use supply_api::{Branch, Order, Product};

fn make_app() -> (Router, Stores) {
    let stores = Stores::seeded();
    (create_router(stores.clone()), stores)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn e2e_health_check() {
    let (app, _stores) = make_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = parse(&body);
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn e2e_full_crud_scenario() {
    let (app, _stores) = make_app();

    // Insert a new order.
    let new_order = json!({
        "orderId": 4,
        "branchId": 1,
        "orderDate": "2025-04-01",
        "name": "Extra cartons",
        "description": "Top-up after stock count",
        "status": "pending"
    });
    let (status, body) = send(&app, "POST", "/api/orders", Some(new_order)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Order = parse(&body);
    assert_eq!(created.order_id, OrderId::new(4));

    // List reflects mutation order: the new order is appended.
    let (status, body) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let orders: Vec<Order> = parse(&body);
    assert_eq!(orders.len(), 4);
    assert_eq!(orders[3].order_id, OrderId::new(4));

    // Replace order 1; it keeps its position at the front.
    let replacement = json!({
        "orderId": 1,
        "branchId": 1,
        "orderDate": "2025-03-03",
        "name": "Spring restock (amended)",
        "description": "Quarterly replenishment, revised quantities",
        "status": "shipped"
    });
    let (status, _) = send(&app, "PUT", "/api/orders/1", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/orders", None).await;
    let orders: Vec<Order> = parse(&body);
    assert_eq!(orders[0].name, "Spring restock (amended)");

    // Remove the inserted order; a subsequent get is a 404.
    let (status, _) = send(&app, "DELETE", "/api/orders/4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", "/api/orders/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/orders", None).await;
    let orders: Vec<Order> = parse(&body);
    assert_eq!(orders.len(), 3);
}

#[tokio::test]
async fn e2e_reset_restores_seed_after_mutations() {
    let (app, stores) = make_app();

    let (status, _) = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let new_product = json!({
        "productId": 7,
        "supplierId": 2,
        "name": "Tape Measure",
        "description": "5 m locking tape measure",
        "price": "8.20",
        "sku": "TOOL-130",
        "unit": "each"
    });
    let (status, _) = send(&app, "POST", "/api/products", Some(new_product)).await;
    assert_eq!(status, StatusCode::CREATED);

    stores.reset_all();

    let (_, body) = send(&app, "GET", "/api/products", None).await;
    let products: Vec<Product> = parse(&body);
    assert_eq!(products, seed_products());

    let (_, body) = send(&app, "GET", "/api/orders", None).await;
    let orders: Vec<Order> = parse(&body);
    assert_eq!(orders, seed_orders());
}

#[tokio::test]
async fn e2e_duplicate_identifier_first_match_wins() {
    let (app, _stores) = make_app();

    // A second branch with id 1 is accepted silently.
    let shadow = json!({
        "branchId": 1,
        "headquartersId": 1,
        "name": "Shadow Branch",
        "description": "",
        "address": "99 Nowhere Lane",
        "contactPerson": "",
        "email": "",
        "phone": ""
    });
    let (status, _) = send(&app, "POST", "/api/branches", Some(shadow)).await;
    assert_eq!(status, StatusCode::CREATED);

    // Lookups act on the first occurrence.
    let (status, body) = send(&app, "GET", "/api/branches/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let branch: Branch = parse(&body);
    assert_eq!(branch.name, "Downtown Branch");

    // Removing id 1 deletes the first occurrence; the shadow remains listed.
    let (status, _) = send(&app, "DELETE", "/api/branches/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/api/branches", None).await;
    let branches: Vec<Branch> = parse(&body);
    assert_eq!(branches.len(), 3);
    assert_eq!(branches[2].name, "Shadow Branch");
    assert_eq!(branches[2].branch_id, BranchId::new(1));
}

#[tokio::test]
async fn e2e_references_are_not_enforced() {
    let (app, _stores) = make_app();

    // Deleting a headquarters does not cascade to its branches.
    let (status, _) = send(&app, "DELETE", "/api/headquarters/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/api/branches", None).await;
    let branches: Vec<Branch> = parse(&body);
    assert_eq!(branches.len(), 3);
    assert!(
        branches
            .iter()
            .all(|b| b.headquarters_id == HeadquartersId::new(1))
    );

    // A product may reference a supplier that does not exist.
    let orphan = json!({
        "productId": 8,
        "supplierId": 42,
        "name": "Mystery Crate",
        "description": "",
        "price": "0.99",
        "sku": "MISC-999",
        "unit": "each"
    });
    let (status, body) = send(&app, "POST", "/api/products", Some(orphan)).await;
    assert_eq!(status, StatusCode::CREATED);
    let product: Product = parse(&body);
    assert_eq!(product.supplier_id, SupplierId::new(42));
    assert_eq!(product.product_id, ProductId::new(8));
}

#[tokio::test]
async fn e2e_every_entity_has_routes() {
    let (app, _stores) = make_app();

    for path in [
        "/api/headquarters",
        "/api/branches",
        "/api/suppliers",
        "/api/products",
        "/api/orders",
        "/api/order-details",
        "/api/deliveries",
        "/api/order-detail-deliveries",
    ] {
        let (status, body) = send(&app, "GET", path, None).await;
        assert_eq!(status, StatusCode::OK, "list failed for {path}");
        let records: Vec<serde_json::Value> = parse(&body);
        assert!(!records.is_empty(), "empty seed for {path}");
    }
}
