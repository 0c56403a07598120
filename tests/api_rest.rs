mod common;

use axum::http::{StatusCode, header::LOCATION};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use serde_json::json;
use store_api::entity::{product_categories, product_orders, products, shopping_carts};
use tower::ServiceExt;
use uuid::Uuid;

use common::{
    admin, app, body_json, empty_db, empty_request, json_request, merge_patch_request, user,
};

fn category_model(id: Uuid) -> product_categories::Model {
    product_categories::Model {
        id,
        name: "Apparel".into(),
        description: Some("Shirts and hoodies".into()),
    }
}

#[tokio::test]
async fn create_with_existing_id_is_rejected() {
    let auth = admin();
    let request = json_request(
        "POST",
        "/api/product-categories",
        Some(&auth),
        json!({ "id": Uuid::new_v4(), "name": "Apparel", "description": null }),
    );
    let response = app(empty_db()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("x-storeapp-error").unwrap(),
        "error.idexists"
    );
    assert_eq!(
        response.headers().get("x-storeapp-params").unwrap(),
        "productCategory"
    );
    let body = body_json(response).await;
    assert_eq!(body["data"]["error_key"], "idexists");
    assert_eq!(body["data"]["entity_name"], "productCategory");
}

#[tokio::test]
async fn create_returns_created_with_location_and_alert() {
    let stored_id = Uuid::new_v4();
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category_model(stored_id)]])
        .into_connection();

    let auth = admin();
    let request = json_request(
        "POST",
        "/api/product-categories",
        Some(&auth),
        json!({ "name": "Apparel", "description": "Shirts and hoodies" }),
    );
    let response = app(orm).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        format!("/api/product-categories/{stored_id}")
    );
    assert_eq!(
        response.headers().get("x-storeapp-alert").unwrap(),
        "storeApp.productCategory.created"
    );
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], stored_id.to_string());
    assert_eq!(body["data"]["name"], "Apparel");
}

#[tokio::test]
async fn update_without_body_id_is_rejected() {
    let auth = admin();
    let path = format!("/api/product-categories/{}", Uuid::new_v4());
    let request = json_request("PUT", &path, Some(&auth), json!({ "name": "Apparel" }));
    let response = app(empty_db()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("x-storeapp-error").unwrap(),
        "error.idnull"
    );
}

#[tokio::test]
async fn update_with_mismatched_id_is_rejected() {
    let auth = admin();
    let path = format!("/api/product-categories/{}", Uuid::new_v4());
    let request = json_request(
        "PUT",
        &path,
        Some(&auth),
        json!({ "id": Uuid::new_v4(), "name": "Apparel" }),
    );
    let response = app(empty_db()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("x-storeapp-error").unwrap(),
        "error.idinvalid"
    );
}

#[tokio::test]
async fn update_of_unknown_row_is_a_bad_request() {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<product_categories::Model>::new()])
        .into_connection();

    let id = Uuid::new_v4();
    let auth = admin();
    let request = json_request(
        "PUT",
        &format!("/api/product-categories/{id}"),
        Some(&auth),
        json!({ "id": id, "name": "Apparel" }),
    );
    let response = app(orm).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("x-storeapp-error").unwrap(),
        "error.idnotfound"
    );
}

#[tokio::test]
async fn update_of_existing_row_returns_alert() {
    let id = Uuid::new_v4();
    let mut renamed = category_model(id);
    renamed.name = "Clothing".into();
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category_model(id)], vec![renamed]])
        .into_connection();

    let auth = admin();
    let request = json_request(
        "PUT",
        &format!("/api/product-categories/{id}"),
        Some(&auth),
        json!({ "id": id, "name": "Clothing", "description": "Shirts and hoodies" }),
    );
    let response = app(orm).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-storeapp-alert").unwrap(),
        "storeApp.productCategory.updated"
    );
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Clothing");
}

#[tokio::test]
async fn patch_with_mismatched_id_is_rejected() {
    let auth = user();
    let path = format!("/api/product-orders/{}", Uuid::new_v4());
    let request = json_request(
        "PATCH",
        &path,
        Some(&auth),
        json!({ "id": Uuid::new_v4(), "quantity": 3 }),
    );
    let response = app(empty_db()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("x-storeapp-error").unwrap(),
        "error.idinvalid"
    );
}

#[tokio::test]
async fn patch_of_missing_row_is_not_found() {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<product_orders::Model>::new()])
        .into_connection();

    let id = Uuid::new_v4();
    let auth = user();
    let request = json_request(
        "PATCH",
        &format!("/api/product-orders/{id}"),
        Some(&auth),
        json!({ "id": id, "quantity": 3 }),
    );
    let response = app(orm).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_of_missing_row_is_not_found() {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<product_categories::Model>::new()])
        .into_connection();

    let auth = user();
    let path = format!("/api/product-categories/{}", Uuid::new_v4());
    let response = app(orm)
        .oneshot(empty_request("GET", &path, Some(&auth)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_cart_includes_its_orders() {
    let cart_id = Uuid::new_v4();
    let order_id = Uuid::new_v4();
    let cart = shopping_carts::Model {
        id: cart_id,
        placed_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        status: "PENDING".into(),
        total_price: 2400,
        payment_method: "CREDIT_CARD".into(),
        payment_reference: None,
        customer_details_id: None,
    };
    let order = product_orders::Model {
        id: order_id,
        quantity: 2,
        total_price: 2400,
        product_id: Uuid::new_v4(),
        cart_id,
    };
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![cart]])
        .append_query_results([vec![order]])
        .into_connection();

    let auth = user();
    let response = app(orm)
        .oneshot(empty_request(
            "GET",
            &format!("/api/shopping-carts/{cart_id}"),
            Some(&auth),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "PENDING");
    assert_eq!(body["data"]["payment_method"], "CREDIT_CARD");
    let orders = body["data"]["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], order_id.to_string());
    assert_eq!(orders[0]["cart"]["id"], cart_id.to_string());
}

#[tokio::test]
async fn delete_returns_no_content_with_alert() {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let id = Uuid::new_v4();
    let auth = user();
    let response = app(orm)
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/customer-details/{id}"),
            Some(&auth),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers().get("x-storeapp-alert").unwrap(),
        "storeApp.customerDetails.deleted"
    );
    assert_eq!(
        response.headers().get("x-storeapp-params").unwrap().to_str().unwrap(),
        id.to_string()
    );
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let response = app(empty_db())
        .oneshot(empty_request("GET", "/api/products", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app(empty_db())
        .oneshot(empty_request(
            "GET",
            "/api/products",
            Some("Bearer not-a-jwt"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn catalog_writes_require_admin() {
    let auth = user();
    let request = json_request(
        "POST",
        "/api/products",
        Some(&auth),
        json!({
            "name": "Ferris Hoodie",
            "description": null,
            "price": 5500,
            "product_size": "L",
            "product_category": { "id": Uuid::new_v4() }
        }),
    );
    let response = app(empty_db()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn merge_patch_updates_present_fields_only() {
    let id = Uuid::new_v4();
    let product_id = Uuid::new_v4();
    let cart_id = Uuid::new_v4();
    let stored = product_orders::Model {
        id,
        quantity: 2,
        total_price: 2400,
        product_id,
        cart_id,
    };
    let merged = product_orders::Model {
        quantity: 5,
        ..stored.clone()
    };
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored], vec![merged]])
        .into_connection();

    let auth = user();
    let request = merge_patch_request(
        &format!("/api/product-orders/{id}"),
        &auth,
        json!({ "id": id, "quantity": 5, "total_price": null }),
    );
    let response = app(orm).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-storeapp-alert").unwrap(),
        "storeApp.productOrder.updated"
    );
    assert_eq!(
        response.headers().get("x-storeapp-params").unwrap().to_str().unwrap(),
        id.to_string()
    );
    let body = body_json(response).await;
    assert_eq!(body["data"]["quantity"], 5);
    assert_eq!(body["data"]["total_price"], 2400);
    assert_eq!(body["data"]["product"]["id"], product_id.to_string());
    assert_eq!(body["data"]["cart"]["id"], cart_id.to_string());
}

#[tokio::test]
async fn far_page_returns_empty_list() {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(3)),
        )])]])
        .append_query_results([Vec::<products::Model>::new()])
        .into_connection();

    let auth = user();
    let uri = format!("/api/products?page={}&per_page=100", i64::MAX);
    let response = app(orm)
        .oneshot(empty_request("GET", &uri, Some(&auth)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["per_page"], 100);
}
