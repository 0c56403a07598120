use axum::{
    Json, Router,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header::LOCATION},
    routing::get,
};
use uuid::Uuid;

use crate::{
    alert::EntityAlerts,
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod auth;
pub mod customer_details;
pub mod doc;
pub mod health;
pub mod params;
pub mod product_categories;
pub mod product_orders;
pub mod products;
pub mod shopping_carts;

/// `201 Created` with `Location` and alert headers.
pub type Created<T> = (StatusCode, HeaderMap, Json<ApiResponse<T>>);

/// `200 OK` with alert headers.
pub type Updated<T> = (HeaderMap, Json<ApiResponse<T>>);

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/product-categories", product_categories::router())
        .nest("/products", products::router())
        .nest("/customer-details", customer_details::router())
        .nest("/shopping-carts", shopping_carts::router())
        .nest("/product-orders", product_orders::router())
}

/// Full application router: health, `/api`, docs and the JSON 404 fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}

/// Identifier of an entity that was just persisted.
pub(crate) fn persisted_id(id: Option<Uuid>) -> AppResult<Uuid> {
    id.ok_or_else(|| AppError::Internal(anyhow::anyhow!("persisted entity has no id")))
}

pub(crate) fn created<T: serde::Serialize>(
    alerts: EntityAlerts<'_>,
    base_path: &str,
    id: Uuid,
    message: &str,
    body: T,
) -> AppResult<Created<T>> {
    let mut headers = alerts.created(id);
    let location = HeaderValue::from_str(&format!("{base_path}/{id}"))
        .map_err(|e| AppError::Internal(e.into()))?;
    headers.insert(LOCATION, location);
    Ok((
        StatusCode::CREATED,
        headers,
        Json(ApiResponse::success(message, body, Some(Meta::empty()))),
    ))
}
