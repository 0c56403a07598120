use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::product_order::{ProductOrderList, ProductOrderPatch},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::ProductOrder,
    response::{ApiResponse, Meta},
    routes::{Created, Updated, created, persisted_id},
    services::product_order_service,
    state::AppState,
};

const ENTITY_NAME: &str = "productOrder";
const BASE_PATH: &str = "/api/product-orders";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_orders).post(create_product_order))
        .route(
            "/{id}",
            get(get_product_order)
                .put(update_product_order)
                .patch(partial_update_product_order)
                .delete(delete_product_order),
        )
}

#[utoipa::path(
    post,
    path = "/api/product-orders",
    request_body = ProductOrder,
    responses(
        (status = 201, description = "Create product order", body = ApiResponse<ProductOrder>),
        (status = 400, description = "Body already carries an id"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Orders"
)]
pub async fn create_product_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(order): Json<ProductOrder>,
) -> AppResult<Created<ProductOrder>> {
    tracing::debug!(?order, "REST request to save ProductOrder");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_new(order.id)?;
    let order = product_order_service::save(&state, order).await?;
    let id = persisted_id(order.id)?;
    created(alerts, BASE_PATH, id, "ProductOrder created", order)
}

#[utoipa::path(
    put,
    path = "/api/product-orders/{id}",
    params(("id" = Uuid, Path, description = "Product order ID")),
    request_body = ProductOrder,
    responses(
        (status = 200, description = "Replaced product order", body = ApiResponse<ProductOrder>),
        (status = 400, description = "Missing, mismatched or unknown id"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Orders"
)]
pub async fn update_product_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(order): Json<ProductOrder>,
) -> AppResult<Updated<ProductOrder>> {
    tracing::debug!(%id, ?order, "REST request to update ProductOrder");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, order.id)?;
    if !product_order_service::exists(&state, id).await? {
        return Err(alerts.entity_not_found());
    }
    let order = product_order_service::update(&state, order).await?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("ProductOrder updated", order, None)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/product-orders/{id}",
    params(("id" = Uuid, Path, description = "Product order ID")),
    request_body(
        content = ProductOrderPatch,
        content_type = "application/merge-patch+json"
    ),
    responses(
        (status = 200, description = "Patched product order", body = ApiResponse<ProductOrder>),
        (status = 400, description = "Missing or mismatched id"),
        (status = 404, description = "Product order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Orders"
)]
pub async fn partial_update_product_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductOrderPatch>,
) -> AppResult<Updated<ProductOrder>> {
    tracing::debug!(%id, ?patch, "REST request to partially update ProductOrder");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, patch.id)?;
    let order = product_order_service::partial_update(&state, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("ProductOrder updated", order, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/product-orders",
    responses(
        (status = 200, description = "List all product orders", body = ApiResponse<ProductOrderList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Product Orders"
)]
pub async fn list_product_orders(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<ProductOrderList>>> {
    tracing::debug!("REST request to get all ProductOrders");
    let items = product_order_service::find_all(&state).await?;
    let meta = Meta::total(items.len());
    let data = ProductOrderList { items };
    Ok(Json(ApiResponse::success("ProductOrders", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/product-orders/{id}",
    params(("id" = Uuid, Path, description = "Product order ID")),
    responses(
        (status = 200, description = "Get product order", body = ApiResponse<ProductOrder>),
        (status = 404, description = "Product order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Orders"
)]
pub async fn get_product_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductOrder>>> {
    tracing::debug!(%id, "REST request to get ProductOrder");
    let order = product_order_service::find_one(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("ProductOrder", order, None)))
}

#[utoipa::path(
    delete,
    path = "/api/product-orders/{id}",
    params(("id" = Uuid, Path, description = "Product order ID")),
    responses(
        (status = 204, description = "Deleted product order"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Orders"
)]
pub async fn delete_product_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(%id, "REST request to delete ProductOrder");
    product_order_service::delete(&state, id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts(ENTITY_NAME).deleted(id)))
}
