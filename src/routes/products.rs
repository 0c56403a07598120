use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::product::{ProductList, ProductPatch},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Product,
    response::ApiResponse,
    routes::{Created, Updated, created, params::Pagination, persisted_id},
    services::product_service,
    state::AppState,
};

const ENTITY_NAME: &str = "product";
const BASE_PATH: &str = "/api/products";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(partial_update_product)
                .delete(delete_product),
        )
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = Product,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Body already carries an id"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    Json(product): Json<Product>,
) -> AppResult<Created<Product>> {
    tracing::debug!(?product, "REST request to save Product");
    ensure_admin(&user)?;
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_new(product.id)?;
    let product = product_service::save(&state, product).await?;
    let id = persisted_id(product.id)?;
    created(alerts, BASE_PATH, id, "Product created", product)
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = Product,
    responses(
        (status = 200, description = "Replaced product", body = ApiResponse<Product>),
        (status = 400, description = "Missing, mismatched or unknown id"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(product): Json<Product>,
) -> AppResult<Updated<Product>> {
    tracing::debug!(%id, ?product, "REST request to update Product");
    ensure_admin(&user)?;
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, product.id)?;
    if !product_service::exists(&state, id).await? {
        return Err(alerts.entity_not_found());
    }
    let product = product_service::update(&state, product).await?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("Product updated", product, None)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body(
        content = ProductPatch,
        content_type = "application/merge-patch+json"
    ),
    responses(
        (status = 200, description = "Patched product", body = ApiResponse<Product>),
        (status = 400, description = "Missing or mismatched id"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn partial_update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductPatch>,
) -> AppResult<Updated<Product>> {
    tracing::debug!(%id, ?patch, "REST request to partially update Product");
    ensure_admin(&user)?;
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, patch.id)?;
    let product = product_service::partial_update(&state, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("Product updated", product, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    tracing::debug!("REST request to get a page of Products");
    let (items, meta) = product_service::find_all(&state, &pagination).await?;
    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Product>>> {
    tracing::debug!(%id, "REST request to get Product");
    let product = product_service::find_one(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Product", product, None)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted product"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(%id, "REST request to delete Product");
    ensure_admin(&user)?;
    product_service::delete(&state, id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts(ENTITY_NAME).deleted(id)))
}
