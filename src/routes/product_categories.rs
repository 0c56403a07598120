use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::product_category::{ProductCategoryList, ProductCategoryPatch},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::ProductCategory,
    response::ApiResponse,
    routes::{Created, Updated, created, params::Pagination, persisted_id},
    services::product_category_service,
    state::AppState,
};

const ENTITY_NAME: &str = "productCategory";
const BASE_PATH: &str = "/api/product-categories";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_categories).post(create_product_category))
        .route(
            "/{id}",
            get(get_product_category)
                .put(update_product_category)
                .patch(partial_update_product_category)
                .delete(delete_product_category),
        )
}

#[utoipa::path(
    post,
    path = "/api/product-categories",
    request_body = ProductCategory,
    responses(
        (status = 201, description = "Create product category", body = ApiResponse<ProductCategory>),
        (status = 400, description = "Body already carries an id"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Categories"
)]
pub async fn create_product_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(category): Json<ProductCategory>,
) -> AppResult<Created<ProductCategory>> {
    tracing::debug!(?category, "REST request to save ProductCategory");
    ensure_admin(&user)?;
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_new(category.id)?;
    let category = product_category_service::save(&state, category).await?;
    let id = persisted_id(category.id)?;
    created(alerts, BASE_PATH, id, "ProductCategory created", category)
}

#[utoipa::path(
    put,
    path = "/api/product-categories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    request_body = ProductCategory,
    responses(
        (status = 200, description = "Replaced product category", body = ApiResponse<ProductCategory>),
        (status = 400, description = "Missing, mismatched or unknown id"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Categories"
)]
pub async fn update_product_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(category): Json<ProductCategory>,
) -> AppResult<Updated<ProductCategory>> {
    tracing::debug!(%id, ?category, "REST request to update ProductCategory");
    ensure_admin(&user)?;
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, category.id)?;
    if !product_category_service::exists(&state, id).await? {
        return Err(alerts.entity_not_found());
    }
    let category = product_category_service::update(&state, category).await?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("ProductCategory updated", category, None)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/product-categories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    request_body(
        content = ProductCategoryPatch,
        content_type = "application/merge-patch+json"
    ),
    responses(
        (status = 200, description = "Patched product category", body = ApiResponse<ProductCategory>),
        (status = 400, description = "Missing or mismatched id"),
        (status = 404, description = "Product category not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Categories"
)]
pub async fn partial_update_product_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductCategoryPatch>,
) -> AppResult<Updated<ProductCategory>> {
    tracing::debug!(%id, ?patch, "REST request to partially update ProductCategory");
    ensure_admin(&user)?;
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, patch.id)?;
    let category = product_category_service::partial_update(&state, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("ProductCategory updated", category, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/product-categories",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List product categories", body = ApiResponse<ProductCategoryList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Product Categories"
)]
pub async fn list_product_categories(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ProductCategoryList>>> {
    tracing::debug!("REST request to get a page of ProductCategories");
    let (items, meta) = product_category_service::find_all(&state, &pagination).await?;
    let data = ProductCategoryList { items };
    Ok(Json(ApiResponse::success("ProductCategories", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/product-categories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    responses(
        (status = 200, description = "Get product category", body = ApiResponse<ProductCategory>),
        (status = 404, description = "Product category not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Categories"
)]
pub async fn get_product_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductCategory>>> {
    tracing::debug!(%id, "REST request to get ProductCategory");
    let category = product_category_service::find_one(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("ProductCategory", category, None)))
}

#[utoipa::path(
    delete,
    path = "/api/product-categories/{id}",
    params(("id" = Uuid, Path, description = "Product category ID")),
    responses(
        (status = 204, description = "Deleted product category"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Product Categories"
)]
pub async fn delete_product_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(%id, "REST request to delete ProductCategory");
    ensure_admin(&user)?;
    product_category_service::delete(&state, id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts(ENTITY_NAME).deleted(id)))
}
