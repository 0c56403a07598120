use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::shopping_cart::{ShoppingCartList, ShoppingCartPatch},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::ShoppingCart,
    response::{ApiResponse, Meta},
    routes::{Created, Updated, created, persisted_id},
    services::shopping_cart_service,
    state::AppState,
};

const ENTITY_NAME: &str = "shoppingCart";
const BASE_PATH: &str = "/api/shopping-carts";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shopping_carts).post(create_shopping_cart))
        .route(
            "/{id}",
            get(get_shopping_cart)
                .put(update_shopping_cart)
                .patch(partial_update_shopping_cart)
                .delete(delete_shopping_cart),
        )
}

#[utoipa::path(
    post,
    path = "/api/shopping-carts",
    request_body = ShoppingCart,
    responses(
        (status = 201, description = "Create shopping cart", body = ApiResponse<ShoppingCart>),
        (status = 400, description = "Body already carries an id"),
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping Carts"
)]
pub async fn create_shopping_cart(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(cart): Json<ShoppingCart>,
) -> AppResult<Created<ShoppingCart>> {
    tracing::debug!(?cart, "REST request to save ShoppingCart");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_new(cart.id)?;
    let cart = shopping_cart_service::save(&state, cart).await?;
    let id = persisted_id(cart.id)?;
    created(alerts, BASE_PATH, id, "ShoppingCart created", cart)
}

#[utoipa::path(
    put,
    path = "/api/shopping-carts/{id}",
    params(("id" = Uuid, Path, description = "Shopping cart ID")),
    request_body = ShoppingCart,
    responses(
        (status = 200, description = "Replaced shopping cart", body = ApiResponse<ShoppingCart>),
        (status = 400, description = "Missing, mismatched or unknown id"),
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping Carts"
)]
pub async fn update_shopping_cart(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(cart): Json<ShoppingCart>,
) -> AppResult<Updated<ShoppingCart>> {
    tracing::debug!(%id, ?cart, "REST request to update ShoppingCart");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, cart.id)?;
    if !shopping_cart_service::exists(&state, id).await? {
        return Err(alerts.entity_not_found());
    }
    let cart = shopping_cart_service::update(&state, cart).await?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("ShoppingCart updated", cart, None)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/shopping-carts/{id}",
    params(("id" = Uuid, Path, description = "Shopping cart ID")),
    request_body(
        content = ShoppingCartPatch,
        content_type = "application/merge-patch+json"
    ),
    responses(
        (status = 200, description = "Patched shopping cart", body = ApiResponse<ShoppingCart>),
        (status = 400, description = "Missing or mismatched id"),
        (status = 404, description = "Shopping cart not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping Carts"
)]
pub async fn partial_update_shopping_cart(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ShoppingCartPatch>,
) -> AppResult<Updated<ShoppingCart>> {
    tracing::debug!(%id, ?patch, "REST request to partially update ShoppingCart");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, patch.id)?;
    let cart = shopping_cart_service::partial_update(&state, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("ShoppingCart updated", cart, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/shopping-carts",
    responses(
        (status = 200, description = "List all shopping carts", body = ApiResponse<ShoppingCartList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping Carts"
)]
pub async fn list_shopping_carts(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<ShoppingCartList>>> {
    tracing::debug!("REST request to get all ShoppingCarts");
    let items = shopping_cart_service::find_all(&state).await?;
    let meta = Meta::total(items.len());
    let data = ShoppingCartList { items };
    Ok(Json(ApiResponse::success("ShoppingCarts", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/shopping-carts/{id}",
    params(("id" = Uuid, Path, description = "Shopping cart ID")),
    responses(
        (status = 200, description = "Get shopping cart", body = ApiResponse<ShoppingCart>),
        (status = 404, description = "Shopping cart not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping Carts"
)]
pub async fn get_shopping_cart(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ShoppingCart>>> {
    tracing::debug!(%id, "REST request to get ShoppingCart");
    let cart = shopping_cart_service::find_one(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("ShoppingCart", cart, None)))
}

#[utoipa::path(
    delete,
    path = "/api/shopping-carts/{id}",
    params(("id" = Uuid, Path, description = "Shopping cart ID")),
    responses(
        (status = 204, description = "Deleted shopping cart"),
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping Carts"
)]
pub async fn delete_shopping_cart(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(%id, "REST request to delete ShoppingCart");
    shopping_cart_service::delete(&state, id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts(ENTITY_NAME).deleted(id)))
}
