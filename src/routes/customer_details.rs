use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::customer_details::{CustomerDetailsList, CustomerDetailsPatch},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::CustomerDetails,
    response::ApiResponse,
    routes::{Created, Updated, created, params::Pagination, persisted_id},
    services::customer_details_service,
    state::AppState,
};

const ENTITY_NAME: &str = "customerDetails";
const BASE_PATH: &str = "/api/customer-details";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customer_details).post(create_customer_details))
        .route(
            "/{id}",
            get(get_customer_details)
                .put(update_customer_details)
                .patch(partial_update_customer_details)
                .delete(delete_customer_details),
        )
}

#[utoipa::path(
    post,
    path = "/api/customer-details",
    request_body = CustomerDetails,
    responses(
        (status = 201, description = "Create customer details", body = ApiResponse<CustomerDetails>),
        (status = 400, description = "Body already carries an id"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Details"
)]
pub async fn create_customer_details(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(details): Json<CustomerDetails>,
) -> AppResult<Created<CustomerDetails>> {
    tracing::debug!(?details, "REST request to save CustomerDetails");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_new(details.id)?;
    let details = customer_details_service::save(&state, details).await?;
    let id = persisted_id(details.id)?;
    created(alerts, BASE_PATH, id, "CustomerDetails created", details)
}

#[utoipa::path(
    put,
    path = "/api/customer-details/{id}",
    params(("id" = Uuid, Path, description = "Customer details ID")),
    request_body = CustomerDetails,
    responses(
        (status = 200, description = "Replaced customer details", body = ApiResponse<CustomerDetails>),
        (status = 400, description = "Missing, mismatched or unknown id"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Details"
)]
pub async fn update_customer_details(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(details): Json<CustomerDetails>,
) -> AppResult<Updated<CustomerDetails>> {
    tracing::debug!(%id, ?details, "REST request to update CustomerDetails");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, details.id)?;
    if !customer_details_service::exists(&state, id).await? {
        return Err(alerts.entity_not_found());
    }
    let details = customer_details_service::update(&state, details).await?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("CustomerDetails updated", details, None)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/customer-details/{id}",
    params(("id" = Uuid, Path, description = "Customer details ID")),
    request_body(
        content = CustomerDetailsPatch,
        content_type = "application/merge-patch+json"
    ),
    responses(
        (status = 200, description = "Patched customer details", body = ApiResponse<CustomerDetails>),
        (status = 400, description = "Missing or mismatched id"),
        (status = 404, description = "Customer details not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Details"
)]
pub async fn partial_update_customer_details(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<CustomerDetailsPatch>,
) -> AppResult<Updated<CustomerDetails>> {
    tracing::debug!(%id, ?patch, "REST request to partially update CustomerDetails");
    let alerts = state.alerts(ENTITY_NAME);
    alerts.ensure_matching_id(id, patch.id)?;
    let details = customer_details_service::partial_update(&state, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((
        alerts.updated(id),
        Json(ApiResponse::success("CustomerDetails updated", details, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/customer-details",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List customer details", body = ApiResponse<CustomerDetailsList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Details"
)]
pub async fn list_customer_details(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CustomerDetailsList>>> {
    tracing::debug!("REST request to get a page of CustomerDetails");
    let (items, meta) = customer_details_service::find_all(&state, &pagination).await?;
    let data = CustomerDetailsList { items };
    Ok(Json(ApiResponse::success("CustomerDetails", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/customer-details/{id}",
    params(("id" = Uuid, Path, description = "Customer details ID")),
    responses(
        (status = 200, description = "Get customer details", body = ApiResponse<CustomerDetails>),
        (status = 404, description = "Customer details not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Details"
)]
pub async fn get_customer_details(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CustomerDetails>>> {
    tracing::debug!(%id, "REST request to get CustomerDetails");
    let details = customer_details_service::find_one(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("CustomerDetails", details, None)))
}

#[utoipa::path(
    delete,
    path = "/api/customer-details/{id}",
    params(("id" = Uuid, Path, description = "Customer details ID")),
    responses(
        (status = 204, description = "Deleted customer details"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Details"
)]
pub async fn delete_customer_details(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!(%id, "REST request to delete CustomerDetails");
    customer_details_service::delete(&state, id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts(ENTITY_NAME).deleted(id)))
}
