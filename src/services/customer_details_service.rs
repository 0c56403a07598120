use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::customer_details::CustomerDetailsPatch,
    entity::customer_details::{ActiveModel, Column, Entity as CustomerDetailsEntity},
    error::{AppError, AppResult},
    models::CustomerDetails,
    response::Meta,
    routes::params::Pagination,
    services::bad_request_on_conflict,
    state::AppState,
};

pub async fn save(state: &AppState, details: CustomerDetails) -> AppResult<CustomerDetails> {
    tracing::debug!(?details, "request to save CustomerDetails");
    let (id, is_new) = match details.id {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    let active = ActiveModel {
        id: Set(id),
        gender: Set(details.gender.as_ref().to_string()),
        phone: Set(details.phone),
        address_line1: Set(details.address_line1),
        address_line2: Set(details.address_line2),
        city: Set(details.city),
        country: Set(details.country),
        user_id: Set(details.user.map(|r| r.id)),
    };
    let model = if is_new {
        active.insert(state.db()).await.map_err(conflict)?
    } else {
        active.update(state.db()).await.map_err(conflict)?
    };
    CustomerDetails::try_from(model)
}

fn conflict(err: sea_orm::DbErr) -> AppError {
    bad_request_on_conflict(err, "Customer details for this user already exist")
}

pub async fn update(state: &AppState, details: CustomerDetails) -> AppResult<CustomerDetails> {
    tracing::debug!(?details, "request to update CustomerDetails");
    save(state, details).await
}

pub async fn partial_update(
    state: &AppState,
    id: Uuid,
    patch: CustomerDetailsPatch,
) -> AppResult<Option<CustomerDetails>> {
    tracing::debug!(%id, ?patch, "request to partially update CustomerDetails");
    let Some(existing) = CustomerDetailsEntity::find_by_id(id).one(state.db()).await? else {
        return Ok(None);
    };
    let mut details = CustomerDetails::try_from(existing.clone())?;
    patch.merge_into(&mut details);

    let mut active: ActiveModel = existing.into();
    active.gender = Set(details.gender.as_ref().to_string());
    active.phone = Set(details.phone);
    active.address_line1 = Set(details.address_line1);
    active.address_line2 = Set(details.address_line2);
    active.city = Set(details.city);
    active.country = Set(details.country);
    let model = active.update(state.db()).await?;
    Ok(Some(CustomerDetails::try_from(model)?))
}

pub async fn find_all(
    state: &AppState,
    pagination: &Pagination,
) -> AppResult<(Vec<CustomerDetails>, Meta)> {
    tracing::debug!("request to get all CustomerDetails");
    let (page, limit, offset) = pagination.normalize();
    let finder = CustomerDetailsEntity::find().order_by_asc(Column::Country);
    let total = finder.clone().count(state.db()).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(CustomerDetails::try_from)
        .collect::<AppResult<Vec<_>>>()?;
    Ok((items, Meta::new(page, limit, total)))
}

pub async fn find_one(state: &AppState, id: Uuid) -> AppResult<Option<CustomerDetails>> {
    tracing::debug!(%id, "request to get CustomerDetails");
    CustomerDetailsEntity::find_by_id(id)
        .one(state.db())
        .await?
        .map(CustomerDetails::try_from)
        .transpose()
}

pub async fn exists(state: &AppState, id: Uuid) -> AppResult<bool> {
    Ok(CustomerDetailsEntity::find_by_id(id)
        .one(state.db())
        .await?
        .is_some())
}

pub async fn delete(state: &AppState, id: Uuid) -> AppResult<()> {
    tracing::debug!(%id, "request to delete CustomerDetails");
    CustomerDetailsEntity::delete_by_id(id).exec(state.db()).await?;
    Ok(())
}
