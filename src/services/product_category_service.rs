use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::product_category::ProductCategoryPatch,
    entity::product_categories::{ActiveModel, Column, Entity as ProductCategories},
    error::{AppError, AppResult},
    models::ProductCategory,
    response::Meta,
    routes::params::Pagination,
    services::bad_request_on_conflict,
    state::AppState,
};

/// Insert when `id` is absent, otherwise overwrite the stored row.
pub async fn save(state: &AppState, category: ProductCategory) -> AppResult<ProductCategory> {
    tracing::debug!(?category, "request to save ProductCategory");
    let (id, is_new) = match category.id {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    let active = ActiveModel {
        id: Set(id),
        name: Set(category.name),
        description: Set(category.description),
    };
    let model = if is_new {
        active.insert(state.db()).await.map_err(conflict)?
    } else {
        active.update(state.db()).await.map_err(conflict)?
    };
    Ok(model.into())
}

fn conflict(err: sea_orm::DbErr) -> AppError {
    bad_request_on_conflict(err, "A product category with this name already exists")
}

pub async fn update(state: &AppState, category: ProductCategory) -> AppResult<ProductCategory> {
    tracing::debug!(?category, "request to update ProductCategory");
    save(state, category).await
}

pub async fn partial_update(
    state: &AppState,
    id: Uuid,
    patch: ProductCategoryPatch,
) -> AppResult<Option<ProductCategory>> {
    tracing::debug!(%id, ?patch, "request to partially update ProductCategory");
    let Some(existing) = ProductCategories::find_by_id(id).one(state.db()).await? else {
        return Ok(None);
    };
    let mut category = ProductCategory::from(existing.clone());
    patch.merge_into(&mut category);

    let mut active: ActiveModel = existing.into();
    active.name = Set(category.name);
    active.description = Set(category.description);
    let model = active.update(state.db()).await.map_err(conflict)?;
    Ok(Some(model.into()))
}

pub async fn find_all(
    state: &AppState,
    pagination: &Pagination,
) -> AppResult<(Vec<ProductCategory>, Meta)> {
    tracing::debug!("request to get all ProductCategories");
    let (page, limit, offset) = pagination.normalize();
    let finder = ProductCategories::find().order_by_asc(Column::Name);
    let total = finder.clone().count(state.db()).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(ProductCategory::from)
        .collect();
    Ok((items, Meta::new(page, limit, total)))
}

pub async fn find_one(state: &AppState, id: Uuid) -> AppResult<Option<ProductCategory>> {
    tracing::debug!(%id, "request to get ProductCategory");
    let model = ProductCategories::find_by_id(id).one(state.db()).await?;
    Ok(model.map(ProductCategory::from))
}

pub async fn exists(state: &AppState, id: Uuid) -> AppResult<bool> {
    Ok(ProductCategories::find_by_id(id).one(state.db()).await?.is_some())
}

pub async fn delete(state: &AppState, id: Uuid) -> AppResult<()> {
    tracing::debug!(%id, "request to delete ProductCategory");
    ProductCategories::delete_by_id(id).exec(state.db()).await?;
    Ok(())
}
