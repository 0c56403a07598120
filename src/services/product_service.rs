use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::product::ProductPatch,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    models::Product,
    response::Meta,
    routes::params::Pagination,
    services::bad_request_on_conflict,
    state::AppState,
};

pub async fn save(state: &AppState, product: Product) -> AppResult<Product> {
    tracing::debug!(?product, "request to save Product");
    product.validate()?;
    let (id, is_new) = match product.id {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    let active = ActiveModel {
        id: Set(id),
        name: Set(product.name),
        description: Set(product.description),
        price: Set(product.price),
        product_size: Set(product.product_size.as_ref().to_string()),
        product_category_id: Set(product.product_category.map(|r| r.id)),
    };
    let model = if is_new {
        active.insert(state.db()).await.map_err(conflict)?
    } else {
        active.update(state.db()).await.map_err(conflict)?
    };
    Product::try_from(model)
}

fn conflict(err: sea_orm::DbErr) -> AppError {
    bad_request_on_conflict(err, "A product with this name already exists")
}

pub async fn update(state: &AppState, product: Product) -> AppResult<Product> {
    tracing::debug!(?product, "request to update Product");
    save(state, product).await
}

pub async fn partial_update(
    state: &AppState,
    id: Uuid,
    patch: ProductPatch,
) -> AppResult<Option<Product>> {
    tracing::debug!(%id, ?patch, "request to partially update Product");
    let Some(existing) = Products::find_by_id(id).one(state.db()).await? else {
        return Ok(None);
    };
    let mut product = Product::try_from(existing.clone())?;
    patch.merge_into(&mut product);

    let mut active: ActiveModel = existing.into();
    active.name = Set(product.name);
    active.description = Set(product.description);
    active.price = Set(product.price);
    active.product_size = Set(product.product_size.as_ref().to_string());
    let model = active.update(state.db()).await.map_err(conflict)?;
    Ok(Some(Product::try_from(model)?))
}

pub async fn find_all(state: &AppState, pagination: &Pagination) -> AppResult<(Vec<Product>, Meta)> {
    tracing::debug!("request to get all Products");
    let (page, limit, offset) = pagination.normalize();
    let finder = Products::find().order_by_asc(Column::Name);
    let total = finder.clone().count(state.db()).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(Product::try_from)
        .collect::<AppResult<Vec<_>>>()?;
    Ok((items, Meta::new(page, limit, total)))
}

pub async fn find_one(state: &AppState, id: Uuid) -> AppResult<Option<Product>> {
    tracing::debug!(%id, "request to get Product");
    Products::find_by_id(id)
        .one(state.db())
        .await?
        .map(Product::try_from)
        .transpose()
}

pub async fn exists(state: &AppState, id: Uuid) -> AppResult<bool> {
    Ok(Products::find_by_id(id).one(state.db()).await?.is_some())
}

pub async fn delete(state: &AppState, id: Uuid) -> AppResult<()> {
    tracing::debug!(%id, "request to delete Product");
    Products::delete_by_id(id).exec(state.db()).await?;
    Ok(())
}
