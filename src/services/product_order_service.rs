use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{
    dto::product_order::ProductOrderPatch,
    entity::product_orders::{ActiveModel, Entity as ProductOrders},
    error::{AppError, AppResult},
    models::ProductOrder,
    services::not_found_on_missing,
    state::AppState,
};

pub async fn save(state: &AppState, order: ProductOrder) -> AppResult<ProductOrder> {
    tracing::debug!(?order, "request to save ProductOrder");
    order.validate()?;
    let (Some(product), Some(cart)) = (order.product, order.cart) else {
        return Err(AppError::BadRequest("product and cart are required".into()));
    };
    let (id, is_new) = match order.id {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    let active = ActiveModel {
        id: Set(id),
        quantity: Set(order.quantity),
        total_price: Set(order.total_price),
        product_id: Set(product.id),
        cart_id: Set(cart.id),
    };
    let model = if is_new {
        active.insert(state.db()).await?
    } else {
        active.update(state.db()).await.map_err(not_found_on_missing)?
    };
    Ok(model.into())
}

pub async fn update(state: &AppState, order: ProductOrder) -> AppResult<ProductOrder> {
    tracing::debug!(?order, "request to update ProductOrder");
    save(state, order).await
}

pub async fn partial_update(
    state: &AppState,
    id: Uuid,
    patch: ProductOrderPatch,
) -> AppResult<Option<ProductOrder>> {
    tracing::debug!(%id, ?patch, "request to partially update ProductOrder");
    let Some(existing) = ProductOrders::find_by_id(id).one(state.db()).await? else {
        return Ok(None);
    };
    let mut order = ProductOrder::from(existing.clone());
    patch.merge_into(&mut order);

    let mut active: ActiveModel = existing.into();
    active.quantity = Set(order.quantity);
    active.total_price = Set(order.total_price);
    let model = active.update(state.db()).await?;
    Ok(Some(model.into()))
}

pub async fn find_all(state: &AppState) -> AppResult<Vec<ProductOrder>> {
    tracing::debug!("request to get all ProductOrders");
    let models = ProductOrders::find().all(state.db()).await?;
    Ok(models.into_iter().map(ProductOrder::from).collect())
}

pub async fn find_one(state: &AppState, id: Uuid) -> AppResult<Option<ProductOrder>> {
    tracing::debug!(%id, "request to get ProductOrder");
    let model = ProductOrders::find_by_id(id).one(state.db()).await?;
    Ok(model.map(ProductOrder::from))
}

pub async fn exists(state: &AppState, id: Uuid) -> AppResult<bool> {
    Ok(ProductOrders::find_by_id(id).one(state.db()).await?.is_some())
}

pub async fn delete(state: &AppState, id: Uuid) -> AppResult<()> {
    tracing::debug!(%id, "request to delete ProductOrder");
    ProductOrders::delete_by_id(id).exec(state.db()).await?;
    Ok(())
}
