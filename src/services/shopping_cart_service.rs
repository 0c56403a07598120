use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::shopping_cart::ShoppingCartPatch,
    entity::{
        product_orders::Entity as ProductOrders,
        shopping_carts::{ActiveModel, Column, Entity as ShoppingCarts, Model},
    },
    error::AppResult,
    models::ShoppingCart,
    services::not_found_on_missing,
    state::AppState,
};

/// Persists the cart's own columns. Orders are owned through the
/// product-order endpoints and come back loaded from storage.
pub async fn save(state: &AppState, cart: ShoppingCart) -> AppResult<ShoppingCart> {
    tracing::debug!(?cart, "request to save ShoppingCart");
    cart.validate()?;
    let (id, is_new) = match cart.id {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    let active = ActiveModel {
        id: Set(id),
        placed_date: Set(cart.placed_date),
        status: Set(cart.status.as_ref().to_string()),
        total_price: Set(cart.total_price),
        payment_method: Set(cart.payment_method.as_ref().to_string()),
        payment_reference: Set(cart.payment_reference),
        customer_details_id: Set(cart.customer_details.map(|r| r.id)),
    };
    if is_new {
        let model = active.insert(state.db()).await?;
        return ShoppingCart::try_from(model);
    }
    let model = active.update(state.db()).await.map_err(not_found_on_missing)?;
    with_orders(state, model).await
}

pub async fn update(state: &AppState, cart: ShoppingCart) -> AppResult<ShoppingCart> {
    tracing::debug!(?cart, "request to update ShoppingCart");
    save(state, cart).await
}

pub async fn partial_update(
    state: &AppState,
    id: Uuid,
    patch: ShoppingCartPatch,
) -> AppResult<Option<ShoppingCart>> {
    tracing::debug!(%id, ?patch, "request to partially update ShoppingCart");
    let Some(existing) = ShoppingCarts::find_by_id(id).one(state.db()).await? else {
        return Ok(None);
    };
    let mut cart = ShoppingCart::try_from(existing.clone())?;
    patch.merge_into(&mut cart);

    let mut active: ActiveModel = existing.into();
    active.placed_date = Set(cart.placed_date);
    active.status = Set(cart.status.as_ref().to_string());
    active.total_price = Set(cart.total_price);
    active.payment_method = Set(cart.payment_method.as_ref().to_string());
    active.payment_reference = Set(cart.payment_reference);
    let model = active.update(state.db()).await?;
    Ok(Some(with_orders(state, model).await?))
}

/// All carts, each with its orders.
pub async fn find_all(state: &AppState) -> AppResult<Vec<ShoppingCart>> {
    tracing::debug!("request to get all ShoppingCarts");
    ShoppingCarts::find()
        .order_by_desc(Column::PlacedDate)
        .find_with_related(ProductOrders)
        .all(state.db())
        .await?
        .into_iter()
        .map(ShoppingCart::try_from)
        .collect()
}

pub async fn find_one(state: &AppState, id: Uuid) -> AppResult<Option<ShoppingCart>> {
    tracing::debug!(%id, "request to get ShoppingCart");
    match ShoppingCarts::find_by_id(id).one(state.db()).await? {
        Some(model) => Ok(Some(with_orders(state, model).await?)),
        None => Ok(None),
    }
}

pub async fn exists(state: &AppState, id: Uuid) -> AppResult<bool> {
    Ok(ShoppingCarts::find_by_id(id).one(state.db()).await?.is_some())
}

/// Deletes the cart row. Carts that still own orders are refused by the
/// `product_orders.cart_id` foreign key.
pub async fn delete(state: &AppState, id: Uuid) -> AppResult<()> {
    tracing::debug!(%id, "request to delete ShoppingCart");
    ShoppingCarts::delete_by_id(id).exec(state.db()).await?;
    Ok(())
}

async fn with_orders(state: &AppState, model: Model) -> AppResult<ShoppingCart> {
    let orders = model.find_related(ProductOrders).all(state.db()).await?;
    ShoppingCart::try_from((model, orders))
}
