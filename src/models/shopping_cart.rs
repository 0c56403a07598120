use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EntityRef, OrderStatus, PaymentMethod, ProductOrder, ensure_non_negative, parse_column};
use crate::{
    entity::{product_orders, shopping_carts},
    error::{AppError, AppResult},
};

/// Cart aggregate. Owns its orders and keeps their `cart` back-reference in
/// step with membership: every order in `orders` points at this cart, and an
/// order leaving the cart has its back-reference cleared.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShoppingCart {
    pub id: Option<Uuid>,
    pub placed_date: DateTime<Utc>,
    pub status: OrderStatus,
    /// Total in minor currency units.
    pub total_price: i64,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub customer_details: Option<EntityRef>,
    /// Read-only on the wire; loaded from storage.
    #[serde(default, skip_deserializing)]
    #[schema(read_only)]
    orders: Vec<ProductOrder>,
}

impl ShoppingCart {
    pub fn new(
        placed_date: DateTime<Utc>,
        status: OrderStatus,
        total_price: i64,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: None,
            placed_date,
            status,
            total_price,
            payment_method,
            payment_reference: None,
            customer_details: None,
            orders: Vec::new(),
        }
    }

    pub fn orders(&self) -> &[ProductOrder] {
        &self.orders
    }

    /// Sets the identifier and re-points every owned order at it.
    pub fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
        let back_ref = self.back_ref();
        for order in &mut self.orders {
            order.cart = back_ref;
        }
    }

    /// Adds `order` and points it at this cart. An order equal to one already
    /// owned replaces it.
    pub fn add_order(&mut self, mut order: ProductOrder) -> &mut Self {
        order.cart = self.back_ref();
        match self.orders.iter_mut().find(|owned| **owned == order) {
            Some(owned) => *owned = order,
            None => self.orders.push(order),
        }
        self
    }

    /// Removes the owned order equal to `order`, returning it detached.
    pub fn remove_order(&mut self, order: &ProductOrder) -> Option<ProductOrder> {
        let index = self.orders.iter().position(|owned| owned == order)?;
        let mut removed = self.orders.remove(index);
        removed.cart = None;
        Some(removed)
    }

    /// Replaces the whole order set. New members point at this cart; the
    /// previous members are returned detached.
    pub fn set_orders(&mut self, orders: Vec<ProductOrder>) -> Vec<ProductOrder> {
        let mut previous = std::mem::take(&mut self.orders);
        for order in &mut previous {
            order.cart = None;
        }
        for order in orders {
            self.add_order(order);
        }
        previous
    }

    pub fn with_orders(mut self, orders: Vec<ProductOrder>) -> Self {
        self.set_orders(orders);
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_non_negative(self.total_price, "total_price")
    }

    fn back_ref(&self) -> Option<EntityRef> {
        self.id.map(EntityRef::new)
    }
}

impl TryFrom<shopping_carts::Model> for ShoppingCart {
    type Error = AppError;

    fn try_from(model: shopping_carts::Model) -> Result<Self, Self::Error> {
        let mut cart = ShoppingCart::new(
            model.placed_date,
            parse_column(&model.status, "status")?,
            model.total_price,
            parse_column(&model.payment_method, "payment_method")?,
        );
        cart.payment_reference = model.payment_reference;
        cart.customer_details = model.customer_details_id.map(EntityRef::new);
        cart.assign_id(model.id);
        Ok(cart)
    }
}

impl TryFrom<(shopping_carts::Model, Vec<product_orders::Model>)> for ShoppingCart {
    type Error = AppError;

    fn try_from(
        (model, orders): (shopping_carts::Model, Vec<product_orders::Model>),
    ) -> Result<Self, Self::Error> {
        let cart = ShoppingCart::try_from(model)?;
        Ok(cart.with_orders(orders.into_iter().map(ProductOrder::from).collect()))
    }
}
