use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EntityRef, ensure_non_negative, ensure_present};
use crate::{entity::product_orders::Model, error::AppResult};

/// One line of a shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductOrder {
    pub id: Option<Uuid>,
    pub quantity: i32,
    /// Line total in minor currency units.
    pub total_price: i64,
    pub product: Option<EntityRef>,
    /// Back-reference to the owning cart. Maintained by `ShoppingCart`.
    pub cart: Option<EntityRef>,
}

impl ProductOrder {
    pub fn new(quantity: i32, total_price: i64) -> Self {
        Self {
            id: None,
            quantity,
            total_price,
            product: None,
            cart: None,
        }
    }

    pub fn with_product(mut self, product: impl Into<EntityRef>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_cart(mut self, cart: impl Into<EntityRef>) -> Self {
        self.cart = Some(cart.into());
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_non_negative(i64::from(self.quantity), "quantity")?;
        ensure_non_negative(self.total_price, "total_price")?;
        ensure_present(&self.product, "product")?;
        ensure_present(&self.cart, "cart")
    }
}

impl From<Model> for ProductOrder {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            quantity: model.quantity,
            total_price: model.total_price,
            product: Some(EntityRef::new(model.product_id)),
            cart: Some(EntityRef::new(model.cart_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn product_and_cart_references_can_be_set_and_cleared() {
        let product = Uuid::new_v4();
        let cart = Uuid::new_v4();
        let mut order = ProductOrder::new(2, 900).with_product(product).with_cart(cart);
        assert_eq!(order.product, Some(EntityRef::new(product)));
        assert_eq!(order.cart, Some(EntityRef::new(cart)));

        order.product = None;
        order.cart = None;
        assert!(order.product.is_none());
        assert!(order.cart.is_none());
    }

    #[test]
    fn validate_requires_references_and_non_negative_amounts() {
        let complete = ProductOrder::new(1, 100)
            .with_product(Uuid::new_v4())
            .with_cart(Uuid::new_v4());
        assert!(complete.validate().is_ok());

        let mut negative = complete.clone();
        negative.quantity = -3;
        assert!(matches!(negative.validate(), Err(AppError::BadRequest(_))));

        let detached = ProductOrder::new(1, 100).with_product(Uuid::new_v4());
        assert!(matches!(detached.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn equality_ignores_everything_but_id() {
        let id = Uuid::new_v4();
        let mut first = ProductOrder::new(1, 100);
        first.id = Some(id);
        let mut second = ProductOrder::new(7, 700);
        assert_ne!(first, second);
        second.id = Some(id);
        assert_eq!(first, second);
    }
}
