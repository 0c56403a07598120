//! Domain types exchanged over the REST API.
//!
//! Entities compare by identifier only: two values are equal when both carry
//! an id and the ids match. An entity without an id is only equal to itself.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

mod customer_details;
mod enums;
mod product;
mod product_category;
mod product_order;
mod shopping_cart;
mod user;

pub use customer_details::CustomerDetails;
pub use enums::{Gender, OrderStatus, PaymentMethod, Size};
pub use product::Product;
pub use product_category::ProductCategory;
pub use product_order::ProductOrder;
pub use shopping_cart::ShoppingCart;
pub use user::User;

/// Reference to another entity, serialized as `{ "id": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct EntityRef {
    pub id: Uuid,
}

impl EntityRef {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl From<Uuid> for EntityRef {
    fn from(id: Uuid) -> Self {
        Self::new(id)
    }
}

macro_rules! id_equality {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    std::ptr::eq(self, other) || (self.id.is_some() && self.id == other.id)
                }
            }
        )+
    };
}

id_equality!(CustomerDetails, Product, ProductCategory, ProductOrder, ShoppingCart);

pub(crate) fn parse_column<T>(value: &str, column: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid {column} value {value:?}: {e}")))
}

pub(crate) fn ensure_non_negative(value: i64, field: &str) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::BadRequest(format!("{field} must not be negative")));
    }
    Ok(())
}

pub(crate) fn ensure_present<T>(value: &Option<T>, field: &str) -> AppResult<()> {
    if value.is_none() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}
