use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{OrderStatus, PaymentMethod, ShoppingCart};

/// Partial update of the cart's own columns. Orders and customer details are
/// managed through their own endpoints.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ShoppingCartPatch {
    pub id: Option<Uuid>,
    pub placed_date: Option<DateTime<Utc>>,
    pub status: Option<OrderStatus>,
    pub total_price: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_reference: Option<String>,
}

impl ShoppingCartPatch {
    pub fn merge_into(self, target: &mut ShoppingCart) {
        if let Some(placed_date) = self.placed_date {
            target.placed_date = placed_date;
        }
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(total_price) = self.total_price {
            target.total_price = total_price;
        }
        if let Some(payment_method) = self.payment_method {
            target.payment_method = payment_method;
        }
        if let Some(payment_reference) = self.payment_reference {
            target.payment_reference = Some(payment_reference);
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ShoppingCartList {
    #[schema(value_type = Vec<ShoppingCart>)]
    pub items: Vec<ShoppingCart>,
}
