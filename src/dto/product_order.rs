use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ProductOrder;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductOrderPatch {
    pub id: Option<Uuid>,
    pub quantity: Option<i32>,
    pub total_price: Option<i64>,
}

impl ProductOrderPatch {
    pub fn merge_into(self, target: &mut ProductOrder) {
        if let Some(quantity) = self.quantity {
            target.quantity = quantity;
        }
        if let Some(total_price) = self.total_price {
            target.total_price = total_price;
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductOrderList {
    #[schema(value_type = Vec<ProductOrder>)]
    pub items: Vec<ProductOrder>,
}
