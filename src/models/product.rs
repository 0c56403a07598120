use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EntityRef, Size, ensure_non_negative, ensure_present, parse_column};
use crate::{entity::products::Model, error::{AppError, AppResult}};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    pub product_size: Size,
    pub product_category: Option<EntityRef>,
}

impl Product {
    pub fn validate(&self) -> AppResult<()> {
        ensure_non_negative(self.price, "price")?;
        ensure_present(&self.product_category, "product_category")
    }
}

impl TryFrom<Model> for Product {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            product_size: parse_column(&model.product_size, "product_size")?,
            product_category: model.product_category_id.map(EntityRef::new),
        })
    }
}
