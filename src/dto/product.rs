use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Product, Size};

/// Partial update; relationships are not patchable.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductPatch {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub product_size: Option<Size>,
}

impl ProductPatch {
    pub fn merge_into(self, target: &mut Product) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
        if let Some(price) = self.price {
            target.price = price;
        }
        if let Some(product_size) = self.product_size {
            target.product_size = product_size;
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;

    #[test]
    fn merge_overwrites_only_present_fields() {
        let category = EntityRef::new(Uuid::new_v4());
        let mut stored = Product {
            id: Some(Uuid::new_v4()),
            name: "Hoodie".into(),
            description: None,
            price: 5_000,
            product_size: Size::L,
            product_category: Some(category),
        };
        ProductPatch {
            price: Some(4_000),
            product_size: Some(Size::Xl),
            ..Default::default()
        }
        .merge_into(&mut stored);

        assert_eq!(stored.name, "Hoodie");
        assert_eq!(stored.price, 4_000);
        assert_eq!(stored.product_size, Size::Xl);
        assert_eq!(stored.product_category, Some(category));
    }
}
