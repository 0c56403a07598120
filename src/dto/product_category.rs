use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ProductCategory;

/// Partial update; absent and `null` fields leave the stored value alone.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductCategoryPatch {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProductCategoryPatch {
    pub fn merge_into(self, target: &mut ProductCategory) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductCategoryList {
    #[schema(value_type = Vec<ProductCategory>)]
    pub items: Vec<ProductCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_fields_the_patch_leaves_out() {
        let mut stored = ProductCategory {
            id: Some(Uuid::new_v4()),
            name: "Shirts".into(),
            description: Some("Cotton".into()),
        };
        let patch: ProductCategoryPatch =
            serde_json::from_value(serde_json::json!({ "name": "Tees", "description": null }))
                .unwrap();
        patch.merge_into(&mut stored);
        assert_eq!(stored.name, "Tees");
        assert_eq!(stored.description.as_deref(), Some("Cotton"));
    }
}
