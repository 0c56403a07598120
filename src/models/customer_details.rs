use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EntityRef, Gender, parse_column};
use crate::{entity::customer_details::Model, error::AppError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerDetails {
    pub id: Option<Uuid>,
    pub gender: Gender,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub country: String,
    /// Registered user owning these details.
    pub user: Option<EntityRef>,
}

impl TryFrom<Model> for CustomerDetails {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(model.id),
            gender: parse_column(&model.gender, "gender")?,
            phone: model.phone,
            address_line1: model.address_line1,
            address_line2: model.address_line2,
            city: model.city,
            country: model.country,
            user: model.user_id.map(EntityRef::new),
        })
    }
}
