use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{CustomerDetails, Gender};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomerDetailsPatch {
    pub id: Option<Uuid>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl CustomerDetailsPatch {
    pub fn merge_into(self, target: &mut CustomerDetails) {
        if let Some(gender) = self.gender {
            target.gender = gender;
        }
        if let Some(phone) = self.phone {
            target.phone = phone;
        }
        if let Some(address_line1) = self.address_line1 {
            target.address_line1 = address_line1;
        }
        if let Some(address_line2) = self.address_line2 {
            target.address_line2 = Some(address_line2);
        }
        if let Some(city) = self.city {
            target.city = city;
        }
        if let Some(country) = self.country {
            target.country = country;
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerDetailsList {
    #[schema(value_type = Vec<CustomerDetails>)]
    pub items: Vec<CustomerDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;

    fn stored() -> CustomerDetails {
        CustomerDetails {
            id: Some(Uuid::new_v4()),
            gender: Gender::Female,
            phone: "+31 20 555 0100".into(),
            address_line1: "Damrak 1".into(),
            address_line2: Some("2nd floor".into()),
            city: "Amsterdam".into(),
            country: "Netherlands".into(),
            user: Some(EntityRef::new(Uuid::new_v4())),
        }
    }

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut details = stored();
        let user = details.user;
        let patch: CustomerDetailsPatch = serde_json::from_value(serde_json::json!({
            "city": "Utrecht",
            "gender": "OTHER",
            "address_line2": null,
            "user": { "id": Uuid::new_v4() }
        }))
        .unwrap();
        patch.merge_into(&mut details);

        assert_eq!(details.city, "Utrecht");
        assert_eq!(details.gender, Gender::Other);
        assert_eq!(details.address_line2.as_deref(), Some("2nd floor"));
        assert_eq!(details.phone, "+31 20 555 0100");
        assert_eq!(details.country, "Netherlands");
        assert_eq!(details.user, user);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut details = stored();
        let before = details.clone();
        CustomerDetailsPatch::default().merge_into(&mut details);
        assert_eq!(details.address_line1, before.address_line1);
        assert_eq!(details.city, before.city);
        assert_eq!(details.gender, before.gender);
    }
}
