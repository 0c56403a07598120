use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shopping_carts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub placed_date: DateTimeUtc,
    pub status: String,
    pub total_price: i64,
    pub payment_method: String,
    pub payment_reference: Option<String>,
    pub customer_details_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer_details::Entity",
        from = "Column::CustomerDetailsId",
        to = "super::customer_details::Column::Id"
    )]
    CustomerDetails,
    #[sea_orm(has_many = "super::product_orders::Entity")]
    ProductOrders,
}

impl Related<super::customer_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerDetails.def()
    }
}

impl Related<super::product_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
