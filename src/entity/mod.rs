pub mod customer_details;
pub mod product_categories;
pub mod product_orders;
pub mod products;
pub mod shopping_carts;
pub mod users;

pub use customer_details::Entity as CustomerDetails;
pub use product_categories::Entity as ProductCategories;
pub use product_orders::Entity as ProductOrders;
pub use products::Entity as Products;
pub use shopping_carts::Entity as ShoppingCarts;
pub use users::Entity as Users;
