pub mod auth;
pub mod customer_details;
pub mod product;
pub mod product_category;
pub mod product_order;
pub mod shopping_cart;
