use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        customer_details::{CustomerDetailsList, CustomerDetailsPatch},
        product::{ProductList, ProductPatch},
        product_category::{ProductCategoryList, ProductCategoryPatch},
        product_order::{ProductOrderList, ProductOrderPatch},
        shopping_cart::{ShoppingCartList, ShoppingCartPatch},
    },
    models::{
        CustomerDetails, EntityRef, Gender, OrderStatus, PaymentMethod, Product, ProductCategory,
        ProductOrder, ShoppingCart, Size, User,
    },
    response::{ApiResponse, Meta},
    routes::{
        auth, customer_details, health, params, product_categories, product_orders, products,
        shopping_carts,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::authenticate,
        auth::account,
        product_categories::create_product_category,
        product_categories::update_product_category,
        product_categories::partial_update_product_category,
        product_categories::list_product_categories,
        product_categories::get_product_category,
        product_categories::delete_product_category,
        products::create_product,
        products::update_product,
        products::partial_update_product,
        products::list_products,
        products::get_product,
        products::delete_product,
        customer_details::create_customer_details,
        customer_details::update_customer_details,
        customer_details::partial_update_customer_details,
        customer_details::list_customer_details,
        customer_details::get_customer_details,
        customer_details::delete_customer_details,
        shopping_carts::create_shopping_cart,
        shopping_carts::update_shopping_cart,
        shopping_carts::partial_update_shopping_cart,
        shopping_carts::list_shopping_carts,
        shopping_carts::get_shopping_cart,
        shopping_carts::delete_shopping_cart,
        product_orders::create_product_order,
        product_orders::update_product_order,
        product_orders::partial_update_product_order,
        product_orders::list_product_orders,
        product_orders::get_product_order,
        product_orders::delete_product_order
    ),
    components(
        schemas(
            User,
            EntityRef,
            Gender,
            OrderStatus,
            PaymentMethod,
            Size,
            ProductCategory,
            Product,
            CustomerDetails,
            ShoppingCart,
            ProductOrder,
            ProductCategoryPatch,
            ProductPatch,
            CustomerDetailsPatch,
            ShoppingCartPatch,
            ProductOrderPatch,
            ProductCategoryList,
            ProductList,
            CustomerDetailsList,
            ShoppingCartList,
            ProductOrderList,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            health::HealthData,
            params::Pagination,
            Meta,
            ApiResponse<User>,
            ApiResponse<ProductCategory>,
            ApiResponse<Product>,
            ApiResponse<CustomerDetails>,
            ApiResponse<ShoppingCart>,
            ApiResponse<ProductOrder>,
            ApiResponse<ProductCategoryList>,
            ApiResponse<ProductList>,
            ApiResponse<CustomerDetailsList>,
            ApiResponse<ShoppingCartList>,
            ApiResponse<ProductOrderList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and authentication"),
        (name = "Product Categories", description = "Product category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Customer Details", description = "Customer details endpoints"),
        (name = "Shopping Carts", description = "Shopping cart endpoints"),
        (name = "Product Orders", description = "Product order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/product-categories",
            "/api/product-categories/{id}",
            "/api/products/{id}",
            "/api/customer-details",
            "/api/shopping-carts/{id}",
            "/api/product-orders",
            "/api/authenticate",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
