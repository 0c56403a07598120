mod common;

use chrono::Utc;
use sea_orm::{ConnectionTrait, Statement};
use store_api::{
    db::{create_pool, orm_from_pool, run_migrations},
    dto::{
        auth::{LoginRequest, RegisterRequest},
        product_order::ProductOrderPatch,
        shopping_cart::ShoppingCartPatch,
    },
    error::AppError,
    models::{
        CustomerDetails, Gender, OrderStatus, PaymentMethod, Product, ProductCategory,
        ProductOrder, ShoppingCart, Size,
    },
    routes::params::Pagination,
    services::{
        auth_service, customer_details_service, product_category_service, product_order_service,
        product_service, shopping_cart_service,
    },
    state::AppState,
};

// Catalog -> customer -> cart -> order lifecycle against a real database.
#[tokio::test]
async fn cart_and_order_lifecycle() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run flow tests.");
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let account = auth_service::register_user(
        &state,
        RegisterRequest {
            login: "Shopper".into(),
            email: "shopper@example.com".into(),
            password: "secret".into(),
        },
    )
    .await?;
    assert_eq!(account.login, "shopper");

    let again = auth_service::register_user(
        &state,
        RegisterRequest {
            login: "other".into(),
            email: "Shopper@example.com".into(),
            password: "secret".into(),
        },
    )
    .await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));
    let token = auth_service::login_user(
        &state,
        LoginRequest {
            login: "shopper".into(),
            password: "secret".into(),
        },
    )
    .await?;
    assert!(!token.id_token.is_empty());

    let category = product_category_service::save(&state, ProductCategory::new("Apparel")).await?;
    let category_id = category.id.expect("category id");

    let duplicate = product_category_service::save(&state, ProductCategory::new("Apparel")).await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let product = product_service::save(
        &state,
        Product {
            id: None,
            name: "Ferris Hoodie".into(),
            description: None,
            price: 5_500,
            product_size: Size::Xl,
            product_category: Some(category_id.into()),
        },
    )
    .await?;
    let product_id = product.id.expect("product id");
    let (products, meta) = product_service::find_all(&state, &Pagination::default()).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(meta.total, Some(1));

    let details = customer_details_service::save(
        &state,
        CustomerDetails {
            id: None,
            gender: Gender::Other,
            phone: "+31 20 555 0100".into(),
            address_line1: "Damrak 1".into(),
            address_line2: None,
            city: "Amsterdam".into(),
            country: "Netherlands".into(),
            user: Some(account.id.into()),
        },
    )
    .await?;

    let mut cart = ShoppingCart::new(Utc::now(), OrderStatus::Pending, 11_000, PaymentMethod::Ideal);
    cart.customer_details = details.id.map(Into::into);
    let cart = shopping_cart_service::save(&state, cart).await?;
    let cart_id = cart.id.expect("cart id");

    let order = product_order_service::save(
        &state,
        ProductOrder::new(2, 11_000)
            .with_product(product_id)
            .with_cart(cart_id),
    )
    .await?;
    let order_id = order.id.expect("order id");

    let loaded = shopping_cart_service::find_one(&state, cart_id)
        .await?
        .expect("cart exists");
    assert_eq!(loaded.orders().len(), 1);
    assert_eq!(loaded.orders()[0].id, Some(order_id));
    assert_eq!(loaded.orders()[0].cart.map(|c| c.id), Some(cart_id));

    let patched = product_order_service::partial_update(
        &state,
        order_id,
        ProductOrderPatch {
            id: Some(order_id),
            quantity: Some(3),
            total_price: None,
        },
    )
    .await?
    .expect("order exists");
    assert_eq!(patched.quantity, 3);
    assert_eq!(patched.total_price, 11_000);

    let paid = shopping_cart_service::partial_update(
        &state,
        cart_id,
        ShoppingCartPatch {
            id: Some(cart_id),
            status: Some(OrderStatus::Paid),
            ..Default::default()
        },
    )
    .await?
    .expect("cart exists");
    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(paid.payment_method, PaymentMethod::Ideal);
    assert_eq!(paid.orders().len(), 1);

    let carts = shopping_cart_service::find_all(&state).await?;
    assert_eq!(carts.len(), 1);

    product_order_service::delete(&state, order_id).await?;
    shopping_cart_service::delete(&state, cart_id).await?;
    assert!(!shopping_cart_service::exists(&state, cart_id).await?);
    assert!(product_order_service::find_all(&state).await?.is_empty());

    // Deleting an absent row is not an error.
    product_order_service::delete(&state, order_id).await?;

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 2).await?;
    run_migrations(&pool).await?;
    let state = AppState::new(orm_from_pool(pool), common::test_config());

    state
        .db()
        .execute(Statement::from_string(
            state.db().get_database_backend(),
            "TRUNCATE product_orders, shopping_carts, customer_details, products, product_categories, users RESTART IDENTITY CASCADE",
        ))
        .await?;

    Ok(state)
}
