use store_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    middleware::auth::{ROLE_ADMIN, ROLE_USER},
    services::auth_service::hash_password,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 2).await?;
    run_migrations(&pool).await?;

    let admin_id = ensure_user(&pool, "admin", "admin@example.com", "admin", ROLE_ADMIN).await?;
    let user_id = ensure_user(&pool, "user", "user@example.com", "user", ROLE_USER).await?;
    seed_catalog(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    login: &str,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let password_hash = hash_password(password)?;

    let (user_id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, login, email, password_hash, role)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (login) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(login)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {login} (role={role})");
    Ok(user_id)
}

async fn ensure_category(
    pool: &sqlx::PgPool,
    name: &str,
    description: &str,
) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO product_categories (id, name, description)
        VALUES ($1, $2, $3)
        ON CONFLICT (name) DO UPDATE SET description = EXCLUDED.description
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn seed_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let apparel = ensure_category(pool, "Apparel", "Shirts, hoodies and caps").await?;
    let accessories = ensure_category(pool, "Accessories", "Mugs, stickers and bags").await?;

    // Prices are in minor currency units.
    let products = vec![
        ("Ferris Hoodie", "Warm hoodie for Rustaceans", 5500, "L", apparel),
        ("Crab T-Shirt", "Cotton tee with a crab print", 2200, "M", apparel),
        ("Ferris Mug", "Coffee tastes better with Ferris", 1200, "S", accessories),
        ("Sticker Pack", "Decorate your laptop", 500, "S", accessories),
    ];

    for (name, desc, price, size, category_id) in products {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, product_size, product_category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(desc)
        .bind(price as i64)
        .bind(size)
        .bind(category_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded catalog");
    Ok(())
}
