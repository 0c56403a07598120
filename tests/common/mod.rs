#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use store_api::{
    config::AppConfig, middleware::auth::{ROLE_ADMIN, ROLE_USER}, routes::create_router,
    services::auth_service::issue_token, state::AppState,
};
use uuid::Uuid;

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".into(),
        host: "127.0.0.1".into(),
        port: 0,
        app_name: "storeApp".into(),
        jwt_secret: "test-secret".into(),
        jwt_ttl_hours: 1,
        db_max_connections: 1,
    }
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn app(orm: DatabaseConnection) -> Router {
    create_router(AppState::new(orm, test_config()))
}

pub fn bearer(role: &str) -> String {
    let token = issue_token(&test_config(), Uuid::new_v4(), role).expect("token");
    format!("Bearer {token}")
}

pub fn admin() -> String {
    bearer(ROLE_ADMIN)
}

pub fn user() -> String {
    bearer(ROLE_USER)
}

pub fn json_request(
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub fn merge_patch_request(uri: &str, auth: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/merge-patch+json")
        .header(header::AUTHORIZATION, auth)
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
