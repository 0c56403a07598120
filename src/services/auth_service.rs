use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ROLE_USER},
    models::User,
    services::bad_request_on_conflict,
    state::AppState,
};

const TAKEN: &str = "Login or email is already taken";

pub async fn register_user(state: &AppState, payload: RegisterRequest) -> AppResult<User> {
    let RegisterRequest {
        login,
        email,
        password,
    } = payload;
    let login = login.trim().to_lowercase();
    let email = email.trim().to_lowercase();
    if login.is_empty() || email.is_empty() || password.len() < 4 {
        return Err(AppError::BadRequest(
            "login, email and a password of at least 4 characters are required".to_string(),
        ));
    }

    let taken = Users::find()
        .filter(
            Condition::any()
                .add(Column::Login.eq(login.as_str()))
                .add(Column::Email.eq(email.as_str())),
        )
        .one(state.db())
        .await?;
    if taken.is_some() {
        return Err(AppError::BadRequest(TAKEN.to_string()));
    }

    let password_hash = hash_password(&password)?;
    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        login: Set(login),
        email: Set(email),
        password_hash: Set(password_hash),
        role: Set(ROLE_USER.to_string()),
        created_at: NotSet,
    }
    .insert(state.db())
    .await
    .map_err(|err| bad_request_on_conflict(err, TAKEN))?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(user.into())
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { login, password } = payload;
    let user = Users::find()
        .filter(Column::Login.eq(login.trim().to_lowercase()))
        .one(state.db())
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid login or password".into())),
    };

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::BadRequest("Invalid login or password".into()));
    }

    let id_token = issue_token(&state.config, user.id, &user.role)?;
    tracing::info!(user_id = %user.id, "user authenticated");
    Ok(LoginResponse { id_token })
}

pub async fn current_account(state: &AppState, user: &AuthUser) -> AppResult<User> {
    Users::find_by_id(user.user_id)
        .one(state.db())
        .await?
        .map(User::from)
        .ok_or(AppError::Unauthorized)
}

/// Sign an HS256 token for `user_id`, valid for the configured number of hours.
pub fn issue_token(config: &AppConfig, user_id: Uuid, role: &str) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.jwt_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("s3cret").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default().verify_password(b"s3cret", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }
}
