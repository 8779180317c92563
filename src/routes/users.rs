use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::UserProjection;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn register(
    State(pool): State<PgPool>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::InvalidInput("Argument missing".to_string()));
    }

    // Pre-check keeps the common case friendly; under concurrent
    // registration the unique constraint on users.username decides, and
    // the losing insert surfaces as the same conflict.
    if db::users::find_by_username(&pool, &req.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let password_hash = auth::hash_password(&req.password)?;
    let user =
        db::users::insert(&pool, &req.name, &req.email, &req.username, &password_hash).await?;

    tracing::info!("Registered user {}", user.username);
    Ok(Json(serde_json::json!({ "username": user.username })))
}

pub async fn login(
    State(pool): State<PgPool>,
    Json(req): Json<LoginRequest>,
) -> AppResult<String> {
    // Unknown usernames and wrong passwords get the same answer so the
    // endpoint cannot be used to enumerate accounts.
    let user = match db::users::find_by_username(&pool, &req.username).await? {
        Some(user) => user,
        None => {
            return Err(AppError::Unauthorized(
                "Incorrect username or password".to_string(),
            ))
        }
    };

    if !auth::verify_password(&req.password, &user.password_hash) {
        return Err(AppError::Unauthorized(
            "Incorrect username or password".to_string(),
        ));
    }

    Ok(format!("Hello, {}!", user.username))
}

pub async fn list_users(State(pool): State<PgPool>) -> AppResult<Json<Vec<UserProjection>>> {
    let users = db::users::list(&pool).await?;
    Ok(Json(users.into_iter().map(UserProjection::from).collect()))
}
