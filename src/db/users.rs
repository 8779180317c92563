use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::User;

/// Inserts a new user. The unique constraints on username and email are the
/// final arbiter under concurrent registration; a violation surfaces as a
/// conflict rather than a plain database error.
pub async fn insert(
    pool: &PgPool,
    name: &str,
    email: &str,
    username: &str,
    password_hash: &str,
) -> AppResult<User> {
    let user: User = sqlx::query_as(
        "INSERT INTO users (name, email, username, password_hash) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, name, email, username, password_hash",
    )
    .bind(name)
    .bind(email)
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                let msg = if db.constraint() == Some("users_email_key") {
                    "Email already exists"
                } else {
                    "Username already exists"
                };
                return AppError::Conflict(msg.to_string());
            }
        }
        AppError::Database(e)
    })?;
    Ok(user)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
    let user: Option<User> = sqlx::query_as(
        "SELECT id, name, email, username, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
    let users: Vec<User> = sqlx::query_as(
        "SELECT id, name, email, username, password_hash FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(users)
}
