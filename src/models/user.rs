use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `users` row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Wire shape for a user. The legacy API exposes the stored password hash
/// as part of this projection and clients depend on the field set, so it
/// stays. The hash is opaque argon2 output, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProjection {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

impl From<User> for UserProjection {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_exposes_exactly_four_fields() {
        let user = User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            username: "ann1".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        };
        let value = serde_json::to_value(UserProjection::from(user)).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "name", "password_hash", "username"]);
    }
}
