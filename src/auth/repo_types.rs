use sqlx::FromRow;

pub const ROLE_USER: &str = "USER";

/// User record in the database. The id is assigned on insert and never
/// changes afterwards; `password_hash` only ever holds an Argon2 hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
