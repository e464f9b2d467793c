use sqlx::SqlitePool;

use crate::models::User;

/// Inserts a new user row. The UNIQUE constraint on email is the atomic
/// backstop: a concurrent duplicate surfaces as a unique-violation error
/// rather than a second row.
pub async fn create(
    pool: &SqlitePool,
    public_id: &str,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (public_id, name, email, password_hash)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(public_id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_public_id(
    pool: &SqlitePool,
    public_id: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE public_id = $1")
        .bind(public_id)
        .fetch_optional(pool)
        .await
}
