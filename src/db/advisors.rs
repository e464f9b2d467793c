use sqlx::SqlitePool;

use crate::models::Advisor;

/// Insert-if-absent keyed on advisor name, as a single conditional insert.
/// A second registration with the same name is a silent no-op.
pub async fn create_if_absent(
    pool: &SqlitePool,
    name: &str,
    photo_url: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO advisors (name, photo_url) VALUES ($1, $2) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .bind(photo_url)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Advisor>, sqlx::Error> {
    sqlx::query_as::<_, Advisor>("SELECT * FROM advisors ORDER BY id")
        .fetch_all(pool)
        .await
}
