use sqlx::SqlitePool;

use crate::models::{Appointment, Booking};

/// Unconditional insert. The user and advisor references are not validated
/// against existing rows; any pair of ids is accepted.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    advisor_id: i64,
    date: &str,
) -> Result<Appointment, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        "INSERT INTO appointments (user_id, advisor_id, date) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_id)
    .bind(advisor_id)
    .bind(date)
    .fetch_one(pool)
    .await
}

/// Bookings for one user, each joined with its advisor, in insertion order.
/// Rows whose advisor no longer exists are dropped by the join.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT ap.id AS booking_id, ap.date AS booking_time,
                ad.id AS advisor_id, ad.name AS advisor_name, ad.photo_url
         FROM appointments ap
         JOIN advisors ad ON ad.id = ap.advisor_id
         WHERE ap.user_id = $1
         ORDER BY ap.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
