use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub advisor_id: i64,
    /// Free-form timestamp string supplied by the client.
    pub date: String,
}

/// An appointment joined with its advisor, as returned by the booking list.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub booking_time: String,
    pub advisor_id: i64,
    pub advisor_name: String,
    pub photo_url: String,
}
