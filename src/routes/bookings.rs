use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct BookAppointmentRequest {
    pub date_time: String,
}

#[derive(Serialize)]
pub struct BookingEntry {
    pub name: String,
    pub profile_pic: String,
    pub advisor_id: i64,
    pub booking_time: String,
    pub booking_id: i64,
}

#[derive(Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingEntry>,
}

/// Books an appointment. The ids are not checked against existing rows;
/// any user/advisor pair is accepted.
pub async fn book(
    State(state): State<SharedState>,
    Path((user_id, advisor_id)): Path<(i64, i64)>,
    Json(req): Json<BookAppointmentRequest>,
) -> Result<&'static str, AppError> {
    db::appointments::create(&state.pool, user_id, advisor_id, &req.date_time).await?;

    Ok("OK")
}

pub async fn list(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = db::appointments::list_for_user(&state.pool, user_id)
        .await?
        .into_iter()
        .map(|b| BookingEntry {
            name: b.advisor_name,
            profile_pic: b.photo_url,
            advisor_id: b.advisor_id,
            booking_time: b.booking_time,
            booking_id: b.booking_id,
        })
        .collect();

    Ok(Json(BookingListResponse { bookings }))
}
