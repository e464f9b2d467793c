use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AddAdvisorRequest {
    pub name: String,
    pub photo_url: String,
}

pub async fn add_advisor(
    State(state): State<SharedState>,
    Json(req): Json<AddAdvisorRequest>,
) -> Result<&'static str, AppError> {
    // Compatibility quirk: rejected only when both fields are empty.
    if req.name.is_empty() && req.photo_url.is_empty() {
        return Err(AppError::BadRequest);
    }

    db::advisors::create_if_absent(&state.pool, &req.name, &req.photo_url).await?;

    Ok("OK")
}
