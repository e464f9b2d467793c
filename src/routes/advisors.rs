use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct AdvisorEntry {
    pub name: String,
    pub profile_pic: String,
    pub id: i64,
}

#[derive(Serialize)]
pub struct AdvisorListResponse {
    pub advisors: Vec<AdvisorEntry>,
}

/// Returns every advisor. The user id in the path is accepted but not used
/// for filtering.
pub async fn list(
    State(state): State<SharedState>,
    Path(_user_id): Path<i64>,
) -> Result<Json<AdvisorListResponse>, AppError> {
    let advisors = db::advisors::list_all(&state.pool)
        .await?
        .into_iter()
        .map(|a| AdvisorEntry {
            name: a.name,
            profile_pic: a.photo_url,
            id: a.id,
        })
        .collect();

    Ok(Json(AdvisorListResponse { advisors }))
}
